//! Minimum spanning trees: Kruskal (edge list + [`DisjointSet`]) and Prim (adjacency +
//! min-[`Heap`]).
//!
//! Both read the graph as undirected: Kruskal looks at every edge regardless of direction,
//! Prim follows the adjacency list (which holds both directions only for undirected graphs).
//! Running either on a directed graph is allowed but rarely meaningful.
//!
//! Equal weights are resolved deterministically: Kruskal keeps the original edge order
//! (stable sort), Prim prefers the lower `(from, to)` vertex insertion indices. Prim's rule
//! compares where vertices were inserted, not their values, so a graph built as `S-Z`,
//! `S-B` (both weight 1) grows `S-Z` first. Different tie resolutions can select different
//! edge sets with the same total weight.
//!
//! Both return [`Error::WeightOverflow`] when the total weight leaves the range of `W`,
//! naming the edge whose acceptance overflowed.

use crate::disjoint_set::DisjointSet;
use crate::graphlib::{Edge, Error, Graph, Result, Vertex, Weight};
use crate::heap::Heap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree<V, W> {
    /// Accepted edges in acceptance order, oriented as they were traversed.
    pub edges: Vec<Edge<V, W>>,
    pub total_weight: W,
    /// Vertices the tree could not reach (Prim on a disconnected graph). Always empty for
    /// Kruskal, which yields a spanning forest instead.
    pub unreached: Vec<V>,
    /// Number of trees in the result: `1` for a connected graph, `0` for an empty one.
    pub component_count: usize,
}

impl<V, W> SpanningTree<V, W> {
    /// `true` when the result is a single tree touching every vertex.
    pub fn is_spanning(&self) -> bool {
        self.unreached.is_empty() && self.component_count <= 1
    }
}

pub fn kruskal<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Result<SpanningTree<V, W>> {
    let mut sorted: Vec<(usize, usize, W)> = g.indexed_edges().collect();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut sets = DisjointSet::new(g.vertex_count());
    let mut edges: Vec<Edge<V, W>> = Vec::new();
    let mut total_weight = W::ZERO;

    for (u, v, w) in sorted {
        if sets.union(u, v) {
            total_weight = total_weight
                .checked_add(w)
                .ok_or_else(|| Error::weight_overflow(g.vertex_at(u), g.vertex_at(v)))?;
            edges.push(Edge::new(g.vertex_at(u).clone(), g.vertex_at(v).clone(), w));
        } else {
            tracing::trace!(
                from = ?g.vertex_at(u),
                to = ?g.vertex_at(v),
                weight = %w,
                "kruskal: edge would close a cycle"
            );
        }
    }

    tracing::debug!(
        accepted = edges.len(),
        trees = sets.set_count(),
        total = %total_weight,
        "kruskal finished"
    );

    Ok(SpanningTree {
        edges,
        total_weight,
        unreached: Vec::new(),
        component_count: sets.set_count(),
    })
}

/// Prim from the first inserted vertex. An empty graph yields an empty tree.
pub fn prim<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Result<SpanningTree<V, W>> {
    if g.is_empty() {
        return Ok(SpanningTree {
            edges: Vec::new(),
            total_weight: W::ZERO,
            unreached: Vec::new(),
            component_count: 0,
        });
    }
    grow_from(g, 0)
}

pub fn prim_from<V: Vertex, W: Weight>(g: &Graph<V, W>, start: &V) -> Result<SpanningTree<V, W>> {
    let start = g.require_index(start)?;
    grow_from(g, start)
}

fn grow_from<V: Vertex, W: Weight>(g: &Graph<V, W>, start: usize) -> Result<SpanningTree<V, W>> {
    let n = g.vertex_count();
    let mut visited = vec![false; n];
    let mut visited_count = 1;
    let mut edges: Vec<Edge<V, W>> = Vec::new();
    let mut total_weight = W::ZERO;

    // (weight, from, to)
    let mut candidates: Heap<(W, usize, usize)> = Heap::min();
    visited[start] = true;
    candidates.extend(g.adjacent(start).iter().map(|&(to, w)| (w, start, to)));

    while visited_count < n {
        let Some((w, from, to)) = candidates.extract_top() else {
            break;
        };
        if visited[to] {
            continue;
        }
        visited[to] = true;
        visited_count += 1;
        total_weight = total_weight
            .checked_add(w)
            .ok_or_else(|| Error::weight_overflow(g.vertex_at(from), g.vertex_at(to)))?;
        edges.push(Edge::new(g.vertex_at(from).clone(), g.vertex_at(to).clone(), w));

        for &(next, next_w) in g.adjacent(to) {
            if !visited[next] {
                candidates.insert((next_w, to, next));
            }
        }
    }

    let unreached: Vec<V> = visited
        .iter()
        .enumerate()
        .filter(|(_, seen)| !**seen)
        .map(|(ix, _)| g.vertex_at(ix).clone())
        .collect();
    if !unreached.is_empty() {
        tracing::debug!(
            start = ?g.vertex_at(start),
            unreached = unreached.len(),
            "prim: graph is not connected from start"
        );
    }

    Ok(SpanningTree {
        edges,
        total_weight,
        unreached,
        component_count: 1,
    })
}
