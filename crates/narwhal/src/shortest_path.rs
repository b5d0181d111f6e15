//! Single-source shortest paths (Dijkstra).
//!
//! Uses a min-[`Heap`] keyed by tentative distance with lazy deletion: a popped entry whose
//! distance exceeds the recorded best is stale and skipped. Queue entries are
//! `(distance, vertex index)`, so among equal distances the vertex inserted into the graph
//! first is settled first, whatever its value. Negative edge weights are rejected before the
//! search starts.
//!
//! A relaxation whose sum does not fit in `W` is dropped. If some vertex is reachable only
//! through such sums, the search fails with [`Error::WeightOverflow`] naming the first edge
//! that overflowed into it.

use crate::graphlib::{Error, Graph, Result, Vertex, Weight};
use crate::heap::Heap;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;

type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<V: Vertex, W> {
    source: V,
    /// Every graph vertex in insertion order; `None` when unreachable from `source`.
    distances: Map<V, Option<W>>,
    /// Reachable vertices only: the path from `source` to the key, both ends included.
    paths: Map<V, Vec<V>>,
}

impl<V: Vertex, W: Weight> ShortestPaths<V, W> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Shortest distance to `v`, or `None` if `v` is unreachable or not in the graph.
    pub fn distance(&self, v: &V) -> Option<W> {
        self.distances.get(v).copied().flatten()
    }

    pub fn path(&self, v: &V) -> Option<&[V]> {
        self.paths.get(v).map(Vec::as_slice)
    }

    pub fn is_reachable(&self, v: &V) -> bool {
        self.paths.contains_key(v)
    }

    /// All vertices with their distance (`None` = unreachable), in graph vertex order.
    pub fn distances(&self) -> impl Iterator<Item = (&V, Option<W>)> {
        self.distances.iter().map(|(v, d)| (v, *d))
    }

    /// Reachable vertices with their distance, in graph vertex order.
    pub fn reachable(&self) -> impl Iterator<Item = (&V, W)> {
        self.distances.iter().filter_map(|(v, d)| d.map(|d| (v, d)))
    }
}

pub fn dijkstra<V: Vertex, W: Weight>(g: &Graph<V, W>, start: &V) -> Result<ShortestPaths<V, W>> {
    let source = g.require_index(start)?;
    crate::ensure_non_negative(g)?;

    let n = g.vertex_count();
    let mut dist: Vec<Option<W>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    // First vertex whose relaxation into `ix` overflowed.
    let mut overflowed_from: Vec<Option<usize>> = vec![None; n];
    let mut heap: Heap<(W, usize)> = Heap::min();

    dist[source] = Some(W::ZERO);
    heap.insert((W::ZERO, source));

    while let Some((d, v)) = heap.extract_top() {
        if dist[v].is_some_and(|best| d > best) {
            tracing::trace!(vertex = ?g.vertex_at(v), "skipping stale queue entry");
            continue;
        }
        for &(next, w) in g.adjacent(v) {
            let Some(candidate) = d.checked_add(w) else {
                overflowed_from[next].get_or_insert(v);
                continue;
            };
            if dist[next].is_none_or(|cur| candidate < cur) {
                dist[next] = Some(candidate);
                prev[next] = Some(v);
                heap.insert((candidate, next));
            }
        }
    }

    if let Some((ix, from)) = dist
        .iter()
        .zip(&overflowed_from)
        .enumerate()
        .find_map(|(ix, pair)| match pair {
            (None, Some(from)) => Some((ix, *from)),
            _ => None,
        })
    {
        tracing::debug!(
            from = ?g.vertex_at(from),
            to = ?g.vertex_at(ix),
            "dijkstra: distance does not fit the weight type"
        );
        return Err(Error::weight_overflow(g.vertex_at(from), g.vertex_at(ix)));
    }

    let mut distances: Map<V, Option<W>> = Map::default();
    let mut paths: Map<V, Vec<V>> = Map::default();
    for (ix, d) in dist.iter().enumerate() {
        let v = g.vertex_at(ix).clone();
        if d.is_some() {
            paths.insert(v.clone(), walk_back(g, &prev, ix));
        }
        distances.insert(v, *d);
    }

    tracing::debug!(
        source = ?start,
        reached = paths.len(),
        total = n,
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        source: start.clone(),
        distances,
        paths,
    })
}

fn walk_back<V: Vertex, W: Weight>(g: &Graph<V, W>, prev: &[Option<usize>], to: usize) -> Vec<V> {
    let mut path: Vec<V> = Vec::new();
    let mut cur = Some(to);
    while let Some(ix) = cur {
        path.push(g.vertex_at(ix).clone());
        cur = prev[ix];
    }
    path.reverse();
    path
}
