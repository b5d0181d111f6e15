//! Maximum flow (Ford-Fulkerson with BFS path selection, i.e. Edmonds-Karp).
//!
//! [`MaxFlow::new`] seeds a residual graph from the input: every edge `u -> v` with capacity
//! `c` adds `c` to `residual[u][v]` (parallel edges accumulate) and makes sure a reverse
//! entry `residual[v][u]` exists, starting at zero when there is no real reverse edge.
//! [`MaxFlow::ford_fulkerson`] then augments along shortest residual paths until the sink
//! is unreachable, consuming the instance.
//!
//! Capacities are summed with [`Weight::checked_add`]. [`MaxFlow::new`] rejects a graph whose
//! parallel capacities, or the two directions of one vertex pair together, do not fit in `W`
//! (a residual entry can grow to that sum). [`MaxFlow::ford_fulkerson`] rejects a flow value
//! that does not fit. Both report [`Error::WeightOverflow`].
//!
//! After every augmentation, for each ordered pair:
//! `residual[u][v] == capacity(u, v) - flow(u, v) + flow(v, u)`, where `flow` holds net
//! flows (at most one direction of a pair carries flow).

use crate::graphlib::{Edge, Error, Graph, Result, Vertex, Weight};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::collections::VecDeque;

type Map<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A source-to-sink path in the residual graph and the capacity it can still carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentingPath<V, W> {
    pub path: Vec<V>,
    pub bottleneck: W,
}

/// Net flow per original edge direction, keyed `from -> to -> flow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlowNetwork<V: Vertex, W> {
    flows: Map<V, Map<V, W>>,
}

// Per-vertex sums below never exceed the flow value, which `ford_fulkerson` checked.
impl<V: Vertex, W: Weight> FlowNetwork<V, W> {
    pub fn flow(&self, from: &V, to: &V) -> W {
        self.flows
            .get(from)
            .and_then(|m| m.get(to))
            .copied()
            .unwrap_or(W::ZERO)
    }

    pub fn outflow(&self, v: &V) -> W {
        self.flows
            .get(v)
            .map(|m| m.values().fold(W::ZERO, |acc, &f| acc + f))
            .unwrap_or(W::ZERO)
    }

    pub fn inflow(&self, v: &V) -> W {
        self.flows
            .values()
            .filter_map(|m| m.get(v))
            .fold(W::ZERO, |acc, &f| acc + f)
    }

    /// Every `(from, to, flow)` entry with a real capacity, including zero flows.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V, W)> {
        self.flows
            .iter()
            .flat_map(|(u, m)| m.iter().map(move |(v, &f)| (u, v, f)))
    }

    /// Entries carrying positive flow.
    pub fn positive(&self) -> impl Iterator<Item = (&V, &V, W)> {
        self.iter().filter(|&(_, _, f)| f > W::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowResult<V: Vertex, W> {
    pub value: W,
    pub network: FlowNetwork<V, W>,
    /// Vertices still reachable from the source in the final residual graph.
    pub source_side: Vec<V>,
    /// Original edges crossing from `source_side` to the rest: a minimum cut.
    pub min_cut: Vec<Edge<V, W>>,
}

impl<V: Vertex, W: Weight> FlowResult<V, W> {
    /// Equals `value` (max-flow min-cut).
    pub fn cut_capacity(&self) -> W {
        self.min_cut.iter().fold(W::ZERO, |acc, e| acc + e.weight)
    }
}

pub struct MaxFlow<'g, V, W> {
    graph: &'g Graph<V, W>,
    capacity: Vec<Map<usize, W>>,
    residual: Vec<Map<usize, W>>,
}

impl<'g, V: Vertex, W: Weight> MaxFlow<'g, V, W> {
    /// Builds the residual graph. Negative capacities are rejected.
    pub fn new(graph: &'g Graph<V, W>) -> Result<Self> {
        crate::ensure_non_negative(graph)?;

        let n = graph.vertex_count();
        let overflow =
            |u: usize, v: usize| Error::weight_overflow(graph.vertex_at(u), graph.vertex_at(v));
        let mut capacity: Vec<Map<usize, W>> = vec![Map::default(); n];
        let mut residual: Vec<Map<usize, W>> = vec![Map::default(); n];
        for u in 0..n {
            for &(v, c) in graph.adjacent(u) {
                let cap = capacity[u].entry(v).or_insert(W::ZERO);
                let total = (*cap).checked_add(c).ok_or_else(|| overflow(u, v))?;
                *cap = total;
                residual[u].insert(v, total);
                residual[v].entry(u).or_insert(W::ZERO);
            }
        }
        for (u, row) in capacity.iter().enumerate() {
            for (&v, &c) in row {
                let back = capacity[v].get(&u).copied().unwrap_or(W::ZERO);
                if c.checked_add(back).is_none() {
                    return Err(overflow(u, v));
                }
            }
        }

        Ok(Self {
            graph,
            capacity,
            residual,
        })
    }

    /// Remaining capacity on `from -> to`, or `None` if the pair has no residual entry.
    pub fn residual_capacity(&self, from: &V, to: &V) -> Option<W> {
        let u = self.graph.index_of(from)?;
        let v = self.graph.index_of(to)?;
        self.residual[u].get(&v).copied()
    }

    /// Shortest residual path from `source` to `sink`. `None` if the sink is unreachable or
    /// either endpoint is unknown.
    pub fn bfs_augmenting_path(&self, source: &V, sink: &V) -> Option<AugmentingPath<V, W>> {
        let s = self.graph.index_of(source)?;
        let t = self.graph.index_of(sink)?;
        let (path, bottleneck) = self.find_path(s, t)?;
        Some(AugmentingPath {
            path: path
                .into_iter()
                .map(|ix| self.graph.vertex_at(ix).clone())
                .collect(),
            bottleneck,
        })
    }

    fn find_path(&self, s: usize, t: usize) -> Option<(Vec<usize>, W)> {
        let n = self.residual.len();
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut seen = vec![false; n];
        // Smallest residual capacity along the discovered path; `None` at the source means
        // unbounded.
        let mut limit: Vec<Option<W>> = vec![None; n];
        let mut q: VecDeque<usize> = VecDeque::new();

        seen[s] = true;
        q.push_back(s);
        while let Some(u) = q.pop_front() {
            for (&v, &cap) in &self.residual[u] {
                if cap <= W::ZERO || seen[v] {
                    continue;
                }
                seen[v] = true;
                parent[v] = Some(u);
                limit[v] = Some(limit[u].map_or(cap, |m| m.min(cap)));

                if v == t {
                    let mut path = vec![t];
                    let mut cur = t;
                    while let Some(p) = parent[cur] {
                        path.push(p);
                        cur = p;
                    }
                    path.reverse();
                    return limit[t].map(|b| (path, b));
                }
                q.push_back(v);
            }
        }
        None
    }

    /// Runs augmentations to completion and returns the maximum flow value, the realized
    /// flow network, and a minimum cut.
    pub fn ford_fulkerson(mut self, source: &V, sink: &V) -> Result<FlowResult<V, W>> {
        let s = self.graph.require_index(source)?;
        let t = self.graph.require_index(sink)?;
        if s == t {
            return Err(Error::same_source_and_sink(source));
        }

        let mut flow: Vec<Map<usize, W>> = self
            .capacity
            .iter()
            .map(|m| m.keys().map(|&v| (v, W::ZERO)).collect())
            .collect();
        let mut value = W::ZERO;
        let mut rounds = 0usize;

        while let Some((path, bottleneck)) = self.find_path(s, t) {
            rounds += 1;
            tracing::debug!(
                round = rounds,
                path = ?path.iter().map(|&ix| self.graph.vertex_at(ix)).collect::<Vec<_>>(),
                bottleneck = %bottleneck,
                "augmenting"
            );
            for pair in path.windows(2) {
                let (u, v) = (pair[0], pair[1]);
                self.push(&mut flow, u, v, bottleneck);
            }
            value = value
                .checked_add(bottleneck)
                .ok_or_else(|| Error::weight_overflow(source, sink))?;
        }

        let reach = self.residual_reach(s);
        let source_side: Vec<V> = (0..reach.len())
            .filter(|&ix| reach[ix])
            .map(|ix| self.graph.vertex_at(ix).clone())
            .collect();
        let min_cut = self.cut_edges(&reach);

        let mut flows: Map<V, Map<V, W>> = Map::default();
        for (u, m) in flow.into_iter().enumerate() {
            if m.is_empty() {
                continue;
            }
            let row = m
                .into_iter()
                .map(|(v, f)| (self.graph.vertex_at(v).clone(), f))
                .collect();
            flows.insert(self.graph.vertex_at(u).clone(), row);
        }

        tracing::debug!(value = %value, rounds, "max flow finished");

        Ok(FlowResult {
            value,
            network: FlowNetwork { flows },
            source_side,
            min_cut,
        })
    }

    fn push(&mut self, flow: &mut [Map<usize, W>], u: usize, v: usize, amount: W) {
        if let Some(r) = self.residual[u].get_mut(&v) {
            *r = *r - amount;
        }
        // Bounded by capacity(u, v) + capacity(v, u), checked in `new`.
        if let Some(r) = self.residual[v].get_mut(&u) {
            *r = *r + amount;
        }

        // Cancel opposing flow first, then record the rest on `u -> v`.
        let mut rest = amount;
        if let Some(back) = flow[v].get_mut(&u) {
            let cancel = (*back).min(rest);
            *back = *back - cancel;
            rest = rest - cancel;
        }
        if rest > W::ZERO {
            if let Some(f) = flow[u].get_mut(&v) {
                *f = *f + rest;
            } else {
                debug_assert!(false, "flow pushed over a pair without capacity");
            }
        }
    }

    fn residual_reach(&self, s: usize) -> Vec<bool> {
        let mut seen = vec![false; self.residual.len()];
        let mut q: VecDeque<usize> = VecDeque::new();
        seen[s] = true;
        q.push_back(s);
        while let Some(u) = q.pop_front() {
            for (&v, &cap) in &self.residual[u] {
                if cap > W::ZERO && !seen[v] {
                    seen[v] = true;
                    q.push_back(v);
                }
            }
        }
        seen
    }

    fn cut_edges(&self, reach: &[bool]) -> Vec<Edge<V, W>> {
        let directed = self.graph.is_directed();
        self.graph
            .indexed_edges()
            .filter_map(|(u, v, w)| {
                if reach[u] && !reach[v] {
                    Some(Edge::new(
                        self.graph.vertex_at(u).clone(),
                        self.graph.vertex_at(v).clone(),
                        w,
                    ))
                } else if !directed && reach[v] && !reach[u] {
                    Some(Edge::new(
                        self.graph.vertex_at(v).clone(),
                        self.graph.vertex_at(u).clone(),
                        w,
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}
