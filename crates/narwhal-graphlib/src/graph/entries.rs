//! Edge records and their internal storage entries.

use serde::Serialize;

/// A weighted edge `from -> to`. For undirected graphs the orientation is the one the
/// edge was inserted with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<V, W> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<V, W> {
    pub(in crate::graph) edge: Edge<V, W>,
    pub(in crate::graph) from_ix: usize,
    pub(in crate::graph) to_ix: usize,
}
