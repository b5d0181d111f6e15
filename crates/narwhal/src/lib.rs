//! Classic graph algorithms over [`graphlib::Graph`].
//!
//! Every algorithm borrows the graph immutably and builds its auxiliary state (priority
//! queue, disjoint set, residual graph, reversed adjacency) privately for the duration of
//! one call. Nothing is cached between calls.

pub use narwhal_graphlib as graphlib;
pub use narwhal_graphlib::{Edge, Error, Graph, GraphOptions, Result, Vertex, Weight};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod components;
pub mod disjoint_set;
pub mod heap;
pub mod max_flow;
pub mod shortest_path;
pub mod spanning_tree;

pub(crate) fn ensure_non_negative<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Result<()> {
    match g.edges().find(|e| e.weight.is_negative()) {
        Some(e) => Err(Error::negative_weight(&e.from, &e.to, e.weight)),
        None => Ok(()),
    }
}
