#![forbid(unsafe_code)]

//! Weighted graph container shared by the `narwhal` algorithm families.
//!
//! A [`Graph`] owns its vertex set, its edge list (insertion order, parallel edges and
//! self-loops kept), and an append-only adjacency list derived from the edges. Algorithms
//! borrow the graph immutably and build whatever auxiliary structures they need privately.
//!
//! The graph must not be mutated while an algorithm holds a reference to it; the borrow
//! checker enforces this for safe callers.

pub mod error;
pub mod graph;
pub mod weight;

pub use error::{Error, Result};
pub use graph::alg;
pub use graph::{AdjacencyMatrix, Edge, Graph, GraphOptions, Vertex};
pub use weight::Weight;
