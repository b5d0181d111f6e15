//! Graph configuration options.

use serde::Serialize;

/// Construction-time options; fixed for the lifetime of a [`Graph`](super::Graph).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphOptions {
    pub directed: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self { directed: true }
    }

    pub fn undirected() -> Self {
        Self { directed: false }
    }
}
