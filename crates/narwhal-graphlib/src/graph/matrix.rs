//! Dense adjacency matrix snapshot.

use serde::Serialize;

/// `cells[i][j]` holds the weight of the edge `vertices[i] -> vertices[j]`, or zero when
/// there is none. Vertices are sorted by their natural order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix<V, W> {
    pub vertices: Vec<V>,
    pub cells: Vec<Vec<W>>,
}

impl<V: PartialEq, W: Copy> AdjacencyMatrix<V, W> {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, from: &V, to: &V) -> Option<W> {
        let i = self.vertices.iter().position(|v| v == from)?;
        let j = self.vertices.iter().position(|v| v == to)?;
        Some(self.cells[i][j])
    }

    pub fn rows(&self) -> impl Iterator<Item = (&V, &[W])> {
        self.vertices
            .iter()
            .zip(self.cells.iter().map(|row| row.as_slice()))
    }
}
