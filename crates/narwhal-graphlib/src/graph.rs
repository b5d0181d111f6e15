//! The [`Graph`] container.
//!
//! Vertices are kept in first-insertion order alongside an FxHash index, so every traversal
//! over "all vertices" is deterministic for a fixed construction sequence. The adjacency list
//! is stored against dense vertex indices and is append-only: there is no edge or vertex
//! removal.
//!
//! Algorithms in other crates work on the index view ([`Graph::index_of`],
//! [`Graph::vertex_at`], [`Graph::adjacent`], [`Graph::indexed_edges`]) and translate back to
//! vertex values at their output boundary.

pub mod alg;
mod entries;
mod matrix;
mod options;

pub use entries::Edge;
pub use matrix::AdjacencyMatrix;
pub use options::GraphOptions;

use crate::error::Result;
use crate::weight::Weight;
use entries::EdgeEntry;
use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Anything usable as a vertex identity: comparable, hashable, cheap enough to clone.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

#[derive(Clone)]
pub struct Graph<V, W = i64> {
    options: GraphOptions,

    vertices: Vec<V>,
    vertex_index: HashMap<V, usize>,

    edges: Vec<EdgeEntry<V, W>>,

    // `adjacency[i]` lists `(neighbor_ix, weight)` in insertion order. Undirected edges are
    // recorded from both endpoints.
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<V: Vertex, W: Weight> fmt::Debug for Graph<V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.options.directed)
            .field("vertices", &self.vertices)
            .field("edges", &self.edge_list())
            .finish()
    }
}

impl<V: Vertex, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn directed() -> Self {
        Self::new(GraphOptions::directed())
    }

    pub fn undirected() -> Self {
        Self::new(GraphOptions::undirected())
    }

    /// Builds a graph from `(from, to, weight)` triples, inserted in iteration order.
    pub fn from_edges<I>(options: GraphOptions, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut g = Self::new(options);
        for (from, to, weight) in edges {
            g.add_edge(from, to, weight);
        }
        g
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn ensure_vertex(&mut self, v: V) -> usize {
        if let Some(&ix) = self.vertex_index.get(&v) {
            return ix;
        }
        let ix = self.vertices.len();
        self.vertices.push(v.clone());
        self.vertex_index.insert(v, ix);
        self.adjacency.push(Vec::new());
        ix
    }

    /// Adds `v` if it is not already present. Idempotent.
    pub fn add_vertex(&mut self, v: V) -> &mut Self {
        self.ensure_vertex(v);
        self
    }

    /// Appends the edge `from -> to`, adding both endpoints as needed. Never fails: weights
    /// are not validated and duplicates are kept.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> &mut Self {
        let from_ix = self.ensure_vertex(from.clone());
        let to_ix = self.ensure_vertex(to.clone());

        self.adjacency[from_ix].push((to_ix, weight));
        if !self.options.directed {
            self.adjacency[to_ix].push((from_ix, weight));
        }
        self.edges.push(EdgeEntry {
            edge: Edge { from, to, weight },
            from_ix,
            to_ix,
        });
        self
    }

    pub fn add_unweighted_edge(&mut self, from: V, to: V) -> &mut Self {
        self.add_edge(from, to, W::ONE)
    }

    pub fn add_path(&mut self, vertices: &[V], weight: W) -> &mut Self {
        for pair in vertices.windows(2) {
            self.add_edge(pair[0].clone(), pair[1].clone(), weight);
        }
        self
    }

    pub fn has_vertex(&self, v: &V) -> bool {
        self.vertex_index.contains_key(v)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Snapshot of the vertex set in first-insertion order.
    pub fn vertex_list(&self) -> Vec<V> {
        self.vertices.clone()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge<V, W>> {
        self.edges.iter().map(|e| &e.edge)
    }

    /// Snapshot of the edge list in insertion order.
    pub fn edge_list(&self) -> Vec<Edge<V, W>> {
        self.edges.iter().map(|e| e.edge.clone()).collect()
    }

    /// Outgoing `(neighbor, weight)` pairs of `v` in insertion order, or `None` if `v` is
    /// not in the graph.
    pub fn neighbors(&self, v: &V) -> Option<impl Iterator<Item = (&V, W)>> {
        let ix = self.index_of(v)?;
        Some(
            self.adjacency[ix]
                .iter()
                .map(|&(n, w)| (&self.vertices[n], w)),
        )
    }

    pub fn index_of(&self, v: &V) -> Option<usize> {
        self.vertex_index.get(v).copied()
    }

    /// Like [`Graph::index_of`], but reports an unknown vertex as [`Error::MissingVertex`].
    ///
    /// [`Error::MissingVertex`]: crate::Error::MissingVertex
    pub fn require_index(&self, v: &V) -> Result<usize> {
        self.index_of(v).ok_or_else(|| crate::Error::missing_vertex(v))
    }

    /// Panics if `ix >= self.vertex_count()`.
    pub fn vertex_at(&self, ix: usize) -> &V {
        &self.vertices[ix]
    }

    /// Adjacency of the vertex at `ix` as `(neighbor_ix, weight)` pairs.
    pub fn adjacent(&self, ix: usize) -> &[(usize, W)] {
        &self.adjacency[ix]
    }

    /// Edge list as `(from_ix, to_ix, weight)` in insertion order.
    pub fn indexed_edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.edges
            .iter()
            .map(|e| (e.from_ix, e.to_ix, e.edge.weight))
    }

    /// Builds a |V| x |V| matrix over the vertices in sorted order. Absent cells are zero;
    /// for parallel edges the last inserted weight wins.
    pub fn adjacency_matrix(&self) -> AdjacencyMatrix<V, W> {
        let mut order: Vec<usize> = (0..self.vertices.len()).collect();
        order.sort_by(|&a, &b| self.vertices[a].cmp(&self.vertices[b]));

        let mut row_of: Vec<usize> = vec![0; self.vertices.len()];
        for (row, &ix) in order.iter().enumerate() {
            row_of[ix] = row;
        }

        let n = order.len();
        let mut cells: Vec<Vec<W>> = vec![vec![W::ZERO; n]; n];
        for e in &self.edges {
            let i = row_of[e.from_ix];
            let j = row_of[e.to_ix];
            cells[i][j] = e.edge.weight;
            if !self.options.directed {
                cells[j][i] = e.edge.weight;
            }
        }

        AdjacencyMatrix {
            vertices: order.into_iter().map(|ix| self.vertices[ix].clone()).collect(),
            cells,
        }
    }

    pub fn bfs(&self, start: &V) -> Result<Vec<V>> {
        alg::bfs(self, start)
    }

    pub fn dfs(&self, start: &V) -> Result<Vec<V>> {
        alg::dfs(self, start)
    }
}
