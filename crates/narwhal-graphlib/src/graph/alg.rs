//! Traversal helpers over [`Graph`].
//!
//! Both traversals visit neighbors in adjacency insertion order, so the output is
//! deterministic for a fixed construction sequence. DFS runs on an explicit frame stack
//! instead of recursion and produces the same preorder a recursive walk would.

use super::{Graph, Vertex};
use crate::error::Result;
use crate::weight::Weight;
use std::collections::VecDeque;

/// Breadth-first visitation order from `start`: first discovered, first emitted.
pub fn bfs<V: Vertex, W: Weight>(g: &Graph<V, W>, start: &V) -> Result<Vec<V>> {
    let start = g.require_index(start)?;
    Ok(bfs_indices(g, start)
        .into_iter()
        .map(|ix| g.vertex_at(ix).clone())
        .collect())
}

/// Depth-first preorder from `start`.
pub fn dfs<V: Vertex, W: Weight>(g: &Graph<V, W>, start: &V) -> Result<Vec<V>> {
    let start = g.require_index(start)?;
    Ok(dfs_indices(g, start)
        .into_iter()
        .map(|ix| g.vertex_at(ix).clone())
        .collect())
}

pub fn bfs_indices<V: Vertex, W: Weight>(g: &Graph<V, W>, start: usize) -> Vec<usize> {
    let mut visited = vec![false; g.vertex_count()];
    let mut out: Vec<usize> = Vec::new();
    let mut q: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    q.push_back(start);
    while let Some(v) = q.pop_front() {
        out.push(v);
        for &(n, _) in g.adjacent(v) {
            if !visited[n] {
                visited[n] = true;
                q.push_back(n);
            }
        }
    }
    out
}

pub fn dfs_indices<V: Vertex, W: Weight>(g: &Graph<V, W>, start: usize) -> Vec<usize> {
    let mut visited = vec![false; g.vertex_count()];
    let mut out: Vec<usize> = Vec::new();
    // (vertex, position of the next neighbor to scan)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    visited[start] = true;
    out.push(start);
    stack.push((start, 0));
    while let Some(frame) = stack.last_mut() {
        let (v, pos) = *frame;
        let Some(&(n, _)) = g.adjacent(v).get(pos) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;
        if !visited[n] {
            visited[n] = true;
            out.push(n);
            stack.push((n, 0));
        }
    }
    out
}

/// Vertices reachable from `start` (including itself), as a membership mask over indices.
pub fn reachable_mask<V: Vertex, W: Weight>(g: &Graph<V, W>, start: usize) -> Vec<bool> {
    let mut mask = vec![false; g.vertex_count()];
    for ix in bfs_indices(g, start) {
        mask[ix] = true;
    }
    mask
}
