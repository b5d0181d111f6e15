//! Structural decomposition of directed graphs: strongly connected components (Kosaraju)
//! and DFS-based topological sort.
//!
//! Both walk the graph with an explicit frame stack of `(vertex, next neighbor position)`
//! pairs rather than recursion, so deep chains do not grow the call stack. Visiting order is
//! identical to the recursive formulation: roots in vertex insertion order, neighbors in
//! adjacency order.
//!
//! Undirected graphs are accepted but every edge then forms a two-way cycle: SCCs degrade to
//! connected components and topological sort fails on the first edge.

use crate::graphlib::{Error, Graph, Result, Vertex, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

/// Kosaraju's algorithm. Returns a partition of the vertex set: components in discovery
/// order of the second pass, each listing its vertices in second-pass DFS order.
pub fn strongly_connected_components<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Vec<Vec<V>> {
    let n = g.vertex_count();

    // Pass 1: post-order finish stack over the original graph.
    let mut visited = vec![false; n];
    let mut finished: Vec<usize> = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, 0));
        while let Some(frame) = stack.last_mut() {
            let (v, pos) = *frame;
            match g.adjacent(v).get(pos) {
                Some(&(next, _)) => {
                    frame.1 += 1;
                    if !visited[next] {
                        visited[next] = true;
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                    finished.push(v);
                }
            }
        }
    }

    let reversed = reverse_adjacency(g);

    // Pass 2: one DFS tree per component on the reversed graph, latest finisher first.
    visited.fill(false);
    let mut components: Vec<Vec<V>> = Vec::new();
    for &root in finished.iter().rev() {
        if visited[root] {
            continue;
        }
        let mut component: Vec<V> = Vec::new();
        visited[root] = true;
        component.push(g.vertex_at(root).clone());
        stack.push((root, 0));
        while let Some(frame) = stack.last_mut() {
            let (v, pos) = *frame;
            let Some(&next) = reversed[v].get(pos) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;
            if !visited[next] {
                visited[next] = true;
                component.push(g.vertex_at(next).clone());
                stack.push((next, 0));
            }
        }
        components.push(component);
    }

    tracing::debug!(
        vertices = n,
        components = components.len(),
        "strongly connected components"
    );
    components
}

/// Every edge `u -> v` becomes `v -> u`; weights are dropped.
fn reverse_adjacency<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Vec<Vec<usize>> {
    let mut reversed: Vec<Vec<usize>> = vec![Vec::new(); g.vertex_count()];
    for u in 0..g.vertex_count() {
        for &(v, _) in g.adjacent(u) {
            reversed[v].push(u);
        }
    }
    reversed
}

/// Orders vertices so that every edge points forward. Any cycle anywhere in the graph
/// aborts the sort with [`Error::Cycle`], naming the vertex whose revisit closed it.
pub fn topological_sort<V: Vertex, W: Weight>(g: &Graph<V, W>) -> Result<Vec<V>> {
    let n = g.vertex_count();
    let mut marks = vec![Mark::Unvisited; n];
    let mut finished: Vec<usize> = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        stack.push((root, 0));
        while let Some(frame) = stack.last_mut() {
            let (v, pos) = *frame;
            let Some(&(next, _)) = g.adjacent(v).get(pos) else {
                stack.pop();
                marks[v] = Mark::Done;
                finished.push(v);
                continue;
            };
            frame.1 += 1;
            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::InProgress;
                    stack.push((next, 0));
                }
                Mark::InProgress => {
                    tracing::debug!(
                        from = ?g.vertex_at(v),
                        to = ?g.vertex_at(next),
                        "topological sort: back edge"
                    );
                    return Err(Error::cycle(g.vertex_at(next)));
                }
                Mark::Done => {}
            }
        }
    }

    // Finishing order reversed == prepending each vertex as it finishes.
    Ok(finished
        .into_iter()
        .rev()
        .map(|ix| g.vertex_at(ix).clone())
        .collect())
}
