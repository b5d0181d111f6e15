use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::graphlib::{Graph, GraphOptions};
use narwhal::shortest_path::dijkstra;
use narwhal::spanning_tree::{kruskal, prim};
use std::hint::black_box;

/// `side` x `side` grid with deterministic weights on right/down edges.
fn grid(side: u32) -> Graph<u32, u32> {
    let mut g: Graph<u32, u32> = Graph::new(GraphOptions::undirected());
    for r in 0..side {
        for c in 0..side {
            let v = r * side + c;
            if c + 1 < side {
                g.add_edge(v, v + 1, 1 + (r * 31 + c * 17) % 23);
            }
            if r + 1 < side {
                g.add_edge(v, v + side, 1 + (r * 13 + c * 29) % 19);
            }
        }
    }
    g
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for side in [16u32, 32, 64] {
        let g = grid(side);
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &g, |b, g| {
            b.iter(|| black_box(dijkstra(g, &0).expect("source exists")))
        });
        group.bench_with_input(BenchmarkId::new("kruskal", side), &g, |b, g| {
            b.iter(|| black_box(kruskal(g).expect("weights fit").total_weight))
        });
        group.bench_with_input(BenchmarkId::new("prim", side), &g, |b, g| {
            b.iter(|| black_box(prim(g).expect("weights fit").total_weight))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid);
criterion_main!(benches);
