use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use steller::order::count_crossings;
use steller_graph::{Edge, Graph, Node};

fn dense_bilayer(width: usize, fanout: usize) -> (Graph, Vec<Vec<String>>) {
    let mut g = Graph::new();
    for i in 0..width {
        g.add_node(Node::new(format!("n{i}"), 0, fanout)).unwrap();
    }
    for i in 0..width {
        g.add_node(Node::new(format!("s{i}"), fanout, 0)).unwrap();
    }

    // Deterministic scatter so the inversion tree sees realistic disorder.
    for i in 0..width {
        for k in 0..fanout {
            let dst = (i * 7 + k * 11 + 3) % width;
            g.add_edge(Edge::new(format!("n{i}"), k + 1, format!("s{dst}"), k + 1))
                .unwrap();
        }
    }

    let north = (0..width).map(|i| format!("n{i}")).collect();
    let south = (0..width).map(|i| format!("s{i}")).collect();
    (g, vec![north, south])
}

fn bench_cross_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross_count");

    for (name, width, fanout) in [("64x3", 64usize, 3usize), ("256x3", 256, 3), ("512x4", 512, 4)] {
        let (g, layering) = dense_bilayer(width, fanout);
        group.bench_with_input(
            BenchmarkId::new("order::count_crossings", name),
            &(g, layering),
            |b, (g, layering)| b.iter(|| count_crossings(black_box(g), black_box(layering))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_cross_count);
criterion_main!(benches);
