use bytekit::Graph;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn node(i: u64) -> [u8; 8] {
    i.to_le_bytes()
}

/// 256 nodes on a ring with two chord edges per node, all reachable from 0.
fn ring_with_chords() -> Graph {
    let mut g = Graph::with_limits(512, 16, 1024);
    for i in 0..256u64 {
        g.add_edge(&node(i), &node((i + 1) % 256)).unwrap();
        g.add_edge(&node(i), &node((i * 7 + 13) % 256)).unwrap();
        g.add_edge(&node(i), &node((i * 31 + 5) % 256)).unwrap();
    }
    g
}

fn bench_add_edges(c: &mut Criterion) {
    c.bench_function("graph_add_edges_1k", |b| {
        // Round-robin sources cap the out-degree at 4, random destinations.
        let targets: Vec<u64> = lcg(5).take(1024).map(|x| x % 256).collect();
        b.iter_batched(
            || Graph::new(512),
            |mut g| {
                for (i, &t) in targets.iter().enumerate() {
                    g.add_edge(&node(i as u64 % 256), &node(t)).unwrap();
                }
                black_box(g)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_bfs(c: &mut Criterion) {
    c.bench_function("graph_bfs_ring_256", |b| {
        let g = ring_with_chords();
        let start = node(0);
        b.iter(|| black_box(g.bfs(&start).unwrap()))
    });
}

fn bench_dfs(c: &mut Criterion) {
    c.bench_function("graph_dfs_ring_256", |b| {
        let g = ring_with_chords();
        let start = node(0);
        b.iter(|| black_box(g.dfs(&start).unwrap()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_add_edges, bench_bfs, bench_dfs
}
criterion_main!(benches);
