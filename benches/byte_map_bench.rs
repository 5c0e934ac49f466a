use bytekit::ByteMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> Vec<u8> {
    format!("k{:016x}", n).into_bytes()
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("byte_map_insert_4k", |b| {
        // Half-full table keeps probe chains representative of normal use.
        let keys: Vec<Vec<u8>> = lcg(1).take(4096).map(key).collect();
        b.iter_batched(
            || ByteMap::new(8192),
            |mut m| {
                for k in &keys {
                    m.insert(k, k).unwrap();
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("byte_map_get_hit", |b| {
        let mut m = ByteMap::new(16384);
        let keys: Vec<Vec<u8>> = lcg(7).take(8192).map(key).collect();
        for k in &keys {
            m.insert(k, k).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("byte_map_get_miss", |b| {
        let mut m = ByteMap::new(16384);
        for k in lcg(11).take(8192).map(key) {
            m.insert(&k, &k).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // keys formatted from a disjoint stream are almost surely absent
            let k = key(miss.next().unwrap());
            black_box(m.get(&k));
        })
    });
}

fn bench_churn(c: &mut Criterion) {
    c.bench_function("byte_map_churn", |b| {
        let mut m = ByteMap::new(8192);
        let keys: Vec<Vec<u8>> = lcg(23).take(4096).map(key).collect();
        for k in &keys {
            m.insert(k, k).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            // One remove and one reinsert per pass holds occupancy constant
            // while tombstones accumulate and get reclaimed.
            let k = it.next().unwrap();
            m.remove(k);
            m.insert(k, k).unwrap();
        })
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
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_churn
}
criterion_main!(benches);
