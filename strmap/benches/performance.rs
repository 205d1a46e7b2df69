use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use strmap::StrMap;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i:06}")).collect()
}

fn benchmark_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    // A fixed 16-bucket table: larger populations mean longer chains.
    for size in [16_usize, 256, 4_096] {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("16_buckets", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = StrMap::with_default_buckets().unwrap();
                for (i, key) in keys.iter().enumerate() {
                    map.set(black_box(key), i as i64);
                }
                map
            });
        });
    }

    group.finish();
}

fn benchmark_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for (name, buckets) in [("short_chains", 4_096_usize), ("long_chains", 16)] {
        let keys = keys(1_024);
        let mut map = StrMap::new(buckets).unwrap();
        for (i, key) in keys.iter().enumerate() {
            map.set(key, i as i64);
        }

        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_function(BenchmarkId::new(name, "hit"), |b| {
            b.iter(|| {
                let mut total = 0_i64;
                for key in &keys {
                    if let Some(value) = map.get(black_box(key)) {
                        total = total.wrapping_add(value);
                    }
                }
                total
            });
        });
        group.bench_function(BenchmarkId::new(name, "miss"), |b| {
            b.iter(|| {
                let mut found = 0_usize;
                for key in &keys {
                    // Append a suffix so every probe misses.
                    if map.get(black_box(&format!("{key}?"))).is_some() {
                        found += 1;
                    }
                }
                found
            });
        });
    }

    group.finish();
}

fn benchmark_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");

    let keys = keys(1_024);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("drain", |b| {
        b.iter_batched(
            || {
                let mut map = StrMap::new(64).unwrap();
                for (i, key) in keys.iter().enumerate() {
                    map.set(key, i as i64);
                }
                map
            },
            |mut map| {
                for key in &keys {
                    black_box(map.remove(key));
                }
                map
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");

    let keys = keys(1_024);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("hash_key", |b| {
        b.iter(|| {
            let mut total = 0_u64;
            for key in &keys {
                total = total.wrapping_add(strmap::hash_key(black_box(key)));
            }
            total
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_set,
    benchmark_get,
    benchmark_remove,
    benchmark_hashing
);
criterion_main!(benches);
