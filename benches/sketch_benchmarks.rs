use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use log_sketch_rs::{BloomFilter, HyperLogLogEstimator, extract_ipv4};
use rand::{Rng, distr::Alphanumeric};
use std::hint::black_box;

// Helper function to generate random string data
fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn generate_test_data(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_random_string(32)).collect()
}

fn bench_bloom_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom");
    let items = generate_test_data(1000);

    for &size in &[10_000usize, 100_000, 1_000_000] {
        group.bench_with_input(
            BenchmarkId::new("add_1000", size),
            &size,
            |b, &size| {
                b.iter(|| {
                    let mut filter = BloomFilter::new(size, 5).unwrap();
                    for item in &items {
                        filter.add(black_box(item.as_bytes()));
                    }
                });
            },
        );

        let mut filter = BloomFilter::new(size, 5).unwrap();
        for item in &items {
            filter.add(item.as_bytes());
        }
        group.bench_with_input(
            BenchmarkId::new("contains", size),
            &size,
            |b, _| {
                b.iter(|| {
                    for item in &items {
                        black_box(filter.contains(black_box(item.as_bytes())));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_hll_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyperloglog");
    let items = generate_test_data(10_000);

    for &precision in &[10u8, 14] {
        group.bench_with_input(
            BenchmarkId::new("add_10000", precision),
            &precision,
            |b, &precision| {
                b.iter(|| {
                    let mut hll =
                        HyperLogLogEstimator::new(precision).unwrap();
                    for item in &items {
                        hll.add(black_box(item.as_bytes()));
                    }
                });
            },
        );

        let mut hll = HyperLogLogEstimator::new(precision).unwrap();
        for item in &items {
            hll.add(item.as_bytes());
        }
        group.bench_with_input(
            BenchmarkId::new("estimate", precision),
            &precision,
            |b, _| {
                b.iter(|| black_box(hll.estimate()));
            },
        );
    }
    group.finish();
}

fn bench_ip_extraction(c: &mut Criterion) {
    let line = "203.0.113.42 - - [15/Jan/2025:10:00:00] \"GET /dashboard HTTP/1.1\" 200 5120";
    let miss = "worker thread 17 finished batch 4096 in 1.25 seconds";

    c.bench_function("extract_ipv4/hit", |b| {
        b.iter(|| black_box(extract_ipv4(black_box(line))));
    });
    c.bench_function("extract_ipv4/miss", |b| {
        b.iter(|| black_box(extract_ipv4(black_box(miss))));
    });
}

criterion_group!(
    benches,
    bench_bloom_operations,
    bench_hll_operations,
    bench_ip_extraction
);
criterion_main!(benches);
