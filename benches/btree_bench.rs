use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use interchangedb_btree::BTree;

const N: i64 = 10_000;

fn random_keys(n: i64) -> Vec<i64> {
    // Simple LCG for a deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n as usize);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn build(t: usize, keys: &[i64]) -> BTree<i64> {
    let mut tree = BTree::new(t).unwrap();
    for &k in keys {
        tree.insert(k);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    let keys = random_keys(N);

    for t in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, &t| {
            b.iter(|| build(t, &keys));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_random");
    let keys = random_keys(N);

    for t in [2usize, 8, 32] {
        let tree = build(t, &keys);
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, _| {
            b.iter(|| {
                for k in &keys {
                    black_box(tree.search(k));
                }
            });
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_random");
    let keys = random_keys(N);

    for t in [2usize, 8, 32] {
        let tree = build(t, &keys);
        group.bench_with_input(BenchmarkId::from_parameter(t), &t, |b, _| {
            b.iter_batched(
                || tree.clone(),
                |mut tree| {
                    for k in &keys {
                        tree.delete(k);
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
