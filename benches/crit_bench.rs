use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navset::collections::NavigableSet;
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

criterion_group!(
    benches,
    bench_small_iter,
    bench_contains,
    bench_insert,
    bench_floor,
    bench_ceiling,
    bench_sub_set,
    bench_into_iter
);
criterion_main!(benches);

fn shuffled(n: usize) -> Vec<usize> {
    let mut v: Vec<usize> = (0..n).collect();
    v.shuffle(&mut StdRng::seed_from_u64(n as u64));
    v
}

fn bench_small_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Small Iter");
    for n in [1, 10, 60, 1000].iter() {
        let exp_set: NavigableSet<usize> = (0..*n).collect();
        let std_set: std::collections::BTreeSet<usize> = (0..*n).collect();

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| for _i in exp_set.iter() {})
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| for _i in std_set.iter() {})
        });
    }
    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contains");
    for n in [10, 20, 50, 100, 200, 500, 1000].iter() {
        let n = *n;
        let exp_set: NavigableSet<usize> = (0..n).collect();
        let std_set: std::collections::BTreeSet<usize> = (0..n).collect();

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(exp_set.contains(&i));
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(std_set.contains(&i));
                }
            })
        });
    }
    group.finish();
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("Insert");
    for n in [100, 1000, 10000].iter() {
        let keys = shuffled(*n);
        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                let mut s = NavigableSet::new();
                for k in &keys {
                    s.insert(*k);
                }
                assert!(s.len() == *n);
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                let mut s = std::collections::BTreeSet::new();
                for k in &keys {
                    s.insert(*k);
                }
                assert!(s.len() == *n);
            })
        });
    }
    group.finish();
}

fn bench_floor(c: &mut Criterion) {
    let mut group = c.benchmark_group("Floor");
    for n in [100, 1000, 10000].iter() {
        let n = *n;
        let exp_set: NavigableSet<usize> = (0..n).map(|i| i * 2).collect();
        let std_set: std::collections::BTreeSet<usize> = (0..n).map(|i| i * 2).collect();

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(exp_set.floor(&(i * 2 + 1)) == Some(&(i * 2)));
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for i in 0..n {
                    assert!(std_set.range(..=i * 2 + 1).next_back() == Some(&(i * 2)));
                }
            })
        });
    }
    group.finish();
}

fn bench_ceiling(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ceiling");
    for n in [100, 1000, 10000].iter() {
        let n = *n;
        let exp_set: NavigableSet<usize> = (0..n).map(|i| i * 2).collect();
        let std_set: std::collections::BTreeSet<usize> = (0..n).map(|i| i * 2).collect();

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                for i in 1..n {
                    assert!(exp_set.ceiling(&(i * 2 - 1)) == Some(&(i * 2)));
                }
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                for i in 1..n {
                    assert!(std_set.range(i * 2 - 1..).next() == Some(&(i * 2)));
                }
            })
        });
    }
    group.finish();
}

fn bench_sub_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("SubSet");
    for n in [1000, 10000].iter() {
        let n = *n;
        let exp_set: NavigableSet<usize> = (0..n).collect();
        let std_set: std::collections::BTreeSet<usize> = (0..n).collect();

        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                let s = exp_set.sub_set(&(n / 4), &(3 * n / 4));
                assert!(s.len() == n / 2);
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                let s: std::collections::BTreeSet<usize> =
                    std_set.range(n / 4..3 * n / 4).copied().collect();
                assert!(s.len() == n / 2);
            })
        });
    }
    group.finish();
}

fn exp_into_iter_test(n: usize) {
    let s: NavigableSet<usize> = (0..n).collect();
    for (i, k) in s.into_iter().enumerate() {
        assert!(i == k);
    }
}

fn std_into_iter_test(n: usize) {
    let s: std::collections::BTreeSet<usize> = (0..n).collect();
    for (i, k) in s.into_iter().enumerate() {
        assert!(i == k);
    }
}

fn bench_into_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("IntoIter");
    for n in [100, 1000, 10000].iter() {
        group.bench_function(BenchmarkId::new("Exp", n), |b| {
            b.iter(|| {
                exp_into_iter_test(*n);
            })
        });
        group.bench_function(BenchmarkId::new("Std", n), |b| {
            b.iter(|| {
                std_into_iter_test(*n);
            })
        });
    }
    group.finish();
}

use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
