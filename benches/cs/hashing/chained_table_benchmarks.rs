use chainstat::cs::hashing::{rotate_sum, ChainedStringTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::distributions::Alphanumeric;
use rand::{Rng, SeedableRng};

fn random_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

fn bench_hash(c: &mut Criterion) {
    let words = random_words(1_000, 7);
    c.bench_function("rotate_sum_1000_words", |b| {
        b.iter(|| {
            for w in &words {
                black_box(rotate_sum(black_box(w.as_bytes())));
            }
        })
    });
}

fn bench_insert_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_table");
    let words = random_words(10_000, 42);

    for capacity in [101usize, 1_009, 10_007] {
        group.bench_with_input(BenchmarkId::new("insert", capacity), &capacity, |b, &cap| {
            b.iter(|| {
                let mut table = ChainedStringTable::with_capacity(cap).unwrap();
                for w in &words {
                    table.insert(w.as_str());
                }
                black_box(table.len())
            })
        });

        let mut table = ChainedStringTable::with_capacity(capacity).unwrap();
        for w in &words {
            table.insert(w.as_str());
        }
        group.bench_with_input(BenchmarkId::new("search", capacity), &table, |b, t| {
            b.iter(|| {
                for w in words.iter().step_by(10) {
                    black_box(t.search(w));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("peek_stats", capacity), &table, |b, t| {
            b.iter(|| black_box(t.peek_stats()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hash, bench_insert_search);
criterion_main!(benches);
