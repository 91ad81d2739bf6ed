use combo_core::Record;
use combo_rank::{top_n, FrequencyTable, TopN};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

fn generate_records(n: usize, distinct_toppings: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = rng.gen_range(0..4);
            Record::new((0..len).map(|_| format!("t{}", rng.gen_range(0..distinct_toppings))))
        })
        .collect()
}

fn bench_table(c: &mut Criterion) {
    let records = generate_records(10_000, 20);
    c.bench_function("insert_or_increment_10k", |b| {
        b.iter(|| {
            let table: FrequencyTable = black_box(records.iter().cloned()).collect();
            black_box(table.len())
        })
    });
}

fn bench_rank(c: &mut Criterion) {
    let table: FrequencyTable = generate_records(50_000, 200).into_iter().collect();
    for n in [1usize, 20, 1_000] {
        c.bench_function(&format!("top_{n}"), |b| {
            b.iter(|| black_box(top_n(black_box(&table), TopN::new(n))))
        });
    }
}

criterion_group!(benches, bench_table, bench_rank);
criterion_main!(benches);
