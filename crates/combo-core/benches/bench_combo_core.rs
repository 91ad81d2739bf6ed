use combo_core::{canonicalize, Record};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::seq::SliceRandom;
use rand::Rng;

const TOPPINGS: &[&str] = &[
    "pepperoni", "Mushroom", "onion", "Green Pepper", "sausage", "bacon",
    "Black Olives", "pineapple", "ham", "jalapeno", "Extra Cheese", "spinach",
];

fn generate_records(n: usize) -> Vec<Record> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let len = rng.gen_range(0..6);
            Record::new(TOPPINGS.choose_multiple(&mut rng, len).copied())
        })
        .collect()
}

fn bench_canonicalize(c: &mut Criterion) {
    let records = generate_records(1_000);
    c.bench_function("canonicalize_1k_records", |b| {
        b.iter(|| {
            for r in &records {
                black_box(canonicalize(black_box(r.items.as_deref())));
            }
        })
    });

    let wide: Vec<String> = (0..64).map(|i| format!("topping-{i}")).collect();
    c.bench_function("canonicalize_64_items", |b| {
        b.iter(|| black_box(canonicalize(Some(black_box(wide.as_slice())))))
    });
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);
