use combo_cli::ingest;
use combo_rank::{top_n, FrequencyTable, TopN};
use combo_stream::StreamDecoder;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn generate_orders(size_kb: usize) -> String {
    let toppings = ["pepperoni", "Mushroom", "onion", "sausage", "Bacon", "ham"];
    let mut out = String::with_capacity(size_kb * 1024);
    let mut i = 0usize;
    while out.len() < size_kb * 1024 {
        let a = toppings[i % toppings.len()];
        let b = toppings[(i / 3) % toppings.len()];
        out.push_str(&format!(r#"{{"toppings":["{a}","{b}"]}}"#));
        i += 1;
    }
    out
}

fn bench_ingest_and_rank(c: &mut Criterion) {
    let orders = generate_orders(512);
    c.bench_function("ingest_rank_512kb", |b| {
        b.iter(|| {
            let mut decoder = StreamDecoder::new(black_box(orders.as_bytes()));
            let mut table = FrequencyTable::new();
            ingest(&mut decoder, &mut table).unwrap();
            black_box(top_n(&table, TopN::default()))
        })
    });
}

criterion_group!(benches, bench_ingest_and_rank);
criterion_main!(benches);
