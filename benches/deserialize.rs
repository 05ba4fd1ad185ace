use criterion::{criterion_group, criterion_main, Criterion};
use steam_webapi_wrapper::response::SchemaItem;

fn criterion_benchmark(c: &mut Criterion) {
    let schema_item_bytes = include_bytes!("fixtures/schema_item.json");

    c.bench_function("deserializes schema item", |b| b.iter(|| {
        serde_json::from_slice::<SchemaItem>(schema_item_bytes).ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
