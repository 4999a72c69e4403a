use countrycodes_core::{CodeLookup, CountryCodes};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn dataset() -> String {
    std::fs::read_to_string(CountryCodes::default_dataset_path()).expect("dataset present")
}

fn bench_build(c: &mut Criterion) {
    let csv = dataset();
    c.bench_function("build_from_csv", |b| {
        b.iter(|| CountryCodes::from_csv_str(black_box(&csv)).unwrap())
    });

    let db = CountryCodes::from_csv_str(&csv).unwrap();
    let snapshot = db.to_bytes().unwrap();
    c.bench_function("build_from_snapshot", |b| {
        b.iter(|| CountryCodes::from_bytes(black_box(&snapshot)).unwrap())
    });
}

fn bench_lookups(c: &mut Criterion) {
    let db = CountryCodes::from_csv_str(&dataset()).unwrap();

    c.bench_function("get_by_alpha2", |b| b.iter(|| db.get_by_alpha2(black_box("US"))));
    c.bench_function("get_by_alpha3", |b| b.iter(|| db.get_by_alpha3(black_box("USA"))));
    c.bench_function("get_by_numeric", |b| b.iter(|| db.get_by_numeric(black_box(840))));
    c.bench_function("get_by_name", |b| {
        b.iter(|| db.get_by_name(black_box("United States of America")))
    });
    c.bench_function("find_by_name_prefix", |b| b.iter(|| db.find_by_name(black_box("saint"))));
}

criterion_group!(benches, bench_build, bench_lookups);
criterion_main!(benches);
