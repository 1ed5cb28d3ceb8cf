#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: urlsearch vs the url crate's form_urlencoded
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::form_urlencoded;
use urlsearch::SearchStore;

const SIMPLE: &str = "?page=2&sort=name";
const COMPLEX: &str = "?q=hello+world&tag=rust&tag=web&tag=wasm&name=Fran%C3%A7ois&filter=a%26b%3Dc&empty&page=10";

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("urlsearch", |b| {
        b.iter(|| SearchStore::parse("/", black_box(SIMPLE)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(&SIMPLE.as_bytes()[1..]))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");

    group.bench_function("urlsearch", |b| {
        b.iter(|| SearchStore::parse("/", black_box(COMPLEX)));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(&COMPLEX.as_bytes()[1..]))
                .into_owned()
                .collect::<Vec<(String, String)>>()
        });
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    let store = SearchStore::parse("/", COMPLEX);
    let pairs: Vec<(String, String)> = form_urlencoded::parse(&COMPLEX.as_bytes()[1..])
        .into_owned()
        .collect();

    group.bench_function("urlsearch", |b| {
        b.iter(|| black_box(&store).search());
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::from("?"))
                .extend_pairs(black_box(&pairs))
                .finish()
        });
    });

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    group.bench_function("set_append_delete", |b| {
        b.iter(|| {
            let mut store = SearchStore::parse("/", black_box(COMPLEX));
            store
                .set("page", ["1"])
                .append("tag", ["cli"])
                .delete_values("tag", ["web"])
                .delete("empty");
            store.path()
        });
    });

    group.bench_function("json", |b| {
        let store = SearchStore::parse("/", COMPLEX);
        b.iter(|| black_box(&store).json());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_serialize_all,
    bench_mutations
);
criterion_main!(benches);
