use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urlref::{canonical_path, escape, unescape, Url};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_reference,
    bench_to_string,
    bench_escape,
    bench_unescape,
    bench_canonical_path,
    bench_resolve,
);
criterion_main!(benches);

const PARSE_CASE: &str = "https://user@example.com/search%20path?q=%E6%B5%8B%E8%AF%95#frag%20ment";
const ESCAPE_CASE: &str = "te😃a 测1`~!@试#$%st^&+=";
const UNESCAPE_CASE: &str = "te%f0%9f%98%83a+%e6%b5%8b1%60~!%40%e8%af%95%23%24%25st%5e%26%2b%3d";
const CANONICAL_CASE: &str = "/a/./b/../b/c/../../d/./e/..";
const RESOLVE_CASE_BASE: &str = "http://example.com/foo/bar";
const RESOLVE_CASE_REF: &str = "../baz";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| b.iter(|| Url::parse(black_box(PARSE_CASE))));
}

fn bench_parse_reference(c: &mut Criterion) {
    c.bench_function("parse_reference", |b| {
        b.iter(|| Url::parse_reference(black_box(PARSE_CASE)))
    });
}

fn bench_to_string(c: &mut Criterion) {
    let url = Url::parse_reference(PARSE_CASE).unwrap();
    c.bench_function("to_string", |b| b.iter(|| black_box(&url).to_string()));
}

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape", |b| b.iter(|| escape(black_box(ESCAPE_CASE))));
}

fn bench_unescape(c: &mut Criterion) {
    c.bench_function("unescape", |b| b.iter(|| unescape(black_box(UNESCAPE_CASE))));
}

fn bench_canonical_path(c: &mut Criterion) {
    c.bench_function("canonical_path", |b| {
        b.iter(|| canonical_path(black_box(CANONICAL_CASE)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let base = Url::parse_reference(RESOLVE_CASE_BASE).unwrap();
    let r = Url::parse_reference(RESOLVE_CASE_REF).unwrap();
    c.bench_function("resolve", |b| b.iter(|| black_box(&base).resolve(black_box(&r))));
}
