use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn parse_titles(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .take(5)
        .map(|line| line.to_string())
        .collect()
}

fn benchmark_parse_titles(c: &mut Criterion) {
    let sample_text = "How to Learn Rust in 2024\n\nOwnership Explained Once and For All\nWhy Borrowing Matters\n\nFearless Concurrency in Practice\nAsync Rust Without Tears\nTraits for Fun and Profit\n";

    c.bench_function("parse_titles", |b| {
        b.iter(|| parse_titles(black_box(sample_text)))
    });
}

fn benchmark_parse_titles_large(c: &mut Criterion) {
    let large_content = "A Perfectly Reasonable Blog Title\n\n".repeat(10000);

    c.bench_function("parse_titles_large", |b| {
        b.iter(|| parse_titles(black_box(&large_content)))
    });
}

criterion_group!(benches, benchmark_parse_titles, benchmark_parse_titles_large);
criterion_main!(benches);
