//! Benchmarks for authorlink normalization performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks test normalization at various author list sizes.

use authorlink::cleanup;
use authorlink::LinkOptions;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Creates a noisy author list with the given number of authors.
fn create_author_list(author_count: usize) -> String {
    const SEPARATORS: [&str; 6] = [", ", " & ", " and ", "; ", "\n", " ∙ "];
    const NOISE: [&str; 6] = ["1,2†", "*", " M.D.", " Ph.D. ORCID", "3 a b", " x@example.org"];

    let mut list = String::from("Author Info & Affiliations ");
    for i in 0..author_count {
        if i > 0 {
            list.push_str(SEPARATORS[i % SEPARATORS.len()]);
        }
        if i % 5 == 4 {
            list.push_str("山田 太郎");
        } else {
            list.push_str(&format!("AUTHOR{} q. lastname", i));
        }
        list.push_str(NOISE[i % NOISE.len()]);
    }
    list
}

/// Benchmark the full pipeline at various sizes.
fn bench_link_authors(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_authors");

    for author_count in [1, 10, 100, 1000].iter() {
        let input = create_author_list(*author_count);

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("authors", author_count),
            &input,
            |b, input| {
                b.iter(|| authorlink::link_authors(black_box(input)));
            },
        );
    }

    group.finish();
}

/// Benchmark single-candidate cleanup.
fn bench_clean_name(c: &mut Criterion) {
    let options = LinkOptions::default();

    c.bench_function("clean_name_noisy", |b| {
        b.iter(|| {
            cleanup::clean_name(
                black_box(" JOHN DOE1*† https://example.com john@example.com M.D. a b c"),
                &options,
            )
        });
    });

    c.bench_function("clean_name_clean", |b| {
        b.iter(|| cleanup::clean_name(black_box(" Jane Smith"), &options));
    });
}

/// Benchmark NFC pre-pass overhead.
fn bench_unicode_normalization(c: &mut Criterion) {
    let input = create_author_list(100);
    let options = LinkOptions::default().with_unicode_normalization();

    c.bench_function("extract_authors_nfc_100", |b| {
        b.iter(|| cleanup::extract_authors(black_box(&input), &options));
    });
}

criterion_group!(
    benches,
    bench_clean_name,
    bench_link_authors,
    bench_unicode_normalization,
);
criterion_main!(benches);
