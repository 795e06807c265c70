use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wordgraph::dawg::build_dawg;

/// Generate a sorted list of dictionary terms with realistic affix sharing.
fn generate_terms(size: usize) -> Vec<String> {
    let prefixes = [
        "pre", "un", "re", "in", "dis", "en", "non", "over", "mis", "sub",
    ];
    let roots = [
        "test", "code", "data", "work", "play", "read", "write", "run", "walk", "talk",
    ];
    let suffixes = [
        "ing", "ed", "er", "est", "ly", "ness", "ment", "tion", "able", "ful",
    ];

    let mut terms: Vec<String> = (0..size)
        .map(|i| {
            let prefix = prefixes[i % prefixes.len()];
            let root = roots[(i / prefixes.len()) % roots.len()];
            let suffix = suffixes[(i / (prefixes.len() * roots.len())) % suffixes.len()];
            format!("{prefix}{root}{suffix}")
        })
        .collect();
    terms.sort();
    terms.dedup();
    terms
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dawg_build");
    for size in [100, 500, 1000] {
        let terms = generate_terms(size);
        group.throughput(Throughput::Elements(terms.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &terms, |b, terms| {
            b.iter(|| build_dawg(black_box(terms)).unwrap());
        });
    }
    group.finish();
}

fn bench_accepts(c: &mut Criterion) {
    let terms = generate_terms(1000);
    let dawg = build_dawg(&terms).unwrap();
    let misses: Vec<String> = terms.iter().map(|t| format!("{t}x")).collect();

    let mut group = c.benchmark_group("dawg_accepts");
    group.throughput(Throughput::Elements(terms.len() as u64));
    group.bench_function("hits", |b| {
        b.iter(|| terms.iter().filter(|t| dawg.accepts(black_box(*t))).count())
    });
    group.bench_function("misses", |b| {
        b.iter(|| misses.iter().filter(|t| dawg.accepts(black_box(*t))).count())
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_accepts);
criterion_main!(benches);
