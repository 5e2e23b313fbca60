//! Criterion benchmarks for the radix tree and the naive Bayes classifier.
//!
//! Covers vocabulary insertion, exact lookup, and document scoring.

use bayesian::classifier::NaiveBayesClassifier;
use bayesian::radix::Tree;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Generate a synthetic vocabulary with plenty of shared prefixes.
fn generate_vocabulary(count: usize) -> Vec<String> {
    let stems = [
        "search", "engine", "index", "query", "document", "field", "term", "phrase", "vector",
        "score", "analysis", "token", "stem", "cluster", "learn", "rank",
    ];
    let suffixes = ["", "s", "ed", "ing", "er", "ers", "ly", "ation"];

    (0..count)
        .map(|i| {
            let stem = stems[i % stems.len()];
            let suffix = suffixes[(i / stems.len()) % suffixes.len()];
            format!("{stem}{suffix}{}", i / (stems.len() * suffixes.len()))
        })
        .collect()
}

fn bench_tree(c: &mut Criterion) {
    let vocabulary = generate_vocabulary(10_000);

    let mut group = c.benchmark_group("radix_tree");
    group.throughput(Throughput::Elements(vocabulary.len() as u64));

    group.bench_function("insert_10k", |b| {
        b.iter(|| {
            let mut tree = Tree::new(4).unwrap();
            for (i, word) in vocabulary.iter().enumerate() {
                tree.insert(black_box(word), i % 4).unwrap();
            }
            tree
        })
    });

    let mut tree = Tree::new(4).unwrap();
    for (i, word) in vocabulary.iter().enumerate() {
        tree.insert(word, i % 4).unwrap();
    }

    group.bench_function("find_10k", |b| {
        b.iter(|| {
            let mut found = 0;
            for word in &vocabulary {
                if tree.find(black_box(word)).is_some() {
                    found += 1;
                }
            }
            found
        })
    });

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let vocabulary = generate_vocabulary(5_000);
    let mut classifier = NaiveBayesClassifier::new(3, 1.0).unwrap();
    for (i, chunk) in vocabulary.chunks(50).enumerate() {
        classifier.learn(chunk, i % 3).unwrap();
    }

    let document: Vec<&str> = vocabulary.iter().step_by(7).map(String::as_str).collect();

    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(document.len() as u64));

    group.bench_function("scores", |b| {
        b.iter(|| classifier.scores(black_box(&document)))
    });

    group.finish();
}

criterion_group!(benches, bench_tree, bench_classifier);
criterion_main!(benches);
