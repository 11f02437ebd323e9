//! Criterion benchmarks for lexpand.
//!
//! Covers TF-IDF term ranking, document ranking and embedding-based query
//! expansion over generated data.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lexpand::document::table::DocumentTable;
use lexpand::embedding::{EmbeddingModel, KeyedVectors, VectorModel};
use lexpand::expansion::{ExpansionRep, find_top_n_terms};
use lexpand::rank::{Limit, top_doc, top_term_from_top_doc, top_tfidf};
use lexpand::util::simd::cosine_similarity;

const WORDS: &[&str] = &[
    "search",
    "engine",
    "full",
    "text",
    "index",
    "query",
    "document",
    "field",
    "term",
    "phrase",
    "boolean",
    "vector",
    "similarity",
    "relevance",
    "score",
    "analysis",
    "tokenization",
    "stemming",
    "normalization",
    "clustering",
    "machine",
    "learning",
    "algorithm",
    "data",
    "structure",
    "performance",
    "optimization",
    "memory",
    "storage",
    "retrieval",
    "ranking",
    "filtering",
];

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 50 + (i % 100);
        let doc_words: Vec<&str> = (0..doc_length)
            .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
            .collect();
        documents.push(doc_words.join(" "));
    }
    documents
}

/// Generate a vector with a deterministic pattern.
fn generate_vector(seed: usize, dimension: usize) -> Vec<f32> {
    (0..dimension)
        .map(|j| ((seed as f32 * 0.1 + j as f32 * 0.01).sin() * 0.5 + 0.5) * 2.0 - 1.0)
        .collect()
}

/// Build a model with one vector per word plus synthetic neighbours.
fn generate_model(extra_terms: usize, dimension: usize) -> VectorModel {
    let mut words = KeyedVectors::new(dimension);
    for (i, word) in WORDS.iter().enumerate() {
        words.add(*word, generate_vector(i, dimension)).unwrap();
    }
    for i in 0..extra_terms {
        words
            .add(format!("term{i}"), generate_vector(WORDS.len() + i, dimension))
            .unwrap();
    }

    let mut documents = KeyedVectors::new(dimension);
    for i in 0..extra_terms {
        documents
            .add(format!("doc{i}"), generate_vector(i * 3 + 1, dimension))
            .unwrap();
    }

    VectorModel::new(words).with_documents(documents).unwrap()
}

/// Benchmark term and document ranking.
fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranking");
    let documents = generate_test_documents(1000);

    group.throughput(Throughput::Elements(100));
    group.bench_function("top_tfidf_100_documents", |b| {
        b.iter(|| {
            let result = top_tfidf(black_box(&documents[..100]), Limit::Top(10));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("top_tfidf_1000_documents", |b| {
        b.iter(|| {
            let result = top_tfidf(black_box(&documents[..]), Limit::Top(10));
            black_box(result)
        })
    });

    let table = DocumentTable::from_scored(
        "text",
        "score",
        documents
            .iter()
            .enumerate()
            .map(|(i, text)| (text.as_str(), ((i * 37) % 101) as f64 / 100.0)),
    );

    group.bench_function("top_doc", |b| {
        b.iter(|| {
            let result = top_doc(black_box(&table), "text", "score", Limit::Top(50));
            black_box(result)
        })
    });

    group.bench_function("top_term_from_top_doc", |b| {
        b.iter(|| {
            let result = top_term_from_top_doc(
                black_box(&table),
                "text",
                "score",
                Limit::Top(50),
                Limit::Top(10),
            );
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark query expansion.
fn bench_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("expansion");
    group.sample_size(20);

    let model: Arc<dyn EmbeddingModel> = Arc::new(generate_model(5000, 128));

    group.bench_function("find_top_n_terms_w2v", |b| {
        b.iter(|| {
            let result = find_top_n_terms(
                black_box("vector similarity search"),
                Arc::clone(&model),
                Limit::Top(10),
                ExpansionRep::TermSimilarity,
            );
            black_box(result)
        })
    });

    group.bench_function("find_top_n_terms_d2v", |b| {
        b.iter(|| {
            let result = find_top_n_terms(
                black_box("vector similarity search"),
                Arc::clone(&model),
                Limit::Top(10),
                ExpansionRep::DocVectorSimilarity,
            );
            black_box(result)
        })
    });

    let query = generate_vector(0, 128);
    let targets: Vec<Vec<f32>> = (1..101).map(|i| generate_vector(i, 128)).collect();
    group.throughput(Throughput::Elements(100));
    group.bench_function("cosine_similarity_batch", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(cosine_similarity(black_box(&query), black_box(target)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ranking, bench_expansion);
criterion_main!(benches);
