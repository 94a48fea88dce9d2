//! Criterion benchmarks for the termcheck engine: sentence analysis and
//! end-to-end verification throughput.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use termcheck::profile::{Language, LanguageProfile};
use termcheck::verify::verify_terms;

/// Generate a synthetic bitext corpus for benchmarking.
fn generate_bitext(count: usize) -> Vec<(String, String)> {
    let english = [
        "The project reached Completion on time.",
        "The Agency Agreement entered into force yesterday.",
        "Original texts are usually good texts, but sometimes are bad texts.",
        "Completion of the Project was certified by the Committee.",
        "The five boxing wizards jump quickly.",
    ];
    let russian = [
        "Проект достиг Завершения в срок.",
        "Агентский договор вступил в силу вчера.",
        "Переведенные тексты - это обычно плохие тексты, но иногда - хорошие тексты.",
        "Завершение Проекта было подтверждено Комитетом.",
        "Некоторый текст без терминов.",
    ];

    (0..count)
        .map(|i| {
            (
                english[i % english.len()].to_string(),
                russian[i % russian.len()].to_string(),
            )
        })
        .collect()
}

fn bench_analyze(c: &mut Criterion) {
    let profile = LanguageProfile::new(Language::English);
    let text = "Original texts are usually good texts, but sometimes are bad texts.";

    let mut group = c.benchmark_group("analyze");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("english_sentence", |b| {
        b.iter(|| profile.analyze(black_box(text)).unwrap())
    });
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let bitext = generate_bitext(1000);
    let glossary = vec![
        ("Completion".to_string(), "Завершение".to_string()),
        ("Agency Agreement".to_string(), "Агентский договор".to_string()),
        ("texts".to_string(), "тексты".to_string()),
    ];

    let mut group = c.benchmark_group("verify");
    group.throughput(Throughput::Elements(bitext.len() as u64));
    group.bench_function("eng_rus_1000_entries", |b| {
        b.iter(|| {
            verify_terms(
                black_box("eng-rus"),
                black_box(&bitext),
                black_box(&glossary),
                true,
            )
            .unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_analyze, bench_verify);
criterion_main!(benches);
