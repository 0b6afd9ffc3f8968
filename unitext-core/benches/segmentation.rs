//! Throughput of the boundary finders and the operations built on them

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use unitext_core::{
    casefold, grapheme_length, grapheme_substr, sentence_iter, word_iter, WordFilter,
};

const SAMPLES: &[(&str, &str)] = &[
    ("ascii", "This is a test sentence. It has multiple words! Does it work? "),
    (
        "mixed",
        "Caf\u{00E9} na\u{00EF}ve e\u{0301}tude. Stra\u{00DF}e \u{1F1FA}\u{1F1F8} \u{1F44D}\u{1F3FD}! ",
    ),
    ("cjk", "\u{65E5}\u{672C}\u{8A9E}\u{306E}\u{6587}\u{7AE0}\u{3002}\u{6B21}\u{306E}\u{6587}\u{3002}"),
];

/// Repeat `base` up to roughly `size_kb` kilobytes, cut at a char boundary
fn generate_text(base: &str, size_kb: usize) -> String {
    let target = size_kb * 1024;
    let mut text = base.repeat(target / base.len() + 1);
    let mut cut = target.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn bench_graphemes(c: &mut Criterion) {
    let mut group = c.benchmark_group("graphemes");

    for &(name, base) in SAMPLES {
        for size_kb in [1, 64] {
            let text = generate_text(base, size_kb);
            group.throughput(Throughput::Bytes(text.len() as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("length/{name}"), format!("{size_kb}KB")),
                &text,
                |b, text| b.iter(|| grapheme_length(black_box(text.as_str()), 0)),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("substr_tail/{name}"), format!("{size_kb}KB")),
                &text,
                |b, text| b.iter(|| grapheme_substr(black_box(text.as_str()), Some(-10), None).len()),
            );
        }
    }

    group.finish();
}

fn bench_words(c: &mut Criterion) {
    let mut group = c.benchmark_group("words");

    for &(name, base) in SAMPLES {
        let text = generate_text(base, 64);
        let chars: Vec<char> = text.chars().collect();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("str", name), &text, |b, text| {
            b.iter(|| {
                word_iter(black_box(text.as_str()), 0, WordFilter::default())
                    .map(|words| words.count())
            })
        });

        group.bench_with_input(BenchmarkId::new("chars", name), &chars, |b, chars| {
            b.iter(|| {
                word_iter(black_box(chars.as_slice()), 0, WordFilter::default())
                    .map(|words| words.map(|word| word.len()).sum::<usize>())
            })
        });
    }

    group.finish();
}

fn bench_sentences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentences");

    for &(name, base) in SAMPLES {
        let text = generate_text(base, 64);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| sentence_iter(black_box(text.as_str()), 0).map(|sentences| sentences.count()))
        });
    }

    group.finish();
}

fn bench_casefold(c: &mut Criterion) {
    let mut group = c.benchmark_group("casefold");

    for &(name, base) in SAMPLES {
        let text = generate_text(base, 64);
        let folded = casefold(&text).into_owned();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("fold", name), &text, |b, text| {
            b.iter(|| casefold(black_box(text)).len())
        });
        group.bench_with_input(BenchmarkId::new("already_folded", name), &folded, |b, text| {
            b.iter(|| casefold(black_box(text)).len())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_graphemes, bench_words, bench_sentences, bench_casefold);
criterion_main!(benches);
