//! Benchmarks for pdfdigest summarization performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline over synthetic page text, so they
//! measure segmentation, scoring, selection and rendering without PDF I/O.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pdfdigest::render::{self, RenderOptions};
use pdfdigest::summarize::{sentences, Scorer};
use pdfdigest::{
    generate_summary, summarize_document, PageText, SelectionSettings, SourceDocument,
    SummaryFocus, SummaryLength, SummaryStyle,
};

const SENTENCES: [&str; 6] = [
    "The main result of trial {n} was a {n}% improvement in recovery time across all wards",
    "Staff measured outcomes weekly using the standard protocol agreed with the review board",
    "Costs for site {n} fell by ${n},400 per patient, a significant change from the baseline year",
    "Several participants withdrew early for reasons unrelated to the treatment itself",
    "Our key finding is that adherence stayed above {n} percent in every cohort we followed",
    "Further work should examine whether these effects persist beyond the first twelve months",
];

/// Creates synthetic page texts with a mix of strong and weak sentences.
fn create_test_pages(page_count: usize) -> Vec<PageText> {
    (0..page_count)
        .map(|i| {
            let text = SENTENCES
                .iter()
                .enumerate()
                .map(|(j, s)| format!("{}.", s.replace("{n}", &(i * 6 + j + 1).to_string())))
                .collect::<Vec<_>>()
                .join(" ");
            PageText::new(i as u32 + 1, text)
        })
        .collect()
}

/// Benchmark sentence segmentation.
fn bench_segmentation(c: &mut Criterion) {
    let pages = create_test_pages(1);

    c.bench_function("segment_page", |b| {
        b.iter(|| sentences(black_box(&pages[0].text)).count());
    });
}

/// Benchmark sentence scoring.
fn bench_scoring(c: &mut Criterion) {
    let scorer = Scorer::new(SummaryFocus::Overview);
    let sentence = "The main result of trial 7 was a 41% improvement, with Dr Smith reporting p < 0.05";

    c.bench_function("score_sentence", |b| {
        b.iter(|| scorer.score(black_box(sentence), 3, 10));
    });
}

/// Benchmark full summary generation at various sizes.
fn bench_generate_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_summary");

    for page_count in [1, 10, 100].iter() {
        let pages = create_test_pages(*page_count);
        let settings = SelectionSettings::new().with_length(SummaryLength::Detailed);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| generate_summary(black_box(&pages), &settings));
        });
    }

    group.finish();
}

/// Benchmark the serializers over one summary.
fn bench_rendering(c: &mut Criterion) {
    let doc = SourceDocument::new("bench.pdf", create_test_pages(20));
    let settings = SelectionSettings::new().with_style(SummaryStyle::Outline);
    let summary = summarize_document(&doc, &settings);
    let options = RenderOptions::new().with_header(true);

    c.bench_function("render_markdown", |b| {
        b.iter(|| render::to_markdown(black_box(&summary), &options));
    });

    c.bench_function("render_text", |b| {
        b.iter(|| render::to_text(black_box(&summary), &options));
    });
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_scoring,
    bench_generate_summary,
    bench_rendering,
);
criterion_main!(benches);
