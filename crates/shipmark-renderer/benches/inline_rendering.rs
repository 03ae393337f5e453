//! Benchmarks for inline rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use shipmark_renderer::{InlineRenderer, SlackBackend, spans};

/// Generate an FAQ-style answer with every markup kind.
fn generate_text(paragraphs: usize) -> String {
    let mut text = String::with_capacity(paragraphs * 160);
    for i in 0..paragraphs {
        text.push_str(&format!(
            "Answer {i} has **bold**, *italic*, _underline_ and ~strike~ text.\n\
             See [the docs](https://example.com/docs/{i}) or [this](javascript:alert({i})).\n"
        ));
    }
    text
}

fn bench_render_simple(c: &mut Criterion) {
    let renderer = InlineRenderer::new();

    c.bench_function("render_simple_text", |b| {
        b.iter(|| renderer.render("Ship your **project** and earn hours!"));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = InlineRenderer::new();
    let mut group = c.benchmark_group("render_by_size");

    for paragraphs in [1, 10, 100] {
        let text = generate_text(paragraphs);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("html", paragraphs),
            &text,
            |b, text| b.iter(|| renderer.render(text)),
        );
    }

    group.finish();
}

fn bench_render_slack(c: &mut Criterion) {
    let renderer = InlineRenderer::<SlackBackend>::with_backend();
    let text = generate_text(10);

    c.bench_function("render_slack_10_paragraphs", |b| {
        b.iter(|| renderer.render(&text));
    });
}

fn bench_unclosed_delimiters(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_unclosed");

    for len in [1_000, 10_000, 100_000] {
        let text = format!("{}{}", "[".repeat(len), "*_~".repeat(len / 3));
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("spans", len), &text, |b, text| {
            b.iter(|| spans(text).count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_render_slack,
    bench_unclosed_delimiters
);
criterion_main!(benches);
