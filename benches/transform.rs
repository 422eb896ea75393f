//! Benchmarks for the transformation and patch pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use folio::{apply_patch, builtin_templates, parse, to_elements, to_paginated_styles, to_reflow_css};

/// Build a synthetic chapter of `paragraphs` blocks with mixed markup.
fn sample_chapter(paragraphs: usize) -> String {
    let mut html = String::from("<h1>Chapter One</h1>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p>Paragraph {i} began <em>quietly</em>, with <strong>no warning</strong> \
             and a price of $1{i}.00 (estimated).</p>"
        ));
        if i % 10 == 0 {
            html.push_str("<ul><li>wind</li><li>rain</li><li>thunder</li></ul>");
        }
        if i % 25 == 0 {
            html.push_str("<blockquote><p>Hold fast.</p></blockquote>");
        }
    }
    html
}

fn bench_parse(c: &mut Criterion) {
    let html = sample_chapter(200);
    c.bench_function("parse_chapter", |b| {
        b.iter(|| parse(&html));
    });
}

fn bench_to_elements(c: &mut Criterion) {
    let html = sample_chapter(200);
    let styles = to_paginated_styles(&builtin_templates()[0]).unwrap();
    c.bench_function("to_elements", |b| {
        b.iter(|| to_elements(&html, &styles));
    });
}

fn bench_to_reflow_css(c: &mut Criterion) {
    let templates = builtin_templates();
    c.bench_function("to_reflow_css", |b| {
        b.iter(|| to_reflow_css(&templates[0]).unwrap());
    });
}

fn bench_apply_patch_exact(c: &mut Criterion) {
    let html = sample_chapter(200);
    c.bench_function("apply_patch_exact", |b| {
        b.iter(|| apply_patch(&html, "Paragraph 199", "Final paragraph"));
    });
}

fn bench_apply_patch_tag_insensitive(c: &mut Criterion) {
    let html = sample_chapter(200);
    c.bench_function("apply_patch_tag_insensitive", |b| {
        b.iter(|| {
            apply_patch(
                &html,
                "began quietly, with no warning",
                "began loudly, with warning",
            )
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_to_elements,
    bench_to_reflow_css,
    bench_apply_patch_exact,
    bench_apply_patch_tag_insensitive
);
criterion_main!(benches);
