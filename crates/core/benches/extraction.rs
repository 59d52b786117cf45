use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marrow_core::{Document, Extractor, extract};

/// Builds a synthetic news page with `paragraphs` prose paragraphs
/// surrounded by the usual chrome.
fn news_page(paragraphs: usize) -> String {
    let nav: String = (0..20).map(|i| format!(r#"<a href="/section/{i}">Section {i}</a>"#)).collect();
    let body: String = (0..paragraphs)
        .map(|i| {
            format!(
                "<p>Paragraph {i} of the article, with commas, clauses, and enough text to look like \
                 real reporting, repeated to give the scorer something to work with.</p>"
            )
        })
        .collect();

    format!(
        r#"<html><body>
            <nav>{nav}</nav>
            <article>{body}<img src="/photo.jpg"></article>
            <aside class="sidebar">{nav}</aside>
            <footer>Footer</footer>
        </body></html>"#
    )
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (label, paragraphs) in [("small", 5), ("medium", 50), ("large", 500)] {
        let html = news_page(paragraphs);
        group.bench_with_input(BenchmarkId::new("document", label), &html, |b, html| {
            b.iter(|| Document::parse(black_box(html)))
        });
    }

    group.finish();
}

fn bench_full_extraction(c: &mut Criterion) {
    let html = news_page(50);

    c.bench_function("full_extraction", |b| {
        b.iter(|| extract(black_box(&html), "https://example.com/article"))
    });
}

fn bench_candidate_selection(c: &mut Criterion) {
    let html = news_page(50);
    let doc = Document::parse(&html).unwrap();
    let extractor = Extractor::new();
    let base = url::Url::parse("https://example.com/article").unwrap();

    c.bench_function("scoring_and_selection", |b| {
        b.iter(|| extractor.extract_from_document(black_box(&doc), Some(&base)))
    });
}

criterion_group!(benches, bench_parse, bench_full_extraction, bench_candidate_selection);
criterion_main!(benches);
