use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lightread_core::segmenter::segment;

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    let paragraph = "The quick brown fox jumps over the lazy dog near the river bank. ";

    let with_headings = {
        let mut s = String::new();
        for i in 1..=40 {
            s.push_str(&format!("Chapter {i}\n"));
            s.push_str(&paragraph.repeat(60));
            s.push('\n');
        }
        s
    };

    let without_headings = paragraph.repeat(2500);

    group.bench_function("heading_based_40_chapters", |b| {
        b.iter(|| segment(black_box(&with_headings)))
    });

    group.bench_function("fallback_chunking_160kb", |b| {
        b.iter(|| segment(black_box(&without_headings)))
    });

    group.finish();
}

criterion_group!(benches, bench_segment);
criterion_main!(benches);
