use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lightread_core::synthesizer::{synthesize_with, QuizOptions};

fn bench_synthesize(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize");

    let chapter = {
        let mut s = String::new();
        for i in 0..200 {
            s.push_str(&format!(
                "Seven weary travellers approached the ancient gates before nightfall number {i}. "
            ));
        }
        s
    };

    let options = QuizOptions::default();

    group.bench_function("chapter_200_sentences", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(7);
            synthesize_with(black_box(&chapter), &options, &mut rng)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
