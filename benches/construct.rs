use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use suffix_phrase::build_index;

/// Synthetic text generator, sized and shaped like the teacher's own
/// `RANDOM_DATA_STATS` corpus (small alphabet, long runs) rather than a
/// downloaded corpus.
fn random_text(n: usize, scale: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..scale)).collect()
}

fn construct_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &n in &[1_000usize, 10_000, 100_000] {
        let text = random_text(n, 4);
        group.bench_with_input(BenchmarkId::new("small_alphabet", n), &text, |b, text| {
            b.iter(|| build_index(black_box(text.clone())));
        });

        let text = random_text(n, 1 << 16);
        group.bench_with_input(BenchmarkId::new("wide_alphabet", n), &text, |b, text| {
            b.iter(|| build_index(black_box(text.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, construct_benchmark);
criterion_main!(benches);
