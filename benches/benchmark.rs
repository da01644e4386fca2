// Selection benchmarks over synthetic tagged corpora
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tagsim_core::{Post, RelatedConfig, RelatedSelector, TagIndex};

const TAG_VOCABULARY: usize = 100;

fn generate_corpus(size: usize) -> Vec<Post> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .map(|i| {
            let tag_count = rng.random_range(1..=10);
            let tags: Vec<String> = (0..tag_count)
                .map(|_| format!("tag{}", rng.random_range(0..TAG_VOCABULARY)))
                .collect();
            Post::tagged(format!("post{}", i), tags).with_title(format!("Post number {}", i))
        })
        .collect()
}

fn benchmark_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");

    for size in [1_000, 5_000, 20_000].iter() {
        let posts = generate_corpus(*size);
        group.bench_with_input(BenchmarkId::new("build", size), &posts, |b, posts| {
            b.iter(|| black_box(TagIndex::build(posts)));
        });
    }

    group.finish();
}

fn benchmark_related(c: &mut Criterion) {
    let mut group = c.benchmark_group("related");
    group.sample_size(10);

    for size in [1_000, 5_000, 20_000].iter() {
        let posts = generate_corpus(*size);

        for parallel in [false, true] {
            let name = if parallel { "parallel" } else { "sequential" };
            let config = RelatedConfig {
                parallel,
                ..Default::default()
            };
            let selector = RelatedSelector::new(&posts, config).unwrap();

            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| black_box(selector.run()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_index, benchmark_related);
criterion_main!(benches);
