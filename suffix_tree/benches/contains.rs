//! Query cost against alphabet size and query length.
//!
//! Run with: `cargo bench -p suffix_tree`
//!
//! Both trees index the same number of symbols. `contains` should depend on
//! the query length only, so the two alphabets are expected to land close
//! to each other while longer queries take proportionally longer.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use suffix_tree::SuffixTree;

const INDEXED_LEN: usize = 1 << 18;
const QUERY_COUNT: usize = 256;

fn random_content(rng: &mut StdRng, alphabet: u8) -> Vec<u8> {
    (0..INDEXED_LEN).map(|_| rng.gen_range(0, alphabet)).collect()
}

// Substrings of the content, so every query walks its full length
fn queries(rng: &mut StdRng, content: &[u8], len: usize) -> Vec<Vec<u8>> {
    (0..QUERY_COUNT)
        .map(|_| {
            let start = rng.gen_range(0, content.len() - len);
            content[start..start + len].to_vec()
        })
        .collect()
}

fn bench_alphabets(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("contains");

    for &alphabet in &[4u8, 200u8] {
        let content = random_content(&mut rng, alphabet);
        let tree = SuffixTree::build(content.iter().copied());

        for &len in &[8usize, 64, 512] {
            let queries = queries(&mut rng, &content, len);
            let id = BenchmarkId::new(format!("alphabet_{}", alphabet), len);

            group.bench_with_input(id, &queries, |b, queries| {
                b.iter(|| {
                    for query in queries {
                        black_box(tree.contains(black_box(query)));
                    }
                })
            });
        }
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xd1a);
    let content = random_content(&mut rng, 4);

    let mut group = c.benchmark_group("build");
    group.sample_size(10);
    group.bench_function("acgt_256k", |b| {
        b.iter(|| SuffixTree::build(black_box(&content).iter().copied()))
    });
    group.finish();
}

criterion_group!(benches, bench_alphabets, bench_build);
criterion_main!(benches);
