use criterion::{criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128Plus;
use rmq_utils::validation::random_queries;
use rmq_utils::{
    NaiveRangeMinimumQuery, RangeMinimumQuery, SegmentTreeRangeMinimumQuery,
    SparseTableRangeMinimumQuery,
};
use std::hint::black_box;

fn dataset(seed: u64, len: usize, minval: i32, maxval: i32) -> Vec<i32> {
    let mut rng: Xoroshiro128Plus = SeedableRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(minval..=maxval)).collect()
}

const ARRAY_LEN: usize = 1_000_000;
const QUERY_NUM: usize = 1_000;
const SEED: u64 = 12910489034;

fn build(c: &mut Criterion) {
    let input = dataset(SEED, ARRAY_LEN, 10, 99);
    let mut group = c.benchmark_group("build");
    group.sample_size(10);
    group.bench_function("sparse_table", |b| {
        b.iter(|| black_box(SparseTableRangeMinimumQuery::new(&input).levels()))
    });
    group.bench_function("segment_tree", |b| {
        b.iter(|| black_box(SegmentTreeRangeMinimumQuery::new(&input).nodes().len()))
    });
    group.finish();
}

fn run<R: RangeMinimumQuery>(rmq: &R, queries: &[(usize, usize)]) -> usize {
    queries
        .iter()
        .filter_map(|&(left, right)| rmq.query(left, right).ok())
        .sum()
}

fn query(c: &mut Criterion) {
    let input = dataset(SEED, ARRAY_LEN, 10, 99);
    let queries = random_queries(ARRAY_LEN, QUERY_NUM, SEED);
    let naive = NaiveRangeMinimumQuery::new(&input);
    let sparse = SparseTableRangeMinimumQuery::new(&input);
    let segment = SegmentTreeRangeMinimumQuery::new(&input);
    let mut group = c.benchmark_group("query");
    group.sample_size(10);
    group.bench_function("naive", |b| b.iter(|| black_box(run(&naive, &queries))));
    group.bench_function("sparse_table", |b| {
        b.iter(|| black_box(run(&sparse, &queries)))
    });
    group.bench_function("segment_tree", |b| {
        b.iter(|| black_box(run(&segment, &queries)))
    });
    group.finish();
}

criterion_group!(benches, build, query);
criterion_main!(benches);
