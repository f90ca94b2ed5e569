// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::num::NonZeroUsize;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{BoundingBox, Point, QuadTree, QuadTreeOptions};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn globe() -> BoundingBox {
    BoundingBox::new(Point::new(0.0, 0.0), 360.0, 180.0).unwrap()
}

fn gen_uniform_points(count: usize) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| {
            let x = rng.next_f64() * 360.0 - 180.0;
            let y = rng.next_f64() * 180.0 - 90.0;
            Point::with_payload(x, y, i as u32)
        })
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 300.0 - 150.0, rng.next_f64() * 150.0 - 75.0));
    }
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::with_payload(cx + dx, cy + dy, out.len() as u32));
        }
    }
    out
}

fn build(points: &[Point<u32>], options: QuadTreeOptions) -> QuadTree<u32> {
    let mut tree = QuadTree::with_options(globe(), options);
    for p in points.iter().copied() {
        let _ = tree.insert(p);
    }
    tree
}

fn linear_scan(points: &[Point<u32>], query: &BoundingBox) -> usize {
    points.iter().filter(|p| query.contains(*p)).count()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| black_box(build(&points, QuadTreeOptions::default())),
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 4096, 0.5);
    group.bench_function("clustered", |b| {
        b.iter_batched(
            || points.clone(),
            |points| black_box(build(&points, QuadTreeOptions::default())),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_capacity(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_capacity");
    let points = gen_uniform_points(50_000);
    let query = BoundingBox::new(Point::new(10.0, 10.0), 40.0, 40.0).unwrap();
    for &cap in &[1usize, 4, 16, 64] {
        let options =
            QuadTreeOptions::default().with_capacity(NonZeroUsize::new(cap).unwrap());
        let tree = build(&points, options);
        group.bench_function(format!("search_cap{}", cap), |b| {
            b.iter(|| black_box(tree.search(black_box(&query)).len()))
        });
    }
    group.finish();
}

fn bench_search_vs_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_vs_scan");
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n);
        let tree = build(&points, QuadTreeOptions::default());
        let query = BoundingBox::new(Point::new(0.0, 0.0), 40.0, 40.0).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_search_n{}", n), |b| {
            b.iter(|| black_box(tree.search(black_box(&query)).len()))
        });
        group.bench_function(format!("quadtree_query_lazy_n{}", n), |b| {
            b.iter(|| black_box(tree.query(black_box(query)).count()))
        });
        group.bench_function(format!("linear_scan_n{}", n), |b| {
            b.iter(|| black_box(linear_scan(&points, black_box(&query))))
        });
    }
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query_heavy");
    let points = gen_uniform_points(100_000);
    let tree = build(&points, QuadTreeOptions::default());
    group.bench_function("many_small_queries", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 16) as f64 * 22.5 - 168.75;
                let y = (q / 16) as f64 * 11.25 - 84.375;
                let query = BoundingBox::new(Point::new(x, y), 5.0, 5.0).unwrap();
                total += tree.query(query).count();
            }
            black_box(total)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_capacity,
    bench_search_vs_scan,
    bench_query_heavy
);
criterion_main!(benches);
