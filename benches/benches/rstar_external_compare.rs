// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{BoundingBox, Point, QuadTree};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let px = x as f64 * cell - 180.0;
            let py = y as f64 * cell * 0.5 - 90.0;
            out.push(Point::with_payload(px, py, out.len() as u32));
        }
    }
    out
}

fn to_rstar_points(v: &[Point<u32>]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    let globe = BoundingBox::new(Point::new(0.0, 0.0), 360.0, 180.0).unwrap();
    let query = BoundingBox::new(Point::new(0.0, 0.0), 40.0, 40.0).unwrap();
    for &n in &[64usize, 256] {
        let points = gen_grid_points(n, 360.0 / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |points| {
                    let mut tree = QuadTree::new(globe);
                    for p in points {
                        let _ = tree.insert(p);
                    }
                    black_box(tree.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners(
                        [query.min_x(), query.min_y()],
                        [query.max_x(), query.max_y()],
                    );
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
