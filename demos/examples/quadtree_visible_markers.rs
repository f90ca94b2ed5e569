// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window example: cull map markers to a scrolling Kurbo viewport.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_visible_markers`

use kurbo::{Point as KPoint, Rect};
use understory_quadtree::{BoundingBox, Point, QuadTree};

const CELL: f64 = 25.0;
const WIDTH: f64 = 1000.0;

fn main() {
    let canvas = Rect::new(0.0, 0.0, WIDTH, WIDTH);
    let mut tree = QuadTree::new(BoundingBox::try_from(canvas).expect("canvas has area"));

    // One marker at the center of every cell.
    let per_row = (WIDTH / CELL) as usize;
    for row in 0..per_row {
        for col in 0..per_row {
            let at = KPoint::new((col as f64 + 0.5) * CELL, (row as f64 + 0.5) * CELL);
            let Point { x, y, .. } = Point::from(at);
            tree.insert(Point::with_payload(x, y, row * per_row + col))
                .expect("markers lie on the canvas");
        }
    }
    println!("indexed {} markers: {:?}", tree.len(), tree.stats());

    // Simulate a few scroll positions by moving the viewport rectangle
    for scroll in [0.0, 30.0, 200.0, 600.0] {
        let viewport = Rect::new(scroll, scroll, scroll + 100.0, scroll + 60.0);
        let query = BoundingBox::try_from(viewport).expect("viewport has area");
        let mut visible: Vec<_> = tree.query(query).map(|p| p.payload).collect();
        visible.sort_unstable();
        println!("scroll={scroll:.1} -> visible markers: {visible:?}");
    }
}
