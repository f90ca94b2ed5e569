// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Quadtree: a point quadtree for rectangular range queries.
//!
//! Understory Quadtree indexes 2D points (for example longitude/latitude pairs) that carry
//! an arbitrary payload, and answers "which points lie in this box?" without scanning
//! every point.
//!
//! - Insert points into a tree covering a fixed [`BoundingBox`] extent.
//! - Query with any box; subtrees that cannot overlap the query are skipped.
//! - Leaves hold a bounded bucket (default 4) and split into four quadrants on overflow.
//! - A maximum depth (default 32, at most 64) stops splitting when many points share
//!   coordinates, as does a box too narrow for `f64` to split further.
//!
//! The tree is append-only: there is no removal, rebalancing, or resizing of the extent.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{BoundingBox, Point, QuadTree};
//!
//! // The whole globe, in degrees.
//! let globe = BoundingBox::new(Point::new(0.0, 0.0), 360.0, 180.0).unwrap();
//! let mut tree = QuadTree::new(globe);
//!
//! tree.insert(Point::with_payload(-0.13, 51.51, "London")).unwrap();
//! tree.insert(Point::with_payload(2.35, 48.86, "Paris")).unwrap();
//! tree.insert(Point::with_payload(139.69, 35.69, "Tokyo")).unwrap();
//!
//! // Points outside the extent are handed back.
//! let err = tree.insert(Point::with_payload(0.0, 95.0, "Nowhere")).unwrap_err();
//! assert_eq!(err.into_point().payload, "Nowhere");
//!
//! // Everything within 10 degrees of (0, 50).
//! let europe = BoundingBox::new(Point::new(0.0, 50.0), 20.0, 20.0).unwrap();
//! let mut hits: Vec<_> = tree.search(&europe).iter().map(|p| p.payload).collect();
//! hits.sort();
//! assert_eq!(hits, ["London", "Paris"]);
//! ```
//!
//! ## Boundaries
//!
//! Boxes are closed on every edge. A point on the edge of a query is returned, and a point
//! on the edge of the extent can be inserted. When a point lies exactly on a split line it
//! goes to the first quadrant containing it in the fixed order
//! [`NorthWest`](Quadrant::NorthWest), [`NorthEast`](Quadrant::NorthEast),
//! [`SouthWest`](Quadrant::SouthWest), [`SouthEast`](Quadrant::SouthEast), so results are
//! reproducible. `y` grows to the north.
//!
//! ## Result order
//!
//! [`QuadTree::search`] and the lazy [`QuadTree::query`] yield points in depth-first
//! quadrant order. No other order is promised; sort the results when it matters.
//!
//! ### Float semantics
//!
//! Coordinates are plain `f64`. NaN coordinates are never contained in any box, so such
//! points are rejected by [`QuadTree::insert`].
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to the error and logging dependencies.
//! - `kurbo`: conversions between [`Point`]/[`BoundingBox`] and `kurbo::Point`/`kurbo::Rect`.
//! - `libm`: use with `kurbo` on `no_std` targets.
//!
//! ## Logging
//!
//! Subdivisions, depth-guard overflows, and rejected inserts are reported through
//! [`tracing`] at `trace` and `debug` level.

#![no_std]

extern crate alloc;

pub mod error;
#[cfg(feature = "kurbo")]
mod interop;
mod node;
pub mod tree;
pub mod types;

pub use error::{InvalidGeometry, OutOfBounds};
pub use node::Search;
pub use tree::{QuadTree, QuadTreeOptions, TreeStats};
pub use types::{BoundingBox, Point, Quadrant};
