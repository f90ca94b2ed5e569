// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo geometry, enabled by the `kurbo` feature.
//!
//! Kurbo's `y` axis usually points down; these conversions copy coordinates
//! verbatim and leave the interpretation of "north" to the caller.

use crate::error::InvalidGeometry;
use crate::types::{BoundingBox, Point};

impl From<kurbo::Point> for Point {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<P> From<Point<P>> for kurbo::Point {
    fn from(p: Point<P>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl TryFrom<kurbo::Rect> for BoundingBox {
    type Error = InvalidGeometry;

    /// Fails for rectangles with zero, negative, or non-finite size.
    fn try_from(r: kurbo::Rect) -> Result<Self, Self::Error> {
        Self::from_corners(r.x0, r.y0, r.x1, r.y1)
    }
}

impl From<BoundingBox> for kurbo::Rect {
    fn from(b: BoundingBox) -> Self {
        Self::new(b.min_x(), b.min_y(), b.max_x(), b.max_y())
    }
}
