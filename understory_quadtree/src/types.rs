// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: points, bounding boxes, and quadrants.

use crate::error::InvalidGeometry;

/// A 2D point with an attached payload.
///
/// `x` grows to the east and `y` grows to the north, so longitude/latitude pairs map
/// onto `(x, y)` directly. The payload is opaque to the tree.
///
/// The payload defaults to `()`, which is the bare coordinate used for box centers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<P = ()> {
    /// Horizontal coordinate (e.g. longitude).
    pub x: f64,
    /// Vertical coordinate (e.g. latitude).
    pub y: f64,
    /// Caller-defined data carried alongside the coordinates.
    pub payload: P,
}

impl Point {
    /// Create a bare coordinate with no payload.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, payload: () }
    }
}

impl<P> Point<P> {
    /// Create a point carrying `payload`.
    pub const fn with_payload(x: f64, y: f64, payload: P) -> Self {
        Self { x, y, payload }
    }

    /// The coordinates of this point without its payload.
    pub const fn coords(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// One quarter of a bounding box.
///
/// The declaration order is the fixed enumeration order used for boundary
/// tie-breaks and for traversal: NW, NE, SW, SE.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Low `x`, high `y`.
    NorthWest,
    /// High `x`, high `y`.
    NorthEast,
    /// Low `x`, low `y`.
    SouthWest,
    /// High `x`, low `y`.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in enumeration order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::NorthWest => 0,
            Self::NorthEast => 1,
            Self::SouthWest => 2,
            Self::SouthEast => 3,
        }
    }

    const fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    const fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }
}

/// Axis-aligned rectangle described by a center and a positive width and height.
///
/// The rectangle covers `[cx - w/2, cx + w/2] × [cy - h/2, cy + h/2]` and is closed on
/// every edge: points on the boundary are contained, and boxes that only touch intersect.
///
/// Edges are computed once at construction. Quadrants are derived from the parent's
/// edges and center, so sibling quadrants share exactly the same split lines.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    center: Point,
    width: f64,
    height: f64,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    /// Create a box centered on `center`.
    ///
    /// Fails with [`InvalidGeometry`] unless `width` and `height` are positive and finite
    /// and every edge of the resulting box is finite.
    pub fn new(center: Point, width: f64, height: f64) -> Result<Self, InvalidGeometry> {
        if !(is_positive_finite(width) && is_positive_finite(height)) {
            return Err(InvalidGeometry::Size { width, height });
        }
        let (hw, hh) = (width * 0.5, height * 0.5);
        let (min_x, min_y, max_x, max_y) = (
            center.x - hw,
            center.y - hh,
            center.x + hw,
            center.y + hh,
        );
        if ![min_x, min_y, max_x, max_y].into_iter().all(f64::is_finite) {
            return Err(InvalidGeometry::Edges {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }
        Ok(Self {
            center,
            width,
            height,
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Create a box from its minimum and maximum corners.
    ///
    /// Fails with [`InvalidGeometry`] unless `max - min` is positive and finite on both
    /// axes, which also rules out infinite and NaN corners.
    pub fn from_corners(
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<Self, InvalidGeometry> {
        let (width, height) = (max_x - min_x, max_y - min_y);
        if !(is_positive_finite(width) && is_positive_finite(height)) {
            return Err(InvalidGeometry::Size { width, height });
        }
        Ok(Self::from_edges(min_x, min_y, max_x, max_y))
    }

    // Callers guarantee min <= max on both axes.
    fn from_edges(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            center: Point::new(mid(min_x, max_x), mid(min_y, max_y)),
            width: max_x - min_x,
            height: max_y - min_y,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Center of the box.
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Full width of the box.
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Full height of the box.
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Western edge.
    pub const fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Southern edge.
    pub const fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Eastern edge.
    pub const fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Northern edge.
    pub const fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Whether the point lies inside the box, boundary inclusive.
    pub fn contains<P>(&self, point: &Point<P>) -> bool {
        self.contains_xy(point.x, point.y)
    }

    /// Whether `(x, y)` lies inside the box, boundary inclusive. NaN is never contained.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    /// Whether the two boxes overlap. Boxes sharing only an edge or a corner intersect.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Whether splitting this box would produce four strictly smaller quadrants.
    ///
    /// False once the box is so narrow that its center rounds onto an edge.
    pub(crate) fn can_split(&self) -> bool {
        self.min_x < self.center.x
            && self.center.x < self.max_x
            && self.min_y < self.center.y
            && self.center.y < self.max_y
    }

    /// The sub-box covering one quadrant: half the width and height, centered on the
    /// midpoint of that quadrant.
    pub fn quadrant(&self, which: Quadrant) -> Self {
        let Point { x: cx, y: cy, .. } = self.center;
        let (min_x, max_x) = if which.is_west() {
            (self.min_x, cx)
        } else {
            (cx, self.max_x)
        };
        let (min_y, max_y) = if which.is_north() {
            (cy, self.max_y)
        } else {
            (self.min_y, cy)
        };
        Self::from_edges(min_x, min_y, max_x, max_y)
    }

    /// The first quadrant, in [`Quadrant::ALL`] order, whose box contains `(x, y)`.
    ///
    /// Points on the vertical split line go west and points on the horizontal split
    /// line go north. Assumes the point is contained in `self`.
    pub fn quadrant_of(&self, x: f64, y: f64) -> Quadrant {
        match (x <= self.center.x, y >= self.center.y) {
            (true, true) => Quadrant::NorthWest,
            (false, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::SouthWest,
            (false, false) => Quadrant::SouthEast,
        }
    }
}

fn is_positive_finite(v: f64) -> bool {
    v > 0.0 && v.is_finite()
}

// Falls back to halving first when `a + b` overflows.
fn mid(a: f64, b: f64) -> f64 {
    let m = 0.5 * (a + b);
    if m.is_finite() { m } else { 0.5 * a + 0.5 * b }
}
