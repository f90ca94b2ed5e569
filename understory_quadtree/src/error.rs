// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types returned by box construction and tree insertion.

use thiserror::Error;

use crate::types::{BoundingBox, Point};

/// A bounding box could not be built from the given geometry.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum InvalidGeometry {
    /// The width or height was non-positive or non-finite.
    #[error("bounding box needs a positive, finite size, got {width} x {height}")]
    Size {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },
    /// The size was valid but an edge came out infinite or NaN.
    #[error("bounding box edges must be finite, got [{min_x}, {max_x}] x [{min_y}, {max_y}]")]
    Edges {
        /// Western edge.
        min_x: f64,
        /// Southern edge.
        min_y: f64,
        /// Eastern edge.
        max_x: f64,
        /// Northern edge.
        max_y: f64,
    },
}

/// A point was inserted outside the tree's extent.
///
/// The tree is left unchanged and the rejected point is handed back.
#[derive(Clone, Debug, PartialEq, Error)]
#[error(
    "point ({}, {}) lies outside the tree extent [{}, {}] x [{}, {}]",
    .point.x,
    .point.y,
    .extent.min_x(),
    .extent.max_x(),
    .extent.min_y(),
    .extent.max_y()
)]
pub struct OutOfBounds<P> {
    point: Point<P>,
    extent: BoundingBox,
}

impl<P> OutOfBounds<P> {
    pub(crate) const fn new(point: Point<P>, extent: BoundingBox) -> Self {
        Self { point, extent }
    }

    /// The rejected point.
    pub const fn point(&self) -> &Point<P> {
        &self.point
    }

    /// The extent of the tree that rejected the point.
    pub const fn extent(&self) -> BoundingBox {
        self.extent
    }

    /// Take back ownership of the rejected point.
    pub fn into_point(self) -> Point<P> {
        self.point
    }
}
