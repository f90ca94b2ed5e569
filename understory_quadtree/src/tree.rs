// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `QuadTree` API: construction, insertion, and range queries.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::num::NonZeroUsize;

use crate::error::OutOfBounds;
use crate::node::{Limits, QuadNode, Search};
use crate::types::{BoundingBox, Point};

/// Tuning knobs for a [`QuadTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeOptions {
    /// Maximum number of points a leaf holds before it subdivides.
    pub capacity: NonZeroUsize,
    /// Depth at which leaves stop subdividing and are allowed to exceed `capacity`.
    ///
    /// The root is at depth 0. This bounds recursion when many points share
    /// (or nearly share) the same coordinates. Values above
    /// [`MAX_DEPTH_LIMIT`](Self::MAX_DEPTH_LIMIT) are treated as that limit.
    pub max_depth: u32,
}

impl QuadTreeOptions {
    /// Default leaf capacity.
    pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(4).unwrap();

    /// Default maximum depth.
    pub const DEFAULT_MAX_DEPTH: u32 = 32;

    /// Largest usable maximum depth.
    ///
    /// Halving an `f64` extent this many times is past the 53-bit mantissa for any
    /// extent whose edges share a magnitude, so deeper levels cannot separate points.
    pub const MAX_DEPTH_LIMIT: u32 = 64;

    /// Set the leaf capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the maximum depth, capped at [`MAX_DEPTH_LIMIT`](Self::MAX_DEPTH_LIMIT).
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = clamp_depth(max_depth);
        self
    }

    const fn limits(&self) -> Limits {
        Limits {
            capacity: self.capacity.get(),
            max_depth: clamp_depth(self.max_depth),
        }
    }
}

const fn clamp_depth(max_depth: u32) -> u32 {
    if max_depth > QuadTreeOptions::MAX_DEPTH_LIMIT {
        QuadTreeOptions::MAX_DEPTH_LIMIT
    } else {
        max_depth
    }
}

impl Default for QuadTreeOptions {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Shape summary of a tree, see [`QuadTree::stats`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Stored points.
    pub points: usize,
    /// All nodes, leaves included.
    pub nodes: usize,
    /// Leaf nodes.
    pub leaves: usize,
    /// Depth of the deepest leaf (the root is at depth 0).
    pub depth: u32,
    /// Leaves holding more than `capacity` points because they hit the depth guard or
    /// became too narrow to split.
    pub overfull_leaves: usize,
}

/// A point quadtree over a fixed extent.
///
/// Built once by inserting points, then queried any number of times. There is no
/// removal and the extent never changes.
pub struct QuadTree<P> {
    root: QuadNode<P>,
    options: QuadTreeOptions,
    len: usize,
}

impl<P> QuadTree<P> {
    /// Create an empty tree covering `extent` with default options.
    pub fn new(extent: BoundingBox) -> Self {
        Self::with_options(extent, QuadTreeOptions::default())
    }

    /// Create an empty tree covering `extent`.
    pub fn with_options(extent: BoundingBox, options: QuadTreeOptions) -> Self {
        Self {
            root: QuadNode::leaf(extent, 0),
            options,
            len: 0,
        }
    }

    /// The fixed extent covered by the tree.
    pub const fn extent(&self) -> BoundingBox {
        self.root.bbox
    }

    /// The options the tree was built with.
    pub const fn options(&self) -> QuadTreeOptions {
        self.options
    }

    /// Number of stored points.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no points have been stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point.
    ///
    /// Points outside the extent are rejected with [`OutOfBounds`], which carries the
    /// point back to the caller; the tree is left unchanged.
    pub fn insert(&mut self, point: Point<P>) -> Result<(), OutOfBounds<P>> {
        if !self.root.bbox.contains(&point) {
            tracing::debug!(x = point.x, y = point.y, "rejecting point outside extent");
            return Err(OutOfBounds::new(point, self.root.bbox));
        }
        self.root.insert(point, &self.options.limits());
        self.len += 1;
        Ok(())
    }

    /// Insert every point, returning the ones that fell outside the extent.
    pub fn insert_many<I>(&mut self, points: I) -> Vec<OutOfBounds<P>>
    where
        I: IntoIterator<Item = Point<P>>,
    {
        points
            .into_iter()
            .filter_map(|p| self.insert(p).err())
            .collect()
    }

    /// All stored points contained in `query`.
    ///
    /// Points come out in depth-first NW, NE, SW, SE order. Sort the result if a
    /// particular order matters.
    pub fn search(&self, query: &BoundingBox) -> Vec<&Point<P>> {
        let mut out = Vec::new();
        self.search_into(query, &mut out);
        out
    }

    /// Like [`search`](Self::search), appending into an existing buffer.
    pub fn search_into<'a>(&'a self, query: &BoundingBox, out: &mut Vec<&'a Point<P>>) {
        self.root.search(query, out);
    }

    /// Lazy form of [`search`](Self::search).
    pub fn query(&self, query: BoundingBox) -> Search<'_, P> {
        Search::new(&self.root, query)
    }

    /// Iterate over every stored point.
    pub fn iter(&self) -> Search<'_, P> {
        self.query(self.root.bbox)
    }

    /// Walk the tree and summarize its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.root.collect_stats(&mut stats, self.options.capacity.get());
        stats
    }
}

impl<'a, P> IntoIterator for &'a QuadTree<P> {
    type Item = &'a Point<P>;
    type IntoIter = Search<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("extent", &self.root.bbox)
            .field("options", &self.options)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
