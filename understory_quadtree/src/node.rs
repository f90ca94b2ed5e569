// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: bounded leaf buckets that split into four owned quadrants.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::tree::TreeStats;
use crate::types::{BoundingBox, Point, Quadrant};

/// Capacity and depth limits shared by every node of a tree.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Limits {
    pub(crate) capacity: usize,
    pub(crate) max_depth: u32,
}

pub(crate) struct QuadNode<P> {
    pub(crate) bbox: BoundingBox,
    depth: u32,
    pub(crate) kind: NodeKind<P>,
}

pub(crate) enum NodeKind<P> {
    Leaf(Vec<Point<P>>),
    /// Children in [`Quadrant::ALL`] order.
    Internal(Box<[QuadNode<P>; 4]>),
}

impl<P> QuadNode<P> {
    pub(crate) const fn leaf(bbox: BoundingBox, depth: u32) -> Self {
        Self {
            bbox,
            depth,
            kind: NodeKind::Leaf(Vec::new()),
        }
    }

    /// Insert a point already known to lie inside this node's box.
    pub(crate) fn insert(&mut self, point: Point<P>, limits: &Limits) {
        if let NodeKind::Leaf(bucket) = &mut self.kind {
            if bucket.len() < limits.capacity {
                bucket.push(point);
                return;
            }
            if self.depth >= limits.max_depth || !self.bbox.can_split() {
                if bucket.len() == limits.capacity {
                    tracing::debug!(
                        depth = self.depth,
                        capacity = limits.capacity,
                        "leaf that cannot split exceeds capacity"
                    );
                }
                bucket.push(point);
                return;
            }
            self.subdivide(limits);
        }
        if let NodeKind::Internal(children) = &mut self.kind {
            let quadrant = self.bbox.quadrant_of(point.x, point.y);
            children[quadrant.index()].insert(point, limits);
        }
    }

    fn subdivide(&mut self, limits: &Limits) {
        let depth = self.depth + 1;
        let children = Quadrant::ALL.map(|q| Self::leaf(self.bbox.quadrant(q), depth));
        let previous = core::mem::replace(&mut self.kind, NodeKind::Internal(Box::new(children)));
        if let NodeKind::Leaf(points) = previous {
            tracing::trace!(depth = self.depth, points = points.len(), "subdividing leaf");
            for point in points {
                self.insert(point, limits);
            }
        }
    }

    /// Append every point in this subtree contained in `query`, in NW, NE, SW, SE order.
    pub(crate) fn search<'a>(&'a self, query: &BoundingBox, out: &mut Vec<&'a Point<P>>) {
        if !self.bbox.intersects(query) {
            return;
        }
        match &self.kind {
            NodeKind::Leaf(bucket) => out.extend(bucket.iter().filter(|p| query.contains(*p))),
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.search(query, out);
                }
            }
        }
    }

    pub(crate) fn collect_stats(&self, stats: &mut TreeStats, capacity: usize) {
        stats.nodes += 1;
        match &self.kind {
            NodeKind::Leaf(bucket) => {
                stats.leaves += 1;
                stats.points += bucket.len();
                stats.depth = stats.depth.max(self.depth);
                if bucket.len() > capacity {
                    stats.overfull_leaves += 1;
                }
            }
            NodeKind::Internal(children) => {
                for child in children.iter() {
                    child.collect_stats(stats, capacity);
                }
            }
        }
    }
}

/// Lazy range query over a tree, returned by [`QuadTree::query`](crate::QuadTree::query).
///
/// Yields the same points in the same order as [`QuadTree::search`](crate::QuadTree::search),
/// using an explicit stack instead of recursion.
pub struct Search<'a, P> {
    query: BoundingBox,
    stack: Vec<&'a QuadNode<P>>,
    bucket: core::slice::Iter<'a, Point<P>>,
}

impl<'a, P> Search<'a, P> {
    pub(crate) fn new(root: &'a QuadNode<P>, query: BoundingBox) -> Self {
        Self {
            query,
            stack: vec![root],
            bucket: core::slice::Iter::default(),
        }
    }
}

impl<'a, P> Iterator for Search<'a, P> {
    type Item = &'a Point<P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for point in self.bucket.by_ref() {
                if self.query.contains(point) {
                    return Some(point);
                }
            }
            let node = self.stack.pop()?;
            if !node.bbox.intersects(&self.query) {
                continue;
            }
            match &node.kind {
                NodeKind::Leaf(bucket) => self.bucket = bucket.iter(),
                // Reversed so NW is popped first.
                NodeKind::Internal(children) => self.stack.extend(children.iter().rev()),
            }
        }
    }
}

impl<P> Debug for Search<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Search")
            .field("query", &self.query)
            .field("pending_nodes", &self.stack.len())
            .field("pending_points", &self.bucket.len())
            .finish()
    }
}
