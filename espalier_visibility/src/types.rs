// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the visibility graph: identifiers, weights, vertices,
//! and edges.

use alloc::collections::BTreeMap;

use kurbo::Point;
use smallvec::SmallVec;

use crate::key::PointKey;

/// Identifier for a vertex in a [`VisibilityGraph`](crate::VisibilityGraph).
///
/// A small, copyable handle. The graph is append-only, so an id stays valid
/// for the life of the graph that issued it. Ids carry no graph identity;
/// indexing a different graph with one is a caller defect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VertexId(pub(crate) u32);

impl VertexId {
    pub(crate) fn new(idx: usize) -> Self {
        debug_assert!(idx <= u32::MAX as usize, "vertex arena outgrew id space");
        #[expect(clippy::cast_possible_truncation, reason = "asserted above")]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Identifier for an edge in a [`VisibilityGraph`](crate::VisibilityGraph).
///
/// Same contract as [`VertexId`]: copyable, append-only, valid only against
/// the issuing graph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EdgeId(pub(crate) u32);

impl EdgeId {
    pub(crate) fn new(idx: usize) -> Self {
        debug_assert!(idx <= u32::MAX as usize, "edge arena outgrew id space");
        #[expect(clippy::cast_possible_truncation, reason = "asserted above")]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Cost tier of an edge.
///
/// Path search scores an edge by its length times the tier's multiplier, so
/// routes prefer ordinary free-space edges and take reflection or overlap
/// edges only when nothing cheaper reaches the target.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Weight {
    /// An ordinary visibility edge.
    #[default]
    Normal,
    /// An edge derived from a reflection of a scan segment off an obstacle
    /// corner.
    Reflection,
    /// An edge running through the interior of overlapping obstacles.
    Overlapped,
}

impl Weight {
    /// The multiplier applied to the edge's length when scoring a path.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Reflection => 5.0,
            Self::Overlapped => 500.0,
        }
    }
}

/// A vertex of the visibility graph: a location and its incident edges.
///
/// Incoming edges form a short unordered list; vertex degrees in rectilinear
/// graphs are tiny, usually four or less. Outgoing edges are keyed by target
/// point so directional scans visit them in coordinate order.
#[derive(Clone, Debug)]
pub struct VisibilityVertex {
    point: Point,
    in_edges: SmallVec<[EdgeId; 4]>,
    out_edges: BTreeMap<PointKey, EdgeId>,
}

impl VisibilityVertex {
    pub(crate) fn new(point: Point) -> Self {
        Self {
            point,
            in_edges: SmallVec::new(),
            out_edges: BTreeMap::new(),
        }
    }

    /// The vertex's location.
    #[must_use]
    pub fn point(&self) -> Point {
        self.point
    }

    /// Edges stored with this vertex as their target, in insertion order.
    #[must_use]
    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    /// Edges stored with this vertex as their source, ordered by target
    /// point, `x` before `y`, ascending.
    pub fn out_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.out_edges.values().copied()
    }

    /// Total number of incident edges.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.in_edges.len() + self.out_edges.len()
    }

    pub(crate) fn push_in_edge(&mut self, edge: EdgeId) {
        self.in_edges.push(edge);
    }

    pub(crate) fn insert_out_edge(&mut self, target: PointKey, edge: EdgeId) {
        self.out_edges.insert(target, edge);
    }

    pub(crate) fn out_edge_to(&self, target: PointKey) -> Option<EdgeId> {
        self.out_edges.get(&target).copied()
    }
}

/// An axis-aligned edge between two vertices.
///
/// The source and target record how the edge was added, nothing more;
/// traversal treats every edge as passable in both directions, and the
/// directional helpers on
/// [`VisibilityGraph`](crate::VisibilityGraph) resolve orientation per call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct VisibilityEdge {
    source: VertexId,
    target: VertexId,
    weight: Weight,
}

impl VisibilityEdge {
    pub(crate) const fn new(source: VertexId, target: VertexId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// The vertex the edge was added from.
    #[must_use]
    pub const fn source(self) -> VertexId {
        self.source
    }

    /// The vertex the edge was added to.
    #[must_use]
    pub const fn target(self) -> VertexId {
        self.target
    }

    /// The edge's cost tier.
    #[must_use]
    pub const fn weight(self) -> Weight {
        self.weight
    }
}
