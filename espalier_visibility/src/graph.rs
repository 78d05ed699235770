// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visibility graph container.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Line, Point};

use espalier_compass::directions;

use crate::key::PointKey;
use crate::types::{EdgeId, VertexId, VisibilityEdge, VisibilityVertex, Weight};

/// A graph of axis-aligned visibility between points.
///
/// Vertices and edges live in append-only arenas addressed by [`VertexId`]
/// and [`EdgeId`]; a point map gives exact lookup from location to vertex.
/// Identity is exact while geometry is tolerant, so builders are expected to
/// keep distinct vertices at least the comparison tolerance apart. Adding a
/// vertex at an existing location, or an edge between already joined
/// vertices, returns the existing item instead of duplicating it.
#[derive(Clone, Debug, Default)]
pub struct VisibilityGraph {
    vertices: Vec<VisibilityVertex>,
    edges: Vec<VisibilityEdge>,
    by_point: HashMap<PointKey, VertexId>,
}

impl VisibilityGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The vertex addressed by `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> &VisibilityVertex {
        &self.vertices[id.idx()]
    }

    /// The edge addressed by `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &VisibilityEdge {
        &self.edges[id.idx()]
    }

    /// The edge's geometry, from its source point to its target point.
    #[must_use]
    pub fn edge_line(&self, id: EdgeId) -> Line {
        let edge = self.edge(id);
        Line::new(
            self.vertex(edge.source()).point(),
            self.vertex(edge.target()).point(),
        )
    }

    /// The vertex at exactly `point`, if any.
    #[must_use]
    pub fn find_vertex(&self, point: Point) -> Option<VertexId> {
        self.by_point.get(&PointKey::new(point)).copied()
    }

    /// Adds a vertex at `point`, or returns the one already there.
    pub fn add_vertex(&mut self, point: Point) -> VertexId {
        let key = PointKey::new(point);
        if let Some(&id) = self.by_point.get(&key) {
            return id;
        }
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(VisibilityVertex::new(point));
        self.by_point.insert(key, id);
        id
    }

    /// Adds an edge from `source` to `target`, or returns the edge already
    /// joining them.
    ///
    /// The endpoints must be distinct vertices of this graph, axis-aligned
    /// to each other. When the edge already exists, in either orientation,
    /// it is returned unchanged and `weight` is ignored.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: Weight) -> EdgeId {
        if let Some(existing) = self.edge_between(source, target) {
            return existing;
        }
        let source_point = self.vertex(source).point();
        let target_point = self.vertex(target).point();
        debug_assert!(
            directions(source_point, target_point).is_pure(),
            "edge from {source_point:?} to {target_point:?} is not axis-aligned"
        );
        let id = EdgeId::new(self.edges.len());
        self.edges.push(VisibilityEdge::new(source, target, weight));
        self.vertices[source.idx()].insert_out_edge(PointKey::new(target_point), id);
        self.vertices[target.idx()].push_in_edge(id);
        id
    }

    /// Adds vertices for both endpoints as needed, then the edge between
    /// them.
    pub fn add_edge_between(&mut self, source: Point, target: Point, weight: Weight) -> EdgeId {
        let source = self.add_vertex(source);
        let target = self.add_vertex(target);
        self.add_edge(source, target, weight)
    }

    /// The edge joining `a` and `b`, stored in either orientation.
    #[must_use]
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId> {
        let b_key = PointKey::new(self.vertex(b).point());
        if let Some(edge) = self.vertex(a).out_edge_to(b_key) {
            return Some(edge);
        }
        let a_key = PointKey::new(self.vertex(a).point());
        self.vertex(b).out_edge_to(a_key)
    }

    /// The edge joining the vertices at exactly `a` and `b`, if both points
    /// have vertices and they are joined.
    #[must_use]
    pub fn find_edge(&self, a: Point, b: Point) -> Option<EdgeId> {
        let a = self.find_vertex(a)?;
        let b = self.find_vertex(b)?;
        self.edge_between(a, b)
    }

    /// All vertex ids, in creation order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// All edge ids, in creation order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edges.len()).map(EdgeId::new)
    }
}
