// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional movement over the graph.
//!
//! Path search and nudging walk the graph by compass direction: from this
//! vertex, what lies to the north; of this edge, which endpoint faces west.
//! The helpers here answer those questions relative to the query direction,
//! not to the orientation an edge happens to be stored in, so callers can
//! sweep forward and backward without tracking storage order.

use kurbo::Point;

use espalier_compass::{Direction, pure_direction};
use espalier_sightline::project_to_line;

use crate::graph::VisibilityGraph;
use crate::types::{EdgeId, VertexId};

impl VisibilityGraph {
    /// The compass direction of `edge`, from its source to its target.
    #[must_use]
    pub fn edge_direction(&self, edge: EdgeId) -> Direction {
        let e = self.edge(edge);
        pure_direction(
            self.vertex(e.source()).point(),
            self.vertex(e.target()).point(),
        )
    }

    /// The endpoint of `edge` on its `dir` side.
    ///
    /// `dir` must have a component along the edge's axis; asking a vertical
    /// edge for its east endpoint is a caller defect.
    #[must_use]
    pub fn endpoint_toward(&self, edge: EdgeId, dir: Direction) -> VertexId {
        let edge_dir = self.edge_direction(edge);
        debug_assert!(
            dir.intersects(edge_dir | edge_dir.opposite()),
            "direction {dir:?} is orthogonal to the edge"
        );
        let e = self.edge(edge);
        if dir == edge_dir { e.target() } else { e.source() }
    }

    /// The adjacent vertex in direction `dir` from `vertex`, if any.
    ///
    /// Movement is judged from `vertex` outward. Incoming edges are checked
    /// first in insertion order, then outgoing edges in target order; the
    /// builder keeps at most one neighbor per side, so the first hit is the
    /// only one.
    #[must_use]
    pub fn neighbor_toward(&self, vertex: VertexId, dir: Direction) -> Option<VertexId> {
        let v = self.vertex(vertex);
        for &edge in v.in_edges() {
            let source = self.edge(edge).source();
            if pure_direction(v.point(), self.vertex(source).point()) == dir {
                return Some(source);
            }
        }
        for edge in v.out_edges() {
            let target = self.edge(edge).target();
            if pure_direction(v.point(), self.vertex(target).point()) == dir {
                return Some(target);
            }
        }
        None
    }

    /// The incident edge leading from `vertex` toward `dir`, if any.
    #[must_use]
    pub fn edge_toward(&self, vertex: VertexId, dir: Direction) -> Option<EdgeId> {
        let neighbor = self.neighbor_toward(vertex, dir)?;
        self.edge_between(vertex, neighbor)
    }

    /// Returns `true` if the edge's stored orientation heads north or east.
    #[must_use]
    pub fn edge_is_ascending(&self, edge: EdgeId) -> bool {
        self.edge_direction(edge).is_ascending()
    }

    /// Returns `true` if the edge runs north-south.
    #[must_use]
    pub fn edge_is_vertical(&self, edge: EdgeId) -> bool {
        self.edge_direction(edge).is_vertical()
    }

    /// The endpoint with the smaller coordinate along the edge's axis.
    #[must_use]
    pub fn low_vertex(&self, edge: EdgeId) -> VertexId {
        let e = self.edge(edge);
        if self.edge_is_ascending(edge) {
            e.source()
        } else {
            e.target()
        }
    }

    /// The endpoint with the larger coordinate along the edge's axis.
    #[must_use]
    pub fn high_vertex(&self, edge: EdgeId) -> VertexId {
        let e = self.edge(edge);
        if self.edge_is_ascending(edge) {
            e.target()
        } else {
            e.source()
        }
    }

    /// Projects `from` perpendicularly onto the line through `edge`.
    #[must_use]
    pub fn project_to_edge(&self, edge: EdgeId, from: Point) -> Point {
        project_to_line(self.edge_line(edge), from)
    }
}
