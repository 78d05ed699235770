// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Visibility: the graph a rectilinear router searches.
//!
//! A visibility graph places vertices at geometric points and joins them
//! with axis-aligned edges wherever movement between them is unobstructed.
//! Sweep passes build it, path search walks it, and nudging reshapes paths
//! over it. This crate holds the graph itself and the directional queries
//! those phases share:
//!
//! - [`VisibilityGraph`]: append-only vertex and edge arenas with exact
//!   point lookup and duplicate-free insertion.
//! - Directional traversal: [`VisibilityGraph::neighbor_toward`],
//!   [`VisibilityGraph::edge_toward`], [`VisibilityGraph::endpoint_toward`],
//!   and the low/high and axis queries on edges, all independent of the
//!   orientation an edge was stored in.
//! - [`Weight`]: the cost tiers that keep search off reflection and overlap
//!   edges when free space is available.
//! - [`trace`]: an injectable sink for dumping routing state as drawable
//!   curves.
//!
//! Edge endpoints must be axis-aligned: the graph is rectilinear by
//! construction, and diagonal edges are rejected in debug builds.
//!
//! ## Example
//!
//! ```rust
//! use espalier_compass::Direction;
//! use espalier_visibility::{VisibilityGraph, Weight};
//! use kurbo::Point;
//!
//! let mut graph = VisibilityGraph::new();
//! let a = graph.add_vertex(Point::new(0.0, 0.0));
//! let b = graph.add_vertex(Point::new(4.0, 0.0));
//! let c = graph.add_vertex(Point::new(4.0, 3.0));
//! graph.add_edge(a, b, Weight::Normal);
//! // Storage orientation is irrelevant to traversal.
//! graph.add_edge(c, b, Weight::Normal);
//!
//! // Walk east from the origin, then north.
//! assert_eq!(graph.neighbor_toward(a, Direction::EAST), Some(b));
//! assert_eq!(graph.neighbor_toward(b, Direction::NORTH), Some(c));
//!
//! let up = graph.edge_toward(b, Direction::NORTH).unwrap();
//! assert_eq!(graph.high_vertex(up), c);
//! assert!(graph.edge_is_vertical(up));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod graph;
mod key;
pub mod trace;
mod traversal;
mod types;

pub use graph::VisibilityGraph;
pub use types::{EdgeId, VertexId, VisibilityEdge, VisibilityVertex, Weight};
