// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable capture of routing state as drawable curves.
//!
//! The routing kernel has no drawing or I/O dependencies. Callers that want
//! to see what it built pass an implementation of [`TraceSink`] to the
//! emitters here and render or dump the collected [`TraceCurve`]s with
//! whatever they have. Each emitter checks the sink's layer mask up front,
//! so a sink subscribed to nothing costs one mask test per call.
//!
//! Colors and widths follow a fixed palette per [`CurveClass`], chosen so
//! the layers read well when drawn over each other: faint gray obstacles,
//! blue graph edges, purple paths, green scan segments.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::graph::VisibilityGraph;
use crate::types::Weight;

bitflags::bitflags! {
    /// Which layers of routing state a sink wants to receive.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TraceLayers: u8 {
        /// Obstacle outlines supplied by the caller.
        const OBSTACLES     = 0b0000_0001;
        /// Visibility graph edges.
        const GRAPH         = 0b0000_0010;
        /// Paths as found by search, before nudging.
        const PATHS_BEFORE  = 0b0000_0100;
        /// Paths after nudging.
        const PATHS_AFTER   = 0b0000_1000;
        /// Scan segments produced by the sweep passes.
        const SCAN_SEGMENTS = 0b0001_0000;
    }
}

/// What a traced curve depicts.
///
/// The class fixes the curve's layer and its rendering hints, so sinks can
/// filter and style without carrying extra state per curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveClass {
    /// An obstacle outline segment.
    Obstacle,
    /// A normal-weight graph edge.
    GraphEdge,
    /// A reflection-weight graph edge.
    GraphReflectionEdge,
    /// An overlapped-weight graph edge.
    GraphOverlappedEdge,
    /// One leg of a path before nudging.
    PathBefore,
    /// One leg of a path after nudging.
    PathAfter,
    /// A normal scan segment.
    ScanSegment,
    /// A reflection scan segment.
    ScanReflectionSegment,
    /// An overlapped scan segment.
    ScanOverlappedSegment,
}

impl CurveClass {
    /// The layer this class belongs to.
    #[must_use]
    pub const fn layer(self) -> TraceLayers {
        match self {
            Self::Obstacle => TraceLayers::OBSTACLES,
            Self::GraphEdge | Self::GraphReflectionEdge | Self::GraphOverlappedEdge => {
                TraceLayers::GRAPH
            }
            Self::PathBefore => TraceLayers::PATHS_BEFORE,
            Self::PathAfter => TraceLayers::PATHS_AFTER,
            Self::ScanSegment | Self::ScanReflectionSegment | Self::ScanOverlappedSegment => {
                TraceLayers::SCAN_SEGMENTS
            }
        }
    }

    /// A CSS color name to render the class with.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Obstacle => "darkgray",
            Self::GraphEdge => "blue",
            Self::GraphReflectionEdge => "darkcyan",
            Self::GraphOverlappedEdge => "lightblue",
            Self::PathBefore | Self::PathAfter => "purple",
            Self::ScanSegment => "darkgreen",
            Self::ScanReflectionSegment => "lightgreen",
            Self::ScanOverlappedSegment => "aqua",
        }
    }

    /// The stroke width to render the class with.
    #[must_use]
    pub const fn width(self) -> f64 {
        match self {
            Self::ScanSegment | Self::ScanReflectionSegment | Self::ScanOverlappedSegment => 0.2,
            _ => 0.1,
        }
    }
}

/// One drawable piece of routing state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceCurve {
    /// What the segment depicts.
    pub class: CurveClass,
    /// The segment itself.
    pub line: Line,
}

/// A sink for trace curves.
///
/// Implementations decide what to keep and how to present it; the kernel
/// only pushes. [`CurveRecorder`] collects into a vector, and `()` is the
/// inert sink for callers that trace nothing.
pub trait TraceSink {
    /// The layers this sink wants to receive.
    fn layers(&self) -> TraceLayers;

    /// Receives one curve.
    ///
    /// Emitters only call this for classes within [`layers`](Self::layers),
    /// but nothing stops other code from pushing unfiltered.
    fn curve(&mut self, curve: TraceCurve);
}

impl TraceSink for () {
    fn layers(&self) -> TraceLayers {
        TraceLayers::empty()
    }

    fn curve(&mut self, _curve: TraceCurve) {}
}

/// Collects every received curve, in emission order.
#[derive(Clone, Debug)]
pub struct CurveRecorder {
    layers: TraceLayers,
    curves: Vec<TraceCurve>,
}

impl CurveRecorder {
    /// Creates a recorder subscribed to `layers`.
    #[must_use]
    pub fn new(layers: TraceLayers) -> Self {
        Self {
            layers,
            curves: Vec::new(),
        }
    }

    /// The curves received so far.
    #[must_use]
    pub fn curves(&self) -> &[TraceCurve] {
        &self.curves
    }

    /// Drops all recorded curves, keeping the subscription.
    pub fn clear(&mut self) {
        self.curves.clear();
    }
}

impl Default for CurveRecorder {
    /// A recorder subscribed to every layer.
    fn default() -> Self {
        Self::new(TraceLayers::all())
    }
}

impl TraceSink for CurveRecorder {
    fn layers(&self) -> TraceLayers {
        self.layers
    }

    fn curve(&mut self, curve: TraceCurve) {
        self.curves.push(curve);
    }
}

/// Emits every edge of the graph, classed by weight.
pub fn emit_graph<T: TraceSink>(sink: &mut T, graph: &VisibilityGraph) {
    if !sink.layers().contains(TraceLayers::GRAPH) {
        return;
    }
    for id in graph.edge_ids() {
        let class = match graph.edge(id).weight() {
            Weight::Normal => CurveClass::GraphEdge,
            Weight::Reflection => CurveClass::GraphReflectionEdge,
            Weight::Overlapped => CurveClass::GraphOverlappedEdge,
        };
        sink.curve(TraceCurve {
            class,
            line: graph.edge_line(id),
        });
    }
}

/// Emits the four outline segments of each obstacle box.
pub fn emit_obstacles<T: TraceSink>(sink: &mut T, obstacles: impl IntoIterator<Item = Rect>) {
    if !sink.layers().contains(TraceLayers::OBSTACLES) {
        return;
    }
    for rect in obstacles {
        let corners = [
            Point::new(rect.min_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.min_y()),
            Point::new(rect.max_x(), rect.max_y()),
            Point::new(rect.min_x(), rect.max_y()),
        ];
        for (&start, &end) in corners.iter().zip(corners.iter().cycle().skip(1)) {
            sink.curve(TraceCurve {
                class: CurveClass::Obstacle,
                line: Line::new(start, end),
            });
        }
    }
}

/// Emits one pre-nudging path as legs between consecutive corner points.
pub fn emit_path_before<T: TraceSink>(sink: &mut T, corners: &[Point]) {
    if !sink.layers().contains(TraceLayers::PATHS_BEFORE) {
        return;
    }
    for pair in corners.windows(2) {
        sink.curve(TraceCurve {
            class: CurveClass::PathBefore,
            line: Line::new(pair[0], pair[1]),
        });
    }
}

/// Emits one nudged path from its finished segments.
pub fn emit_path_after<T: TraceSink>(sink: &mut T, segments: impl IntoIterator<Item = Line>) {
    if !sink.layers().contains(TraceLayers::PATHS_AFTER) {
        return;
    }
    for line in segments {
        sink.curve(TraceCurve {
            class: CurveClass::PathAfter,
            line,
        });
    }
}

/// Emits scan segments, classed by weight.
pub fn emit_scan_segments<T: TraceSink>(
    sink: &mut T,
    segments: impl IntoIterator<Item = (Line, Weight)>,
) {
    if !sink.layers().contains(TraceLayers::SCAN_SEGMENTS) {
        return;
    }
    for (line, weight) in segments {
        let class = match weight {
            Weight::Normal => CurveClass::ScanSegment,
            Weight::Reflection => CurveClass::ScanReflectionSegment,
            Weight::Overlapped => CurveClass::ScanOverlappedSegment,
        };
        sink.curve(TraceCurve { class, line });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_map_to_their_layers() {
        assert_eq!(CurveClass::Obstacle.layer(), TraceLayers::OBSTACLES);
        assert_eq!(CurveClass::GraphReflectionEdge.layer(), TraceLayers::GRAPH);
        assert_eq!(CurveClass::PathBefore.layer(), TraceLayers::PATHS_BEFORE);
        assert_eq!(CurveClass::PathAfter.layer(), TraceLayers::PATHS_AFTER);
        assert_eq!(
            CurveClass::ScanOverlappedSegment.layer(),
            TraceLayers::SCAN_SEGMENTS
        );
    }

    #[test]
    fn scan_segments_draw_wider() {
        assert_eq!(CurveClass::ScanSegment.width(), 0.2);
        assert_eq!(CurveClass::GraphEdge.width(), 0.1);
        assert_eq!(CurveClass::PathAfter.width(), 0.1);
    }

    #[test]
    fn graph_edges_are_classed_by_weight() {
        let mut graph = VisibilityGraph::new();
        let _ = graph.add_edge_between(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Weight::Normal,
        );
        let _ = graph.add_edge_between(
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Weight::Reflection,
        );
        let _ = graph.add_edge_between(
            Point::new(4.0, 4.0),
            Point::new(8.0, 4.0),
            Weight::Overlapped,
        );

        let mut rec = CurveRecorder::new(TraceLayers::GRAPH);
        emit_graph(&mut rec, &graph);
        let classes: alloc::vec::Vec<CurveClass> =
            rec.curves().iter().map(|curve| curve.class).collect();
        assert_eq!(
            classes,
            [
                CurveClass::GraphEdge,
                CurveClass::GraphReflectionEdge,
                CurveClass::GraphOverlappedEdge
            ]
        );
    }

    #[test]
    fn unsubscribed_layers_emit_nothing() {
        let mut graph = VisibilityGraph::new();
        let _ = graph.add_edge_between(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Weight::Normal,
        );

        let mut rec = CurveRecorder::new(TraceLayers::PATHS_AFTER);
        emit_graph(&mut rec, &graph);
        emit_obstacles(&mut rec, [Rect::new(0.0, 0.0, 2.0, 2.0)]);
        assert!(rec.curves().is_empty());

        emit_path_after(&mut rec, [Line::new((0.0, 0.0), (4.0, 0.0))]);
        assert_eq!(rec.curves().len(), 1);
        assert_eq!(rec.curves()[0].class, CurveClass::PathAfter);
    }

    #[test]
    fn path_corners_become_legs() {
        let mut rec = CurveRecorder::default();
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(5.0, 3.0),
        ];
        emit_path_before(&mut rec, &corners);
        assert_eq!(rec.curves().len(), 2);
        assert_eq!(rec.curves()[0].line.p1, Point::new(0.0, 3.0));
        assert_eq!(rec.curves()[1].line.p0, Point::new(0.0, 3.0));
    }

    #[test]
    fn obstacle_outline_closes() {
        let mut rec = CurveRecorder::new(TraceLayers::OBSTACLES);
        emit_obstacles(&mut rec, [Rect::new(1.0, 1.0, 4.0, 3.0)]);
        assert_eq!(rec.curves().len(), 4);
        // The last segment returns to the first corner.
        assert_eq!(rec.curves()[3].line.p1, rec.curves()[0].line.p0);
    }

    #[test]
    fn inert_sink_accepts_everything() {
        assert_eq!(TraceSink::layers(&()), TraceLayers::empty());
        emit_path_before(&mut (), &[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        TraceSink::curve(
            &mut (),
            TraceCurve {
                class: CurveClass::GraphEdge,
                line: Line::new((0.0, 0.0), (1.0, 0.0)),
            },
        );
    }

    #[test]
    fn recorder_clears_but_keeps_subscription() {
        let mut rec = CurveRecorder::new(TraceLayers::PATHS_AFTER);
        emit_path_after(&mut rec, [Line::new((0.0, 0.0), (2.0, 0.0))]);
        assert_eq!(rec.curves().len(), 1);
        rec.clear();
        assert!(rec.curves().is_empty());
        assert_eq!(rec.layers(), TraceLayers::PATHS_AFTER);
    }
}
