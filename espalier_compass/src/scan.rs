// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis pair of a sweep pass.

use core::cmp::Ordering;

use kurbo::{Line, Point, Vec2};

use crate::approx;
use crate::direction::Direction;

/// The orientation of a sweep: a scan axis and its perpendicular.
///
/// A sweep pass walks scan lines along one pure ascending direction, east for
/// the horizontal pass and north for the vertical one, and advances the lines
/// themselves along the perpendicular axis. Holding the pair in one value
/// lets sweep code stay orientation-agnostic: it asks for "the coordinate
/// along the scan axis" instead of choosing between `x` and `y` at each site.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanDirection {
    dir: Direction,
}

impl ScanDirection {
    /// The horizontal pass: scan axis east, perpendicular north.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self {
            dir: Direction::EAST,
        }
    }

    /// The vertical pass: scan axis north, perpendicular east.
    #[must_use]
    pub const fn vertical() -> Self {
        Self {
            dir: Direction::NORTH,
        }
    }

    /// Returns `true` if the scan axis is east.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        self.dir == Direction::EAST
    }

    /// Returns `true` if the scan axis is north.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        self.dir == Direction::NORTH
    }

    /// The scan axis as a pure ascending direction.
    #[must_use]
    pub fn direction(self) -> Direction {
        self.dir
    }

    /// The perpendicular axis as a pure ascending direction.
    #[must_use]
    pub fn perp_direction(self) -> Direction {
        if self.is_horizontal() {
            Direction::NORTH
        } else {
            Direction::EAST
        }
    }

    /// The pass with the two axes swapped.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        if self.is_horizontal() {
            Self::vertical()
        } else {
            Self::horizontal()
        }
    }

    /// The unit vector of the scan axis.
    #[must_use]
    pub fn direction_vec(self) -> Vec2 {
        self.dir.as_vec()
    }

    /// The unit vector of the perpendicular axis.
    #[must_use]
    pub fn perp_vec(self) -> Vec2 {
        self.perp_direction().as_vec()
    }

    /// The coordinate of `p` along the scan axis.
    #[must_use]
    pub fn scan_coord(self, p: Point) -> f64 {
        if self.is_horizontal() { p.x } else { p.y }
    }

    /// The coordinate of `p` along the perpendicular axis.
    #[must_use]
    pub fn sweep_coord(self, p: Point) -> f64 {
        if self.is_horizontal() { p.y } else { p.x }
    }

    /// Tolerant comparison of two points by scan-axis coordinate.
    #[must_use]
    pub fn cmp_scan(self, lhs: Point, rhs: Point) -> Ordering {
        approx::cmp(self.scan_coord(lhs), self.scan_coord(rhs))
    }

    /// Tolerant comparison of two points by perpendicular coordinate.
    #[must_use]
    pub fn cmp_sweep(self, lhs: Point, rhs: Point) -> Ordering {
        approx::cmp(self.sweep_coord(lhs), self.sweep_coord(rhs))
    }

    /// How far the perpendicular coordinate moves per unit of scan-axis
    /// travel from `start` to `end`.
    ///
    /// Zero for segments parallel to the scan axis. The segment must have
    /// extent along the scan axis; one parallel to the sweep lines has no
    /// slope in this frame, and passing it is flagged in debug builds.
    #[must_use]
    pub fn slope(self, start: Point, end: Point) -> f64 {
        let d = end - start;
        let run = d.dot(self.direction_vec());
        debug_assert!(
            !approx::eq(run, 0.0),
            "segment from {start:?} to {end:?} has no extent along the scan axis"
        );
        d.dot(self.perp_vec()) / run
    }

    /// [`slope`](Self::slope) of a segment given as a [`Line`].
    #[must_use]
    pub fn slope_of(self, seg: Line) -> f64 {
        self.slope(seg.p0, seg.p1)
    }
}
