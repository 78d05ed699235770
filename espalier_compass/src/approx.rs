// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerant coordinate comparison.
//!
//! Coordinates produced by layout accumulate floating-point error, so the
//! routing kernel never compares them exactly. Everything that orders or
//! equates positions goes through the functions here, which treat values
//! within a fixed epsilon of each other as the same coordinate.

use core::cmp::Ordering;

use kurbo::Point;

/// Coordinates closer than this are considered the same location.
pub const DISTANCE_EPSILON: f64 = 1.0e-6;

/// Tolerance applied on each side of a comparison.
///
/// Half of [`DISTANCE_EPSILON`]: two coordinates are ordered only when they
/// differ by more than the rounding slack either of them may carry.
const COMPARE_EPSILON: f64 = DISTANCE_EPSILON / 2.0;

/// Three-way comparison of scalar coordinates with tolerance.
///
/// Values within [`DISTANCE_EPSILON`]`/2` of each other compare as
/// [`Ordering::Equal`]. Note that this relation is not transitive: a chain of
/// nearly-equal values can drift apart. Callers that need a total order must
/// key on exact values.
#[must_use]
pub fn cmp(lhs: f64, rhs: f64) -> Ordering {
    if lhs + COMPARE_EPSILON < rhs {
        Ordering::Less
    } else if rhs + COMPARE_EPSILON < lhs {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if two scalar coordinates are tolerantly equal.
#[must_use]
pub fn eq(lhs: f64, rhs: f64) -> bool {
    cmp(lhs, rhs) == Ordering::Equal
}

/// Lexicographic comparison of points, `x` before `y`, each axis tolerant.
#[must_use]
pub fn cmp_points(lhs: Point, rhs: Point) -> Ordering {
    cmp(lhs.x, rhs.x).then_with(|| cmp(lhs.y, rhs.y))
}

/// Returns `true` if two points are tolerantly equal on both axes.
#[must_use]
pub fn eq_points(lhs: Point, rhs: Point) -> bool {
    eq(lhs.x, rhs.x) && eq(lhs.y, rhs.y)
}
