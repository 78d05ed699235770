// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicates and constructions on axis-aligned segments.
//!
//! A segment is a [`Line`] whose endpoints differ on exactly one axis under
//! the tolerance of [`espalier_compass::approx`]. The functions here assume
//! that; feeding them diagonal or zero-length segments is a caller defect
//! and is flagged in debug builds.

use kurbo::{Line, Point};

use espalier_compass::{Direction, approx, directions, pure_direction};

/// The compass direction of a segment, from `p0` to `p1`.
#[must_use]
pub fn segment_direction(seg: Line) -> Direction {
    pure_direction(seg.p0, seg.p1)
}

/// Returns `true` if the segment runs north-south.
#[must_use]
pub fn segment_is_vertical(seg: Line) -> bool {
    segment_direction(seg).is_vertical()
}

/// Orders two endpoints so the pair runs toward increasing coordinates.
///
/// The points must be axis-aligned or coincident; coincident pairs come back
/// in the order given.
#[must_use]
pub fn sort_ascending(a: Point, b: Point) -> (Point, Point) {
    let dir = directions(a, b);
    debug_assert!(
        dir.is_none() || dir.is_pure(),
        "cannot sort endpoints that are not axis-aligned"
    );
    if dir.is_none() || dir.is_ascending() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Returns `true` if `test` lies on the closed segment.
///
/// `test` is assumed collinear with the segment: the check is that it
/// tolerantly equals an endpoint or that both endpoints lie in opposite pure
/// directions from it.
#[must_use]
pub fn point_on_segment(seg: Line, test: Point) -> bool {
    approx::eq_points(seg.p0, test)
        || approx::eq_points(seg.p1, test)
        || pure_direction(seg.p0, test) == pure_direction(test, seg.p1)
}

/// Returns `true` if `test` lies strictly between the segment's endpoints.
///
/// Unlike [`point_on_segment`] this does not assume collinearity; a point off
/// the segment's line is simply not interior. The segment itself must have
/// nonzero length.
#[must_use]
pub fn point_on_segment_interior(seg: Line, test: Point) -> bool {
    let before = directions(seg.p0, test);
    let after = directions(test, seg.p1);
    debug_assert!(
        !before.is_none() || !after.is_none(),
        "interior test on a zero-length segment"
    );
    before == after
}

/// Returns `true` if two same-orientation segments lie on the same line.
///
/// Both segments must already have the same orientation; only the shared
/// perpendicular coordinate is compared.
#[must_use]
pub fn intervals_collinear(first: Line, second: Line) -> bool {
    let vertical = segment_is_vertical(first);
    debug_assert!(
        vertical == segment_is_vertical(second),
        "intervals differ in orientation"
    );
    if segment_is_vertical(second) != vertical {
        return false;
    }
    if vertical {
        approx::eq(first.p0.x, second.p0.x)
    } else {
        approx::eq(first.p0.y, second.p0.y)
    }
}

/// Returns `true` if two collinear segments share at least one point.
///
/// Endpoints that merely touch count as overlap. Either segment may run in
/// either direction; both are normalized before the interval test.
#[must_use]
pub fn intervals_overlap(first: Line, second: Line) -> bool {
    if !intervals_collinear(first, second) {
        return false;
    }
    let (s1, e1) = sort_ascending(first.p0, first.p1);
    let (s2, e2) = sort_ascending(second.p0, second.p1);
    approx::cmp_points(s1, e2) != approx::cmp_points(e1, s2)
}

/// Returns `true` if the segments have tolerantly equal endpoints, in the
/// same order.
#[must_use]
pub fn intervals_same(first: Line, second: Line) -> bool {
    approx::eq_points(first.p0, second.p0) && approx::eq_points(first.p1, second.p1)
}

/// Projects `from` perpendicularly onto the line through `seg`.
///
/// The result keeps the segment's fixed coordinate and takes the other from
/// `from`. It may lie outside the segment itself.
#[must_use]
pub fn project_to_line(seg: Line, from: Point) -> Point {
    if segment_is_vertical(seg) {
        Point::new(seg.p0.x, from.y)
    } else {
        Point::new(from.x, seg.p0.y)
    }
}

/// Where two perpendicular segments cross, if they do.
///
/// The crossing point of the segments' lines always exists; `None` means it
/// falls outside one of the segments. Endpoints count, so two segments that
/// merely touch still cross.
#[must_use]
pub fn segments_cross(first: Line, second: Line) -> Option<Point> {
    debug_assert!(
        segment_is_vertical(first) != segment_is_vertical(second),
        "cannot intersect two parallel segments"
    );
    let intersect = project_to_line(first, second.p0);
    (point_on_segment(first, intersect) && point_on_segment(second, intersect))
        .then_some(intersect)
}

/// The crossing point of two perpendicular segments the caller knows cross.
///
/// In debug builds a miss is flagged; in release the line crossing is
/// returned regardless.
#[must_use]
pub fn crossing_point(first: Line, second: Line) -> Point {
    match segments_cross(first, second) {
        Some(intersect) => intersect,
        None => {
            debug_assert!(false, "crossing point is not on both segments");
            project_to_line(first, second.p0)
        }
    }
}

/// The corner of the two-leg path from `source` to `target` that arrives
/// along `final_dir`.
///
/// The points must be diagonal from each other, and removing `final_dir`
/// from their quadrant must leave exactly one direction for the first leg.
/// If that leg is vertical the bend keeps the source's `x`, otherwise the
/// source's `y`.
#[must_use]
pub fn bend_point(source: Point, target: Point, final_dir: Direction) -> Point {
    let quadrant = directions(source, target);
    debug_assert!(!quadrant.is_pure(), "axis-aligned points have no bend");
    let first_dir = quadrant & !final_dir;
    debug_assert!(
        first_dir.is_pure(),
        "bend leg is not a single compass direction"
    );
    if first_dir.is_vertical() {
        Point::new(source.x, target.y)
    } else {
        Point::new(target.x, source.y)
    }
}
