// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerant queries against axis-aligned rectangles.
//!
//! Rectangles follow the crate's compass convention: the north side is the
//! one with the greater `y`. Sides are taken with [`Rect::min_x`] and
//! friends, so rectangles with swapped corners still answer consistently.

use core::fmt;

use kurbo::{Point, Rect};

use espalier_compass::{Direction, approx};

/// Error for rectangle queries handed a direction mask that is not a single
/// compass direction.
///
/// Unlike the segment predicates, which only ever see directions the routing
/// kernel derived itself, these queries take directions that can originate
/// from caller input, so a bad mask is reported rather than asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidDirection {
    /// The rejected mask.
    pub dir: Direction,
}

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a single compass direction, got {:?}", self.dir)
    }
}

impl core::error::Error for InvalidDirection {}

/// The coordinate of the rectangle's side facing `dir`.
///
/// North maps to the maximum `y` side, south to the minimum, and likewise
/// east and west on `x`.
pub fn rect_bound(rect: Rect, dir: Direction) -> Result<f64, InvalidDirection> {
    match dir {
        Direction::NORTH => Ok(rect.max_y()),
        Direction::SOUTH => Ok(rect.min_y()),
        Direction::EAST => Ok(rect.max_x()),
        Direction::WEST => Ok(rect.min_x()),
        _ => Err(InvalidDirection { dir }),
    }
}

/// Where a ray cast from `point` toward `dir` meets the rectangle's border.
///
/// For a vertical direction the result keeps the point's `x` and takes the
/// facing side's `y`; horizontal directions do the reverse. The point is not
/// required to be inside the rectangle.
pub fn rect_border_intersect(
    rect: Rect,
    point: Point,
    dir: Direction,
) -> Result<Point, InvalidDirection> {
    let bound = rect_bound(rect, dir)?;
    Ok(if dir.is_vertical() {
        Point::new(point.x, bound)
    } else {
        Point::new(bound, point.y)
    })
}

/// Returns `true` if the rectangles' interiors share any area.
///
/// Borders that merely touch, within tolerance, do not count.
#[must_use]
pub fn rect_interiors_intersect(a: Rect, b: Rect) -> bool {
    approx::cmp(a.min_y(), b.max_y()).is_lt()
        && approx::cmp(b.min_y(), a.max_y()).is_lt()
        && approx::cmp(a.min_x(), b.max_x()).is_lt()
        && approx::cmp(b.min_x(), a.max_x()).is_lt()
}

/// Returns `true` if `point` lies strictly inside `rect`.
///
/// Points on the border, within tolerance, are not interior.
#[must_use]
pub fn point_in_rect_interior(point: Point, rect: Rect) -> bool {
    approx::cmp(point.y, rect.max_y()).is_lt()
        && approx::cmp(rect.min_y(), point.y).is_lt()
        && approx::cmp(point.x, rect.max_x()).is_lt()
        && approx::cmp(rect.min_x(), point.x).is_lt()
}
