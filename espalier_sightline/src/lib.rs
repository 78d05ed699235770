// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Sightline: axis-aligned segment and rectangle geometry.
//!
//! The rectilinear router works on segments that are exactly horizontal or
//! vertical, so its geometry never needs general line intersection: every
//! question collapses to comparing one coordinate per axis, done tolerantly
//! through [`espalier_compass::approx`]. This crate collects those
//! questions.
//!
//! - On-segment tests: [`point_on_segment`] and [`point_on_segment_interior`].
//! - Collinear interval relations: [`intervals_collinear`],
//!   [`intervals_overlap`], [`intervals_same`].
//! - Perpendicular crossings: [`segments_cross`], [`crossing_point`], and
//!   the projection [`project_to_line`].
//! - Path construction: [`bend_point`] and [`sort_ascending`].
//! - Rectangle queries: [`rect_bound`], [`rect_border_intersect`],
//!   [`rect_interiors_intersect`], [`point_in_rect_interior`].
//!
//! Segments are [`kurbo::Line`] values whose endpoints differ on one axis;
//! rectangles are [`kurbo::Rect`] values read through their min/max sides.
//!
//! ## Example
//!
//! ```rust
//! use espalier_compass::Direction;
//! use espalier_sightline::{bend_point, rect_border_intersect, segments_cross};
//! use kurbo::{Line, Point, Rect};
//!
//! let wall = Line::new((4.0, 0.0), (4.0, 10.0));
//! let probe = Line::new((0.0, 6.0), (9.0, 6.0));
//! assert_eq!(segments_cross(wall, probe), Some(Point::new(4.0, 6.0)));
//!
//! // Kink an L-shaped connection so it arrives heading north.
//! let corner = bend_point(Point::new(0.0, 0.0), Point::new(4.0, 3.0), Direction::NORTH);
//! assert_eq!(corner, Point::new(4.0, 0.0));
//!
//! // Leaving a bounding box eastward from an interior point.
//! let along = rect_border_intersect(
//!     Rect::new(0.0, 0.0, 8.0, 8.0),
//!     Point::new(2.0, 5.0),
//!     Direction::EAST,
//! )?;
//! assert_eq!(along, Point::new(8.0, 5.0));
//! # Ok::<(), espalier_sightline::InvalidDirection>(())
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod rect;
mod segment;

pub use rect::{
    InvalidDirection, point_in_rect_interior, rect_border_intersect, rect_bound,
    rect_interiors_intersect,
};
pub use segment::{
    bend_point, crossing_point, intervals_collinear, intervals_overlap, intervals_same,
    point_on_segment, point_on_segment_interior, project_to_line, segment_direction,
    segment_is_vertical, segments_cross, sort_ascending,
};
