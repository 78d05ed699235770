// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Espalier Compass: direction algebra for rectilinear edge routing.
//!
//! Rectilinear routing reasons about axis-aligned movement: every segment
//! runs north, south, east, or west, and every decision reduces to comparing
//! coordinates and combining compass directions. This crate holds that
//! vocabulary.
//!
//! - [`Direction`]: a four-bit compass mask with pure and compound values.
//! - [`directions`] / [`pure_direction`]: the tolerant relation between two
//!   points as a mask.
//! - [`approx`]: the epsilon comparator every geometric predicate in the
//!   routing stack is built on.
//! - [`ScanDirection`]: the axis pair of a sweep pass, with coordinate
//!   accessors and the segment slope in that frame.
//!
//! North is toward increasing `y` and east toward increasing `x`; callers
//! working in a `y`-down coordinate system flip at the boundary.
//!
//! ## Example
//!
//! ```rust
//! use espalier_compass::{Direction, directions, pure_direction};
//! use kurbo::Point;
//!
//! let a = Point::new(0.0, 0.0);
//! let b = Point::new(4.0, 0.0);
//! assert_eq!(pure_direction(a, b), Direction::EAST);
//!
//! let c = Point::new(4.0, 3.0);
//! let quadrant = directions(a, c);
//! assert_eq!(quadrant, Direction::NORTH | Direction::EAST);
//! assert_eq!(quadrant.opposite(), Direction::SOUTH | Direction::WEST);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod approx;
mod direction;
mod scan;

pub use direction::{Direction, directions, pure_direction};
pub use scan::ScanDirection;
