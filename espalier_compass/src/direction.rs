// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass directions as a four-bit mask.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use kurbo::{Point, Vec2};

use crate::approx;

/// A set of compass directions.
///
/// A value with exactly one bit set is a *pure* direction, the relation
/// between the endpoints of an axis-aligned segment. A value with one bit
/// from each axis, such as `NORTH | EAST`, names the diagonal quadrant one
/// point lies in relative to another. [`Direction::NONE`] is the relation
/// between tolerantly coincident points.
///
/// North is toward increasing `y` and east toward increasing `x`. Masks
/// returned by [`directions`] never combine opposing bits; [`from_bits`]
/// accepts any nibble and leaves validation to the caller.
///
/// This is a plain newtype with explicit constants and operators rather than
/// a generated flag set. Routing code manipulates the bits directly, and the
/// [`opposite`] rotation below depends on their exact layout.
///
/// [`from_bits`]: Direction::from_bits
/// [`opposite`]: Direction::opposite
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    /// The empty set; the relation between coincident points.
    pub const NONE: Self = Self(0);
    /// Toward increasing `y`.
    pub const NORTH: Self = Self(1 << 0);
    /// Toward increasing `x`.
    pub const EAST: Self = Self(1 << 1);
    /// Toward decreasing `y`.
    pub const SOUTH: Self = Self(1 << 2);
    /// Toward decreasing `x`.
    pub const WEST: Self = Self(1 << 3);

    /// Constructs a mask from raw bits, dropping anything above the low nibble.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0xF)
    }

    /// The raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if `self` and `other` share at least one bit.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if exactly one compass bit is set.
    #[must_use]
    pub const fn is_pure(self) -> bool {
        self.0 != 0 && self.0 & (self.0 - 1) == 0
    }

    /// Swaps north with south and east with west, each axis independently.
    ///
    /// Compound masks flip on both axes, so northeast becomes southwest.
    /// The operation is an involution: `d.opposite().opposite() == d`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        // Opposing bits sit two positions apart in the nibble, so rotating
        // by two swaps both axis pairs at once.
        Self(((self.0 << 2) | (self.0 >> 2)) & 0xF)
    }

    /// Returns `true` if the mask has a north or south component.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        self.0 & (Self::NORTH.0 | Self::SOUTH.0) != 0
    }

    /// Returns `true` if the mask points toward increasing coordinates on
    /// some axis, that is, has a north or east component.
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        self.0 & (Self::NORTH.0 | Self::EAST.0) != 0
    }

    /// The unit step of each set bit, summed as a vector.
    ///
    /// Pure directions give a unit axis vector, compound masks a diagonal
    /// like `(1.0, 1.0)`, and [`Direction::NONE`] the zero vector.
    #[must_use]
    pub fn as_vec(self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.contains(Self::NORTH) {
            v.y += 1.0;
        }
        if self.contains(Self::SOUTH) {
            v.y -= 1.0;
        }
        if self.contains(Self::EAST) {
            v.x += 1.0;
        }
        if self.contains(Self::WEST) {
            v.x -= 1.0;
        }
        v
    }
}

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Direction {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Direction {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Direction {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Direction {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & 0xF)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (bit, name) in [
            (Self::NORTH, "NORTH"),
            (Self::EAST, "EAST"),
            (Self::SOUTH, "SOUTH"),
            (Self::WEST, "WEST"),
        ] {
            if self.contains(bit) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// The quadrant of `to` relative to `from` as a direction mask.
///
/// The east or west bit comes from the tolerant `x` comparison and the north
/// or south bit from `y`, so each axis contributes at most one bit and points
/// within tolerance of each other yield [`Direction::NONE`].
#[must_use]
pub fn directions(from: Point, to: Point) -> Direction {
    let mut dir = Direction::NONE;
    match approx::cmp(from.x, to.x) {
        Ordering::Less => dir |= Direction::EAST,
        Ordering::Greater => dir |= Direction::WEST,
        Ordering::Equal => {}
    }
    match approx::cmp(from.y, to.y) {
        Ordering::Less => dir |= Direction::NORTH,
        Ordering::Greater => dir |= Direction::SOUTH,
        Ordering::Equal => {}
    }
    dir
}

/// The single compass direction from `from` to `to`.
///
/// The points must be distinct and axis-aligned within tolerance. The routing
/// kernel only ever asks this of segment endpoints it created, so an impure
/// answer is flagged in debug builds rather than reported.
#[must_use]
pub fn pure_direction(from: Point, to: Point) -> Direction {
    let dir = directions(from, to);
    debug_assert!(
        dir.is_pure(),
        "direction from {from:?} to {to:?} is not axis-aligned"
    );
    dir
}
