// Copyright 2025 the Espalier Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact, totally ordered keys for vertex points.

use kurbo::Point;

const SIGN_BIT: u64 = 1 << 63;

/// A point encoded as an exact, totally ordered map key.
///
/// Vertex identity is exact: two points name the same vertex only when their
/// coordinates match bit for bit, with negative zero folded into zero. The
/// tolerant comparator cannot serve here because its equality is not
/// transitive, and an ordered map needs a total order. Geometry stays
/// tolerant; identity does not.
///
/// Keys order lexicographically by `x` then `y`, and within each coordinate
/// the encoding preserves numeric order for every finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct PointKey {
    x: u64,
    y: u64,
}

impl PointKey {
    pub(crate) fn new(point: Point) -> Self {
        Self {
            x: coord_key(point.x),
            y: coord_key(point.y),
        }
    }
}

/// Maps a coordinate onto an unsigned scale with the same relative order.
fn coord_key(value: f64) -> u64 {
    // Fold -0.0 into +0.0 so both name the same location.
    let value = if value == 0.0 { 0.0 } else { value };
    let bits = value.to_bits();
    if bits & SIGN_BIT != 0 {
        // Negative values: complementing reverses the magnitude order and
        // clears the sign, placing them below every non-negative value.
        !bits
    } else {
        bits | SIGN_BIT
    }
}
