// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point type for the seven points of the plane.
//!
//! Points have no internal structure; a point is its identifier in 0..7.

use crate::errors::{Domain, FanoError, Result};
use crate::geometry::constants::{MODULUS, NPOINTS, POINT_NAMES};
use serde::Serialize;
use std::fmt;

/// A point in the range 0..NPOINTS.
///
/// This is a newtype wrapper so points cannot be mixed up with line indices
/// or shift amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Point(u8);

impl Point {
    /// Create a new point, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NPOINTS`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NPOINTS, "Point out of range");
        Self(value)
    }

    /// Try to create a new point.
    pub fn try_new(value: u8) -> Result<Self> {
        if (value as usize) < NPOINTS {
            Ok(Self(value))
        } else {
            Err(FanoError::out_of_range(Domain::Point, value))
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the point as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The point `self + k (mod 7)`.
    pub fn shifted(self, k: u8) -> Self {
        Self((self.0 + k % MODULUS) % MODULUS)
    }

    /// The point `-self (mod 7)`.
    pub fn negated(self) -> Self {
        Self((MODULUS - self.0) % MODULUS)
    }

    /// Letter name ('A'..'G').
    pub fn to_char(self) -> char {
        POINT_NAMES[self.as_usize()]
    }

    /// Iterate over all points in ascending order.
    pub fn all() -> impl Iterator<Item = Point> {
        (0..NPOINTS as u8).map(Point)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion of query arguments into a [`Point`].
///
/// Raw integers are range-checked; a typed `Point` always converts.
pub trait IntoPoint {
    fn into_point(self) -> Result<Point>;
}

impl IntoPoint for Point {
    fn into_point(self) -> Result<Point> {
        Ok(self)
    }
}

impl IntoPoint for u8 {
    fn into_point(self) -> Result<Point> {
        Point::try_new(self)
    }
}

impl IntoPoint for usize {
    fn into_point(self) -> Result<Point> {
        u8::try_from(self)
            .ok()
            .filter(|&v| (v as usize) < NPOINTS)
            .map(Point)
            .ok_or_else(|| {
                FanoError::out_of_range(Domain::Point, i64::try_from(self).unwrap_or(i64::MAX))
            })
    }
}

impl IntoPoint for i32 {
    fn into_point(self) -> Result<Point> {
        u8::try_from(self)
            .ok()
            .filter(|&v| (v as usize) < NPOINTS)
            .map(Point)
            .ok_or_else(|| FanoError::out_of_range(Domain::Point, self))
    }
}
