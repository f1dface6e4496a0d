// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PointSet type for representing sets of points as bitsets.
//!
//! Bit i represents point i. Intersections of lines, complements of lines and
//! collinearity checks all reduce to a few bit operations on this type.
//!
//! # Examples
//!
//! ```
//! use fano_plane::geometry::{Point, PointSet};
//!
//! let mut set = PointSet::empty();
//! set.insert(Point::new(0));
//! set.insert(Point::new(1));
//! set.insert(Point::new(3));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "{0, 1, 3}");
//! assert_eq!(set.complement().len(), 4);
//! ```

use crate::geometry::constants::NPOINTS;
use crate::geometry::Point;
use serde::{Serialize, Serializer};
use std::fmt;

/// A set of points represented as a bitset.
///
/// Bit i (counting from LSB) is set if point i is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointSet(u8);

impl PointSet {
    const FULL_BITS: u8 = ((1u16 << NPOINTS) - 1) as u8;

    /// Create an empty point set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a point set containing all seven points.
    pub const fn full() -> Self {
        Self(Self::FULL_BITS)
    }

    /// Create a point set from a slice of points.
    pub fn from_points(points: &[Point]) -> Self {
        let mut set = Self::empty();
        for &point in points {
            set.insert(point);
        }
        set
    }

    /// Get the underlying bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, point: Point) -> bool {
        (self.0 >> point.value()) & 1 != 0
    }

    pub fn insert(&mut self, point: Point) {
        self.0 |= 1 << point.value();
    }

    pub fn remove(&mut self, point: Point) {
        self.0 &= !(1 << point.value());
    }

    /// Get the number of points in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Points of the plane not in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::FULL_BITS)
    }

    pub fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// The only member of a one-element set, or `None` otherwise.
    pub fn single(self) -> Option<Point> {
        if self.len() == 1 {
            Some(Point::new(self.0.trailing_zeros() as u8))
        } else {
            None
        }
    }

    /// Iterate over all points in the set in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        Point::all().filter(move |&p| self.contains(p))
    }
}

impl fmt::Display for PointSet {
    /// Format a point set as "{0, 1, 3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, point) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "}}")
    }
}

impl Serialize for PointSet {
    /// Serialized as the ascending list of members.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl From<&[Point]> for PointSet {
    fn from(points: &[Point]) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::empty();
        for point in iter {
            set.insert(point);
        }
        set
    }
}
