// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lines of the plane and their indices.
//!
//! A [`Line`] stores its three points in a fixed-size array kept in ascending
//! order, so "exactly three distinct points" holds by construction and two
//! lines with the same points compare equal regardless of how they were built.

use crate::errors::{Domain, FanoError, Result};
use crate::geometry::constants::{NLINES, POINTS_PER_LINE};
use crate::geometry::{Point, PointSet};
use serde::Serialize;
use std::fmt;

/// Index of a line in the ordered sequence of seven lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineId(u8);

impl LineId {
    /// Create a new line index, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NLINES`.
    pub const fn new(value: u8) -> Self {
        assert!((value as usize) < NLINES, "LineId out of range");
        Self(value)
    }

    /// Try to create a new line index.
    pub fn try_new(value: u8) -> Result<Self> {
        if (value as usize) < NLINES {
            Ok(Self(value))
        } else {
            Err(FanoError::out_of_range(Domain::Line, value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all line indices in ascending order.
    pub fn all() -> impl Iterator<Item = LineId> {
        (0..NLINES as u8).map(LineId)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Conversion of query arguments into a [`LineId`].
pub trait IntoLineId {
    fn into_line_id(self) -> Result<LineId>;
}

impl IntoLineId for LineId {
    fn into_line_id(self) -> Result<LineId> {
        Ok(self)
    }
}

impl IntoLineId for u8 {
    fn into_line_id(self) -> Result<LineId> {
        LineId::try_new(self)
    }
}

impl IntoLineId for usize {
    fn into_line_id(self) -> Result<LineId> {
        u8::try_from(self)
            .ok()
            .filter(|&v| (v as usize) < NLINES)
            .map(LineId)
            .ok_or_else(|| {
                FanoError::out_of_range(Domain::Line, i64::try_from(self).unwrap_or(i64::MAX))
            })
    }
}

impl IntoLineId for i32 {
    fn into_line_id(self) -> Result<LineId> {
        u8::try_from(self)
            .ok()
            .filter(|&v| (v as usize) < NLINES)
            .map(LineId)
            .ok_or_else(|| FanoError::out_of_range(Domain::Line, self))
    }
}

/// An unordered set of exactly three distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Line([Point; POINTS_PER_LINE]);

impl Line {
    /// Build a line from three points in any order.
    ///
    /// Returns `None` when two of the points coincide.
    pub fn try_from_points(mut points: [Point; POINTS_PER_LINE]) -> Option<Self> {
        points.sort_unstable();
        if points[0] == points[1] || points[1] == points[2] {
            None
        } else {
            Some(Self(points))
        }
    }

    /// The three points in ascending order.
    pub fn points(&self) -> [Point; POINTS_PER_LINE] {
        self.0
    }

    pub fn contains(&self, point: Point) -> bool {
        self.0.contains(&point)
    }

    pub fn to_set(&self) -> PointSet {
        PointSet::from_points(&self.0)
    }

    /// The point of this line that is neither `a` nor `b`.
    ///
    /// Returns `None` unless `a` and `b` are two distinct points of the line.
    pub fn other_point(&self, a: Point, b: Point) -> Option<Point> {
        if a == b || !self.contains(a) || !self.contains(b) {
            return None;
        }
        self.0.iter().copied().find(|&p| p != a && p != b)
    }

    /// The three unordered pairs of points on this line.
    pub fn pairs(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.0;
        [(a, b), (a, c), (b, c)]
    }

    /// Map every point through `f`.
    ///
    /// Returns `None` if `f` sends two points of the line to the same point.
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Option<Self> {
        let [a, b, c] = self.0;
        Self::try_from_points([f(a), f(b), f(c)])
    }

    /// Letter name such as "ABD".
    pub fn name(&self) -> String {
        self.0.iter().map(|p| p.to_char()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{{{}, {}, {}}}", a, b, c)
    }
}
