// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The incidence engine.
//!
//! A [`FanoPlane`] is built in one pass (construct lines, index them, check
//! them) and is immutable afterwards. It owns only fixed-size arrays, so it is
//! `Send + Sync` and can be shared by reference between any number of readers.
//!
//! ```
//! use fano_plane::{FanoPlane, LineId, Point};
//!
//! let plane = FanoPlane::new();
//! assert_eq!(plane.line_through_points(0, 1)?, LineId::new(0));
//! assert_eq!(plane.intersection(0, 1)?, Point::new(1));
//! assert_eq!(plane.third_point(0, 1)?, Point::new(3));
//! assert!(plane.is_collinear(0, 1, 3)?);
//! assert!(!plane.is_collinear(0, 1, 2)?);
//! # Ok::<(), fano_plane::FanoError>(())
//! ```

mod duality;
mod queries;

pub use duality::Correlation;

use crate::axioms::{verify_axioms, Axiom};
use crate::errors::{FanoError, Result};
use crate::geometry::constants::{BASE_LINE, LINES_PER_POINT, NLINES, NPOINTS, POINTS_PER_LINE};
use crate::geometry::{IntoLineId, IntoPoint, Line, LineId, Point, PointSet};
use crate::memo::{cyclic_lines, validate_difference_set, IncidenceIndex};
use std::fmt;
use tracing::debug;

/// The Fano plane: seven points, seven lines, and their lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoPlane {
    base: Line,
    lines: [Line; NLINES],
    line_sets: [PointSet; NLINES],
    index: IncidenceIndex,
}

impl FanoPlane {
    /// Build the plane from the base line {0, 1, 3}.
    ///
    /// # Panics
    ///
    /// Panics if the lookup tables cannot be built. The default construction is
    /// a known projective plane, so this only happens if indexing is broken.
    pub fn new() -> Self {
        match Self::with_base_line(BASE_LINE) {
            Ok(plane) => plane,
            Err(err) => panic!("default Fano plane failed to build: {}", err),
        }
    }

    /// Build the plane generated by shifting an arbitrary base line mod 7.
    ///
    /// Fails with [`FanoError::InvalidDifferenceSet`] when `base` is not a
    /// planar difference set, and with [`FanoError::MalformedPlane`] if the
    /// lookup tables come out inconsistent.
    pub fn with_base_line(base: [u8; POINTS_PER_LINE]) -> Result<Self> {
        let points = validate_difference_set(base)?;
        let lines = cyclic_lines(points).ok_or_else(|| FanoError::InvalidDifferenceSet {
            base,
            reason: "shifted line lost a point".to_string(),
        })?;
        let index = IncidenceIndex::build(&lines)?;

        let plane = Self {
            base: lines[0],
            lines,
            line_sets: lines.map(|line| line.to_set()),
            index,
        };

        let report = verify_axioms(&plane);
        if let Some(axiom) = Axiom::structural().find(|&axiom| !report.holds(axiom)) {
            return Err(FanoError::InvalidDifferenceSet {
                base,
                reason: format!("axiom failed: {}", axiom),
            });
        }

        debug!(base = %plane.base, "Fano plane ready");
        Ok(plane)
    }

    /// The line every other line is a shift of.
    pub fn base_line(&self) -> Line {
        self.base
    }

    /// The seven points in ascending order.
    pub fn points(&self) -> [Point; NPOINTS] {
        let mut points = [Point::new(0); NPOINTS];
        for (slot, p) in points.iter_mut().zip(Point::all()) {
            *slot = p;
        }
        points
    }

    /// The ordered sequence of lines; line k is the base shifted by k.
    pub fn lines(&self) -> &[Line; NLINES] {
        &self.lines
    }

    pub fn line(&self, id: impl IntoLineId) -> Result<Line> {
        Ok(self.lines[id.into_line_id()?.as_usize()])
    }

    /// The three points of a line, ascending.
    pub fn points_on_line(&self, id: impl IntoLineId) -> Result<[Point; POINTS_PER_LINE]> {
        Ok(self.line(id)?.points())
    }

    /// The three lines containing `point`, ascending.
    pub fn lines_through_point(&self, point: impl IntoPoint) -> Result<[LineId; LINES_PER_POINT]> {
        Ok(self.index.lines_through(point.into_point()?))
    }

    /// The four points not on a line.
    pub fn complement_line(&self, id: impl IntoLineId) -> Result<PointSet> {
        Ok(self.line_set(id.into_line_id()?).complement())
    }

    pub(crate) fn line_set(&self, id: LineId) -> PointSet {
        self.line_sets[id.as_usize()]
    }

    pub(crate) fn index(&self) -> &IncidenceIndex {
        &self.index
    }
}

impl Default for FanoPlane {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FanoPlane {
    /// Structure report: lines, incidence matrix, lines through each point,
    /// and the intersection table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fano plane (base line {})", self.base)?;
        writeln!(f, "Points: {}", PointSet::full())?;
        writeln!(f)?;
        writeln!(f, "Lines:")?;
        for (id, line) in LineId::all().zip(self.lines.iter()) {
            writeln!(f, "  {}: {} {}", id, line, line.name())?;
        }
        writeln!(f)?;
        writeln!(f, "Incidence matrix (rows = points, columns = lines):")?;
        writeln!(f, "{}", self.incidence_matrix())?;
        writeln!(f)?;
        writeln!(f, "Lines through each point:")?;
        for point in Point::all() {
            let [a, b, c] = self.index.lines_through(point);
            writeln!(f, "  {} ({}): {} {} {}", point, point.to_char(), a, b, c)?;
        }
        writeln!(f)?;
        writeln!(f, "Intersections:")?;
        write!(f, "    ")?;
        for j in LineId::all() {
            write!(f, " {}", j)?;
        }
        for i in LineId::all() {
            write!(f, "\n  {}", i)?;
            for j in LineId::all() {
                match self.line_set(i).intersection(self.line_set(j)).single() {
                    Some(p) if i != j => write!(f, "  {}", p)?,
                    _ => write!(f, "  -")?,
                }
            }
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_structure() {
        let plane = FanoPlane::new();
        assert_eq!(plane.lines().len(), NLINES);
        assert_eq!(plane.base_line().to_string(), "{0, 1, 3}");
        assert_eq!(plane.line(1).unwrap().to_string(), "{1, 2, 4}");
        assert_eq!(plane.points().map(Point::value), [0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(plane, FanoPlane::default());
    }

    #[test]
    fn test_lines_are_cyclic_shifts_of_base() {
        let plane = FanoPlane::new();
        for (k, line) in plane.lines().iter().enumerate() {
            let shifted = plane.base_line().map(|p| p.shifted(k as u8)).unwrap();
            assert_eq!(*line, shifted);
        }
    }

    #[test]
    fn test_lines_through_point() {
        let plane = FanoPlane::new();
        assert_eq!(
            plane.lines_through_point(3).unwrap(),
            [LineId::new(0), LineId::new(2), LineId::new(3)]
        );
        for point in Point::all() {
            for id in plane.lines_through_point(point).unwrap() {
                assert!(plane.line(id).unwrap().contains(point));
            }
        }
    }

    #[test]
    fn test_complement_line() {
        let plane = FanoPlane::new();
        for id in LineId::all() {
            let complement = plane.complement_line(id).unwrap();
            assert_eq!(complement.len(), 4);
            assert!(complement.intersection(plane.line(id).unwrap().to_set()).is_empty());
        }
        assert_eq!(plane.complement_line(0).unwrap().to_string(), "{2, 4, 5, 6}");
    }

    #[test]
    fn test_out_of_range_arguments() {
        let plane = FanoPlane::new();
        assert!(matches!(plane.line(7), Err(FanoError::OutOfRange { .. })));
        assert!(matches!(
            plane.lines_through_point(-2),
            Err(FanoError::OutOfRange { value: -2, .. })
        ));
        assert!(plane.complement_line(100usize).is_err());
        assert!(plane.points_on_line(9u8).is_err());
    }

    #[test]
    fn test_alternative_base_lines() {
        let mirrored = FanoPlane::with_base_line([0, 2, 3]).unwrap();
        assert_eq!(mirrored.line(1).unwrap().to_string(), "{1, 3, 4}");

        let shifted = FanoPlane::with_base_line([1, 2, 4]).unwrap();
        assert_eq!(shifted.line(6).unwrap().to_string(), "{0, 1, 3}");
    }

    #[test]
    fn test_invalid_base_lines() {
        for base in [[0, 1, 2], [0, 2, 4], [0, 0, 1], [0, 1, 7]] {
            assert!(
                matches!(
                    FanoPlane::with_base_line(base),
                    Err(FanoError::InvalidDifferenceSet { .. })
                ),
                "{:?}",
                base
            );
        }
    }

    #[test]
    fn test_display_report() {
        let text = FanoPlane::new().to_string();
        assert!(text.starts_with("Fano plane (base line {0, 1, 3})"));
        assert!(text.contains("  L0: {0, 1, 3} ABD"));
        assert!(text.contains("  0 (A): L0 L4 L6"));
        assert!(text.contains("\n  L0  -  1  3  3  0  1  0"));
    }
}
