// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Read-only geometric queries on a [`FanoPlane`].
//!
//! Every query validates its arguments first: raw integers outside 0..=6 give
//! [`FanoError::OutOfRange`], and pairs that must be distinct give
//! [`FanoError::DegenerateQuery`]. No query ever substitutes a default answer.

use super::FanoPlane;
use crate::errors::{Domain, FanoError, Result};
use crate::geometry::constants::{NLINES, NPOINTS};
use crate::geometry::{IntoLineId, IntoPoint, Line, LineId, Point};
use crate::incidence::IncidenceMatrix;
use crate::symmetry::Permutation;
use tracing::trace;

impl FanoPlane {
    /// The unique line through two distinct points.
    pub fn line_through_points(&self, a: impl IntoPoint, b: impl IntoPoint) -> Result<LineId> {
        let (a, b) = (a.into_point()?, b.into_point()?);
        self.index()
            .line_through(a, b)
            .ok_or(FanoError::DegenerateQuery {
                operation: "line_through_points",
                value: a.value(),
            })
    }

    /// The unique point shared by two distinct lines.
    pub fn intersection(&self, i: impl IntoLineId, j: impl IntoLineId) -> Result<Point> {
        let (i, j) = (i.into_line_id()?, j.into_line_id()?);
        if i == j {
            return Err(FanoError::DegenerateQuery {
                operation: "intersection",
                value: i.value(),
            });
        }
        let shared = self.line_set(i).intersection(self.line_set(j));
        shared.single().ok_or_else(|| {
            FanoError::malformed(format!("{} and {} share {} points", i, j, shared.len()))
        })
    }

    /// The point completing `a` and `b` to a line.
    pub fn third_point(&self, a: impl IntoPoint, b: impl IntoPoint) -> Result<Point> {
        let (a, b) = (a.into_point()?, b.into_point()?);
        let id = self.line_through_points(a, b)?;
        self.lines[id.as_usize()]
            .other_point(a, b)
            .ok_or_else(|| FanoError::malformed(format!("{} does not contain {} and {}", id, a, b)))
    }

    /// Whether three pairwise distinct points lie on one line.
    ///
    /// A triple with a repeated point is not collinear: the answer is
    /// `Ok(false)`, not an error. Out-of-range arguments are still errors.
    pub fn is_collinear(
        &self,
        a: impl IntoPoint,
        b: impl IntoPoint,
        c: impl IntoPoint,
    ) -> Result<bool> {
        let (a, b, c) = (a.into_point()?, b.into_point()?, c.into_point()?);
        if a == b || b == c || a == c {
            return Ok(false);
        }
        let id = self.line_through_points(a, b)?;
        Ok(self.line_set(id).contains(c))
    }

    /// The 7×7 point-line incidence matrix.
    pub fn incidence_matrix(&self) -> IncidenceMatrix {
        IncidenceMatrix::from_lines(&self.lines)
    }

    /// The permutation `p ↦ p + k (mod 7)` for `k` in 0..=6.
    pub fn automorphism_cyclic(&self, k: impl Into<i64>) -> Result<Permutation> {
        let k = k.into();
        if !(0..NPOINTS as i64).contains(&k) {
            return Err(FanoError::out_of_range(Domain::Shift, k));
        }
        Ok(Permutation::cyclic_shift(k as u8))
    }

    /// The lines with every point relabelled by `perm`, in the original order.
    pub fn apply_automorphism(&self, perm: &Permutation) -> [Line; NLINES] {
        self.lines.map(|line| {
            line.map(|p| perm.apply(p))
                .unwrap_or_else(|| unreachable!("a permutation keeps points distinct"))
        })
    }

    /// The permutation of line indices induced by `perm`, or `None` when some
    /// line is not carried onto a line.
    pub fn line_permutation(&self, perm: &Permutation) -> Option<[LineId; NLINES]> {
        let mut image = [LineId::new(0); NLINES];
        for (slot, line) in image.iter_mut().zip(self.lines.iter()) {
            let [a, b, c] = line.points().map(|p| perm.apply(p));
            let target = self.index().line_through(a, b)?;
            if !self.line_set(target).contains(c) {
                trace!(%perm, %line, "not an automorphism");
                return None;
            }
            *slot = target;
        }
        Some(image)
    }

    /// Whether `perm` maps the set of lines onto itself.
    pub fn is_automorphism(&self, perm: &Permutation) -> bool {
        self.line_permutation(perm).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointSet;

    #[test]
    fn test_concrete_queries() {
        let plane = FanoPlane::new();
        assert_eq!(plane.line_through_points(0, 1).unwrap(), LineId::new(0));
        assert_eq!(plane.intersection(0, 1).unwrap(), Point::new(1));
        assert_eq!(plane.third_point(0, 1).unwrap(), Point::new(3));
        assert!(plane.is_collinear(0, 1, 3).unwrap());
        assert!(!plane.is_collinear(0, 1, 2).unwrap());
    }

    #[test]
    fn test_degenerate_queries() {
        let plane = FanoPlane::new();
        assert_eq!(
            plane.line_through_points(4, 4),
            Err(FanoError::DegenerateQuery {
                operation: "line_through_points",
                value: 4
            })
        );
        assert_eq!(
            plane.intersection(2, 2),
            Err(FanoError::DegenerateQuery {
                operation: "intersection",
                value: 2
            })
        );
        assert!(matches!(
            plane.third_point(5, 5),
            Err(FanoError::DegenerateQuery { .. })
        ));
    }

    #[test]
    fn test_degenerate_triples_are_not_collinear() {
        let plane = FanoPlane::new();
        assert_eq!(plane.is_collinear(0, 0, 1), Ok(false));
        assert_eq!(plane.is_collinear(0, 1, 0), Ok(false));
        assert_eq!(plane.is_collinear(3, 3, 3), Ok(false));
    }

    #[test]
    fn test_out_of_range_beats_degenerate() {
        let plane = FanoPlane::new();
        assert!(matches!(
            plane.is_collinear(0, 0, 7),
            Err(FanoError::OutOfRange { .. })
        ));
        assert!(matches!(
            plane.line_through_points(8, 8),
            Err(FanoError::OutOfRange { value: 8, .. })
        ));
        assert!(matches!(
            plane.intersection(0, -1),
            Err(FanoError::OutOfRange {
                kind: Domain::Line,
                ..
            })
        ));
    }

    #[test]
    fn test_automorphism_cyclic_range() {
        let plane = FanoPlane::new();
        assert!(plane.automorphism_cyclic(0).unwrap().is_identity());
        assert_eq!(plane.automorphism_cyclic(6).unwrap(), Permutation::cyclic_shift(6));
        assert_eq!(
            plane.automorphism_cyclic(7),
            Err(FanoError::OutOfRange {
                kind: Domain::Shift,
                value: 7
            })
        );
        assert!(plane.automorphism_cyclic(-1).is_err());
    }

    #[test]
    fn test_shift_permutes_lines() {
        let plane = FanoPlane::new();
        let shift = plane.automorphism_cyclic(2).unwrap();
        let image = plane.line_permutation(&shift).unwrap();
        // Line k goes to line k + 2.
        for (k, target) in image.iter().enumerate() {
            assert_eq!(target.as_usize(), (k + 2) % NLINES);
        }
        let relabelled = plane.apply_automorphism(&shift);
        assert_eq!(relabelled[0], plane.lines()[2]);
    }

    #[test]
    fn test_transposition_is_not_automorphism() {
        let plane = FanoPlane::new();
        let mut images = Permutation::identity().images();
        images.swap(0, 2);
        let swap = Permutation::from_images(images).unwrap();
        assert!(!plane.is_automorphism(&swap));
        assert!(plane.line_permutation(&swap).is_none());
    }

    #[test]
    fn test_frobenius_is_automorphism() {
        // p ↦ 2p fixes the difference set {1, 2, 4} of quadratic residues.
        let plane = FanoPlane::new();
        let mut images = Permutation::identity().images();
        for p in Point::all() {
            images[p.as_usize()] = Point::new(p.value() * 2 % 7);
        }
        let doubling = Permutation::from_images(images).unwrap();
        assert_eq!(doubling.order(), 3);
        assert!(plane.is_automorphism(&doubling));
    }

    #[test]
    fn test_third_point_completes_line() {
        let plane = FanoPlane::new();
        let line: PointSet = [Point::new(0), Point::new(1), plane.third_point(0, 1).unwrap()]
            .into_iter()
            .collect();
        assert_eq!(line, plane.line(0).unwrap().to_set());
    }
}
