// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Self-duality witness.
//!
//! A correlation swaps points and lines while preserving incidence:
//! `p ∈ L ⇔ ψ(L) ∈ φ(p)`. For a cyclic plane the map `p ↦ line(c - p)`,
//! `line(k) ↦ point(c - k)` is one for every c, since
//! `(c - k) - (c - p) = p - k`.

use super::FanoPlane;
use crate::geometry::constants::{MODULUS, NLINES, NPOINTS};
use crate::geometry::{LineId, Point};

/// A bijection points → lines together with its partner lines → points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correlation {
    point_to_line: [LineId; NPOINTS],
    line_to_point: [Point; NLINES],
}

impl Correlation {
    /// `p ↦ line(c - p)` and `line(k) ↦ point(c - k)`.
    fn reflection(c: u8) -> Self {
        let mut point_to_line = [LineId::new(0); NPOINTS];
        let mut line_to_point = [Point::new(0); NLINES];
        for i in 0..NPOINTS as u8 {
            let image = (c + MODULUS - i) % MODULUS;
            point_to_line[i as usize] = LineId::new(image);
            line_to_point[i as usize] = Point::new(image);
        }
        Self {
            point_to_line,
            line_to_point,
        }
    }

    pub fn line_of(&self, point: Point) -> LineId {
        self.point_to_line[point.as_usize()]
    }

    pub fn point_of(&self, line: LineId) -> Point {
        self.line_to_point[line.as_usize()]
    }
}

impl FanoPlane {
    /// Find a correlation of the plane onto its dual, if one of the cyclic
    /// reflections preserves incidence.
    pub fn dual_correlation(&self) -> Option<Correlation> {
        (0..MODULUS)
            .map(Correlation::reflection)
            .find(|corr| self.preserves_incidence(corr))
    }

    fn preserves_incidence(&self, corr: &Correlation) -> bool {
        Point::all().all(|p| {
            LineId::all().all(|l| {
                let primal = self.line_set(l).contains(p);
                let dual = self.line_set(corr.line_of(p)).contains(corr.point_of(l));
                primal == dual
            })
        })
    }
}
