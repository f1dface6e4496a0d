// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lookup tables built once from the seven lines.
//!
//! Both tables are fixed-size arrays indexed directly by point values, so every
//! lookup after construction is a single array access.
//!
//! Building the tables is the correctness gate of the engine: a pair of points
//! found on two lines, a pair found on no line, or a point on the wrong number
//! of lines aborts with [`FanoError::MalformedPlane`] instead of overwriting
//! an entry.

use crate::errors::{FanoError, Result};
use crate::geometry::constants::{LINES_PER_POINT, NLINES, NPAIRS, NPOINTS};
use crate::geometry::{Line, LineId, Point};
use tracing::debug;

/// Point → lines and pair → line tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidenceIndex {
    /// `point_to_lines[p]` lists the lines through p in ascending order.
    point_to_lines: [[LineId; LINES_PER_POINT]; NPOINTS],

    /// `pair_to_line[a][b]` is the line through a and b, stored symmetrically.
    /// The diagonal is `None`.
    pair_to_line: [[Option<LineId>; NPOINTS]; NPOINTS],
}

impl IncidenceIndex {
    /// Index `lines` in a single pass over lines and their pairs.
    pub fn build(lines: &[Line; NLINES]) -> Result<Self> {
        let mut pair_to_line = [[None; NPOINTS]; NPOINTS];
        let mut lines_through = [[LineId::new(0); LINES_PER_POINT]; NPOINTS];
        let mut degree = [0usize; NPOINTS];
        let mut pairs_seen = 0usize;

        for (id, line) in LineId::all().zip(lines.iter()) {
            for (a, b) in line.pairs() {
                let entry = &mut pair_to_line[a.as_usize()][b.as_usize()];
                if let Some(existing) = *entry {
                    return Err(FanoError::malformed(format!(
                        "pair ({}, {}) lies on both {} and {}",
                        a, b, existing, id
                    )));
                }
                *entry = Some(id);
                pair_to_line[b.as_usize()][a.as_usize()] = Some(id);
                pairs_seen += 1;
            }

            for point in line.points() {
                let slot = &mut degree[point.as_usize()];
                if *slot == LINES_PER_POINT {
                    return Err(FanoError::malformed(format!(
                        "point {} lies on more than {} lines",
                        point, LINES_PER_POINT
                    )));
                }
                lines_through[point.as_usize()][*slot] = id;
                *slot += 1;
            }
        }

        if let Some(p) = (0..NPOINTS).find(|&p| degree[p] != LINES_PER_POINT) {
            return Err(FanoError::malformed(format!(
                "point {} lies on {} lines",
                p, degree[p]
            )));
        }
        if pairs_seen != NPAIRS {
            return Err(FanoError::malformed(format!(
                "{} of {} point pairs are covered",
                pairs_seen, NPAIRS
            )));
        }

        debug!(pairs = pairs_seen, "incidence index built");
        Ok(Self {
            point_to_lines: lines_through,
            pair_to_line,
        })
    }

    /// The three lines through `point`, ascending.
    #[inline]
    pub fn lines_through(&self, point: Point) -> [LineId; LINES_PER_POINT] {
        self.point_to_lines[point.as_usize()]
    }

    /// The line through two points, or `None` when they coincide.
    #[inline]
    pub fn line_through(&self, a: Point, b: Point) -> Option<LineId> {
        self.pair_to_line[a.as_usize()][b.as_usize()]
    }
}
