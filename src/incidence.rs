// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point-line incidence matrix.
//!
//! `M[p][l] = 1` iff point p lies on line l. For the Fano plane every row and
//! every column sums to 3 and
//!
//! ```text
//! M·Mᵗ = 2·I + J
//! ```
//!
//! where J is the all-ones matrix: two distinct points share exactly one line,
//! and a point shares its three lines with itself. Since the plane is
//! self-dual, `Mᵗ·M` satisfies the same identity.

use crate::geometry::constants::{NLINES, NPOINTS, POINTS_PER_LINE};
use crate::geometry::Line;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// A 7×7 0/1 matrix, rows indexed by points and columns by lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IncidenceMatrix([[u8; NLINES]; NPOINTS]);

/// Integer 7×7 matrix used for products of incidence matrices.
pub type Gram = [[u32; NPOINTS]; NPOINTS];

impl IncidenceMatrix {
    /// Build the matrix from an ordered sequence of lines.
    pub fn from_lines(lines: &[Line; NLINES]) -> Self {
        let mut rows = [[0u8; NLINES]; NPOINTS];
        for (l, line) in lines.iter().enumerate() {
            for point in line.points() {
                rows[point.as_usize()][l] = 1;
            }
        }
        Self(rows)
    }

    /// Build a matrix from raw rows. Entries other than 0 and 1 are clamped to 1.
    pub fn from_rows(rows: [[u8; NLINES]; NPOINTS]) -> Self {
        Self(rows.map(|row| row.map(|v| v.min(1))))
    }

    /// The raw rows.
    pub fn rows(&self) -> &[[u8; NLINES]; NPOINTS] {
        &self.0
    }

    pub fn into_rows(self) -> [[u8; NLINES]; NPOINTS] {
        self.0
    }

    /// Number of lines through each point.
    pub fn row_sums(&self) -> [u32; NPOINTS] {
        self.0.map(|row| row.iter().map(|&v| u32::from(v)).sum())
    }

    /// Number of points on each line.
    pub fn column_sums(&self) -> [u32; NLINES] {
        let mut sums = [0u32; NLINES];
        for row in &self.0 {
            for (sum, &v) in sums.iter_mut().zip(row.iter()) {
                *sum += u32::from(v);
            }
        }
        sums
    }

    /// Swap the roles of points and lines.
    pub fn transpose(&self) -> Self {
        let mut t = [[0u8; NLINES]; NPOINTS];
        for (i, row) in self.0.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                t[j][i] = v;
            }
        }
        Self(t)
    }

    /// `M·Mᵗ`: entry (a, b) counts the lines through both a and b.
    pub fn gram(&self) -> Gram {
        let mut product = [[0u32; NPOINTS]; NPOINTS];
        for (a, row_a) in self.0.iter().enumerate() {
            for (b, row_b) in self.0.iter().enumerate() {
                product[a][b] = row_a
                    .iter()
                    .zip(row_b.iter())
                    .map(|(&x, &y)| u32::from(x * y))
                    .sum();
            }
        }
        product
    }

    /// `2·I + J`: 3 on the diagonal, 1 elsewhere.
    pub fn expected_gram() -> Gram {
        let mut expected = [[1u32; NPOINTS]; NPOINTS];
        for (i, row) in expected.iter_mut().enumerate() {
            row[i] = POINTS_PER_LINE as u32;
        }
        expected
    }

    /// Whether rows and columns all sum to 3 and `M·Mᵗ = 2·I + J`.
    pub fn satisfies_design_identity(&self) -> bool {
        let three = POINTS_PER_LINE as u32;
        self.row_sums().iter().all(|&s| s == three)
            && self.column_sums().iter().all(|&s| s == three)
            && self.gram() == Self::expected_gram()
    }
}

impl Index<(usize, usize)> for IncidenceMatrix {
    type Output = u8;

    fn index(&self, (point, line): (usize, usize)) -> &u8 {
        &self.0[point][line]
    }
}

impl fmt::Display for IncidenceMatrix {
    /// Rows are points, columns are lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for l in 0..NLINES {
            write!(f, " L{}", l)?;
        }
        for (p, row) in self.0.iter().enumerate() {
            write!(f, "\nP{}:", p)?;
            for v in row {
                write!(f, "  {}", v)?;
            }
        }
        Ok(())
    }
}
