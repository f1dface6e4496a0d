// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cyclic construction of the seven lines.
//!
//! Line k is the base line shifted by k:
//!
//! ```text
//! line_k = { (p + k) mod 7 : p in base }
//! ```
//!
//! This yields a projective plane exactly when the base line is a planar
//! difference set mod 7: its six ordered differences `a - b` (a ≠ b) hit
//! every nonzero residue once. Two distinct points x, y then lie together on
//! the unique shift k with `x - k, y - k` both in the base, because `x - y` is
//! realised by exactly one ordered pair of base points.
//!
//! For the default base {0, 1, 3}:
//!
//! | k | line      |
//! |---|-----------|
//! | 0 | {0, 1, 3} |
//! | 1 | {1, 2, 4} |
//! | 2 | {2, 3, 5} |
//! | 3 | {3, 4, 6} |
//! | 4 | {0, 4, 5} |
//! | 5 | {1, 5, 6} |
//! | 6 | {0, 2, 6} |

use crate::errors::{FanoError, Result};
use crate::geometry::constants::{MODULUS, NLINES, NPOINTS, POINTS_PER_LINE};
use crate::geometry::{Line, Point};
use tracing::debug;

/// Check that `base` is a planar difference set mod 7 and return it as points.
pub fn validate_difference_set(base: [u8; POINTS_PER_LINE]) -> Result<[Point; POINTS_PER_LINE]> {
    let invalid = |reason: String| FanoError::InvalidDifferenceSet { base, reason };

    let mut points = [Point::new(0); POINTS_PER_LINE];
    for (slot, &value) in points.iter_mut().zip(base.iter()) {
        *slot = Point::try_new(value)
            .map_err(|_| invalid(format!("{} is not a residue mod {}", value, MODULUS)))?;
    }
    if Line::try_from_points(points).is_none() {
        return Err(invalid("repeated point".to_string()));
    }

    let mut hits = [0u8; NPOINTS];
    for &a in &base {
        for &b in &base {
            if a != b {
                hits[((a + MODULUS - b) % MODULUS) as usize] += 1;
            }
        }
    }
    if let Some(residue) = (1..NPOINTS).find(|&r| hits[r] != 1) {
        return Err(invalid(format!(
            "difference {} occurs {} times",
            residue, hits[residue]
        )));
    }
    Ok(points)
}

/// Generate the seven lines by shifting `base` through k = 0..6.
///
/// The base must have three distinct points; it need not be a difference set
/// (an invalid base yields a structure that fails indexing or verification).
pub fn cyclic_lines(base: [Point; POINTS_PER_LINE]) -> Option<[Line; NLINES]> {
    let base = Line::try_from_points(base)?;
    let mut lines = [base; NLINES];
    for (k, line) in lines.iter_mut().enumerate() {
        *line = base.map(|p| p.shifted(k as u8))?;
    }
    debug!(base = %base, "generated {} cyclic lines", NLINES);
    Some(lines)
}
