// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the Fano plane.
//!
//! This module contains type-safe representations of the data model:
//! - Point: identifiers 0..7
//! - PointSet: bitset of points
//! - Line: three distinct points, sorted
//! - LineId: index into the ordered sequence of lines

pub mod constants;
pub mod line;
pub mod point;
pub mod point_set;

// Re-export for convenience
pub use constants::*;
pub use line::{IntoLineId, Line, LineId};
pub use point::{IntoPoint, Point};
pub use point_set::PointSet;
