// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data.
//!
//! - `lines`: the cyclic construction of the seven lines
//! - `index`: point → lines and pair → line lookup tables
//!
//! Both are computed once when a [`crate::FanoPlane`] is created and never
//! change afterwards.

pub mod index;
pub mod lines;

pub use index::IncidenceIndex;
pub use lines::{cyclic_lines, validate_difference_set};
