// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetries of the plane.
//!
//! An automorphism is a permutation of points that carries every line onto a
//! line. The cyclic shifts `p ↦ p + k (mod 7)` form a subgroup C₇ of the full
//! automorphism group (of order 168), and every one of them is an automorphism
//! for any cyclically generated plane.
//!
//! ## Module Structure
//!
//! - `permutation`: the `Permutation` type and its group operations
//! - `mod`: the cyclic group table and re-exports

pub mod permutation;

pub use permutation::Permutation;

use crate::geometry::constants::NPOINTS;

/// The seven cyclic shifts; element k is `p ↦ p + k`.
pub fn cyclic_group() -> [Permutation; NPOINTS] {
    let mut group = [Permutation::identity(); NPOINTS];
    for (k, element) in group.iter_mut().enumerate() {
        *element = Permutation::cyclic_shift(k as u8);
    }
    group
}
