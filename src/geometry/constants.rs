// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the Fano plane.
//!
//! The plane is the projective plane of order 2. Every count below is derived
//! from [`ORDER`], so the relationships between them are checked at compile
//! time rather than restated by hand.

/// Order of the projective plane (points per line minus one).
pub const ORDER: usize = 2;

/// Number of points: n² + n + 1.
pub const NPOINTS: usize = ORDER * ORDER + ORDER + 1;

/// Number of lines. Equal to [`NPOINTS`] for every projective plane.
pub const NLINES: usize = NPOINTS;

/// Points on each line: n + 1.
pub const POINTS_PER_LINE: usize = ORDER + 1;

/// Lines through each point: n + 1.
pub const LINES_PER_POINT: usize = ORDER + 1;

/// Modulus of the cyclic construction.
pub const MODULUS: u8 = NPOINTS as u8;

/// The base line of the cyclic construction.
///
/// Its pairwise differences {±1, ±2, ±3} cover every nonzero residue mod 7
/// exactly once; shifting it by k = 0..6 yields all seven lines.
pub const BASE_LINE: [u8; POINTS_PER_LINE] = [0, 1, 3];

/// Number of unordered pairs of distinct points, C(7, 2).
pub const NPAIRS: usize = NPOINTS * (NPOINTS - 1) / 2;

/// Letters used when printing points.
pub const POINT_NAMES: [char; NPOINTS] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

const _: () = assert!(NPOINTS == 7, "only the plane of order 2 is supported");
const _: () = assert!(NPAIRS == NLINES * 3, "each line covers 3 pairs");
const _: () = assert!(
    NPOINTS * LINES_PER_POINT == NLINES * POINTS_PER_LINE,
    "incidence count must agree from both sides"
);
