// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incidence-geometry engine for the Fano plane.
//!
//! The Fano plane is the unique (7,3,1) block design: 7 points, 7 lines,
//! 3 points on every line, 3 lines through every point, any two points on
//! exactly one line and any two lines through exactly one point.
//!
//! # Architecture
//!
//! A [`FanoPlane`] is built in a single synchronous pass:
//!
//! 1. **Construction** (`memo::lines`): line k is the base line {0, 1, 3}
//!    shifted by k mod 7. The base line is a planar difference set, which is
//!    what makes the result a projective plane.
//! 2. **Indexing** (`memo::index`): point → lines and pair → line tables, built
//!    once. A pair found on two lines aborts construction.
//! 3. **Queries** (`plane`): line through two points, intersection of two
//!    lines, third point, collinearity. All are table lookups or bit
//!    operations on [`PointSet`].
//! 4. **Algebra** (`incidence`, `symmetry`): the incidence matrix with its
//!    identity `M·Mᵗ = 2·I + J`, and the cyclic automorphisms.
//!
//! [`FanoPlane::verify_axioms`] rechecks every invariant from the line
//! sequence alone.
//!
//! The engine holds no global state and never mutates after construction.
//! Callers create one instance and share it by reference, across threads if
//! they like.
//!
//! # Example
//!
//! ```
//! use fano_plane::FanoPlane;
//!
//! let plane = FanoPlane::new();
//! assert!(plane.verify_axioms().all_hold());
//!
//! let m = plane.incidence_matrix();
//! assert_eq!(m.row_sums(), [3; 7]);
//! assert_eq!(m.gram(), fano_plane::IncidenceMatrix::expected_gram());
//!
//! for k in 0..7 {
//!     let shift = plane.automorphism_cyclic(k)?;
//!     assert!(plane.is_automorphism(&shift));
//! }
//! # Ok::<(), fano_plane::FanoError>(())
//! ```

pub mod axioms;
pub mod errors;
pub mod geometry;
pub mod incidence;
pub mod memo;
pub mod plane;
pub mod symmetry;

// Re-export commonly used types
pub use axioms::{verify_axioms, Axiom, AxiomReport};
pub use errors::{Domain, FanoError, Result};
pub use geometry::{IntoLineId, IntoPoint, Line, LineId, Point, PointSet};
pub use incidence::IncidenceMatrix;
pub use plane::{Correlation, FanoPlane};
pub use symmetry::Permutation;
