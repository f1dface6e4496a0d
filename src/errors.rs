// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for construction, indexing and queries.

use strum_macros::EnumCount as EnumCountMacro;
use thiserror::Error;

/// Which kind of identifier was out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Point,
    Line,
    Shift,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Point => write!(f, "point"),
            Domain::Line => write!(f, "line"),
            Domain::Shift => write!(f, "shift"),
        }
    }
}

/// Errors reported by the incidence engine.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumCountMacro)]
pub enum FanoError {
    /// An argument is outside {0,…,6}.
    #[error("{kind} {value} is out of range (expected 0..=6)")]
    OutOfRange { kind: Domain, value: i64 },

    /// Two arguments required to be distinct are equal.
    #[error("{operation} needs two distinct arguments, got {value} twice")]
    DegenerateQuery {
        operation: &'static str,
        value: u8,
    },

    /// The lookup tables could not be built consistently.
    ///
    /// Never recoverable: an engine is not produced.
    #[error("malformed plane: {reason}")]
    MalformedPlane { reason: String },

    /// The base line does not generate a projective plane by cyclic shift.
    #[error("base line {base:?} is not a difference set mod 7: {reason}")]
    InvalidDifferenceSet { base: [u8; 3], reason: String },
}

impl FanoError {
    pub(crate) fn out_of_range(kind: Domain, value: impl Into<i64>) -> Self {
        FanoError::OutOfRange {
            kind,
            value: value.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        FanoError::MalformedPlane {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FanoError>;
