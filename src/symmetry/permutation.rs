// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations of the seven points.

use crate::geometry::constants::{MODULUS, NPOINTS};
use crate::geometry::Point;
use serde::Serialize;
use std::fmt;

/// A bijection on points, stored as its image table: `p ↦ images[p]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Permutation([Point; NPOINTS]);

impl Permutation {
    pub fn identity() -> Self {
        let mut images = [Point::new(0); NPOINTS];
        for (slot, p) in images.iter_mut().zip(Point::all()) {
            *slot = p;
        }
        Self(images)
    }

    /// `p ↦ p + k (mod 7)`. Shifts are taken mod 7.
    pub fn cyclic_shift(k: u8) -> Self {
        Self(Self::identity().0.map(|p| p.shifted(k % MODULUS)))
    }

    /// Build a permutation from an image table.
    ///
    /// Returns `None` when the table is not a bijection.
    pub fn from_images(images: [Point; NPOINTS]) -> Option<Self> {
        let mut seen = [false; NPOINTS];
        for p in images {
            if std::mem::replace(&mut seen[p.as_usize()], true) {
                return None;
            }
        }
        Some(Self(images))
    }

    /// The image of `point`.
    #[inline]
    pub fn apply(&self, point: Point) -> Point {
        self.0[point.as_usize()]
    }

    pub fn images(&self) -> [Point; NPOINTS] {
        self.0
    }

    /// `self` followed by `other`: `p ↦ other(self(p))`.
    pub fn then(&self, other: &Self) -> Self {
        Self(self.0.map(|p| other.apply(p)))
    }

    pub fn inverse(&self) -> Self {
        let mut images = self.0;
        for p in Point::all() {
            images[self.apply(p).as_usize()] = p;
        }
        Self(images)
    }

    /// `self` composed with itself `n` times.
    pub fn pow(&self, n: u32) -> Self {
        (0..n).fold(Self::identity(), |acc, _| acc.then(self))
    }

    pub fn is_identity(&self) -> bool {
        Point::all().all(|p| self.apply(p) == p)
    }

    /// Smallest n ≥ 1 with `self^n = identity`.
    pub fn order(&self) -> u32 {
        let mut current = *self;
        let mut n = 1;
        while !current.is_identity() {
            current = current.then(self);
            n += 1;
        }
        n
    }
}

impl Default for Permutation {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Permutation {
    /// Image table, e.g. "[1 2 3 4 5 6 0]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "]")
    }
}
