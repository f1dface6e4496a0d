// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use fano_plane::{FanoPlane, Line, LineId, Point, PointSet};
use std::collections::BTreeSet;

/// Base lines that generate a Fano plane: {0, 1, 3}, its mirror image and two
/// translates. Property tests run against every one of them.
pub const VALID_BASE_LINES: [[u8; 3]; 4] = [[0, 1, 3], [0, 2, 3], [1, 2, 4], [0, 4, 5]];

pub fn planes() -> Vec<FanoPlane> {
    VALID_BASE_LINES
        .iter()
        .map(|&base| FanoPlane::with_base_line(base).unwrap())
        .collect()
}

/// All unordered pairs of distinct points.
pub fn point_pairs() -> impl Iterator<Item = (Point, Point)> {
    Point::all().flat_map(|a| Point::all().filter(move |&b| a < b).map(move |b| (a, b)))
}

/// All unordered pairs of distinct lines.
pub fn line_pairs() -> impl Iterator<Item = (LineId, LineId)> {
    LineId::all().flat_map(|i| LineId::all().filter(move |&j| i < j).map(move |j| (i, j)))
}

/// Lines as an order-independent set.
pub fn line_set(lines: &[Line; 7]) -> BTreeSet<Line> {
    lines.iter().copied().collect()
}

pub fn set_of(points: &[Point]) -> PointSet {
    PointSet::from_points(points)
}
