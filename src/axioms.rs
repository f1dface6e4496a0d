// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Axiom verification.
//!
//! [`verify_axioms`] recomputes every invariant of the plane directly from its
//! line sequence, without consulting the lookup tables built during indexing,
//! so the result does not depend on how the structure was produced.
//!
//! The self-duality check runs the same design rules on the dual structure
//! (lines as points, the pencils of lines through each point as lines) and
//! additionally asks for an explicit correlation.

use crate::geometry::constants::{LINES_PER_POINT, NLINES, NPOINTS, POINTS_PER_LINE};
use crate::geometry::{Line, LineId, Point};
use crate::plane::FanoPlane;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter};
use tracing::warn;

/// The named properties checked by [`verify_axioms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumCount)]
pub enum Axiom {
    #[strum(to_string = "Seven lines of three points")]
    SevenLinesOfThreePoints,
    #[strum(to_string = "Each point on 3 lines")]
    EachPointOnThreeLines,
    #[strum(to_string = "Two points determine unique line")]
    TwoPointsDetermineUniqueLine,
    #[strum(to_string = "Two lines intersect at unique point")]
    TwoLinesIntersectAtUniquePoint,
    #[strum(to_string = "Self-dual")]
    SelfDual,
    #[strum(to_string = "Has 4 independent points")]
    HasFourIndependentPoints,
}

impl Axiom {
    /// The axioms a generated structure must satisfy to be accepted at all.
    pub fn structural() -> impl Iterator<Item = Axiom> {
        [
            Axiom::SevenLinesOfThreePoints,
            Axiom::EachPointOnThreeLines,
            Axiom::TwoPointsDetermineUniqueLine,
            Axiom::TwoLinesIntersectAtUniquePoint,
        ]
        .into_iter()
    }
}

/// Result of [`verify_axioms`]: one boolean per [`Axiom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxiomReport(BTreeMap<Axiom, bool>);

impl AxiomReport {
    pub fn holds(&self, axiom: Axiom) -> bool {
        self.0.get(&axiom).copied().unwrap_or(false)
    }

    pub fn all_hold(&self) -> bool {
        self.0.values().all(|&v| v)
    }

    /// Axioms that failed, in declaration order.
    pub fn failures(&self) -> Vec<Axiom> {
        self.iter().filter(|&(_, ok)| !ok).map(|(a, _)| a).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axiom, bool)> + '_ {
        self.0.iter().map(|(&a, &v)| (a, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for AxiomReport {
    /// Serialized as a map from axiom name to result.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(a, v)| (a.to_string(), v)))
    }
}

impl fmt::Display for AxiomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axiom, ok) in self.iter() {
            writeln!(f, "{} {}", if ok { "✓" } else { "✗" }, axiom)?;
        }
        Ok(())
    }
}

/// Seven blocks over a seven-element ground set, each a 7-bit mask.
type Blocks = [u8; NPOINTS];

/// Results of the four design rules on one set of blocks.
struct DesignChecks {
    blocks_of_three: bool,
    element_degree_three: bool,
    pairs_in_one_block: bool,
    blocks_meet_once: bool,
}

impl DesignChecks {
    fn run(blocks: &Blocks) -> Self {
        let blocks_of_three = blocks.len() == NLINES
            && blocks.iter().all(|b| b.count_ones() as usize == POINTS_PER_LINE);

        let element_degree_three = (0..NPOINTS).all(|e| {
            blocks.iter().filter(|&&b| b >> e & 1 != 0).count() == LINES_PER_POINT
        });

        let pairs_in_one_block = (0..NPOINTS).all(|x| {
            (x + 1..NPOINTS).all(|y| {
                let pair = (1u8 << x) | (1u8 << y);
                blocks.iter().filter(|&&b| b & pair == pair).count() == 1
            })
        });

        let blocks_meet_once = (0..NLINES).all(|i| {
            (i + 1..NLINES).all(|j| (blocks[i] & blocks[j]).count_ones() == 1)
        });

        Self {
            blocks_of_three,
            element_degree_three,
            pairs_in_one_block,
            blocks_meet_once,
        }
    }

    fn all(&self) -> bool {
        self.blocks_of_three
            && self.element_degree_three
            && self.pairs_in_one_block
            && self.blocks_meet_once
    }
}

fn primal_blocks(lines: &[Line; NLINES]) -> Blocks {
    lines.map(|line| line.to_set().bits())
}

/// Block j of the dual is the set of lines through point j.
fn dual_blocks(lines: &[Line; NLINES]) -> Blocks {
    let mut blocks = [0u8; NPOINTS];
    for (l, line) in lines.iter().enumerate() {
        for p in line.points() {
            blocks[p.as_usize()] |= 1 << l;
        }
    }
    blocks
}

/// Some four points with no three on a common line.
fn has_quadrangle(blocks: &Blocks) -> bool {
    let collinear = |mask: u8| blocks.iter().any(|&b| b & mask == mask);
    (0u8..1 << NPOINTS)
        .filter(|mask| mask.count_ones() == 4)
        .any(|mask| {
            (0..NPOINTS)
                .filter(|&e| mask >> e & 1 != 0)
                .all(|e| !collinear(mask & !(1 << e)))
        })
}

/// Recompute every axiom against the live structure of `plane`.
pub fn verify_axioms(plane: &FanoPlane) -> AxiomReport {
    let lines = plane.lines();
    let primal = DesignChecks::run(&primal_blocks(lines));
    let dual = DesignChecks::run(&dual_blocks(lines));
    let self_dual = dual.all()
        && plane.incidence_matrix().transpose().satisfies_design_identity()
        && plane.dual_correlation().is_some();

    let mut results = BTreeMap::new();
    for axiom in Axiom::iter() {
        let ok = match axiom {
            Axiom::SevenLinesOfThreePoints => primal.blocks_of_three,
            Axiom::EachPointOnThreeLines => primal.element_degree_three,
            Axiom::TwoPointsDetermineUniqueLine => primal.pairs_in_one_block,
            Axiom::TwoLinesIntersectAtUniquePoint => primal.blocks_meet_once,
            Axiom::SelfDual => self_dual,
            Axiom::HasFourIndependentPoints => has_quadrangle(&primal_blocks(lines)),
        };
        if !ok {
            warn!(%axiom, "axiom does not hold");
        }
        results.insert(axiom, ok);
    }
    AxiomReport(results)
}

impl FanoPlane {
    /// See [`verify_axioms`].
    pub fn verify_axioms(&self) -> AxiomReport {
        verify_axioms(self)
    }

    /// Whether `points` contains four points with no three collinear.
    pub fn is_quadrangle(&self, points: [Point; 4]) -> bool {
        (0..4).all(|skip| {
            let [a, b, c] = match skip {
                0 => [points[1], points[2], points[3]],
                1 => [points[0], points[2], points[3]],
                2 => [points[0], points[1], points[3]],
                _ => [points[0], points[1], points[2]],
            };
            a != b && b != c && a != c && !LineId::all().any(|l| {
                let set = self.line_set(l);
                set.contains(a) && set.contains(b) && set.contains(c)
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    fn line(a: u8, b: u8, c: u8) -> Line {
        Line::try_from_points([Point::new(a), Point::new(b), Point::new(c)]).unwrap()
    }

    #[test]
    fn test_all_axioms_hold() {
        let report = FanoPlane::new().verify_axioms();
        assert_eq!(report.len(), Axiom::COUNT);
        assert!(report.all_hold(), "{}", report);
        assert!(report.failures().is_empty());
    }

    #[test]
    fn test_axiom_names() {
        let names: Vec<String> = Axiom::iter().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "Seven lines of three points",
                "Each point on 3 lines",
                "Two points determine unique line",
                "Two lines intersect at unique point",
                "Self-dual",
                "Has 4 independent points",
            ]
        );
    }

    #[test]
    fn test_design_checks_detect_bad_blocks() {
        let lines = [
            line(0, 1, 2),
            line(1, 2, 3),
            line(2, 3, 4),
            line(3, 4, 5),
            line(4, 5, 6),
            line(0, 5, 6),
            line(0, 1, 6),
        ];
        let checks = DesignChecks::run(&primal_blocks(&lines));
        assert!(checks.blocks_of_three);
        assert!(checks.element_degree_three);
        assert!(!checks.pairs_in_one_block);
        assert!(!checks.blocks_meet_once);
    }

    #[test]
    fn test_dual_blocks_of_default_plane() {
        let plane = FanoPlane::new();
        let dual = dual_blocks(plane.lines());
        // Point 0 is on lines 0, 4 and 6.
        assert_eq!(dual[0], 0b101_0001);
        assert!(DesignChecks::run(&dual).all());
    }

    #[test]
    fn test_quadrangle() {
        let plane = FanoPlane::new();
        let p = |v: u8| Point::new(v);
        // {0, 4, 5} is line 4.
        assert!(!plane.is_quadrangle([p(0), p(1), p(4), p(5)]));
        assert!(plane.is_quadrangle([p(0), p(1), p(2), p(5)]));
        assert!(!plane.is_quadrangle([p(0), p(1), p(3), p(5)]));
        assert!(!plane.is_quadrangle([p(0), p(0), p(2), p(5)]));
        assert!(has_quadrangle(&primal_blocks(plane.lines())));
    }

    #[test]
    fn test_report_serializes_by_name() {
        let json = serde_json::to_value(FanoPlane::new().verify_axioms()).unwrap();
        assert_eq!(json["Self-dual"], serde_json::Value::Bool(true));
        assert_eq!(json.as_object().unwrap().len(), Axiom::COUNT);
    }

    #[test]
    fn test_report_display() {
        let text = FanoPlane::new().verify_axioms().to_string();
        assert_eq!(text.lines().count(), Axiom::COUNT);
        assert!(text.lines().all(|l| l.starts_with('✓')));
    }
}
