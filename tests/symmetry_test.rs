// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cyclic automorphisms and self-duality.

mod common;

use common::{line_set, planes};
use fano_plane::symmetry::cyclic_group;
use fano_plane::{Axiom, FanoPlane, LineId, Permutation, Point};

#[test]
fn test_every_cyclic_shift_preserves_lines() {
    for plane in planes() {
        let original = line_set(plane.lines());
        for k in 0..7 {
            let perm = plane.automorphism_cyclic(k).unwrap();
            let relabelled = plane.apply_automorphism(&perm);
            assert_eq!(line_set(&relabelled), original, "shift {}", k);
            assert!(plane.is_automorphism(&perm));
        }
    }
}

#[test]
fn test_shift_zero_is_identity() {
    let plane = FanoPlane::new();
    let identity = plane.automorphism_cyclic(0).unwrap();
    assert!(identity.is_identity());
    assert_eq!(plane.apply_automorphism(&identity), *plane.lines());
    let image = plane.line_permutation(&identity).unwrap();
    assert!(LineId::all().zip(image.iter()).all(|(l, &m)| l == m));
}

#[test]
fn test_shift_maps_points_by_addition() {
    let plane = FanoPlane::new();
    for k in 0..7u8 {
        let perm = plane.automorphism_cyclic(k).unwrap();
        for p in Point::all() {
            assert_eq!(perm.apply(p).value(), (p.value() + k) % 7);
        }
    }
}

#[test]
fn test_cyclic_group_order_seven() {
    let plane = FanoPlane::new();
    let shift = plane.automorphism_cyclic(1).unwrap();
    let mut result = Permutation::identity();
    for _ in 0..7 {
        result = result.then(&shift);
    }
    assert!(result.is_identity());
    assert_eq!(shift.order(), 7);
    assert_eq!(cyclic_group()[3], plane.automorphism_cyclic(3).unwrap());
}

#[test]
fn test_induced_line_permutation_is_bijective() {
    let plane = FanoPlane::new();
    for perm in cyclic_group() {
        let image = plane.line_permutation(&perm).unwrap();
        let mut seen = [false; 7];
        for l in image {
            assert!(!seen[l.as_usize()]);
            seen[l.as_usize()] = true;
        }
    }
}

#[test]
fn test_self_duality() {
    for plane in planes() {
        assert!(plane.verify_axioms().holds(Axiom::SelfDual));
        let corr = plane.dual_correlation().unwrap();
        for p in Point::all() {
            for l in LineId::all() {
                let primal = plane.line(l).unwrap().contains(p);
                let dual = plane.line(corr.line_of(p)).unwrap().contains(corr.point_of(l));
                assert_eq!(primal, dual);
            }
        }
        assert!(plane.incidence_matrix().transpose().satisfies_design_identity());
    }
}
