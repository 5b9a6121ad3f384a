#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use super::*;
use crate::model::LocusCount;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// =============================================================
// compose
// =============================================================

#[test]
fn zero_angles_lay_the_chain_along_x() {
    let side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    let pose = compose(&side, 1.0);
    assert!(point_approx_eq(pose.origin, Point::new(320.0, 170.0)));
    assert!(point_approx_eq(pose.hand, Point::new(390.0, 170.0)));
    assert!(point_approx_eq(pose.poi, Point::new(460.0, 170.0)));
}

#[test]
fn poi_is_relative_to_hand_position() {
    // Hand straight down, poi pointing left: poi sits below the origin.
    let side = LocusSide::new(50.0, 50.0, 0.0, 0.0, PI / 2.0, PI);
    let pose = compose(&side, 1.0);
    assert!(point_approx_eq(pose.hand, Point::new(320.0, 220.0)));
    assert!(point_approx_eq(pose.poi, Point::new(270.0, 220.0)));
}

#[test]
fn scale_multiplies_radii_not_origin() {
    let side = LocusSide::new(70.0, 30.0, 0.0, 0.0, 0.0, 0.0);
    let pose = compose(&side, 2.0);
    assert!(point_approx_eq(pose.origin, Point::new(320.0, 170.0)));
    assert!(point_approx_eq(pose.hand, Point::new(460.0, 170.0)));
    assert!(point_approx_eq(pose.poi, Point::new(520.0, 170.0)));
}

#[test]
fn zero_radius_collapses_onto_parent() {
    let side = LocusSide::new(0.0, 0.0, 1.0, 1.0, 1.2, 2.3);
    let pose = compose(&side, 1.0);
    assert_eq!(pose.hand, pose.origin);
    assert_eq!(pose.poi, pose.hand);
}

#[test]
fn clover_sides_are_point_symmetric() {
    let scene = crate::model::SceneConfig::default();
    let l = compose(&scene.left, 1.0);
    let r = compose(&scene.right, 1.0);
    assert!(point_approx_eq(r.poi, Point::new(320.0 - 140.0, 170.0)));
    assert!(approx_eq(l.poi.x - 320.0, -(r.poi.x - 320.0)));
}

// =============================================================
// active_sides
// =============================================================

#[test]
fn two_sides_draw_left_then_right() {
    let scene = crate::model::SceneConfig::default();
    let sides = active_sides(&scene.common, &scene.left, &scene.right);
    assert_eq!(sides.len(), 2);
    assert!(std::ptr::eq(sides[0], &scene.left));
    assert!(std::ptr::eq(sides[1], &scene.right));
}

#[test]
fn one_side_draws_left_only() {
    let mut scene = crate::model::SceneConfig::default();
    scene.common.number_of_locus = LocusCount::One;
    let sides = active_sides(&scene.common, &scene.left, &scene.right);
    assert_eq!(sides.len(), 1);
    assert!(std::ptr::eq(sides[0], &scene.left));
}
