#![allow(clippy::float_cmp)]

use share::find_example;

use super::*;

fn side(omega_poi: f64) -> LocusSide {
    LocusSide::new(60.0, 80.0, 1.0, omega_poi, 0.3, 0.6)
}

// =============================================================
// Sync L-R
// =============================================================

#[test]
fn left_edit_without_sync_leaves_right() {
    let mut state = ParamsState::default();
    let right_before = state.right.clone();
    state.set_side(SideId::Left, side(-2.0));
    assert_eq!(state.left, side(-2.0));
    assert_eq!(state.right, right_before);
}

#[test]
fn left_edit_with_sync_mirrors_right() {
    let mut state = ParamsState::default();
    state.toggle_sync();
    state.set_side(SideId::Left, side(-2.0));
    assert_eq!(state.right.rotation.angle_hand, 0.3 + PI);
    assert_eq!(state.right.rotation.angle_poi, 0.6 + PI);
    assert_eq!(state.right.rotation.omega_poi, -2.0);
    assert_eq!(state.right.object_color, state.left.object_color);
}

#[test]
fn right_edit_never_touches_left() {
    let mut state = ParamsState::default();
    state.toggle_sync();
    let left_before = state.left.clone();
    state.set_side(SideId::Right, side(5.0));
    assert_eq!(state.left, left_before);
    assert_eq!(state.right, side(5.0));
}

#[test]
fn toggling_sync_alone_changes_no_side() {
    let mut state = ParamsState::default();
    let scene = state.scene();
    state.toggle_sync();
    assert!(state.sync_lr);
    assert_eq!(state.scene(), scene);
}

#[test]
fn edit_side_goes_through_sync() {
    let mut state = ParamsState::default();
    state.toggle_sync();
    state.edit_side(SideId::Left, |s| s.rotation.radius_hand = 33.0);
    assert_eq!(state.left.rotation.radius_hand, 33.0);
    assert_eq!(state.right.rotation.radius_hand, 33.0);
}

// =============================================================
// Examples / restore / reset
// =============================================================

#[test]
fn example_turns_sync_off() {
    let mut state = ParamsState::default();
    state.toggle_sync();
    state.common.afterimage = 0.3;
    let cat_eye = find_example("Cat Eye").unwrap();
    state.apply_example(cat_eye);
    assert!(!state.sync_lr);
    assert_eq!(state.left.rotation.radius_poi, 100.0);
    assert_eq!(state.right.rotation.angle_hand, PI / 2.0 * 3.0);
    assert_eq!(state.common.afterimage, 0.3);
}

#[test]
fn restore_replaces_common_and_sides() {
    let mut state = ParamsState::default();
    let mut scene = SceneConfig::default();
    scene.common.speed_rate = 4.0;
    scene.left = side(9.0);
    state.restore(scene.clone());
    assert_eq!(state.scene(), scene);
}

#[test]
fn reset_restores_defaults_and_disables_sync() {
    let mut state = ParamsState::default();
    state.toggle_sync();
    state.common.scale = 3.0;
    state.set_side(SideId::Left, side(1.0));
    state.reset();
    assert_eq!(state, ParamsState::default());
    assert_eq!(state.scene(), SceneConfig::default());
}

// =============================================================
// Field parsing
// =============================================================

#[test]
fn parse_number_clamps() {
    assert_eq!(parse_number("1.5", Some(0.0), Some(1.0)), Some(1.0));
    assert_eq!(parse_number("-3", Some(0.1), Some(10.0)), Some(0.1));
    assert_eq!(parse_number("7", None, None), Some(7.0));
}

#[test]
fn parse_number_blank_is_zero() {
    assert_eq!(parse_number("", None, None), Some(0.0));
    assert_eq!(parse_number("  ", Some(1.0), Some(240.0)), Some(1.0));
}

#[test]
fn parse_number_rejects_garbage() {
    assert_eq!(parse_number("abc", None, None), None);
    assert_eq!(parse_number("NaN", None, None), None);
    assert_eq!(parse_number("inf", None, None), None);
}

#[test]
fn degrees_round_trip() {
    assert!((deg_to_rad(180.0) - PI).abs() < 1e-12);
    assert!((rad_to_deg(PI / 2.0) - 90.0).abs() < 1e-12);
    assert!((rad_to_deg(deg_to_rad(126.0)) - 126.0).abs() < 1e-9);
}
