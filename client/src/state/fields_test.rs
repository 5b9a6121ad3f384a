#![allow(clippy::float_cmp)]

use std::f64::consts::PI;

use canvas::model::{CommonParams, LocusSide};

use super::*;
use crate::state::params::parse_number;

fn find<'a, T: 'static>(fields: &'a [NumField<T>], label: &str) -> &'a NumField<T> {
    fields.iter().find(|f| f.label == label).unwrap()
}

fn side_number(label: &str) -> &'static NumField<LocusSide> {
    SIDE_SECTIONS.iter().flat_map(|s| s.numbers.iter()).find(|f| f.label == label).unwrap()
}

/// Run text through the same path an input event takes.
fn type_into<T: 'static>(field: &NumField<T>, target: &mut T, text: &str) {
    if let Some(v) = parse_number(text, field.min, field.max) {
        (field.set)(target, v);
    }
}

// =============================================================
// General
// =============================================================

#[test]
fn general_bounds() {
    let mut common = CommonParams::default();
    type_into(find(COMMON_NUMBERS, "FPS"), &mut common, "1000");
    assert_eq!(common.fps, 240.0);
    type_into(find(COMMON_NUMBERS, "Afterimage (0..1)"), &mut common, "-1");
    assert_eq!(common.afterimage, 0.0);
    type_into(find(COMMON_NUMBERS, "Speed rate"), &mut common, "0");
    assert_eq!(common.speed_rate, 0.1);
    type_into(find(COMMON_NUMBERS, "Scale"), &mut common, "12");
    assert_eq!(common.scale, 10.0);
}

#[test]
fn garbage_keeps_previous_value() {
    let mut common = CommonParams::default();
    type_into(find(COMMON_NUMBERS, "Scale"), &mut common, "x2");
    assert_eq!(common.scale, 1.0);
}

#[test]
fn grid_fields() {
    let mut common = CommonParams::default();
    (GRID_SHOW.set)(&mut common, false);
    (GRID_COLOR.set)(&mut common, "#123456".to_owned());
    (BACKGROUND_COLOR.set)(&mut common, "#ffffff".to_owned());
    assert!(!(GRID_SHOW.get)(&common));
    assert_eq!((GRID_COLOR.get)(&common), "#123456");
    assert_eq!(common.background_color, "#ffffff");
}

// =============================================================
// Side sections
// =============================================================

#[test]
fn sections_in_panel_order() {
    let titles: Vec<_> = SIDE_SECTIONS.iter().map(|s| s.title).collect();
    assert_eq!(titles, ["Spinner", "Spinner Rotation", "Poi", "Poi Rotation"]);
}

#[test]
fn angles_edit_in_degrees() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, PI, 0.0);
    let hand = side_number("Hand Initial Angle (°)");
    assert!(((hand.get)(&side) - 180.0).abs() < 1e-9);
    type_into(hand, &mut side, "90");
    assert!((side.rotation.angle_hand - PI / 2.0).abs() < 1e-12);
    type_into(side_number("Head Initial Angle (°)"), &mut side, "-45");
    assert!((side.rotation.angle_poi + PI / 4.0).abs() < 1e-12);
}

#[test]
fn arm_and_chain_map_to_same_named_segments() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    type_into(side_number("Arm Size"), &mut side, "3.5");
    type_into(side_number("Chain Size"), &mut side, "-1");
    assert_eq!(side.segment_size.arm, 3.5);
    assert_eq!(side.segment_size.chain, 0.0);
}

#[test]
fn arm_size_and_radii_are_unbounded() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    type_into(side_number("Arm Size"), &mut side, "-2");
    type_into(side_number("Hand Radius"), &mut side, "-40");
    assert_eq!(side.segment_size.arm, -2.0);
    assert_eq!(side.rotation.radius_hand, -40.0);
}

#[test]
fn sizes_floor_at_zero() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    type_into(side_number("Head Size"), &mut side, "-10");
    type_into(side_number("Origin Size"), &mut side, "");
    assert_eq!(side.object_size.poi, 0.0);
    assert_eq!(side.object_size.origin, 0.0);
}

#[test]
fn origin_accepts_negative() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    type_into(side_number("Origin X"), &mut side, "-25");
    assert_eq!(side.rotation.origin_x, -25.0);
}

#[test]
fn toggles_flip_visibility() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    for section in SIDE_SECTIONS {
        for toggle in section.toggles {
            (toggle.set)(&mut side, false);
            assert!(!(toggle.get)(&side), "{}", toggle.label);
        }
    }
    assert!(!side.object_visible.origin);
    assert!(!side.segment_visible.arm && !side.segment_visible.chain);
}

#[test]
fn colors_round_trip_through_accessors() {
    let mut side = LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0);
    for section in SIDE_SECTIONS {
        for color in section.colors {
            (color.set)(&mut side, "#abcdef".to_owned());
            assert_eq!((color.get)(&side), "#abcdef");
        }
    }
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_trims_conversion_noise() {
    assert_eq!(format_number(rad_to_deg(deg_to_rad(126.0))), "126");
    assert_eq!(format_number(0.05), "0.05");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(-3.0), "-3");
}
