//! Scene composer: derives the hand and poi positions of each active side.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::camera::Point;
use crate::model::{CommonParams, LocusCount, LocusSide};

/// World-space positions of one side's three joints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePose {
    pub origin: Point,
    pub hand: Point,
    pub poi: Point,
}

/// Compute the joint positions of `side` with radii multiplied by `scale`.
///
/// The poi orbits the hand's position. `scale` never touches the origin.
#[must_use]
pub fn compose(side: &LocusSide, scale: f64) -> SidePose {
    let r = &side.rotation;
    let origin = Point::new(r.origin_x, r.origin_y);
    let (sin_h, cos_h) = r.angle_hand.sin_cos();
    let hand = Point::new(
        origin.x + cos_h * r.radius_hand * scale,
        origin.y + sin_h * r.radius_hand * scale,
    );
    let (sin_p, cos_p) = r.angle_poi.sin_cos();
    let poi = Point::new(
        hand.x + cos_p * r.radius_poi * scale,
        hand.y + sin_p * r.radius_poi * scale,
    );
    SidePose { origin, hand, poi }
}

/// The sides that are drawn this frame, Left first.
#[must_use]
pub fn active_sides<'a>(common: &CommonParams, left: &'a LocusSide, right: &'a LocusSide) -> Vec<&'a LocusSide> {
    match common.number_of_locus {
        LocusCount::One => vec![left],
        LocusCount::Two => vec![left, right],
    }
}
