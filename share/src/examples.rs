//! Built-in example gallery.
//!
//! Every example is a Left/Right pair built with [`LocusSide::new`], so only
//! the six motion parameters differ; appearance and origin stay stock.

#[cfg(test)]
#[path = "examples_test.rs"]
mod examples_test;

use std::f64::consts::PI;

use canvas::model::{CommonParams, LocusSide, SceneConfig};

/// Motion parameters of one side: radii, angular velocities, initial angles (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideMotion {
    pub radius_hand: f64,
    pub radius_poi: f64,
    pub omega_hand: f64,
    pub omega_poi: f64,
    pub angle_hand: f64,
    pub angle_poi: f64,
}

impl SideMotion {
    const fn new(radius_hand: f64, radius_poi: f64, omega_hand: f64, omega_poi: f64, angle_hand: f64, angle_poi: f64) -> Self {
        Self { radius_hand, radius_poi, omega_hand, omega_poi, angle_hand, angle_poi }
    }

    #[must_use]
    pub fn side(&self) -> LocusSide {
        LocusSide::new(
            self.radius_hand,
            self.radius_poi,
            self.omega_hand,
            self.omega_poi,
            self.angle_hand,
            self.angle_poi,
        )
    }
}

/// A named Left/Right pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Example {
    pub name: &'static str,
    pub left: SideMotion,
    pub right: SideMotion,
}

impl Example {
    /// The scene this example produces on top of `common`, which is kept as is.
    #[must_use]
    pub fn scene(&self, common: &CommonParams) -> SceneConfig {
        SceneConfig { common: common.clone(), left: self.left.side(), right: self.right.side() }
    }
}

const DEG: f64 = PI / 180.0;

/// The gallery, in display order.
pub static EXAMPLES: [Example; 9] = [
    Example {
        name: "Clover",
        left: SideMotion::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -3.0, PI, PI),
    },
    Example {
        name: "Negative Clover",
        left: SideMotion::new(70.0, 70.0, 3.0, -1.0, 0.0, 0.0),
        right: SideMotion::new(70.0, 70.0, 3.0, -1.0, PI, PI),
    },
    Example {
        name: "Pentagram",
        left: SideMotion::new(70.0, 70.0, 1.0, -4.0, PI / 2.0 * 3.0, PI / 2.0 * 3.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -4.0, DEG * 126.0, DEG * 126.0),
    },
    Example {
        name: "Clear Pentagram",
        left: SideMotion::new(70.0, 70.0, 1.0, -2.0, DEG * 90.0, DEG * 90.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -2.0, DEG * 270.0, DEG * 270.0),
    },
    Example {
        name: "Hexagram",
        left: SideMotion::new(70.0, 70.0, 1.0, -5.0, PI / 2.0, PI / 2.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -5.0, PI / 2.0 * 3.0, PI / 2.0 * 3.0),
    },
    Example {
        name: "Clear Hexagram",
        left: SideMotion::new(70.0, 70.0, 1.0, -2.0, PI / 2.0, PI / 2.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -2.0, PI / 2.0 * 3.0, PI / 2.0 * 3.0),
    },
    Example {
        name: "Cat Eye",
        left: SideMotion::new(50.0, 100.0, 1.0, -1.0, PI / 2.0, PI / 2.0),
        right: SideMotion::new(50.0, 100.0, 1.0, -1.0, PI / 2.0 * 3.0, PI / 2.0 * 3.0),
    },
    Example {
        name: "Linear Cat Eye",
        left: SideMotion::new(70.0, 70.0, 1.0, -1.0, PI / 2.0, PI / 2.0),
        right: SideMotion::new(70.0, 70.0, 1.0, -1.0, PI / 2.0 * 3.0, PI / 2.0 * 3.0),
    },
    Example {
        name: "Isolation",
        left: SideMotion::new(70.0, 140.0, 1.0, 1.0, 0.0, PI),
        right: SideMotion::new(70.0, 140.0, 1.0, 1.0, PI, 2.0 * PI),
    },
];

/// Look up an example by name, ignoring ASCII case.
#[must_use]
pub fn find_example(name: &str) -> Option<&'static Example> {
    let name = name.trim();
    EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}
