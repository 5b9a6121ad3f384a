//! Field tables for the General and side panels.
//!
//! Each panel section is a static list of descriptors holding plain `fn`
//! accessors, so the components render them in a loop and the tests can
//! drive every field without a DOM.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use canvas::model::{CommonParams, LocusSide};

use super::params::{deg_to_rad, rad_to_deg};

/// A numeric input bound to one `f64` of `T`.
pub struct NumField<T: 'static> {
    pub label: &'static str,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
    /// Value as shown in the input (degrees for angles).
    pub get: fn(&T) -> f64,
    /// Store a value given in display units.
    pub set: fn(&mut T, f64),
}

/// A `#rrggbb` color bound to one string of `T`.
pub struct ColorField<T: 'static> {
    pub label: &'static str,
    pub get: fn(&T) -> &str,
    pub set: fn(&mut T, String),
}

/// An ON/OFF toggle bound to one flag of `T`.
pub struct ToggleField<T: 'static> {
    pub label: &'static str,
    pub get: fn(&T) -> bool,
    pub set: fn(&mut T, bool),
}

/// One titled block of a side panel. Field names follow the panel labels,
/// not the drawing order: "Arm" edits the `arm` segment wherever it is listed.
pub struct SideSection {
    pub title: &'static str,
    pub toggles: &'static [ToggleField<LocusSide>],
    pub numbers: &'static [NumField<LocusSide>],
    pub colors: &'static [ColorField<LocusSide>],
}

// =============================================================
// General panel
// =============================================================

pub const COMMON_NUMBERS: &[NumField<CommonParams>] = &[
    NumField { label: "FPS", min: Some(1.0), max: Some(240.0), step: 1.0, get: |c| c.fps, set: |c, v| c.fps = v },
    NumField {
        label: "Afterimage (0..1)",
        min: Some(0.0),
        max: Some(1.0),
        step: 0.05,
        get: |c| c.afterimage,
        set: |c, v| c.afterimage = v,
    },
    NumField {
        label: "Speed rate",
        min: Some(0.1),
        max: Some(10.0),
        step: 0.1,
        get: |c| c.speed_rate,
        set: |c, v| c.speed_rate = v,
    },
    NumField { label: "Scale", min: Some(0.1), max: Some(10.0), step: 0.1, get: |c| c.scale, set: |c, v| c.scale = v },
];

pub const BACKGROUND_COLOR: ColorField<CommonParams> =
    ColorField { label: "Background color", get: |c| c.background_color.as_str(), set: |c, v| c.background_color = v };

pub const GRID_SHOW: ToggleField<CommonParams> =
    ToggleField { label: "Show", get: |c| c.grid.show, set: |c, v| c.grid.show = v };

pub const GRID_COLOR: ColorField<CommonParams> =
    ColorField { label: "Color", get: |c| c.grid.color.as_str(), set: |c, v| c.grid.color = v };

// =============================================================
// Side panels
// =============================================================

pub const SPINNER: SideSection = SideSection {
    title: "Spinner",
    toggles: &[
        ToggleField { label: "Origin", get: |s| s.object_visible.origin, set: |s, v| s.object_visible.origin = v },
        ToggleField { label: "Arm", get: |s| s.segment_visible.arm, set: |s, v| s.segment_visible.arm = v },
        ToggleField { label: "Hand", get: |s| s.object_visible.hand, set: |s, v| s.object_visible.hand = v },
    ],
    numbers: &[
        NumField {
            label: "Origin Size",
            min: Some(0.0),
            max: None,
            step: 1.0,
            get: |s| s.object_size.origin,
            set: |s, v| s.object_size.origin = v,
        },
        NumField {
            label: "Arm Size",
            min: None,
            max: None,
            step: 0.5,
            get: |s| s.segment_size.arm,
            set: |s, v| s.segment_size.arm = v,
        },
        NumField {
            label: "Hand Size",
            min: Some(0.0),
            max: None,
            step: 1.0,
            get: |s| s.object_size.hand,
            set: |s, v| s.object_size.hand = v,
        },
    ],
    colors: &[
        ColorField { label: "Origin Color", get: |s| s.object_color.origin.as_str(), set: |s, v| s.object_color.origin = v },
        ColorField { label: "Arm Color", get: |s| s.segment_color.arm.as_str(), set: |s, v| s.segment_color.arm = v },
        ColorField { label: "Hand Color", get: |s| s.object_color.hand.as_str(), set: |s, v| s.object_color.hand = v },
    ],
};

pub const SPINNER_ROTATION: SideSection = SideSection {
    title: "Spinner Rotation",
    toggles: &[],
    numbers: &[
        NumField {
            label: "Origin X",
            min: None,
            max: None,
            step: 1.0,
            get: |s| s.rotation.origin_x,
            set: |s, v| s.rotation.origin_x = v,
        },
        NumField {
            label: "Origin Y",
            min: None,
            max: None,
            step: 1.0,
            get: |s| s.rotation.origin_y,
            set: |s, v| s.rotation.origin_y = v,
        },
        NumField {
            label: "Hand Radius",
            min: None,
            max: None,
            step: 1.0,
            get: |s| s.rotation.radius_hand,
            set: |s, v| s.rotation.radius_hand = v,
        },
        NumField {
            label: "Hand Angular Velocity (rev/s)",
            min: None,
            max: None,
            step: 0.1,
            get: |s| s.rotation.omega_hand,
            set: |s, v| s.rotation.omega_hand = v,
        },
        NumField {
            label: "Hand Initial Angle (°)",
            min: None,
            max: None,
            step: 5.0,
            get: |s| rad_to_deg(s.rotation.angle_hand),
            set: |s, v| s.rotation.angle_hand = deg_to_rad(v),
        },
    ],
    colors: &[],
};

pub const POI: SideSection = SideSection {
    title: "Poi",
    toggles: &[
        ToggleField { label: "Head", get: |s| s.object_visible.poi, set: |s, v| s.object_visible.poi = v },
        ToggleField { label: "Chain", get: |s| s.segment_visible.chain, set: |s, v| s.segment_visible.chain = v },
    ],
    numbers: &[
        NumField {
            label: "Head Size",
            min: Some(0.0),
            max: None,
            step: 1.0,
            get: |s| s.object_size.poi,
            set: |s, v| s.object_size.poi = v,
        },
        NumField {
            label: "Chain Size",
            min: Some(0.0),
            max: None,
            step: 0.5,
            get: |s| s.segment_size.chain,
            set: |s, v| s.segment_size.chain = v,
        },
    ],
    colors: &[
        ColorField { label: "Head Color", get: |s| s.object_color.poi.as_str(), set: |s, v| s.object_color.poi = v },
        ColorField { label: "Chain Color", get: |s| s.segment_color.chain.as_str(), set: |s, v| s.segment_color.chain = v },
    ],
};

pub const POI_ROTATION: SideSection = SideSection {
    title: "Poi Rotation",
    toggles: &[],
    numbers: &[
        NumField {
            label: "Head Radius",
            min: None,
            max: None,
            step: 1.0,
            get: |s| s.rotation.radius_poi,
            set: |s, v| s.rotation.radius_poi = v,
        },
        NumField {
            label: "Head Angular Velocity (rev/s)",
            min: None,
            max: None,
            step: 0.1,
            get: |s| s.rotation.omega_poi,
            set: |s, v| s.rotation.omega_poi = v,
        },
        NumField {
            label: "Head Initial Angle (°)",
            min: None,
            max: None,
            step: 5.0,
            get: |s| rad_to_deg(s.rotation.angle_poi),
            set: |s, v| s.rotation.angle_poi = deg_to_rad(v),
        },
    ],
    colors: &[],
};

/// Side panel sections, top to bottom.
pub const SIDE_SECTIONS: [&SideSection; 4] = [&SPINNER, &SPINNER_ROTATION, &POI, &POI_ROTATION];

/// Text shown in a numeric input. Trims float noise from degree conversions.
#[must_use]
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1e6).round() / 1e6;
    if rounded.abs() < 1e-9 { "0".to_owned() } else { format!("{rounded}") }
}
