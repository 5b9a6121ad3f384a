//! Kinematic model: the per-side rotating-arm description and global render params.
//!
//! Every type here is plain data. Field names serialize in camelCase so a
//! [`SceneConfig`] round-trips through the same JSON shape the share links use.
//!
//! The two-link chain is kept flat: `rotation.radius_poi` / `rotation.angle_poi`
//! are measured from the hand's *position*, not from the origin.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Default pivot for both sides, in world units.
pub const DEFAULT_ORIGIN: (f64, f64) = (320.0, 170.0);

/// Rotation parameters of one two-link chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationParams {
    /// Orbit radius of the hand around the origin.
    pub radius_hand: f64,
    /// Orbit radius of the poi head around the hand.
    pub radius_poi: f64,
    /// Hand angular velocity; the sign picks the direction.
    pub omega_hand: f64,
    /// Poi angular velocity; the sign picks the direction.
    pub omega_poi: f64,
    /// Hand angle in radians. Accumulates without wraparound.
    pub angle_hand: f64,
    /// Poi angle in radians. Accumulates without wraparound.
    pub angle_poi: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectVisibility {
    pub origin: bool,
    pub hand: bool,
    pub poi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentVisibility {
    /// Hand → poi line.
    pub arm: bool,
    /// Origin → hand line.
    pub chain: bool,
}

/// Dot radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectSize {
    pub origin: f64,
    pub hand: f64,
    pub poi: f64,
}

/// Segment stroke widths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentSize {
    pub arm: f64,
    pub chain: f64,
}

/// Dot colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectColor {
    pub origin: String,
    pub hand: String,
    pub poi: String,
}

/// Segment colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentColor {
    pub arm: String,
    pub chain: String,
}

/// One complete, independently configured rotating system ("Left" or "Right").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocusSide {
    pub object_visible: ObjectVisibility,
    pub object_size: ObjectSize,
    pub object_color: ObjectColor,
    pub rotation: RotationParams,
    pub segment_visible: SegmentVisibility,
    pub segment_size: SegmentSize,
    pub segment_color: SegmentColor,
}

impl LocusSide {
    /// A fully visible side with the stock sizes and palette, pivoting at [`DEFAULT_ORIGIN`].
    #[must_use]
    pub fn new(
        radius_hand: f64,
        radius_poi: f64,
        omega_hand: f64,
        omega_poi: f64,
        angle_hand: f64,
        angle_poi: f64,
    ) -> Self {
        Self {
            object_visible: ObjectVisibility { origin: true, hand: true, poi: true },
            object_size: ObjectSize { origin: 2.0, hand: 4.0, poi: 10.0 },
            object_color: ObjectColor {
                origin: "#888888".to_owned(),
                hand: "#00ffcc".to_owned(),
                poi: "#ffcc00".to_owned(),
            },
            rotation: RotationParams {
                radius_hand,
                radius_poi,
                omega_hand,
                omega_poi,
                angle_hand,
                angle_poi,
                origin_x: DEFAULT_ORIGIN.0,
                origin_y: DEFAULT_ORIGIN.1,
            },
            segment_visible: SegmentVisibility { arm: true, chain: true },
            segment_size: SegmentSize { arm: 2.0, chain: 2.0 },
            segment_color: SegmentColor { arm: "#ffffff".to_owned(), chain: "#999999".to_owned() },
        }
    }

    /// The same side with both initial angles advanced by half a turn.
    ///
    /// Used to derive the Right side from the Left one when the two are synced.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut side = self.clone();
        side.rotation.angle_hand += PI;
        side.rotation.angle_poi += PI;
        side
    }
}

/// How many sides are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LocusCount {
    /// Left side only.
    One,
    /// Left and Right.
    #[default]
    Two,
}

impl From<LocusCount> for u8 {
    fn from(count: LocusCount) -> Self {
        match count {
            LocusCount::One => 1,
            LocusCount::Two => 2,
        }
    }
}

impl TryFrom<u8> for LocusCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(format!("numberOfLocus must be 1 or 2, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridParams {
    pub show: bool,
    pub color: String,
}

/// Global rendering parameters shared by both sides.
///
/// Missing fields deserialize to their defaults, so a partial `common` object
/// merges over the stock values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonParams {
    /// Display hint only; frame pacing follows the display refresh.
    pub fps: f64,
    /// Trail persistence, 0 (no trail) to 1 (never cleared).
    pub afterimage: f64,
    /// Multiplier on elapsed time.
    pub speed_rate: f64,
    /// Multiplier on every radius.
    pub scale: f64,
    pub number_of_locus: LocusCount,
    pub background_color: String,
    pub grid: GridParams,
}

impl Default for CommonParams {
    fn default() -> Self {
        Self {
            fps: 30.0,
            afterimage: 0.9,
            speed_rate: 1.0,
            scale: 1.0,
            number_of_locus: LocusCount::Two,
            background_color: "#000000".to_owned(),
            grid: GridParams { show: true, color: "#333333".to_owned() },
        }
    }
}

/// The complete, externally owned configuration: what a share link or preset carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    pub common: CommonParams,
    pub left: LocusSide,
    pub right: LocusSide,
}

impl Default for SceneConfig {
    /// Stock parameters with the Clover pair of sides.
    fn default() -> Self {
        Self {
            common: CommonParams::default(),
            left: LocusSide::new(70.0, 70.0, 1.0, -3.0, 0.0, 0.0),
            right: LocusSide::new(70.0, 70.0, 1.0, -3.0, PI, PI),
        }
    }
}
