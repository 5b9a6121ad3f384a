//! Scene parameters as edited in the panels.
//!
//! DESIGN
//! ======
//! This is the externally owned configuration the canvas engine snapshots.
//! Edits replace fields wholesale; the engine restarts its animation from
//! [`ParamsState::scene`] whenever that value changes.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use std::f64::consts::PI;

use canvas::model::{CommonParams, LocusSide, SceneConfig};
use share::Example;

/// Which of the two sides a panel edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideId {
    Left,
    Right,
}

impl SideId {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParamsState {
    pub common: CommonParams,
    pub left: LocusSide,
    pub right: LocusSide,
    /// While on, every Left edit also rewrites Right as Left's mirror.
    pub sync_lr: bool,
}

impl Default for ParamsState {
    fn default() -> Self {
        Self::from_scene(SceneConfig::default())
    }
}

impl ParamsState {
    #[must_use]
    pub fn from_scene(scene: SceneConfig) -> Self {
        Self { common: scene.common, left: scene.left, right: scene.right, sync_lr: false }
    }

    /// Snapshot for the engine, share links, and presets.
    #[must_use]
    pub fn scene(&self) -> SceneConfig {
        SceneConfig { common: self.common.clone(), left: self.left.clone(), right: self.right.clone() }
    }

    #[must_use]
    pub fn side(&self, which: SideId) -> &LocusSide {
        match which {
            SideId::Left => &self.left,
            SideId::Right => &self.right,
        }
    }

    /// Replace one side. With sync on, a Left edit also mirrors into Right.
    pub fn set_side(&mut self, which: SideId, side: LocusSide) {
        match which {
            SideId::Left => {
                if self.sync_lr {
                    self.right = side.mirrored();
                }
                self.left = side;
            }
            SideId::Right => self.right = side,
        }
    }

    /// Apply `edit` to a copy of one side and store it through [`set_side`](Self::set_side).
    pub fn edit_side(&mut self, which: SideId, edit: impl FnOnce(&mut LocusSide)) {
        let mut side = self.side(which).clone();
        edit(&mut side);
        self.set_side(which, side);
    }

    pub fn toggle_sync(&mut self) {
        self.sync_lr = !self.sync_lr;
    }

    /// Load an example's sides. Sync is turned off so Right keeps the example's own angles.
    pub fn apply_example(&mut self, example: &Example) {
        self.sync_lr = false;
        self.left = example.left.side();
        self.right = example.right.side();
    }

    /// Take over a decoded share link or a loaded preset. Sync is left as is.
    pub fn restore(&mut self, scene: SceneConfig) {
        self.common = scene.common;
        self.left = scene.left;
        self.right = scene.right;
    }

    /// Stock parameters, Clover sides, sync off.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse a numeric field, clamping to the optional bounds.
///
/// Blank input reads as zero; anything else that isn't a number is rejected
/// so the field keeps its previous value.
#[must_use]
pub fn parse_number(text: &str, min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let text = text.trim();
    let value = if text.is_empty() { 0.0 } else { text.parse::<f64>().ok()? };
    if !value.is_finite() {
        return None;
    }
    Some(value.max(min.unwrap_or(f64::NEG_INFINITY)).min(max.unwrap_or(f64::INFINITY)))
}

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad / (PI / 180.0)
}
