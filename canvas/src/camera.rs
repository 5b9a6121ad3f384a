#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_RATE};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned world rectangle, edges in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// View state for pan/zoom over the world.
///
/// `tx` / `ty` are the pan offset in canvas pixels.
/// `scale` is the zoom factor (1.0 = no zoom), kept within [`MIN_ZOOM`, `MAX_ZOOM`].
///
/// The screen mapping is `screen = world * scale + (tx, ty)`: translate by the
/// pan, then scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub tx: f64,
    pub ty: f64,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { tx: 0.0, ty: 0.0, scale: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (canvas pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.tx) / self.scale,
            y: (screen.y - self.ty) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (canvas pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.tx,
            y: world.y * self.scale + self.ty,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// The world rectangle covered by a `width` × `height` canvas.
    #[must_use]
    pub fn visible_world_rect(&self, width: f64, height: f64) -> WorldRect {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0));
        let bottom_right = self.screen_to_world(Point::new(width, height));
        WorldRect {
            left: top_left.x,
            top: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
        }
    }

    /// Zoom by one wheel step while keeping the world point under `cursor` fixed on screen.
    ///
    /// `cursor` is relative to the canvas. Positive `delta_y` zooms out.
    pub fn zoom_at(&mut self, cursor: Point, delta_y: f64) {
        let zoom = (-delta_y * WHEEL_ZOOM_RATE).exp();
        let new_scale = (self.scale * zoom).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_scale / self.scale;
        self.tx = cursor.x - ratio * (cursor.x - self.tx);
        self.ty = cursor.y - ratio * (cursor.y - self.ty);
        self.scale = new_scale;
    }

    /// Restore the identity view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
