//! Rendering: draws one animation frame through a [`Painter`].
//!
//! The draw functions receive read-only views of the configuration, the
//! current working sides and the camera, and produce pixels. They never
//! mutate application state.
//!
//! [`Painter`] is implemented for [`web_sys::CanvasRenderingContext2d`]; every
//! fallible `Canvas2D` call propagates its `JsValue` error to the caller
//! ([`crate::driver::AnimationDriver::tick`]).

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Point};
use crate::consts::{GRID_CRISP_OFFSET, GRID_STEP};
use crate::model::{CommonParams, LocusSide};
use crate::scene::{self, SidePose};

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// A straight stroke from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// The drawing primitives the renderer needs.
///
/// Coordinates passed to `stroke_lines` / `fill_circle` are in whatever space
/// the current transform establishes: screen space after `reset_transform`,
/// world space after `apply_camera`.
pub trait Painter {
    type Error;

    /// Return to the identity (screen-space) transform.
    fn reset_transform(&mut self) -> Result<(), Self::Error>;

    /// Fill the whole canvas with `color` at opacity `alpha`, then restore full opacity.
    fn fill_screen(&mut self, color: &str, alpha: f64, viewport: Viewport) -> Result<(), Self::Error>;

    /// Translate by the pan offset, then scale by the zoom.
    fn apply_camera(&mut self, camera: &Camera) -> Result<(), Self::Error>;

    /// Stroke every line as one path.
    fn stroke_lines(&mut self, lines: &[Line], color: &str, width: f64) -> Result<(), Self::Error>;

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;
}

/// Background fill opacity for an afterimage factor.
///
/// `1.0` never clears (trails persist forever); `0.0` fully clears every frame.
#[must_use]
pub fn background_alpha(afterimage: f64) -> f64 {
    1.0 - afterimage.clamp(0.0, 1.0)
}

/// Grid lines covering the world rectangle visible through `camera`.
#[must_use]
pub fn grid_lines(camera: &Camera, viewport: Viewport) -> Vec<Line> {
    let vw = camera.visible_world_rect(viewport.width, viewport.height);
    let mut lines = Vec::new();

    let mut x = (vw.left / GRID_STEP).floor() * GRID_STEP;
    while x <= vw.right {
        lines.push(Line {
            from: Point::new(x + GRID_CRISP_OFFSET, vw.top),
            to: Point::new(x + GRID_CRISP_OFFSET, vw.bottom),
        });
        x += GRID_STEP;
    }

    let mut y = (vw.top / GRID_STEP).floor() * GRID_STEP;
    while y <= vw.bottom {
        lines.push(Line {
            from: Point::new(vw.left, y + GRID_CRISP_OFFSET),
            to: Point::new(vw.right, y + GRID_CRISP_OFFSET),
        });
        y += GRID_STEP;
    }

    lines
}

/// Paint the full-opacity background that precedes the first frame.
///
/// # Errors
///
/// Returns the painter's error if any primitive fails.
pub fn draw_initial_clear<P: Painter>(painter: &mut P, common: &CommonParams, viewport: Viewport) -> Result<(), P::Error> {
    painter.reset_transform()?;
    painter.fill_screen(&common.background_color, 1.0, viewport)
}

/// Draw one frame: afterimage fill, grid, then every side in order.
///
/// # Errors
///
/// Returns the painter's error if any primitive fails; nothing after the
/// failing call is drawn.
pub fn draw_frame<P: Painter>(
    painter: &mut P,
    common: &CommonParams,
    sides: &[&LocusSide],
    camera: &Camera,
    viewport: Viewport,
) -> Result<(), P::Error> {
    // Layer 1: afterimage fill in screen space.
    painter.reset_transform()?;
    painter.fill_screen(&common.background_color, background_alpha(common.afterimage), viewport)?;

    // Layer 2: world space.
    painter.apply_camera(camera)?;
    if common.grid.show {
        let lines = grid_lines(camera, viewport);
        painter.stroke_lines(&lines, &common.grid.color, camera.screen_dist_to_world(1.0))?;
    }

    // Layer 3: sides, segments before dots.
    for side in sides {
        let pose = scene::compose(side, common.scale);
        draw_side(painter, side, &pose)?;
    }

    Ok(())
}

fn draw_side<P: Painter>(painter: &mut P, side: &LocusSide, pose: &SidePose) -> Result<(), P::Error> {
    if side.segment_visible.chain {
        let chain = Line { from: pose.origin, to: pose.hand };
        painter.stroke_lines(&[chain], &side.segment_color.chain, side.segment_size.chain)?;
    }
    if side.segment_visible.arm {
        let arm = Line { from: pose.hand, to: pose.poi };
        painter.stroke_lines(&[arm], &side.segment_color.arm, side.segment_size.arm)?;
    }

    let visible = side.object_visible;
    let size = side.object_size;
    let color = &side.object_color;
    if visible.origin {
        painter.fill_circle(pose.origin, size.origin, &color.origin)?;
    }
    if visible.hand {
        painter.fill_circle(pose.hand, size.hand, &color.hand)?;
    }
    if visible.poi {
        painter.fill_circle(pose.poi, size.poi, &color.poi)?;
    }
    Ok(())
}

// =============================================================
// Canvas2D backend
// =============================================================

impl Painter for CanvasRenderingContext2d {
    type Error = JsValue;

    fn reset_transform(&mut self) -> Result<(), JsValue> {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    fn fill_screen(&mut self, color: &str, alpha: f64, viewport: Viewport) -> Result<(), JsValue> {
        self.set_global_alpha(alpha);
        self.set_fill_style_str(color);
        self.fill_rect(0.0, 0.0, viewport.width, viewport.height);
        self.set_global_alpha(1.0);
        Ok(())
    }

    fn apply_camera(&mut self, camera: &Camera) -> Result<(), JsValue> {
        self.translate(camera.tx, camera.ty)?;
        self.scale(camera.scale, camera.scale)
    }

    fn stroke_lines(&mut self, lines: &[Line], color: &str, width: f64) -> Result<(), JsValue> {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        for line in lines {
            self.move_to(line.from.x, line.from.y);
            self.line_to(line.to.x, line.to.y);
        }
        self.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.set_fill_style_str(color);
        self.begin_path();
        // `arc` rejects negative radii with an IndexSizeError.
        self.arc(center.x, center.y, radius.max(0.0), 0.0, 2.0 * PI)?;
        self.fill();
        Ok(())
    }
}
