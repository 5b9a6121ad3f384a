use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point};
use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::driver::{AnimationDriver, Clock, DriverError, FrameLoop, PerformanceClock, RafScheduler};
use crate::input::{Button, DragEnd, InputState, WheelDelta};
use crate::model::SceneConfig;
use crate::render::{self, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors raised while binding to or driving a canvas.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Core engine state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// The camera lives in a shared cell: the frame loop reads it every tick, so a
/// pan or zoom shows up on the next frame without restarting the animation.
pub struct EngineCore {
    pub config: SceneConfig,
    pub input: InputState,
    pub viewport: Viewport,
    camera: Rc<Cell<Camera>>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            config: SceneConfig::default(),
            input: InputState::default(),
            viewport: Viewport { width: DEFAULT_CANVAS_WIDTH, height: DEFAULT_CANVAS_HEIGHT },
            camera: Rc::new(Cell::new(Camera::default())),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera.get()
    }

    /// Shared handle to the camera cell, for the frame loop.
    #[must_use]
    pub fn camera_cell(&self) -> Rc<Cell<Camera>> {
        Rc::clone(&self.camera)
    }

    // --- View ---

    /// Restore the identity view. Takes effect on the next frame.
    pub fn reset_view(&mut self) {
        self.camera.set(Camera::default());
    }

    // --- Input events ---

    /// Begin a pan on a primary-button press.
    ///
    /// Returns `true` when a drag started and the host should capture the pointer.
    pub fn on_pointer_down(&mut self, client: Point, button: Button, pointer_id: i32) -> bool {
        if button != Button::Primary {
            return false;
        }
        let camera = self.camera.get();
        self.input = InputState::Panning { pointer_id, start: client, origin_tx: camera.tx, origin_ty: camera.ty };
        true
    }

    /// Update the pan from the drag origin. Returns `true` if the camera moved.
    pub fn on_pointer_move(&mut self, client: Point, pointer_id: i32) -> bool {
        let InputState::Panning { pointer_id: owner, start, origin_tx, origin_ty } = self.input else {
            return false;
        };
        if owner != pointer_id {
            return false;
        }
        let mut camera = self.camera.get();
        camera.tx = origin_tx + (client.x - start.x);
        camera.ty = origin_ty + (client.y - start.y);
        self.camera.set(camera);
        true
    }

    /// End the pan. Returns the pointer id whose capture should be released, if any.
    pub fn on_pointer_end(&mut self, pointer_id: i32, reason: DragEnd) -> Option<i32> {
        let InputState::Panning { pointer_id: owner, .. } = self.input else {
            return None;
        };
        if owner != pointer_id {
            return None;
        }
        self.input = InputState::Idle;
        // Capture is already gone once the browser reports it lost.
        (reason != DragEnd::LostCapture).then_some(owner)
    }

    /// Zoom around `cursor`, given relative to the canvas' top-left corner.
    pub fn on_wheel(&mut self, cursor: Point, delta: WheelDelta) {
        let mut camera = self.camera.get();
        camera.zoom_at(cursor, delta.dy);
        self.camera.set(camera);
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element,
/// its 2D context, and the frame loop animating the current configuration.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
    frames: FrameLoop<RafScheduler>,
    clock: PerformanceClock,
}

impl Engine {
    /// Bind to `canvas`. The 2D context is looked up once, here.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoContext`] if the canvas cannot provide a 2D
    /// context, or [`EngineError::Js`] if the lookup itself throws.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EngineError::Js(format!("{e:?}")))?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;

        let mut core = EngineCore::new();
        core.viewport = Viewport { width: f64::from(canvas.width()), height: f64::from(canvas.height()) };

        Ok(Self { canvas, ctx, core, frames: FrameLoop::new(Rc::new(RafScheduler::new())), clock: PerformanceClock })
    }

    // --- Configuration ---

    /// Replace the configuration and restart the animation with fresh working copies.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial clear or the first frame request fails;
    /// the loop is left stopped.
    pub fn apply_config(&mut self, config: SceneConfig) -> Result<(), EngineError> {
        self.core.config = config;
        self.restart()
    }

    /// Stop the animation. No frame renders after this returns.
    pub fn stop(&mut self) {
        self.frames.stop();
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    fn restart(&mut self) -> Result<(), EngineError> {
        self.frames.stop();

        let mut ctx = self.ctx.clone();
        let viewport = self.core.viewport;
        render::draw_initial_clear(&mut ctx, &self.core.config.common, viewport)
            .map_err(|e| EngineError::Js(format!("{e:?}")))?;

        let clock = self.clock;
        let camera = self.core.camera_cell();
        let mut driver = AnimationDriver::new();
        driver.start(&self.core.config, clock.now_ms());

        self.frames.start(Box::new(move || {
            match driver.tick(clock.now_ms(), &camera.get(), viewport, &mut ctx) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("render failed, stopping animation: {e:?}");
                    false
                }
            }
        }))?;
        Ok(())
    }

    // --- View ---

    pub fn reset_view(&mut self) {
        self.core.reset_view();
    }

    // --- Input events ---

    /// Pointer-down in client coordinates. Captures the pointer when a pan starts.
    pub fn on_pointer_down(&mut self, client: Point, button: Button, pointer_id: i32) {
        if self.core.on_pointer_down(client, button, pointer_id) {
            if let Err(e) = self.canvas.set_pointer_capture(pointer_id) {
                log::debug!("set_pointer_capture failed: {e:?}");
            }
        }
    }

    pub fn on_pointer_move(&mut self, client: Point, pointer_id: i32) {
        self.core.on_pointer_move(client, pointer_id);
    }

    pub fn on_pointer_end(&mut self, pointer_id: i32, reason: DragEnd) {
        let Some(owner) = self.core.on_pointer_end(pointer_id, reason) else {
            return;
        };
        if self.canvas.has_pointer_capture(owner) {
            if let Err(e) = self.canvas.release_pointer_capture(owner) {
                log::debug!("release_pointer_capture failed: {e:?}");
            }
        }
    }

    /// Wheel event in client coordinates.
    pub fn on_wheel(&mut self, client: Point, delta: WheelDelta) {
        let rect = self.canvas.get_bounding_client_rect();
        let cursor = Point::new(client.x - rect.left(), client.y - rect.top());
        self.core.on_wheel(cursor, delta);
    }
}
