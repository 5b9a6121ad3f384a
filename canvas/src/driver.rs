//! Animation driver: the per-frame update loop.
//!
//! Two layers:
//!
//! - [`AnimationDriver`] is the browser-free state machine. It owns private
//!   working copies of both sides, turns clock readings into simulated time,
//!   and draws each frame through a [`Painter`].
//! - [`FrameLoop`] owns the "call me before the next repaint" registration. It
//!   re-requests a frame after every tick and, on [`FrameLoop::stop`], cancels
//!   the pending registration and drops the tick so nothing renders afterwards.
//!
//! The scheduler and clock sit behind [`FrameScheduler`] / [`Clock`] so the
//! loop can be driven by a fake in tests and by `requestAnimationFrame` /
//! `performance.now()` in the browser.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::camera::Camera;
use crate::model::{CommonParams, LocusSide, SceneConfig};
use crate::motion;
use crate::render::{self, Painter, Viewport};
use crate::scene::{self, SidePose};

/// Errors raised while scheduling frames.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to schedule animation frame: {0}")]
    Schedule(String),
}

// =============================================================
// AnimationDriver
// =============================================================

/// Lifecycle of one driver run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPhase {
    #[default]
    Idle,
    Running,
    Cancelled,
}

/// Integrates and renders one configuration snapshot.
///
/// The sides held here are copies taken at [`start`](Self::start); the caller's
/// configuration is never written to.
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    phase: DriverPhase,
    common: CommonParams,
    left: Option<LocusSide>,
    right: Option<LocusSide>,
    prev_ms: f64,
}

impl AnimationDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot `config` and begin timing from `now_ms`.
    ///
    /// Restarting a running or cancelled driver discards its working copies.
    pub fn start(&mut self, config: &SceneConfig, now_ms: f64) {
        self.common = config.common.clone();
        self.left = Some(config.left.clone());
        self.right = Some(config.right.clone());
        self.prev_ms = now_ms;
        self.phase = DriverPhase::Running;
    }

    /// Stop for good. Later ticks are no-ops.
    pub fn cancel(&mut self) {
        self.phase = DriverPhase::Cancelled;
    }

    #[must_use]
    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    #[must_use]
    pub fn common(&self) -> &CommonParams {
        &self.common
    }

    /// Advance both working copies to `now_ms` and return the simulated `dt` applied.
    ///
    /// Returns `0.0` without touching anything unless the driver is running.
    ///
    /// The Right copy is integrated even when only one locus is drawn. That
    /// hidden progress never shows: changing the locus count restarts the loop,
    /// which reseeds both copies from the scene.
    pub fn advance_to(&mut self, now_ms: f64) -> f64 {
        if self.phase != DriverPhase::Running {
            return 0.0;
        }
        let dt = motion::simulated_dt(now_ms - self.prev_ms, self.common.speed_rate);
        self.prev_ms = now_ms;
        for side in [&mut self.left, &mut self.right].into_iter().flatten() {
            motion::advance_in_place(side, dt);
        }
        dt
    }

    /// The working copies that are drawn, Left first.
    #[must_use]
    pub fn active_sides(&self) -> Vec<&LocusSide> {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => scene::active_sides(&self.common, left, right),
            _ => Vec::new(),
        }
    }

    /// Joint positions of every drawn side at the current angles.
    #[must_use]
    pub fn poses(&self) -> Vec<SidePose> {
        self.active_sides()
            .into_iter()
            .map(|side| scene::compose(side, self.common.scale))
            .collect()
    }

    /// One frame: advance to `now_ms`, then draw.
    ///
    /// Does nothing unless the driver is running.
    ///
    /// # Errors
    ///
    /// Returns the painter's error; the working copies have already advanced.
    pub fn tick<P: Painter>(
        &mut self,
        now_ms: f64,
        camera: &Camera,
        viewport: Viewport,
        painter: &mut P,
    ) -> Result<(), P::Error> {
        if self.phase != DriverPhase::Running {
            return Ok(());
        }
        self.advance_to(now_ms);
        render::draw_frame(painter, &self.common, &self.active_sides(), camera, viewport)
    }
}

// =============================================================
// Scheduling seams
// =============================================================

/// Callback invoked by a scheduler when its frame fires.
pub type FrameCallback = Rc<dyn Fn()>;

/// Body run once per frame. Returning `false` ends the loop.
pub type TickFn = Box<dyn FnMut() -> bool>;

/// Registration id returned by [`FrameScheduler::request_frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// "Call me back before the next repaint", cancelable.
pub trait FrameScheduler {
    /// Register `callback` for the next frame.
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Schedule`] if the platform refuses the request.
    fn request_frame(&self, callback: &FrameCallback) -> Result<FrameHandle, DriverError>;

    /// Unregister a pending frame. Unknown or already-fired handles are ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// High-resolution monotonic clock in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

// =============================================================
// FrameLoop
// =============================================================

#[derive(Default)]
struct LoopState {
    /// Bumped on every start/stop; callbacks from an older run do nothing.
    generation: u64,
    pending: Option<FrameHandle>,
    tick: Option<TickFn>,
    callback: Option<FrameCallback>,
}

/// Re-issues a frame request after every tick until stopped.
///
/// The registered callback holds only `Weak` references to the loop state and
/// the scheduler, so dropping the loop frees everything even if a frame is
/// still queued.
pub struct FrameLoop<S: FrameScheduler + 'static> {
    scheduler: Rc<S>,
    state: Rc<RefCell<LoopState>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    #[must_use]
    pub fn new(scheduler: Rc<S>) -> Self {
        Self { scheduler, state: Rc::new(RefCell::new(LoopState::default())) }
    }

    /// Stop any current run, then schedule `tick` for the next frame.
    ///
    /// # Errors
    ///
    /// Returns the scheduler's error; the loop is left stopped.
    pub fn start(&self, tick: TickFn) -> Result<(), DriverError> {
        self.stop();

        let generation = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.generation
        };
        let state_ref = Rc::downgrade(&self.state);
        let scheduler_ref = Rc::downgrade(&self.scheduler);
        let callback: FrameCallback = Rc::new(move || {
            run_frame(&state_ref, &scheduler_ref, generation);
        });

        {
            let mut state = self.state.borrow_mut();
            state.tick = Some(tick);
            state.callback = Some(Rc::clone(&callback));
        }

        match self.scheduler.request_frame(&callback) {
            Ok(handle) => {
                self.state.borrow_mut().pending = Some(handle);
                log::debug!("frame loop started");
                Ok(())
            }
            Err(e) => {
                self.stop();
                Err(e)
            }
        }
    }

    /// Cancel the pending frame and drop the tick. Idempotent.
    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            if state.callback.is_none() {
                return;
            }
            state.generation += 1;
            state.tick = None;
            state.callback = None;
            state.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel_frame(handle);
        }
        log::debug!("frame loop stopped");
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().callback.is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_frame<S: FrameScheduler>(state_ref: &Weak<RefCell<LoopState>>, scheduler_ref: &Weak<S>, generation: u64) {
    let (Some(state), Some(scheduler)) = (state_ref.upgrade(), scheduler_ref.upgrade()) else {
        return;
    };

    let tick = {
        let mut st = state.borrow_mut();
        if st.generation != generation {
            return;
        }
        st.pending = None;
        st.tick.take()
    };
    let Some(mut tick) = tick else {
        return;
    };

    let keep_going = tick();

    let callback = {
        let mut st = state.borrow_mut();
        // A stop() issued from inside the tick bumped the generation.
        if st.generation != generation {
            return;
        }
        if !keep_going {
            st.generation += 1;
            st.callback = None;
            log::debug!("frame loop ended by tick");
            return;
        }
        st.tick = Some(tick);
        st.callback.clone()
    };
    let Some(callback) = callback else {
        return;
    };

    match scheduler.request_frame(&callback) {
        Ok(handle) => state.borrow_mut().pending = Some(handle),
        Err(e) => {
            log::warn!("frame loop halted: {e}");
            let mut st = state.borrow_mut();
            st.generation += 1;
            st.tick = None;
            st.callback = None;
        }
    }
}

// =============================================================
// Browser backends
// =============================================================

/// `requestAnimationFrame` scheduler.
///
/// One JS closure is created lazily and reused for every request; it forwards
/// to whichever [`FrameCallback`] was registered last.
#[derive(Default)]
pub struct RafScheduler {
    target: Rc<RefCell<Option<FrameCallback>>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: &FrameCallback) -> Result<FrameHandle, DriverError> {
        let window = web_sys::window().ok_or_else(|| DriverError::Schedule("no window".into()))?;
        *self.target.borrow_mut() = Some(Rc::clone(callback));

        let mut slot = self.closure.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            let target = Rc::clone(&self.target);
            Closure::wrap(Box::new(move |_ts: f64| {
                let current = target.borrow().clone();
                if let Some(callback) = current {
                    callback();
                }
            }) as Box<dyn FnMut(f64)>)
        });

        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(FrameHandle)
            .map_err(|e| DriverError::Schedule(format!("{e:?}")))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        *self.target.borrow_mut() = None;
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.cancel_animation_frame(handle.0) {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
}

/// `performance.now()` clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map_or(0.0, |p| p.now())
    }
}
