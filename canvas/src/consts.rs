//! Shared numeric constants for the canvas crate.

// ── Time ────────────────────────────────────────────────────────

/// Wall-clock milliseconds that map to one unit of simulated time at speed rate 1.
///
/// Presets are tuned against this value; changing it changes how fast every
/// example spins.
pub const MS_PER_SIM_UNIT: f64 = 500.0;

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed view zoom.
pub const MIN_ZOOM: f64 = 0.25;

/// Largest allowed view zoom.
pub const MAX_ZOOM: f64 = 4.0;

/// Exponential wheel zoom rate: `zoom = exp(-delta_y * WHEEL_ZOOM_RATE)`.
pub const WHEEL_ZOOM_RATE: f64 = 0.0015;

// ── Rendering ───────────────────────────────────────────────────

/// Grid spacing in world units.
pub const GRID_STEP: f64 = 10.0;

/// Half-pixel offset so 1px grid strokes land on pixel centers.
pub const GRID_CRISP_OFFSET: f64 = 0.5;

/// Default canvas backing-store width in pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 640.0;

/// Default canvas backing-store height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 340.0;
