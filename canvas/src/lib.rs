//! Kinematic simulation and rendering core for the poi-spinning visualizer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It animates
//! two independent two-link rotating systems ("sides"), each an origin, a hand
//! orbiting the origin, and a poi head orbiting the hand, and paints them with
//! a fading afterimage under a pan/zoom camera. The host UI layer supplies a
//! [`model::SceneConfig`] and forwards DOM pointer/wheel events; everything
//! else happens here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`model`] | Per-side parameters and global render params |
//! | [`motion`] | Angle integration over simulated time |
//! | [`scene`] | Hand / poi positions from angles and radii |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the pan gesture state |
//! | [`render`] | Afterimage, grid, segments and dots via a `Painter` |
//! | [`driver`] | Animation state machine and the cancelable frame loop |
//! | [`consts`] | Shared numeric constants (time scale, zoom limits, grid step) |

pub mod camera;
pub mod consts;
pub mod driver;
pub mod engine;
pub mod input;
pub mod model;
pub mod motion;
pub mod render;
pub mod scene;
