//! Browser front end for the poi motion visualizer.
//!
//! | Module       | Role                                                  |
//! |--------------|-------------------------------------------------------|
//! | `app`        | Root component, context, mount-time restore           |
//! | `components` | Canvas host, share bar, presets, tabs, panels, toast  |
//! | `state`      | Plain editing state behind the signals                |
//! | `util`       | localStorage, location, clipboard glue                |
//!
//! Browser-only code sits behind the `csr` feature so the state modules and
//! their tests build natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: logging, panic hook, then mount.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
