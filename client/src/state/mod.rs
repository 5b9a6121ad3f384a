//! Application state shared through Leptos context.
//!
//! Every struct here is plain data with pure update methods; components wrap
//! them in `RwSignal`s and call the methods from event handlers, so all of the
//! editing rules are testable without a browser.

pub mod fields;
pub mod params;
pub mod presets;
pub mod ui;
