//! Exchange formats for poi scenes: share strings, the preset store, and the
//! built-in example catalog.
//!
//! Used by both `client` (browser) and the `poitune` CLI, so nothing here
//! touches the DOM or the filesystem. Callers own I/O and hand strings in.

pub mod codec;
pub mod examples;
pub mod presets;

pub use codec::{CodecError, decode_state, encode_state, param_from_query, share_url};
pub use examples::{EXAMPLES, Example, find_example};
pub use presets::{PRESETS_STORAGE_KEY, PresetError, PresetMap, SaveOutcome};
