//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presets are the only persisted state. The raw JSON is handed to
//! `share::PresetMap`, which owns the format and its leniency.

/// Read the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Failures (quota, private mode) are logged and dropped.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::warn!("localStorage unavailable; {key} not saved");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to save {key}: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}
