//! Page location helpers for share links.

/// `origin + pathname` of the current page, the base every share link is built on.
pub fn page_base() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let location = web_sys::window()?.location();
        let origin = location.origin().ok()?;
        let path = location.pathname().ok()?;
        Some(format!("{origin}{path}"))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// The current `?query` string, empty when there is none.
pub fn current_query() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().search().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Swap the address bar to `url` without adding a history entry or reloading.
pub fn replace_url(url: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("replaceState failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
