//! Async clipboard write.

/// Copy `text` to the system clipboard. Returns `false` when the Clipboard
/// API is missing (insecure context, old browser) or the write is refused.
pub async fn write_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return false;
        };
        // Looked up reflectively: `navigator.clipboard` is undefined outside secure contexts.
        let Ok(clipboard) = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")) else {
            return false;
        };
        let Ok(clipboard) = clipboard.dyn_into::<web_sys::Clipboard>() else {
            return false;
        };
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(err) => {
                log::warn!("clipboard write refused: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
