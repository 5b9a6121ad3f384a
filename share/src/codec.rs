//! Share-string codec: a whole [`SceneConfig`] as base64 of its UTF-8 JSON.
//!
//! The encoding matches what a browser produces with
//! `btoa(unescape(encodeURIComponent(JSON.stringify(payload))))`, so links
//! round-trip between this crate and the web app in both directions.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use canvas::model::SceneConfig;
use url::form_urlencoded;

/// Query parameter carrying the share string.
pub const SHARE_PARAM: &str = "p";

/// Accepts share strings with or without trailing `=` padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Error returned by [`decode_state`] / [`encode_state`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Not base64.
    #[error("share string is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decoded bytes are not UTF-8.
    #[error("share string is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// Not JSON, or JSON missing `common`, `left` or `right`.
    #[error("share string is not a valid scene: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a scene as a share string (standard alphabet, padded).
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialization fails.
pub fn encode_state(config: &SceneConfig) -> Result<String, CodecError> {
    let json = serde_json::to_string(config)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

/// Decode a share string back into a scene.
///
/// Spaces are read as `+`: a raw share string dropped into a query string
/// comes back from form decoding with its `+` characters turned into spaces.
/// Missing `common` fields take their defaults.
///
/// # Errors
///
/// Returns the first stage that fails: base64, UTF-8, or JSON.
pub fn decode_state(param: &str) -> Result<SceneConfig, CodecError> {
    let cleaned = param.trim().replace(' ', "+");
    let bytes = LENIENT.decode(cleaned)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}

/// Build a link to `base` carrying `config`.
///
/// Any query or fragment already on `base` is dropped. The share string is
/// appended unescaped, the same way the web app writes it.
///
/// # Errors
///
/// Returns [`CodecError::Json`] if serialization fails.
pub fn share_url(base: &str, config: &SceneConfig) -> Result<String, CodecError> {
    let end = base.find(['?', '#']).unwrap_or(base.len());
    Ok(format!("{}?{SHARE_PARAM}={}", &base[..end], encode_state(config)?))
}

/// Extract the share string from a query string (`?a=1&p=...`) or a full URL.
///
/// Values are form-decoded like `URLSearchParams`: `%XX` escapes are resolved
/// and `+` becomes a space (which [`decode_state`] maps back).
#[must_use]
pub fn param_from_query(query: &str) -> Option<String> {
    let query = query.split_once('?').map_or(query, |(_, rest)| rest);
    let query = query.split('#').next().unwrap_or_default();
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
