//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Storage, Url, Window};

use crate::core::download::DownloadFile;
use crate::core::error::DownloadError;
use crate::utils::format::iso_date;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

// =============================================================================
// Dialogs
// =============================================================================

/// Show a blocking alert.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Show a blocking confirm dialog. Returns `false` if unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// =============================================================================
// Time
// =============================================================================

/// Current time as an ISO-8601 string (`2026-01-02T03:04:05.678Z`).
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Format an ISO timestamp as a date in the user's locale.
///
/// Falls back to the `YYYY-MM-DD` prefix if the browser cannot parse it.
pub fn locale_date(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso_date(iso).to_string();
    }
    String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

// =============================================================================
// Downloads
// =============================================================================

/// How long an object URL outlives the click that starts its download.
const REVOKE_DELAY_MS: u32 = 10_000;

/// Save `file` through a temporary object URL and a synthetic link click.
///
/// The URL is revoked on a timer, since revoking it right after the click
/// can cancel the download in some browsers.
pub fn trigger_download(file: &DownloadFile) -> Result<(), DownloadError> {
    let url = start_download(file)?;
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

/// Click a download link for `file`. Returns the object URL, still live.
fn start_download(file: &DownloadFile) -> Result<String, DownloadError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(DownloadError::BlobFailed)?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(file.bytes.as_slice()));

    let options = BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| DownloadError::BlobFailed)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|_| DownloadError::BlobFailed)?;

    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .ok_or(DownloadError::BlobFailed)?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();

    Ok(url)
}
