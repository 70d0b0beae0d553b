//! Network utilities with timeout support.
//!
//! Every request carries the browser's cookies for the API origin
//! (`credentials: include`), since the session lives entirely in them.

use gloo_net::http::Response;
use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, RequestMode};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::ApiError;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// # Returns
/// * `RaceResult::Completed` if promise resolves before timeout
/// * `RaceResult::TimedOut` if timeout occurs first
/// * `RaceResult::Error` if promise rejects
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Timeout promise resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message from a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Request Functions
// =============================================================================

/// The remote service signals success with exactly 200.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if status == 200 {
        Ok(())
    } else {
        Err(ApiError::HttpError(status))
    }
}

/// Send a request and return the response if its status is 200.
///
/// `form` switches the request to `POST` with a multipart body; the browser
/// fills in the multipart boundary header.
async fn send(url: &str, form: Option<&FormData>) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    match form {
        Some(form) => {
            opts.set_method("POST");
            opts.set_body(form);
        }
        None => opts.set_method("GET"),
    }

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| ApiError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(ApiError::Timeout),
        RaceResult::Error(msg) => Err(ApiError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let raw: web_sys::Response =
                result.dyn_into().map_err(|_| ApiError::InvalidContent)?;
            accept(raw)
        }
    }
}

/// Wrap a settled browser response, rejecting anything but 200.
fn accept(raw: web_sys::Response) -> Result<Response, ApiError> {
    let resp = Response::from(raw);
    check_status(resp.status())?;
    Ok(resp)
}

/// `GET` a URL and return its body as text.
pub async fn get_text(url: &str) -> Result<String, ApiError> {
    let resp = send(url, None).await?;
    resp.text().await.map_err(|_| ApiError::ResponseReadFailed)
}

/// `GET` a URL and parse its JSON body.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let text = get_text(url).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::JsonParseError(e.to_string()))
}

/// `POST` a multipart form. The response body is ignored.
pub async fn post_form(url: &str, form: &FormData) -> Result<(), ApiError> {
    send(url, Some(form)).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_200_is_success() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(201), Err(ApiError::HttpError(201)));
        assert_eq!(check_status(204), Err(ApiError::HttpError(204)));
        assert_eq!(check_status(401), Err(ApiError::HttpError(401)));
        assert_eq!(check_status(500), Err(ApiError::HttpError(500)));
    }
}
