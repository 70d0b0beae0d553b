//! Client for the remote file service.
//!
//! Each operation is one request: no retry, no caching. The session is the
//! cookie the service sets on login, so every call includes credentials.

use serde_json::Value;
use web_sys::FormData;

use crate::config::{self, endpoints, form_fields};
use crate::core::error::ApiError;
use crate::models::{AssetKind, AssetRecord, Credentials};
use crate::utils::fetch;
use crate::utils::format::format_size;

/// A file picked by the user, as far as the workflows need to know.
pub trait FileSource {
    fn file_name(&self) -> String;
    fn size(&self) -> u64;
}

impl FileSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Operations offered by the remote service.
#[allow(async_fn_in_trait)]
pub trait AssetService {
    type File: FileSource;

    /// Authenticate; the service answers with a session cookie.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Username of the session owner.
    async fn current_user(&self) -> Result<String, ApiError>;

    async fn upload(
        &self,
        kind: AssetKind,
        file: &Self::File,
        name: &str,
        username: &str,
    ) -> Result<(), ApiError>;

    async fn list(&self, kind: AssetKind) -> Result<Vec<AssetRecord>, ApiError>;
}

/// Browser implementation of [`AssetService`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: &'static str,
}

impl ApiClient {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    /// Client for the configured base URL.
    pub fn from_config() -> Self {
        Self::new(config::api_base_url())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn new_form() -> Result<FormData, ApiError> {
    FormData::new().map_err(|_| ApiError::RequestCreationFailed)
}

fn append(form: &FormData, field: &str, value: &str) -> Result<(), ApiError> {
    form.append_with_str(field, value)
        .map_err(|_| ApiError::RequestCreationFailed)
}

impl AssetService for ApiClient {
    type File = web_sys::File;

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let form = new_form()?;
        append(&form, form_fields::LOGIN_USERNAME, &credentials.username)?;
        append(&form, form_fields::LOGIN_PASSWORD, &credentials.password)?;

        log::debug!("login request for {}", credentials.username);
        fetch::post_form(&self.url(endpoints::LOGIN), &form).await
    }

    async fn current_user(&self) -> Result<String, ApiError> {
        let body = fetch::get_text(&self.url(endpoints::CURRENT_USER)).await?;
        parse_user_body(&body)
    }

    async fn upload(
        &self,
        kind: AssetKind,
        file: &web_sys::File,
        name: &str,
        username: &str,
    ) -> Result<(), ApiError> {
        let form = new_form()?;
        form.append_with_blob_and_filename(form_fields::FILE, file, &file.name())
            .map_err(|_| ApiError::RequestCreationFailed)?;
        append(&form, form_fields::NAME, name)?;
        append(&form, form_fields::USERNAME, username)?;

        log::info!(
            "uploading {} {:?} ({})",
            kind,
            file.name(),
            format_size(FileSource::size(file))
        );
        fetch::post_form(&self.url(kind.upload_path()), &form).await
    }

    async fn list(&self, kind: AssetKind) -> Result<Vec<AssetRecord>, ApiError> {
        let records: Option<Vec<AssetRecord>> =
            fetch::get_json(&self.url(kind.list_path())).await?;
        let records = records.unwrap_or_default();
        log::debug!("listed {} {}", records.len(), kind.plural());
        Ok(records)
    }
}

/// Extract the username from a `GetUser` response body.
///
/// Accepts a JSON string, an object with a user name field, or bare text.
pub fn parse_user_body(body: &str) -> Result<String, ApiError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ApiError::InvalidContent);
    }

    let name = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(Value::Object(map)) => ["userName", "username", "UserName"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(String::from)
            .ok_or(ApiError::InvalidContent)?,
        Ok(Value::Number(n)) => n.to_string(),
        Ok(_) => return Err(ApiError::InvalidContent),
        Err(_) => body.to_string(),
    };

    let name = name.trim().to_string();
    if name.is_empty() {
        Err(ApiError::InvalidContent)
    } else {
        Ok(name)
    }
}
