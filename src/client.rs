//! HTTP client for the PetFriends REST API
//!
//! One method per endpoint, one request/response cycle per call. The status
//! code and body are handed back untouched in an [`ApiResponse`]; only local
//! failures (transport, unreadable photo, bad header value) become errors.

use crate::config::PetFriendsConfig;
use crate::core_types::{ApiKey, ApiResponse, ResponseBody};
use crate::error::{PetFriendsError, PetFriendsResult};
use crate::logging::{log_debug, log_info};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Instant;

/// Header carrying the API key on every pet endpoint.
pub const AUTH_HEADER: &str = "auth_key";

const KEY_PATH: &str = "/api/key";
const PETS_PATH: &str = "/api/pets";
const CREATE_PET_SIMPLE_PATH: &str = "/api/create_pet_simple";
const SET_PHOTO_PATH: &str = "/api/pets/set_photo";

/// Thin async wrapper over the PetFriends endpoints
#[derive(Debug, Clone)]
pub struct PetFriendsClient {
    http: reqwest::Client,
    base_url: String,
}

impl PetFriendsClient {
    /// Create a client for the service at `base_url`
    ///
    /// # Errors
    ///
    /// Returns [`PetFriendsError::ConfigurationError`] if the URL is empty or
    /// not http(s).
    pub fn new(base_url: impl Into<String>) -> PetFriendsResult<Self> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(PetFriendsError::configuration_error(
                "PetFriends base URL is required",
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(PetFriendsError::configuration_error(format!(
                "PetFriends base URL must be http(s): {base_url}"
            )));
        }

        log_debug!(base_url = %base_url, "PetFriends client initialized");

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Create a client from a validated configuration
    pub fn from_config(config: &PetFriendsConfig) -> PetFriendsResult<Self> {
        config.validate()?;
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request an API key for the given credentials.
    ///
    /// 200 with `{"key": ...}` on success, 403 with a "Forbidden" page otherwise.
    pub async fn get_api_key(&self, email: &str, password: &str) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .post(self.endpoint(KEY_PATH))
            .form(&[("email", email), ("password", password)]);

        self.send("get_api_key", request).await
    }

    /// List pets under `filter`.
    ///
    /// The service accepts `""` and `"my_pets"` (see [`PetFilter`](crate::PetFilter));
    /// anything else comes back as 500 "Filter value is incorrect".
    pub async fn get_list_of_pets(
        &self,
        api_key: &ApiKey,
        filter: impl AsRef<str>,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .get(self.endpoint(PETS_PATH))
            .headers(Self::auth_headers(api_key)?)
            .query(&[("filter", filter.as_ref())]);

        self.send("get_list_of_pets", request).await
    }

    /// Create a pet record with no photo.
    pub async fn add_new_pet_without_photo(
        &self,
        api_key: &ApiKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .post(self.endpoint(CREATE_PET_SIMPLE_PATH))
            .headers(Self::auth_headers(api_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.send("add_new_pet_without_photo", request).await
    }

    /// Create a pet record with a photo in a single multipart request.
    pub async fn add_new_pet(
        &self,
        api_key: &ApiKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: impl AsRef<Path>,
    ) -> PetFriendsResult<ApiResponse> {
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", Self::photo_part(photo_path.as_ref()).await?);

        let request = self
            .http
            .post(self.endpoint(PETS_PATH))
            .headers(Self::auth_headers(api_key)?)
            .multipart(form);

        self.send("add_new_pet", request).await
    }

    /// Attach a photo to an existing pet.
    ///
    /// The service only accepts JPEG; other encodings come back as 500.
    pub async fn add_photo_of_pet(
        &self,
        api_key: &ApiKey,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> PetFriendsResult<ApiResponse> {
        let form = Form::new().part("pet_photo", Self::photo_part(photo_path.as_ref()).await?);

        let request = self
            .http
            .post(self.endpoint(&format!("{SET_PHOTO_PATH}/{pet_id}")))
            .headers(Self::auth_headers(api_key)?)
            .multipart(form);

        self.send("add_photo_of_pet", request).await
    }

    /// Replace a pet's name, type and age.
    pub async fn update_pet_info(
        &self,
        api_key: &ApiKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .put(self.endpoint(&format!("{PETS_PATH}/{pet_id}")))
            .headers(Self::auth_headers(api_key)?)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.send("update_pet_info", request).await
    }

    pub async fn delete_pet(&self, api_key: &ApiKey, pet_id: &str) -> PetFriendsResult<ApiResponse> {
        let request = self
            .http
            .delete(self.endpoint(&format!("{PETS_PATH}/{pet_id}")))
            .headers(Self::auth_headers(api_key)?);

        self.send("delete_pet", request).await
    }

    /// Build the `auth_key` header for pet endpoints
    pub fn auth_headers(api_key: &ApiKey) -> PetFriendsResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(api_key.as_str())
            .map_err(|_| PetFriendsError::invalid_header_value(AUTH_HEADER))?;
        headers.insert(AUTH_HEADER, value);
        Ok(headers)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// MIME type from the file extension; the service decides whether it's acceptable
    pub(crate) fn photo_mime(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        }
    }

    async fn photo_part(path: &Path) -> PetFriendsResult<Part> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PetFriendsError::photo_unreadable(path, e))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());

        log_debug!(
            path = %path.display(),
            size_bytes = bytes.len(),
            "Prepared photo upload"
        );

        Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(Self::photo_mime(path))
            .map_err(|e| {
                PetFriendsError::request_failed(
                    format!("Invalid photo MIME type: {e}"),
                    Some(Box::new(e)),
                )
            })
    }

    /// Execute a single HTTP request and capture status and body
    async fn send(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> PetFriendsResult<ApiResponse> {
        let request = request.build().map_err(|e| {
            PetFriendsError::request_failed(
                format!("{operation}: cannot build request: {e}"),
                Some(Box::new(e)),
            )
        })?;

        let method = request.method().clone();
        let url = request.url().clone();

        log_debug!(
            operation = operation,
            method = %method,
            url = %url,
            "Sending PetFriends request"
        );

        let start_time = Instant::now();
        let response = self.http.execute(request).await.map_err(|e| {
            PetFriendsError::request_failed(
                format!("{operation}: {method} {url} failed: {e}"),
                Some(Box::new(e)),
            )
        })?;

        let status = response.status().as_u16();
        let raw_body = response.text().await.map_err(|e| {
            PetFriendsError::request_failed(
                format!("{operation}: failed to read response body: {e}"),
                Some(Box::new(e)),
            )
        })?;
        let response = ApiResponse::new(status, ResponseBody::from_text(raw_body));

        log_debug!(
            operation = operation,
            status = status,
            duration_ms = start_time.elapsed().as_millis() as u64,
            "PetFriends request completed"
        );

        if !response.is_success() {
            log_info!(
                operation = operation,
                status = status,
                "PetFriends returned non-success status"
            );
        }

        Ok(response)
    }
}
