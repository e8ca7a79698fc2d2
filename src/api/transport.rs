//! Shared HTTP plumbing for the API facades.
//!
//! [`ApiTransport`] owns the reqwest client, the backend base URL, and the
//! optional bearer token, and centralizes response handling: every non-2xx
//! response is read and classified into [`ApiError`] before any
//! deserialization is attempted. Retries, backoff, and caching are
//! deliberately absent - a failed call fails once, immediately.

use std::sync::{Arc, RwLock};

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ApiError;

/// Response wrapper used by the auth and registration endpoints.
///
/// Those endpoints nest their payload under a `data` field; the listing and
/// monitoring endpoints return the payload at the top level. The distinction
/// is per endpoint and part of the backend contract - see the facade methods.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// Shared HTTP transport for the Fleetmon API.
///
/// Cheap to clone; clones share the underlying connection pool and the
/// bearer token cell, so a token set after login is attached to every
/// subsequent call from any facade built on the same transport.
#[derive(Debug, Clone)]
pub struct ApiTransport {
    http: Client,
    base_url: String,
    bearer_token: Arc<RwLock<Option<String>>>,
}

impl ApiTransport {
    /// Creates a transport for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(constants::HTTP_REQUEST_TIMEOUT)
            .build()?;

        Ok(Self::with_client(http, base_url))
    }

    /// Creates a transport with a pre-configured HTTP client.
    ///
    /// Useful for tests or when custom TLS/proxy configuration is needed.
    pub fn with_client(http: Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the bearer token attached to all subsequent requests.
    ///
    /// Login does not call this; session handling is the caller's choice.
    pub fn set_bearer_token(&self, token: String) {
        *self
            .bearer_token
            .write()
            .expect("bearer token lock poisoned") = Some(token);
    }

    /// Clears any stored bearer token.
    pub fn clear_bearer_token(&self) {
        *self
            .bearer_token
            .write()
            .expect("bearer token lock poisoned") = None;
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.bearer_token
            .read()
            .expect("bearer token lock poisoned")
            .clone()
    }

    /// Issues a GET and decodes the response body as `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("GET {url}");

        let mut request = self.http.get(&url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        Self::decode(request.send().await?).await
    }

    /// Issues a POST with a JSON body and decodes the response as `T`.
    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("POST {url}");

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        Self::decode(request.send().await?).await
    }

    /// Issues a DELETE; any response body is discarded.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        log::debug!("DELETE {url}");

        let mut request = self.http.delete(&url);
        if let Some(token) = self.bearer() {
            request = request.bearer_auth(token);
        }

        Self::check(request.send().await?).await.map(|_| ())
    }

    /// Passes 2xx responses through; classifies everything else.
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("request failed: {status} - {body}");
        Err(ApiError::from_status(status, body))
    }

    /// Checks the status, then decodes the body as `T`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
