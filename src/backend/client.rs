//! HTTP client for the backend API.
//!
//! The base URL is fixed when the client is built and never changes, so one
//! client is shared by every request without coordination. Response handling
//! lives in `parse_response` so it can be tested without a server.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::types::{BackendApi, BackendError, Organization, User};
use crate::config::BackendTimeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client bound to `base_url` (already including the `/api` suffix).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: String, timeouts: BackendTimeouts) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;

        parse_response(status, &text)
    }
}

#[async_trait::async_trait]
impl BackendApi for BackendClient {
    async fn login(&self, email: &str) -> Result<User, BackendError> {
        let request = self
            .http
            .post(endpoint(&self.base_url, "login"))
            .query(&[("name", email)]);
        self.send(request).await
    }

    async fn get_organizations(&self, user: &User) -> Result<Vec<Organization>, BackendError> {
        let request = self
            .http
            .post(endpoint(&self.base_url, "user_organizations"))
            .json(user);
        self.send(request).await
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn endpoint(base_url: &str, route: &str) -> String {
    format!("{base_url}/{route}")
}

fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, BackendError> {
    if !(200..300).contains(&status) {
        return Err(BackendError::Response { status, body: body.to_string() });
    }
    serde_json::from_str(body).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
