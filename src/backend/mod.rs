//! Backend — client for the API that owns users and organizations.
//!
//! DESIGN
//! ======
//! Handlers depend on the `BackendApi` trait, not on the HTTP client, so the
//! page loader can be exercised against recording mocks. The concrete
//! `BackendClient` is built once at startup from `AppConfig` and shared
//! read-only across requests.

pub mod client;
pub mod types;

pub use client::BackendClient;
pub use types::{BackendApi, BackendError, Organization, User};

use crate::config::AppConfig;

impl BackendClient {
    /// Build a backend client from parsed service config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: &AppConfig) -> Result<Self, BackendError> {
        Self::new(config.backend_base_url(), config.timeouts)
    }
}
