//! Backend types — records returned by the backend API and client errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend client operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request to the backend failed (connect, timeout, body read).
    #[error("backend request failed: {0}")]
    Request(String),

    /// The backend returned a non-success HTTP status.
    #[error("backend response error: status {status}")]
    Response { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// RECORDS
// =============================================================================

/// A backend user, resolved from the session's email identifier.
///
/// Passed back to the backend as-is, so fields this service does not read
/// are kept in `extra` and serialized unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    /// Set only when the user is listed as an organization member.
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognito_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An organization the user belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: i64,
    pub name: String,
    /// Whether the requesting user administers this organization.
    pub admin: bool,
    #[serde(default)]
    pub members: Vec<User>,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Backend operations the account page depends on.
///
/// Implemented by [`super::BackendClient`] over HTTP and by recording mocks
/// in tests.
#[async_trait::async_trait]
pub trait BackendApi: Send + Sync {
    /// Resolve the backend user for an email identifier.
    async fn login(&self, email: &str) -> Result<User, BackendError>;

    /// List the organizations `user` is a member of.
    async fn get_organizations(&self, user: &User) -> Result<Vec<Organization>, BackendError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
