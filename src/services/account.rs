//! Account page loader — session gate plus user and organization fetch.
//!
//! The loader either produces the page's data or asks the caller to send the
//! visitor to the login page. Missing and incomplete sessions redirect the
//! same way; undecodable cookies and backend failures are errors.

use serde::Serialize;

use super::session::{self, SessionError, SessionRecord, SessionStatus};
use crate::backend::{BackendApi, BackendError, Organization, User};

/// Path of the login page visitors are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Data handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResult {
    pub cognito_user: SessionRecord,
    pub user: User,
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Page(LoadResult),
    /// Send the visitor to this location with `303 See Other`.
    Redirect(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Build `/login?redirectTo=<path>` with `path` percent-encoded.
#[must_use]
pub fn login_redirect(path: &str) -> String {
    format!("{LOGIN_PATH}?redirectTo={}", urlencoding::encode(path))
}

/// Run the account page load for a request.
///
/// `cookie` is the raw `loggedIn` cookie value, if any; `path` is the
/// request's path and query, used as the post-login return target.
///
/// # Errors
///
/// Returns `LoadError::Session` if the cookie is not JSON, or
/// `LoadError::Backend` if either backend call fails. Organizations are not
/// fetched when login fails.
pub async fn load(cookie: Option<&str>, path: &str, backend: &dyn BackendApi) -> Result<LoadOutcome, LoadError> {
    let Some(raw) = cookie else {
        tracing::debug!(%path, "no session cookie; redirecting to login");
        return Ok(LoadOutcome::Redirect(login_redirect(path)));
    };

    let record = match session::parse_session(raw)? {
        SessionStatus::Valid(record) => record,
        SessionStatus::Invalid => {
            tracing::debug!(%path, "session missing credentials; redirecting to login");
            return Ok(LoadOutcome::Redirect(login_redirect(path)));
        }
    };

    tracing::debug!(session_id = record.id(), "loading account page");
    let user = backend.login(record.email()).await?;
    let organizations = backend.get_organizations(&user).await?;

    Ok(LoadOutcome::Page(LoadResult { cognito_user: record, user, organizations }))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
