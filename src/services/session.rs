//! Session cookie parsing and validation.
//!
//! ARCHITECTURE
//! ============
//! The login flow elsewhere in the app stores the identity provider's user
//! record as JSON in the `loggedIn` cookie. This module turns that raw string
//! into a typed `SessionRecord` or reports that the visitor has no usable
//! session.
//!
//! TRADE-OFFS
//! ==========
//! Undecodable JSON is an error, while well-formed JSON without the
//! credentials is `SessionStatus::Invalid`. Callers redirect on the latter
//! and fault on the former.

use serde::Serialize;
use serde_json::{Map, Value};

/// Name of the cookie carrying the serialized session record.
pub const COOKIE_NAME: &str = "loggedIn";

/// A validated session. Only obtainable through [`parse_session`], so holding
/// one proves `id` and `access_token` are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    id: String,
    access_token: String,
    email: String,
    /// Remaining cookie fields, echoed back unchanged.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl SessionRecord {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Login identifier passed to the backend.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Outcome of validating a well-formed session payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionStatus {
    Valid(SessionRecord),
    /// Decoded, but missing credentials; treated the same as no cookie.
    Invalid,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session cookie is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// `null` has no fields to read, unlike other non-object values.
    #[error("session cookie is JSON null")]
    Null,
}

/// Parse and validate a raw `loggedIn` cookie value.
///
/// # Errors
///
/// Returns `SessionError::Malformed` if `raw` is not JSON, or
/// `SessionError::Null` if it is the JSON literal `null`.
pub fn parse_session(raw: &str) -> Result<SessionStatus, SessionError> {
    let mut fields = match serde_json::from_str::<Value>(raw)? {
        Value::Object(fields) => fields,
        Value::Null => return Err(SessionError::Null),
        _ => return Ok(SessionStatus::Invalid),
    };

    let Some(id) = take_credential(&mut fields, "id") else {
        return Ok(SessionStatus::Invalid);
    };
    let Some(access_token) = take_credential(&mut fields, "accessToken") else {
        return Ok(SessionStatus::Invalid);
    };
    let email = match fields.remove("email") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(email)) => email,
        Some(_) => return Ok(SessionStatus::Invalid),
    };

    Ok(SessionStatus::Valid(SessionRecord { id, access_token, email, extra: fields }))
}

/// Remove `key` and return it if it holds a non-empty string.
fn take_credential(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
