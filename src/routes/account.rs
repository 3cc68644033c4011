//! Account page route — cookie plumbing around the page loader.

use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::http::uri::PathAndQuery;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::services::account::{self, LoadOutcome};
use crate::services::session::COOKIE_NAME;
use crate::state::AppState;

/// `GET /account` — load the signed-in user's profile and organizations.
///
/// Visitors without a usable session get `303 See Other` to the login page.
/// Load failures are logged and answered with a bare 500.
pub async fn load_page(State(state): State<AppState>, jar: CookieJar, OriginalUri(uri): OriginalUri) -> Response {
    let cookie = jar
        .get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|value| !value.is_empty());
    let path = uri.path_and_query().map_or(uri.path(), PathAndQuery::as_str);

    match account::load(cookie, path, state.backend.as_ref()).await {
        Ok(LoadOutcome::Page(result)) => Json(result).into_response(),
        Ok(LoadOutcome::Redirect(target)) => Redirect::to(&target).into_response(),
        Err(e) => {
            tracing::error!(error = %e, %path, "account page load failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Error").into_response()
        }
    }
}
