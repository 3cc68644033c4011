//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the account page loader and the liveness probe under a single Axum
//! router. `/ping` is added after the trace layer so probes stay out of the
//! request log.

pub mod account;

use axum::Router;
use axum::response::Json;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/account", get(account::load_page))
        .layer(TraceLayer::new_for_http())
        .route("/ping", get(ping))
        .with_state(state)
}

/// `GET /ping` — liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Success!" }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
