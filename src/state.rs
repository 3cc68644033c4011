//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend client behind the `BackendApi` trait. The client is
//! immutable after startup, so no request can change where another request's
//! backend calls go.

use std::sync::Arc;

use crate::backend::BackendApi;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the backend is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BackendApi>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self { backend }
    }
}
