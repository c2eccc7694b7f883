//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The server keeps no per-user data of its own: it holds a client for the
//! hosted identity provider and a client for the ad-generation webhook.
//! Either may be absent when its configuration is missing, in which case
//! the routes that need it answer `503`.

use std::sync::Arc;

use crate::services::identity::IdentityProvider;
use crate::services::webhook::AdGenerator;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider. `None` if `IDENTITY_URL`/`IDENTITY_ANON_KEY` are unset.
    pub identity: Option<Arc<dyn IdentityProvider>>,
    /// Ad generator. `None` if the webhook client could not be built.
    pub ads: Option<Arc<dyn AdGenerator>>,
}

impl AppState {
    #[must_use]
    pub fn new(identity: Option<Arc<dyn IdentityProvider>>, ads: Option<Arc<dyn AdGenerator>>) -> Self {
        Self { identity, ads }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
