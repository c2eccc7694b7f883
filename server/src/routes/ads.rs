//! Ad-generation route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use super::api_error;
use super::auth::AuthUser;
use crate::services::webhook::WebhookError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateAdBody {
    pub product_name: String,
}

/// Map a webhook failure to the status returned to the browser.
pub(crate) fn webhook_error_to_status(error: &WebhookError) -> StatusCode {
    match error {
        WebhookError::Request(_) | WebhookError::Status { .. } | WebhookError::Parse(_) => StatusCode::BAD_GATEWAY,
        WebhookError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /api/ads/generate` — forward the product name to the webhook and
/// return its `{anuncio, imagem}` answer.
///
/// The name is forwarded exactly as typed; only a blank name is refused.
/// Cookies rotated while authenticating go out with every outcome, since the
/// provider has already retired the old refresh token.
pub async fn generate(State(state): State<AppState>, auth: AuthUser, Json(body): Json<GenerateAdBody>) -> Response {
    let cookies = auth.cookie_updates();
    (cookies, generate_for(&state, &auth, &body.product_name).await).into_response()
}

async fn generate_for(state: &AppState, auth: &AuthUser, product_name: &str) -> Response {
    if product_name.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "product name is required");
    }
    let Some(ads) = state.ads.clone() else {
        return api_error(StatusCode::SERVICE_UNAVAILABLE, "ad generation not configured");
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, user_id = %auth.user.id, chars = product_name.chars().count(), "ad generation requested");

    match ads.generate(product_name).await {
        Ok(ad) => {
            tracing::info!(%request_id, has_image = !ad.imagem.is_empty(), "ad generation succeeded");
            Json(ad).into_response()
        }
        Err(e) => {
            tracing::error!(%request_id, error = %e, "ad generation failed");
            api_error(webhook_error_to_status(&e), &format!("ad generation failed (request {request_id})"))
        }
    }
}

#[cfg(test)]
#[path = "ads_test.rs"]
mod tests;
