#![recursion_limit = "256"]

mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::identity::{HostedIdentity, IdentityConfig, IdentityProvider};
use services::webhook::{AdGenerator, WebhookClient, WebhookConfig};

fn identity_from_env() -> Option<Arc<dyn IdentityProvider>> {
    let Some(config) = IdentityConfig::from_env() else {
        tracing::warn!("IDENTITY_URL/IDENTITY_ANON_KEY not set — sign-in disabled");
        return None;
    };
    match HostedIdentity::new(config) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "identity provider configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "identity client not built — sign-in disabled");
            None
        }
    }
}

fn ads_from_env() -> Option<Arc<dyn AdGenerator>> {
    match WebhookClient::new(WebhookConfig::from_env()) {
        Ok(client) => {
            tracing::info!(url = client.url(), "ad webhook configured");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "ad webhook client not built — generation disabled");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = match std::env::var("PORT") {
        Ok(raw) => raw.trim().parse().map_err(|e| format!("invalid PORT {raw:?}: {e}"))?,
        Err(_) => 3000,
    };

    let state = state::AppState::new(identity_from_env(), ads_from_env());

    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "home office ai listening");
    axum::serve(listener, app).await?;
    Ok(())
}
