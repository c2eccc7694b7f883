use super::*;
use std::sync::Arc;

use crate::state::test_helpers::{MockIdentity, serve, test_app_state};

fn no_redirects() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn api_error_wraps_message() {
    let resp = api_error(StatusCode::BAD_REQUEST, "nope");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let err: ApiError = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(err.error, "nope");
}

#[tokio::test]
async fn healthz_is_ok() {
    let base = serve(api_routes(AppState::new(None, None))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn sign_in_then_session_round_trip_over_http() {
    let state = AppState::new(Some(Arc::new(MockIdentity::new())), None);
    let base = serve(api_routes(state)).await;
    let http = no_redirects();

    let resp = http
        .post(format!("{base}/api/auth/sign-in"))
        .json(&serde_json::json!({
            "email": crate::state::test_helpers::TEST_EMAIL,
            "password": crate::state::test_helpers::TEST_PASSWORD,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    // Replay the issued cookies the way a browser would.
    let cookie_header = resp
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ");
    assert!(cookie_header.contains(auth::ACCESS_COOKIE));

    let resp = http
        .get(format!("{base}/api/auth/session"))
        .header("cookie", cookie_header)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let session: auth::SessionView = resp.json().await.unwrap();
    assert_eq!(session.user.id, "user-1");
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let base = serve(api_routes(test_app_state())).await;
    let resp = reqwest::Client::new()
        .post(format!("{base}/api/auth/sign-in"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn only_api_paths_are_routed() {
    let base = serve(api_routes(test_app_state())).await;
    let resp = no_redirects().get(format!("{base}/login")).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}
