use super::*;

#[test]
fn failure_message_prefers_server_error_body() {
    let body = r#"{"error":"Invalid login credentials"}"#;
    assert_eq!(failure_message("sign in", 401, body), "Invalid login credentials");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("generate ad", 502, "<html>bad gateway</html>"), "generate ad failed: 502");
    assert_eq!(failure_message("sign up", 500, ""), "sign up failed: 500");
}

#[test]
fn failure_message_ignores_blank_error_field() {
    assert_eq!(failure_message("sign in", 400, r#"{"error":"  "}"#), "sign in failed: 400");
}

#[test]
fn endpoints_live_under_api_prefix() {
    for endpoint in [SESSION_ENDPOINT, SIGN_IN_ENDPOINT, SIGN_UP_ENDPOINT, SIGN_OUT_ENDPOINT, GENERATE_AD_ENDPOINT] {
        assert!(endpoint.starts_with("/api/"), "{endpoint}");
    }
}

#[test]
fn stubs_report_unavailable_without_hydrate() {
    let creds = Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() };
    assert_eq!(block_on(sign_in(&creds)), Err("not available on server".to_owned()));
    assert_eq!(block_on(fetch_session()), None);
    assert!(block_on(generate_ad("Cadeira")).is_err());
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
