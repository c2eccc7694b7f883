use super::*;

fn ad(text: &str, image: &str) -> AdResult {
    AdResult { anuncio: text.to_owned(), imagem: image.to_owned() }
}

fn with_input(input: &str) -> GenerationState {
    GenerationState { product_name: input.to_owned(), ..GenerationState::default() }
}

// =============================================================
// begin
// =============================================================

#[test]
fn blank_input_is_rejected_without_starting() {
    for input in ["", " ", "   \t", "\n\n", " \r\n "] {
        let mut state = with_input(input);
        assert_eq!(state.begin(), Err(BeginError::EmptyProduct), "input {input:?}");
        assert_eq!(state.status, GenerationStatus::Idle);
        assert!(!state.is_generating());
    }
}

#[test]
fn empty_product_rejection_carries_validation_notice() {
    assert_eq!(BeginError::EmptyProduct.notice(), Some(Notice::empty_product()));
    assert_eq!(BeginError::InFlight.notice(), None);
}

#[test]
fn begin_returns_input_as_typed() {
    let mut state = with_input("  iPhone 15 Pro Max 256GB Azul ");
    assert_eq!(state.begin(), Ok("  iPhone 15 Pro Max 256GB Azul ".to_owned()));
    assert!(state.is_generating());
}

#[test]
fn second_begin_while_generating_is_refused() {
    let mut state = with_input("Cadeira gamer");
    assert!(state.begin().is_ok());
    assert_eq!(state.begin(), Err(BeginError::InFlight));
    assert!(state.is_generating());
}

#[test]
fn begin_allowed_again_after_finish() {
    let mut state = with_input("Cadeira gamer");
    state.begin().unwrap();
    state.finish(Err("boom".to_owned()));
    assert!(state.begin().is_ok());
}

// =============================================================
// finish
// =============================================================

#[test]
fn success_stores_result_and_reports_ready() {
    let mut state = with_input("iPhone 15 Pro Max 256GB Azul");
    state.begin().unwrap();
    let notice = state.finish(Ok(ad("Compre agora!", "https://img/x.png")));

    assert_eq!(notice, Notice::ad_generated());
    assert_eq!(state.status, GenerationStatus::Succeeded);
    assert_eq!(state.copyable_text(), Some("Compre agora!"));
    assert_eq!(state.image_url(), Some("https://img/x.png"));
}

#[test]
fn success_replaces_previous_result_wholesale() {
    let mut state = with_input("Mesa");
    state.begin().unwrap();
    state.finish(Ok(ad("primeiro", "https://img/1.png")));
    state.begin().unwrap();
    state.finish(Ok(ad("segundo", "")));

    assert_eq!(state.result, Some(ad("segundo", "")));
    assert_eq!(state.image_url(), None);
}

#[test]
fn failure_keeps_previous_result() {
    let mut state = with_input("Mesa");
    state.begin().unwrap();
    state.finish(Ok(ad("anterior", "https://img/a.png")));

    state.begin().unwrap();
    let notice = state.finish(Err("generate ad failed: 502".to_owned()));

    assert_eq!(notice, Notice::generation_failed());
    assert_eq!(state.status, GenerationStatus::Failed("generate ad failed: 502".to_owned()));
    assert_eq!(state.result, Some(ad("anterior", "https://img/a.png")));
    assert!(!state.is_generating());
}

#[test]
fn failure_without_prior_result_leaves_none() {
    let mut state = with_input("Mesa");
    state.begin().unwrap();
    state.finish(Err("network".to_owned()));
    assert!(state.result.is_none());
    assert_eq!(state.copyable_text(), None);
}

// =============================================================
// Presentation helpers
// =============================================================

#[test]
fn trigger_label_follows_status() {
    let mut state = with_input("Mesa");
    assert_eq!(state.trigger_label(), "Gerar Anúncio Mágico");
    state.begin().unwrap();
    assert_eq!(state.trigger_label(), "Gerando anúncio...");
}

#[test]
fn empty_ad_text_is_not_copyable() {
    let state = GenerationState { result: Some(ad("", "https://img/x.png")), ..GenerationState::default() };
    assert_eq!(state.copyable_text(), None);
    assert_eq!(state.image_url(), Some("https://img/x.png"));
}
