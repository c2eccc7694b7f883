use super::*;
use crate::net::types::User;

#[test]
fn validate_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        validate_credentials("  ana@loja.com ", " s3nha "),
        Ok(Credentials { email: "ana@loja.com".to_owned(), password: " s3nha ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "x"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("ana@loja.com", ""), Err(MISSING_FIELDS));
}

#[test]
fn mode_toggle_round_trips() {
    assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
    assert_eq!(AuthMode::SignIn.toggled().toggled(), AuthMode::SignIn);
}

#[test]
fn mode_labels_are_localized() {
    assert_eq!(AuthMode::SignIn.button_label(), "Entrar");
    assert_eq!(AuthMode::SignUp.button_label(), "Criar conta");
    assert_eq!(AuthMode::SignIn.switch_link_text(), "Não tem uma conta? Cadastre-se");
    assert_eq!(AuthMode::SignUp.switch_link_text(), "Já tem uma conta? Entre");
}

#[test]
fn sign_up_with_session_signs_in() {
    let session = Session { user: User { id: "u1".to_owned(), email: None }, expires_at: None };
    let outcome = SignUpOutcome { session: Some(session.clone()), confirmation_required: false };
    assert_eq!(classify_sign_up(outcome), FormOutcome::SignedIn(session));
}

#[test]
fn sign_up_without_session_waits_for_confirmation() {
    let outcome = SignUpOutcome { session: None, confirmation_required: true };
    assert_eq!(classify_sign_up(outcome), FormOutcome::ConfirmationPending);
}
