use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::ad_generated());
    let b = state.push(Notice::text_copied());
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let a = state.push(Notice::ad_generated());
    let b = state.push(Notice::generation_failed());
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].0, b);

    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_evicts_oldest_beyond_limit() {
    let mut state = NoticeState::default();
    let first = state.push(Notice::text_copied());
    for _ in 0..MAX_VISIBLE {
        state.push(Notice::text_copied());
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert!(state.items.iter().all(|(id, _)| *id != first));
}

#[test]
fn validation_and_failure_notices_are_destructive() {
    assert!(Notice::empty_product().is_destructive());
    assert!(Notice::generation_failed().is_destructive());
    assert!(!Notice::ad_generated().is_destructive());
    assert!(!Notice::text_copied().is_destructive());
}

#[test]
fn notice_copy_matches_site_language() {
    assert_eq!(Notice::empty_product().title, "Campo vazio");
    assert_eq!(Notice::ad_generated().description, "Seu anúncio mágico está pronto");
    assert_eq!(Notice::text_copied().title, "Copiado!");
}
