use super::*;

#[test]
fn ui_state_default_has_no_notice() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert_eq!(state.notice, None);
}

#[test]
fn flash_replaces_previous_notice() {
    let mut state = UiState::default();
    let first = state.flash(NoticeKind::Success, "Hotel saved");
    let second = state.flash(NoticeKind::Error, "Delete failed");
    assert_ne!(first, second);
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Delete failed");
}

#[test]
fn dismiss_ignores_outdated_sequence() {
    let mut state = UiState::default();
    let first = state.flash(NoticeKind::Success, "Saved");
    let second = state.flash(NoticeKind::Success, "Deleted");
    state.dismiss(first);
    assert_eq!(state.notice.as_ref().map(|n| n.seq), Some(second));
    state.dismiss(second);
    assert_eq!(state.notice, None);
}

#[test]
fn notice_kind_default_is_success() {
    assert_eq!(NoticeKind::default(), NoticeKind::Success);
}
