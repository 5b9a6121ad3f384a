use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_tab_is_general() {
    let state = UiState::default();
    assert_eq!(state.tab, Tab::General);
    assert_eq!(state.view_reset_seq, 0);
    assert_eq!(state.toast.message, None);
}

#[test]
fn view_reset_bumps_seq() {
    let mut state = UiState::default();
    state.request_view_reset();
    state.request_view_reset();
    assert_eq!(state.view_reset_seq, 2);
}

// =============================================================
// Tab
// =============================================================

#[test]
fn tabs_in_display_order() {
    let labels: Vec<_> = Tab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["General", "Left", "Right", "Examples"]);
}

// =============================================================
// Toast
// =============================================================

#[test]
fn toast_push_shows_message() {
    let mut toast = ToastState::default();
    let seq = toast.push("Preset saved");
    assert_eq!(seq, 1);
    assert_eq!(toast.message.as_deref(), Some("Preset saved"));
}

#[test]
fn toast_hide_current() {
    let mut toast = ToastState::default();
    let seq = toast.push("Copied share URL");
    toast.hide(seq);
    assert_eq!(toast.message, None);
}

#[test]
fn stale_hide_keeps_newer_message() {
    let mut toast = ToastState::default();
    let first = toast.push("Preset saved");
    toast.push("Deleted \"a\"");
    toast.hide(first);
    assert_eq!(toast.message.as_deref(), Some("Deleted \"a\""));
}
