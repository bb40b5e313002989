use super::*;

// =============================================================
// ToastLevel
// =============================================================

#[test]
fn toast_level_default_is_info() {
    assert_eq!(ToastLevel::default(), ToastLevel::Info);
}

#[test]
fn toast_level_parses_case_insensitively() {
    assert_eq!("success".parse::<ToastLevel>(), Ok(ToastLevel::Success));
    assert_eq!(" Error ".parse::<ToastLevel>(), Ok(ToastLevel::Error));
    assert_eq!("WARNING".parse::<ToastLevel>(), Ok(ToastLevel::Warning));
    assert_eq!("info".parse::<ToastLevel>(), Ok(ToastLevel::Info));
}

#[test]
fn toast_level_rejects_unknown_names() {
    assert!("fatal".parse::<ToastLevel>().is_err());
}

#[test]
fn toast_level_serializes_lowercase() {
    let json = serde_json::to_string(&ToastLevel::Success).unwrap();
    assert_eq!(json, "\"success\"");
    assert_eq!(ToastLevel::Error.to_string(), "error");
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_makes_toast_visible_with_message_and_level() {
    let mut state = ToastState::default();
    let id = state.push("Welcome back", ToastLevel::Success, 0.0);

    let live = state.toasts();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, id);
    assert_eq!(live[0].message, "Welcome back");
    assert_eq!(live[0].level.as_str(), "success");
}

#[test]
fn toast_disappears_after_display_duration() {
    let mut state = ToastState::default();
    state.push("Welcome back", ToastLevel::Success, 1_000.0);

    let just_before = 1_000.0 + f64::from(DEFAULT_TOAST_DURATION_MS) - 1.0;
    assert_eq!(state.prune(just_before), 0);
    assert_eq!(state.toasts().len(), 1);

    let deadline = 1_000.0 + f64::from(DEFAULT_TOAST_DURATION_MS);
    assert_eq!(state.prune(deadline), 1);
    assert!(state.is_empty());
}

#[test]
fn prune_only_drops_expired_toasts() {
    let mut state = ToastState::with_limits(100, 5);
    state.push("first", ToastLevel::Info, 0.0);
    let later = state.push("second", ToastLevel::Error, 50.0);

    assert_eq!(state.prune(120.0), 1);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].id, later);
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastLevel::Info, 0.0);
    let b = state.push("b", ToastLevel::Info, 0.0);
    state.dismiss(a);
    let c = state.push("c", ToastLevel::Info, 0.0);
    assert!(a < b && b < c);
}

#[test]
fn multiple_toasts_coexist_in_queue_order() {
    let mut state = ToastState::default();
    state.push("one", ToastLevel::Info, 0.0);
    state.push("two", ToastLevel::Warning, 0.0);
    state.push("three", ToastLevel::Error, 0.0);

    let messages: Vec<_> = state.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["one", "two", "three"]);
}

#[test]
fn push_beyond_capacity_evicts_oldest() {
    let mut state = ToastState::with_limits(1_000, 2);
    state.push("one", ToastLevel::Info, 0.0);
    state.push("two", ToastLevel::Info, 0.0);
    state.push("three", ToastLevel::Info, 0.0);

    let messages: Vec<_> = state.toasts().iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["two", "three"]);
}

#[test]
fn zero_capacity_keeps_latest_toast() {
    let mut state = ToastState::with_limits(1_000, 0);
    state.push("one", ToastLevel::Info, 0.0);
    state.push("two", ToastLevel::Info, 0.0);
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].message, "two");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastLevel::Info, 0.0);
    state.push("b", ToastLevel::Info, 0.0);

    assert!(state.dismiss(a));
    assert_eq!(state.toasts().len(), 1);
    assert_eq!(state.toasts()[0].message, "b");
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push("a", ToastLevel::Info, 0.0);
    assert!(!state.dismiss(999));
    assert_eq!(state.toasts().len(), 1);
}
