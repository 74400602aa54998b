use super::*;
use reports::Operation;

fn open_for(plan: &str, email: &str) -> CheckoutState {
    let mut state = CheckoutState { email: email.to_owned(), ..CheckoutState::default() };
    assert!(state.open(plan));
    state
}

#[test]
fn open_unknown_plan_stays_closed() {
    let mut state = CheckoutState::default();
    assert!(!state.open("enterprise"));
    assert!(!state.is_open());
}

#[test]
fn begin_rejects_email_without_at_sign() {
    let mut state = open_for("starter", "user.example.com");
    assert_eq!(state.begin(), Err(INVALID_EMAIL));
    assert_eq!(state.error.as_deref(), Some(INVALID_EMAIL));
    assert!(!state.submitting);
}

#[test]
fn begin_builds_request_for_selected_plan() {
    let mut state = open_for("professional", "  me@example.com ");
    let req = state.begin().expect("valid").expect("request");
    assert_eq!(req.plan, "professional");
    assert_eq!(req.email, "me@example.com");
    assert!(state.submitting);
}

#[test]
fn begin_while_submitting_is_noop() {
    let mut state = open_for("agency", "a@b");
    assert!(state.begin().expect("valid").is_some());
    assert_eq!(state.begin(), Ok(None));
}

#[test]
fn begin_without_plan_is_noop() {
    let mut state = CheckoutState { email: "a@b".to_owned(), ..CheckoutState::default() };
    assert_eq!(state.begin(), Ok(None));
}

#[test]
fn success_returns_literal_checkout_url() {
    let mut state = open_for("starter", "a@b");
    state.begin().expect("valid");
    let target = state.resolve(Ok(CheckoutSession { checkout_url: "https://pay.example/sess_123".to_owned() }));
    assert_eq!(target.as_deref(), Some("https://pay.example/sess_123"));
    assert_eq!(state.redirect_to.as_deref(), Some("https://pay.example/sess_123"));
    assert!(!state.submitting);
}

#[test]
fn failure_shows_error_and_allows_retry() {
    let mut state = open_for("starter", "a@b");
    state.begin().expect("valid");
    let err = ApiError::Request { op: Operation::Checkout, status: 500, detail: Some("Stripe not configured".to_owned()) };
    assert_eq!(state.resolve(Err(err)), None);
    assert_eq!(state.error.as_deref(), Some("Stripe not configured"));
    assert!(state.begin().expect("valid").is_some());
}

#[test]
fn close_is_ignored_while_submitting() {
    let mut state = open_for("starter", "a@b");
    state.begin().expect("valid");
    state.close();
    assert!(state.is_open());
}

#[test]
fn failed_redirect_surfaces_error_and_allows_retry() {
    let mut state = open_for("starter", "a@b");
    state.begin().expect("valid");
    state.resolve(Ok(CheckoutSession { checkout_url: "https://pay.example/sess_123".to_owned() }));

    state.redirect_failed();
    assert!(state.is_open());
    assert_eq!(state.redirect_to, None);
    assert_eq!(state.error.as_deref(), Some(REDIRECT_FAILED));
    assert!(state.begin().expect("valid").is_some());
}
