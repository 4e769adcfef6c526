use super::*;

fn alice() -> User {
    User { id: "u-1".to_owned(), username: "alice".to_owned() }
}

#[test]
fn default_is_anonymous_and_loaded() {
    let state = AuthState::default();
    assert!(!state.logged_in());
    assert!(!state.loading);
}

#[test]
fn resolving_does_not_need_login_yet() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(!state.needs_login());
}

#[test]
fn signed_in_carries_token_and_identity() {
    let state = AuthState::signed_in(alice(), "tok");
    assert!(state.logged_in());
    assert!(!state.needs_login());
    assert_eq!(state.session.user_id(), Some("u-1"));
    assert_eq!(state.session.username(), Some("alice"));
    assert_eq!(state.session.token().map(SessionToken::as_str), Some("tok"));
}

#[test]
fn signed_out_needs_login() {
    assert!(AuthState::signed_out().needs_login());
}
