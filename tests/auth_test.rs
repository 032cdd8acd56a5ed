mod common;

use std::cell::RefCell;
use std::rc::Rc;

use formfit::auth::{AuthState, IdentityProvider, SessionGate, StoredIdentityProvider};
use formfit::error::AppError;

#[test]
fn gate_starts_loading_then_resolves_signed_out() {
    let provider = StoredIdentityProvider::new(common::memory_store());

    let gate = SessionGate::new();
    assert_eq!(*gate.state(), AuthState::Loading);

    let gate = SessionGate::resolve(&provider);
    assert_eq!(*gate.state(), AuthState::SignedOut);
    assert!(gate.user().is_none());
    assert!(matches!(gate.require_user(), Err(AppError::Unauthorized)));
}

#[test]
fn sign_in_establishes_a_persistent_session() {
    let store = common::memory_store();
    let provider = StoredIdentityProvider::new(store.clone());

    let session = provider.sign_in("lifter@example.com", "hunter2").unwrap();
    assert_eq!(session.user.as_ref().unwrap().email, "lifter@example.com");

    // A fresh provider over the same store sees the signed-in session.
    let later = StoredIdentityProvider::new(store);
    let gate = SessionGate::resolve(&later);
    assert_eq!(gate.user().unwrap().email, "lifter@example.com");
}

#[test]
fn sign_out_clears_the_session() {
    let provider = StoredIdentityProvider::new(common::memory_store());
    provider.sign_up("new@example.com", "pw").unwrap();
    provider.sign_out().unwrap();

    let gate = SessionGate::resolve(&provider);
    assert_eq!(*gate.state(), AuthState::SignedOut);
}

#[test]
fn bad_credentials_surface_as_auth_errors() {
    let provider = StoredIdentityProvider::new(common::memory_store());

    let err = provider.sign_in("not-an-email", "pw").unwrap_err();
    assert!(matches!(err, AppError::Auth(_)));
    assert!(err.to_string().contains("email"));

    let err = provider.sign_in("a@b.com", "").unwrap_err();
    assert!(err.to_string().contains("password"));
}

#[test]
fn session_changes_are_pushed_to_subscribers() {
    let provider = StoredIdentityProvider::new(common::memory_store());

    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let subscription = provider.subscribe(Box::new(move |session| {
        sink.borrow_mut()
            .push(session.and_then(|s| s.user.as_ref()).map(|u| u.email.clone()));
    }));

    provider.sign_in("a@b.com", "pw").unwrap();
    provider.sign_out().unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![Some("a@b.com".to_string()), None]
    );
    drop(subscription);
}

#[test]
fn dropping_the_subscription_stops_delivery() {
    let provider = StoredIdentityProvider::new(common::memory_store());

    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let subscription = provider.subscribe(Box::new(move |_| {
        *sink.borrow_mut() += 1;
    }));

    provider.sign_in("a@b.com", "pw").unwrap();
    assert_eq!(*count.borrow(), 1);

    drop(subscription);
    provider.sign_out().unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn gate_applies_pushed_updates() {
    let provider = StoredIdentityProvider::new(common::memory_store());
    let mut gate = SessionGate::resolve(&provider);
    assert_eq!(*gate.state(), AuthState::SignedOut);

    let session = provider.sign_in("a@b.com", "pw").unwrap();
    gate.apply(Some(session.clone()));
    assert_eq!(*gate.state(), AuthState::SignedIn(session));

    gate.apply(None);
    assert_eq!(*gate.state(), AuthState::SignedOut);
}
