//! Session gate over an external identity provider.
//!
//! The domain only depends on the shape of [`Session`] and the five
//! provider operations; who actually verifies credentials is the hosted
//! identity service's business. [`StoredIdentityProvider`] is the local
//! stand-in used by the binary: it shape-checks credentials and persists
//! the resulting session so a signed-in state survives restarts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::store::Store;

const SESSION_KEY: &str = "formfit_session";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<AuthUser>,
}

/// The three consumer-visible auth states: not yet known, known-absent,
/// known-present.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Loading,
    SignedOut,
    SignedIn(Session),
}

pub type SessionCallback = Box<dyn FnMut(Option<&Session>)>;

pub trait IdentityProvider {
    fn current_session(&self) -> Result<Option<Session>>;
    fn sign_in(&self, email: &str, password: &str) -> Result<Session>;
    fn sign_up(&self, email: &str, password: &str) -> Result<Session>;
    fn sign_out(&self) -> Result<()>;
    fn subscribe(&self, callback: SessionCallback) -> SessionSubscription;
}

struct Listener {
    active: Rc<Cell<bool>>,
    callback: SessionCallback,
}

/// Push-based session change notifications with owned, disposable handles.
#[derive(Default)]
pub struct SessionEvents {
    listeners: RefCell<Vec<Listener>>,
}

impl SessionEvents {
    pub fn subscribe(&self, callback: SessionCallback) -> SessionSubscription {
        let active = Rc::new(Cell::new(true));
        self.listeners.borrow_mut().push(Listener {
            active: Rc::clone(&active),
            callback,
        });
        SessionSubscription { active }
    }

    pub fn notify(&self, session: Option<&Session>) {
        // Callbacks run outside the borrow so they may subscribe or drop
        // handles without re-entrant panics.
        let mut current = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in current.iter_mut() {
            if listener.active.get() {
                (listener.callback)(session);
            }
        }
        let mut slot = self.listeners.borrow_mut();
        current.append(&mut slot);
        current.retain(|l| l.active.get());
        *slot = current;
    }
}

/// Dropping the handle unsubscribes; no further callbacks are delivered.
pub struct SessionSubscription {
    active: Rc<Cell<bool>>,
}

impl SessionSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.active.set(false);
    }
}

/// Identity provider backed by the persistence store.
pub struct StoredIdentityProvider {
    store: Store,
    events: SessionEvents,
}

impl StoredIdentityProvider {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            events: SessionEvents::default(),
        }
    }

    fn establish(&self, email: &str) -> Session {
        let session = Session {
            user: Some(AuthUser {
                id: Uuid::new_v4().to_string(),
                email: email.to_string(),
            }),
        };
        self.store.save(SESSION_KEY, &Some(session.clone()));
        self.events.notify(Some(&session));
        session
    }

    fn check_credentials(email: &str, password: &str) -> Result<()> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(AppError::Auth("a valid email address is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::Auth("a password is required".to_string()));
        }
        Ok(())
    }
}

impl IdentityProvider for StoredIdentityProvider {
    fn current_session(&self) -> Result<Option<Session>> {
        Ok(self.store.load(SESSION_KEY, None))
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        Self::check_credentials(email, password)?;
        Ok(self.establish(email))
    }

    fn sign_up(&self, email: &str, password: &str) -> Result<Session> {
        Self::check_credentials(email, password)?;
        Ok(self.establish(email))
    }

    fn sign_out(&self) -> Result<()> {
        self.store.save(SESSION_KEY, &None::<Session>);
        self.events.notify(None);
        Ok(())
    }

    fn subscribe(&self, callback: SessionCallback) -> SessionSubscription {
        self.events.subscribe(callback)
    }
}

/// Gates the domain views on the auth state.
pub struct SessionGate {
    state: AuthState,
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            state: AuthState::Loading,
        }
    }

    /// Resolves the initial session from the provider. Provider failures
    /// degrade to signed-out rather than blocking the app.
    pub fn resolve(provider: &dyn IdentityProvider) -> Self {
        let state = match provider.current_session() {
            Ok(Some(session)) if session.user.is_some() => AuthState::SignedIn(session),
            Ok(_) => AuthState::SignedOut,
            Err(err) => {
                tracing::warn!("Failed to resolve session: {err}");
                AuthState::SignedOut
            }
        };
        Self { state }
    }

    /// Applies a pushed session change.
    pub fn apply(&mut self, session: Option<Session>) {
        self.state = match session {
            Some(session) if session.user.is_some() => AuthState::SignedIn(session),
            _ => AuthState::SignedOut,
        };
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match &self.state {
            AuthState::SignedIn(session) => session.user.as_ref(),
            _ => None,
        }
    }

    pub fn require_user(&self) -> Result<&AuthUser> {
        self.user().ok_or(AppError::Unauthorized)
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}
