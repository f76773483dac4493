//! Authentication state for the admin panel.
//!
//! The token returned by `admin/login` is the whole session: it is kept in
//! a [`TokenStore`] (browser `localStorage` in the UI) and attached as a
//! bearer token to mutating requests. There is no expiry check and no
//! refresh; a 401 from the API simply logs the session out.

use std::cell::RefCell;
use std::rc::Rc;

/// Storage key for the token.
pub const TOKEN_KEY: &str = "token";

pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token storage for tests and non-browser targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryTokenStore(Rc<RefCell<Option<String>>>);

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(String),
}

impl AuthState {
    fn from_token(token: Option<String>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self::Authenticated(token),
            _ => Self::Unauthenticated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session<S: TokenStore> {
    store: S,
    state: AuthState,
}

impl<S: TokenStore> Session<S> {
    /// Read any token left in the store by a previous visit.
    pub fn restore(store: S) -> Self {
        let state = AuthState::from_token(store.load());
        Self { store, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            AuthState::Authenticated(token) => Some(token),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    pub fn login(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.store.save(&token);
        self.state = AuthState::from_token(Some(token));
    }

    pub fn logout(&mut self) {
        self.store.clear();
        self.state = AuthState::Unauthenticated;
    }

    /// Evaluated each time a protected route renders: re-reads the store so
    /// a token cleared elsewhere (another tab) is honoured.
    pub fn check(&mut self) -> bool {
        self.state = AuthState::from_token(self.store.load());
        self.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_unauthenticated() {
        let session = Session::restore(MemoryTokenStore::default());
        assert_eq!(session.state(), &AuthState::Unauthenticated);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn login_persists_and_logout_clears() {
        let store = MemoryTokenStore::default();
        let mut session = Session::restore(store.clone());
        session.login("abc123");
        assert!(session.is_authenticated());
        assert_eq!(store.load().as_deref(), Some("abc123"));

        let restored = Session::restore(store.clone());
        assert_eq!(restored.token(), Some("abc123"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn empty_token_is_not_a_session() {
        let store = MemoryTokenStore::default();
        store.save("");
        assert!(!Session::restore(store).is_authenticated());
    }

    #[test]
    fn check_sees_tokens_cleared_elsewhere() {
        let store = MemoryTokenStore::default();
        let mut session = Session::restore(store.clone());
        session.login("t");
        store.clear();
        assert!(!session.check());
        assert_eq!(session.state(), &AuthState::Unauthenticated);
    }
}
