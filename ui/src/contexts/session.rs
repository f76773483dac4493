//! The admin session, shared through a context provider.
//!
//! Wraps a [`payloads::Session`] over browser `localStorage` and keeps the
//! API client's bearer token in step with it.

use payloads::{Session, TOKEN_KEY, TokenStore};
use std::rc::Rc;
use yew::prelude::*;

use crate::get_api_client;

/// Token persistence in `window.localStorage`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocalStorageTokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        let saved =
            local_storage().map(|storage| storage.set_item(TOKEN_KEY, token));
        if !succeeded(saved) {
            tracing::warn!("could not persist the session token");
        }
    }

    fn clear(&self) {
        let removed =
            local_storage().map(|storage| storage.remove_item(TOKEN_KEY));
        if !succeeded(removed) {
            tracing::warn!("could not remove the stored session token");
        }
    }
}

/// A storage write counts only if storage exists and accepted it.
fn succeeded<E>(outcome: Option<Result<(), E>>) -> bool {
    matches!(outcome, Some(Ok(())))
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    session: Session<LocalStorageTokenStore>,
}

pub enum SessionAction {
    Login(String),
    Logout,
    /// Re-read the stored token.
    Check,
}

impl SessionState {
    fn restore() -> Self {
        let session = Session::restore(LocalStorageTokenStore);
        sync_client(&session);
        Self { session }
    }
}

fn sync_client(session: &Session<LocalStorageTokenStore>) {
    get_api_client().set_token(session.token().map(str::to_string));
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            SessionAction::Login(token) => session.login(token),
            SessionAction::Logout => {
                session.logout();
                get_api_client().cache().clear();
            }
            SessionAction::Check => {
                session.check();
            }
        }
        sync_client(&session);

        if session == self.session {
            self
        } else {
            tracing::debug!(
                authenticated = session.is_authenticated(),
                "session changed"
            );
            Rc::new(Self { session })
        }
    }
}

pub type SessionContext = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component]
pub fn SessionProvider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::restore);

    html! {
        <ContextProvider<SessionContext> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    context: Option<SessionContext>,
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.context
            .as_ref()
            .is_some_and(|context| context.session.is_authenticated())
    }

    pub fn login(&self, token: String) {
        self.dispatch(SessionAction::Login(token));
    }

    pub fn logout(&self) {
        self.dispatch(SessionAction::Logout);
    }

    pub fn check(&self) {
        self.dispatch(SessionAction::Check);
    }

    fn dispatch(&self, action: SessionAction) {
        match &self.context {
            Some(context) => context.dispatch(action),
            None => tracing::warn!("session used outside SessionProvider"),
        }
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    SessionHandle {
        context: use_context::<SessionContext>(),
    }
}

#[cfg(test)]
mod tests {
    use super::succeeded;

    #[test]
    fn storage_writes_need_storage_and_success() {
        assert!(succeeded::<()>(Some(Ok(()))));
        assert!(!succeeded(Some(Err("quota exceeded"))));
        assert!(!succeeded::<()>(None));
    }
}
