use crate::api::SudhaarClient;
use crate::storage;
use shared::models::{AuthResponse, User, UserRole};
use shared::session::Session;
use yewdux::{Context, Dispatch, Store};

/// Global client state: who is signed in.
///
/// The store hydrates from local storage on first use so protected routes can
/// decide on the very first render instead of bouncing through the login page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        Self {
            session: storage::load_session(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.session.as_ref().map(Session::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(Session::is_authenticated)
    }
}

/// Adopt a fresh login: persist it, arm the client, publish it to the store.
pub fn sign_in(dispatch: &Dispatch<AppState>, response: AuthResponse) -> Session {
    let session = Session::from(response);
    storage::save_session(&session);
    SudhaarClient::shared().set_session(Some(&session));
    dispatch.set(AppState {
        session: Some(session.clone()),
    });
    session
}

/// Drop the session everywhere.
pub fn sign_out(dispatch: &Dispatch<AppState>) {
    SudhaarClient::shared().logout();
    dispatch.set(AppState::default());
}
