//! Local storage persistence for the signed-in session.
//!
//! Tokens and the role are stored as plain strings and the user as JSON, under
//! the keys the backend's other clients already use.

use gloo_storage::{LocalStorage, Storage};
use shared::models::User;
use shared::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ROLE_KEY, Session, USER_KEY};

fn read_raw(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

fn write_raw(key: &str, value: &str) {
    if LocalStorage::raw().set_item(key, value).is_err() {
        web_sys::console::warn_1(&format!("Unable to persist {key}").into());
    }
}

/// Restore the session written by a previous login, if complete.
pub fn load_session() -> Option<Session> {
    let access = read_raw(ACCESS_TOKEN_KEY)?;
    let refresh = read_raw(REFRESH_TOKEN_KEY).unwrap_or_default();
    let user: User = LocalStorage::get(USER_KEY).ok()?;
    Some(Session::new(access, refresh, user))
}

/// Persist a fresh session.
pub fn save_session(session: &Session) {
    write_raw(ACCESS_TOKEN_KEY, &session.access);
    write_raw(REFRESH_TOKEN_KEY, &session.refresh);
    if LocalStorage::set(USER_KEY, &session.user).is_err() {
        web_sys::console::warn_1(&"Unable to persist user profile".into());
    }
    write_raw(ROLE_KEY, session.role().as_str());
}

/// Replace the stored access token after a refresh.
pub fn save_access_token(access: &str) {
    write_raw(ACCESS_TOKEN_KEY, access);
}

/// Forget everything about the current user.
pub fn clear_session() {
    for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY, ROLE_KEY] {
        LocalStorage::delete(key);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn session_survives_a_reload() {
        clear_session();
        let session = Session::new(
            "access-token",
            "refresh-token",
            User {
                email: "ngo@example.com".into(),
                role: UserRole::Ngo,
                ..User::default()
            },
        );
        save_session(&session);

        assert_eq!(read_raw(ROLE_KEY).as_deref(), Some("ngo"));
        assert_eq!(read_raw(ACCESS_TOKEN_KEY).as_deref(), Some("access-token"));
        assert_eq!(load_session(), Some(session));

        clear_session();
        assert_eq!(load_session(), None);
    }

    #[wasm_bindgen_test]
    fn access_token_refresh_is_persisted() {
        clear_session();
        save_access_token("next");
        assert_eq!(read_raw(ACCESS_TOKEN_KEY).as_deref(), Some("next"));
        assert_eq!(load_session(), None);
        clear_session();
    }
}
