//! # localStorage-backed session store — browser-side persistence
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It mirrors the session into the browser's localStorage under
//! fixed keys so a page reload picks the login back up.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `"token"` | the API auth token |
//! | `"username"` | username the token belongs to |
//! | `"user_id"` | numeric user id, stored as its decimal string |
//!
//! ## Error handling
//!
//! Every operation silently swallows storage errors (reads return `None`,
//! writes do nothing). A browser profile with storage disabled or corrupted
//! degrades to "logged out" rather than crashing; the token can always be
//! re-obtained by logging in again.

use web_sys::Storage;

use crate::session::{Session, SessionStore};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const USER_ID_KEY: &str = "user_id";

/// localStorage-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn read(storage: &Storage, key: &str) -> Option<String> {
        storage.get_item(key).ok()?
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let token = Self::read(&storage, TOKEN_KEY)?;
        let username = Self::read(&storage, USERNAME_KEY)?;
        let user_id = Self::read(&storage, USER_ID_KEY)?.parse().ok()?;

        Some(Session {
            token,
            username,
            user_id,
        })
    }

    fn save(&self, session: &Session) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
            let _ = storage.set_item(USER_ID_KEY, &session.user_id.to_string());
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}
