//! # Client-side session record
//!
//! The session is the only entity this client persists itself: the
//! authentication token the API hands out on login plus the username and user
//! id it belongs to. Everything else (projects, pledges, users) lives behind
//! the remote API.
//!
//! At most one session is active per browser profile. It is created or
//! overwritten on successful login or signup and cleared on logout; no code
//! outside the [`SessionStore`] implementations and the UI's auth accessor
//! touches the persisted copy.

use serde::{Deserialize, Serialize};

/// The client-held authentication record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Token the API returned on login; sent as `Authorization: Token <..>`.
    pub token: String,
    pub username: String,
    pub user_id: i64,
}

/// Read/write access to the persisted session.
///
/// Implementations are free to fail quietly: a store that cannot read returns
/// `None` and the app behaves as logged out.
pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}
