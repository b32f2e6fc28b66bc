use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for testing and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }

    fn save(&self, session: &Session) {
        *self.session.lock().unwrap() = Some(session.clone());
    }

    fn clear(&self) {
        *self.session.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            username: "mara".to_string(),
            user_id: 7,
        }
    }

    #[test]
    fn starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        store.save(&session("abc123"));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "abc123");
        assert_eq!(loaded.username, "mara");
        assert_eq!(loaded.user_id, 7);
    }

    #[test]
    fn save_overwrites_previous_session() {
        let store = MemoryStore::new();
        store.save(&session("first"));
        store.save(&session("second"));

        assert_eq!(store.load().unwrap().token, "second");
    }

    #[test]
    fn clear_removes_session() {
        let store = MemoryStore::new();
        store.save(&session("abc123"));
        store.clear();

        assert!(store.load().is_none());
    }

    #[test]
    fn clones_share_the_same_session() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.save(&session("shared"));

        assert_eq!(other.load().unwrap().token, "shared");
    }
}
