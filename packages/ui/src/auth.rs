//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, SessionStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub session: Option<Session>,
}

/// Typed accessor for the shared session record.
///
/// Every page reads the session through this handle, and the only writes are
/// [`Auth::sign_in`] and [`Auth::sign_out`], which keep the context signal
/// and the persisted copy in step. Nothing else touches the stored session.
#[derive(Clone, Copy)]
pub struct Auth {
    state: Signal<AuthState>,
}

impl Auth {
    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    pub fn username(&self) -> Option<String> {
        self.state.read().session.as_ref().map(|s| s.username.clone())
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().session.is_some()
    }

    /// Persist a new session and publish it to every subscriber.
    pub fn sign_in(&self, session: Session) {
        tracing::info!(username = %session.username, "session started");
        session_store().save(&session);
        let mut state = self.state;
        state.set(AuthState {
            session: Some(session),
        });
    }

    /// Clear the persisted session and the shared state.
    pub fn sign_out(&self) {
        tracing::info!("session cleared");
        session_store().clear();
        let mut state = self.state;
        state.set(AuthState::default());
    }
}

/// Get the current authentication accessor.
pub fn use_auth() -> Auth {
    use_context::<Auth>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let state = use_signal(|| AuthState {
        session: session_store().load(),
    });
    use_context_provider(|| Auth { state });

    rsx! {
        {children}
    }
}

/// Button that ends the current session.
#[component]
pub fn LogoutButton(#[props(default = "".to_string())] class: String) -> Element {
    let auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| auth.sign_out(),
            "Log out"
        }
    }
}

fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
