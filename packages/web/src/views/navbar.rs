use dioxus::prelude::*;
use ui::{use_auth, LogoutButton};

use crate::Route;

/// Top navigation shell; every page renders inside its outlet.
#[component]
pub fn NavBar() -> Element {
    let auth = use_auth();

    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: Route::Home {}, "Kindling" }

            div {
                class: "navbar-links",
                if let Some(session) = auth.session() {
                    span { class: "navbar-user", "Hi, {session.username}" }
                    Link {
                        class: "navbar-link",
                        to: Route::CreateProject {},
                        "Create Project"
                    }
                    LogoutButton { class: "navbar-link navbar-logout" }
                } else {
                    Link { class: "navbar-link", to: Route::Login {}, "Log in" }
                    Link {
                        class: "navbar-link navbar-signup",
                        to: Route::Signup {},
                        "Sign up"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
