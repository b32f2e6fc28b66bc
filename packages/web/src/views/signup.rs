//! Registration page view.
//!
//! A successful signup immediately logs the new account in with the same
//! credentials, so the user lands on the home page with a live session.

use api::models::{Credentials, NewUser};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

use crate::Route;

/// Signup page component.
#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut password2 = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    if auth.is_logged_in() {
        nav.replace(Route::Home {});
    }

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();

            if u.is_empty() {
                error.set(Some("Please enter a username".to_string()));
                return;
            }
            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter a password".to_string()));
                return;
            }
            if p != password2() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            loading.set(true);
            let new_user = NewUser {
                username: u.clone(),
                email: e,
                password: p.clone(),
            };
            if let Err(err) = api::create_user(&new_user).await {
                loading.set(false);
                error.set(Some(err.to_string()));
                return;
            }

            match api::login(&Credentials {
                username: u,
                password: p,
            })
            .await
            {
                Ok(token) => {
                    auth.sign_in(token.into_session());
                    nav.replace(Route::Home {});
                }
                Err(_) => {
                    loading.set(false);
                    error.set(Some(
                        "Signup successful but couldn't log in automatically".to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create your account" }

            form {
                onsubmit: handle_signup,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label { r#for: "username", "Username" }
                Input {
                    r#type: "text",
                    placeholder: "Enter username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                label { r#for: "email", "Email address" }
                Input {
                    r#type: "email",
                    placeholder: "Enter email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { r#for: "password", "Password" }
                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                label { r#for: "password2", "Confirm Password" }
                Input {
                    r#type: "password",
                    placeholder: "Repeat password",
                    value: password2(),
                    oninput: move |evt: FormEvent| password2.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }
        }
    }
}
