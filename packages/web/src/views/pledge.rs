//! Pledge form for a single project.
//!
//! Submitting without a session navigates to the login page before any
//! request is made.

use api::models::NewPledge;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

use crate::Route;

#[component]
pub fn Pledge(id: i64) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut amount = use_signal(String::new);
    let mut comment = use_signal(String::new);
    let mut anonymous = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_pledge = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(session) = auth.session() else {
            nav.push(Route::Login {});
            return;
        };

        spawn(async move {
            error.set(None);

            let value = match amount().trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    error.set(Some("Please enter a pledge amount".to_string()));
                    return;
                }
            };

            submitting.set(true);
            let pledge = NewPledge {
                project: id,
                amount: value,
                comment: comment(),
                anonymous: anonymous(),
            };
            match api::create_pledge(&session, &pledge).await {
                Ok(_) => {
                    nav.replace(Route::ProjectDetail { id });
                }
                Err(err) => {
                    tracing::error!("pledge to project {id} failed: {err}");
                    submitting.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page form-page",

            div {
                class: "panel panel-body",
                h2 { "Support this Project" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_pledge,
                    class: "stacked-form",

                    label { r#for: "amount", "Pledge Amount ($)" }
                    Input {
                        r#type: "number",
                        placeholder: "0.00",
                        value: amount(),
                        oninput: move |evt: FormEvent| amount.set(evt.value()),
                    }

                    label { r#for: "comment", "Comment (Optional)" }
                    textarea {
                        id: "comment",
                        class: "input",
                        rows: "4",
                        placeholder: "Leave a message of support",
                        value: "{comment}",
                        oninput: move |evt: FormEvent| comment.set(evt.value()),
                    }

                    div {
                        class: "checkbox-row",
                        input {
                            id: "anonymous",
                            r#type: "checkbox",
                            checked: anonymous(),
                            oninput: move |evt: FormEvent| anonymous.set(evt.checked()),
                        }
                        label { r#for: "anonymous", "Make this pledge anonymous" }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Processing..." } else { "Complete Pledge" }
                    }

                    p {
                        class: "form-note",
                        "By pledging, you agree to support this project. Your card will "
                        "only be charged if the project reaches its funding goal."
                    }
                }
            }
        }
    }
}
