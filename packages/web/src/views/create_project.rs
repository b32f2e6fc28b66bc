//! Project creation form.

use api::models::NewProject;
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

use crate::Route;

const CATEGORIES: &[&str] = &[
    "Technology",
    "Arts",
    "Film",
    "Games",
    "Music",
    "Food",
    "Publishing",
    "Fashion",
    "Design",
    "Other",
];

#[component]
pub fn CreateProject() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut image = use_signal(String::new);
    let mut goal = use_signal(String::new);
    let mut date_end = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Creating a project needs a session
    if !auth.is_logged_in() {
        nav.replace(Route::Login {});
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(session) = auth.session() else {
            nav.push(Route::Login {});
            return;
        };

        spawn(async move {
            error.set(None);

            let t = title().trim().to_string();
            if t.is_empty() {
                error.set(Some("Please enter a project title".to_string()));
                return;
            }
            if category().is_empty() {
                error.set(Some("Please select a category".to_string()));
                return;
            }
            let d = description().trim().to_string();
            if d.is_empty() {
                error.set(Some("Please describe your project".to_string()));
                return;
            }
            let goal_value = match goal().trim().parse::<f64>() {
                Ok(value) if value >= 1.0 => value,
                _ => {
                    error.set(Some("Please enter a funding goal".to_string()));
                    return;
                }
            };
            let end = match NaiveDate::parse_from_str(date_end().trim(), "%Y-%m-%d") {
                Ok(date) => date.and_time(chrono::NaiveTime::MIN).and_utc(),
                Err(_) => {
                    error.set(Some("Please choose an end date".to_string()));
                    return;
                }
            };

            submitting.set(true);
            let project = NewProject {
                title: t,
                description: d,
                goal: goal_value,
                image: image().trim().to_string(),
                category: category(),
                date_end: Some(end),
                is_open: true,
            };
            match api::create_project(&session, &project).await {
                Ok(_) => {
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("project creation failed: {err}");
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
                h2 { "Create a New Project" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "stacked-form",

                    label { r#for: "title", "Project Title" }
                    Input {
                        r#type: "text",
                        placeholder: "Enter your project title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { r#for: "category", "Category" }
                    select {
                        id: "category",
                        class: "input",
                        value: "{category}",
                        oninput: move |evt: FormEvent| category.set(evt.value()),
                        option { value: "", "Select a category" }
                        for name in CATEGORIES {
                            option { value: "{name}", "{name}" }
                        }
                    }

                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        class: "input",
                        rows: "6",
                        placeholder: "Describe your project",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    label { r#for: "image", "Image URL" }
                    Input {
                        r#type: "url",
                        placeholder: "Enter the URL for your project image",
                        value: image(),
                        oninput: move |evt: FormEvent| image.set(evt.value()),
                    }
                    if !image().is_empty() {
                        img {
                            class: "image-preview",
                            src: "{image}",
                            alt: "Preview",
                        }
                    }

                    label { r#for: "goal", "Funding Goal ($)" }
                    Input {
                        r#type: "number",
                        placeholder: "Enter your funding goal",
                        value: goal(),
                        oninput: move |evt: FormEvent| goal.set(evt.value()),
                    }

                    label { r#for: "date_end", "End Date" }
                    Input {
                        r#type: "date",
                        value: date_end(),
                        oninput: move |evt: FormEvent| date_end.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create Project" }
                    }
                }
            }
        }
    }
}
