//! Project edit form, prefilled from the current server record.

use api::models::{NewProject, Project};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_auth;

use crate::Route;

#[component]
pub fn EditProject(id: i64) -> Element {
    let mut project = use_resource(move || async move { api::get_project(id).await });

    let rendered = match &*project.read() {
        Some(Ok(p)) => rsx! {
            EditProjectForm { project: p.clone() }
        },
        Some(Err(err)) => rsx! {
            div {
                class: "page",
                div {
                    class: "panel error-panel",
                    p { "Error: {err}" }
                    button {
                        class: "link-button",
                        onclick: move |_| project.restart(),
                        "Try Again"
                    }
                }
            }
        },
        None => rsx! {
            div {
                class: "page",
                div {
                    class: "panel",
                    div { class: "skeleton skeleton-line wide" }
                    div { class: "skeleton skeleton-line" }
                }
            }
        },
    };
    rendered
}

#[component]
fn EditProjectForm(project: Project) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let id = project.id;
    let mut title = use_signal(|| project.title.clone());
    // The edit form has no category field; the update resends the current one
    let category = use_signal(|| project.category.clone().unwrap_or_default());
    let mut description = use_signal(|| project.description.clone());
    let mut image = use_signal(|| project.image.clone());
    let mut goal = use_signal(|| project.goal.to_string());
    let mut date_end = use_signal(|| {
        project
            .date_end
            .map(|end| end.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    });
    let mut is_open = use_signal(|| project.is_open);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

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
            let end = match date_end().trim() {
                "" => None,
                raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                    Ok(date) => Some(date.and_time(chrono::NaiveTime::MIN).and_utc()),
                    Err(_) => {
                        error.set(Some("Please choose a valid end date".to_string()));
                        return;
                    }
                },
            };

            submitting.set(true);
            let changes = NewProject {
                title: t,
                description: d,
                goal: goal_value,
                image: image().trim().to_string(),
                category: category(),
                date_end: end,
                is_open: is_open(),
            };
            match api::update_project(&session, id, &changes).await {
                Ok(_) => {
                    nav.replace(Route::ProjectDetail { id });
                }
                Err(err) => {
                    tracing::error!("project update failed: {err}");
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
                h2 { "Edit Project" }

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "stacked-form",

                    label { r#for: "title", "Title" }
                    Input {
                        r#type: "text",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }

                    label { r#for: "description", "Description" }
                    textarea {
                        id: "description",
                        class: "input",
                        rows: "4",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }

                    label { r#for: "goal", "Goal Amount ($)" }
                    Input {
                        r#type: "number",
                        value: goal(),
                        oninput: move |evt: FormEvent| goal.set(evt.value()),
                    }

                    label { r#for: "image", "Image URL" }
                    Input {
                        r#type: "url",
                        value: image(),
                        oninput: move |evt: FormEvent| image.set(evt.value()),
                    }

                    label { r#for: "date_end", "End Date" }
                    Input {
                        r#type: "date",
                        value: date_end(),
                        oninput: move |evt: FormEvent| date_end.set(evt.value()),
                    }

                    div {
                        class: "checkbox-row",
                        input {
                            id: "is_open",
                            r#type: "checkbox",
                            checked: is_open(),
                            oninput: move |evt: FormEvent| is_open.set(evt.checked()),
                        }
                        label { r#for: "is_open", "Project is open for funding" }
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() { "Saving..." } else { "Save Changes" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_: MouseEvent| {
                                nav.push(Route::ProjectDetail { id });
                            },
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
