//! Project detail page: stats, progress, supporter list, and owner actions.

use api::models::Project;
use chrono::Utc;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant};
use ui::format::{days_remaining, format_currency, funding_progress};
use ui::use_auth;

use crate::Route;

#[component]
pub fn ProjectDetail(id: i64) -> Element {
    let mut project = use_resource(move || async move { api::get_project(id).await });

    let rendered = match &*project.read() {
        Some(Ok(p)) => rsx! {
            ProjectBody { project: p.clone() }
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
                    div { class: "skeleton skeleton-image" }
                    div { class: "skeleton skeleton-line wide" }
                    div { class: "skeleton skeleton-line" }
                }
            }
        },
    };
    rendered
}

#[component]
fn ProjectBody(project: Project) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut owner_error = use_signal(|| Option::<String>::None);
    let mut deleting = use_signal(|| false);

    let id = project.id;
    let pledged = project.total_pledged();
    let progress = funding_progress(project.goal, pledged);
    let days_left = days_remaining(project.date_end, Utc::now());
    let is_owner = auth
        .username()
        .is_some_and(|name| !project.owner.is_empty() && name == project.owner);
    let owner_initial = project
        .owner
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string());
    let created = project.date_created.format("%b %e, %Y").to_string();
    let ends = project
        .date_end
        .map(|end| end.format("%b %e, %Y").to_string());

    let handle_delete = move |_: MouseEvent| {
        let Some(session) = auth.session() else {
            nav.push(Route::Login {});
            return;
        };
        spawn(async move {
            owner_error.set(None);
            deleting.set(true);
            match api::delete_project(&session, id).await {
                Ok(()) => {
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("failed to delete project {id}: {err}");
                    deleting.set(false);
                    owner_error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page project-detail",

            div {
                class: "panel",

                if !project.image.is_empty() {
                    div {
                        class: "project-hero-image",
                        img { src: "{project.image}", alt: "{project.title}" }
                    }
                }

                div {
                    class: "panel-body",

                    div {
                        class: "project-heading",
                        h1 { "{project.title}" }
                        if let Some(ref category) = project.category {
                            span { class: "category-badge", "{category}" }
                        }
                    }

                    div {
                        class: "project-owner",
                        div { class: "owner-avatar", "{owner_initial}" }
                        div {
                            p {
                                class: "owner-name",
                                if project.owner.is_empty() {
                                    "By Anonymous"
                                } else {
                                    "By {project.owner}"
                                }
                            }
                            p { class: "owner-since", "Created {created}" }
                        }
                    }

                    p { class: "project-description", "{project.description}" }

                    div {
                        class: "project-stats",
                        div {
                            h3 { "Pledged" }
                            p { class: "stat-value accent", "{format_currency(pledged)}" }
                            p { class: "stat-label", "of {format_currency(project.goal)} goal" }
                        }
                        div {
                            h3 { "Backers" }
                            p { class: "stat-value", "{project.backer_count()}" }
                            p { class: "stat-label", "total supporters" }
                        }
                        div {
                            h3 { "Days Left" }
                            p { class: "stat-value", "{days_left}" }
                            if let Some(ref ends) = ends {
                                p { class: "stat-label", "ends {ends}" }
                            }
                        }
                    }

                    div {
                        class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {progress}%",
                        }
                    }

                    if !project.is_open {
                        p { class: "closed-note", "This project is closed to new pledges." }
                    }

                    div {
                        class: "project-actions",
                        Link {
                            class: "btn btn-primary pledge-cta",
                            to: Route::Pledge { id },
                            "Back this project"
                        }

                        if is_owner {
                            Link {
                                class: "btn btn-secondary",
                                to: Route::EditProject { id },
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: deleting(),
                                onclick: handle_delete,
                                if deleting() { "Deleting..." } else { "Delete" }
                            }
                        }
                    }

                    if let Some(err) = owner_error() {
                        div { class: "form-error", "{err}" }
                    }
                }
            }

            div {
                class: "panel supporters",
                h2 { "Recent Supporters" }

                if project.pledges.is_empty() {
                    p {
                        class: "empty-note",
                        "No pledges yet. Be the first to support this project!"
                    }
                } else {
                    for pledge in project.pledges.iter() {
                        div {
                            key: "{pledge.id}",
                            class: "supporter-row",
                            div {
                                p {
                                    class: "supporter-name",
                                    if pledge.anonymous {
                                        "Anonymous Supporter"
                                    } else {
                                        {pledge.supporter.clone().unwrap_or_else(|| "Anonymous Supporter".to_string())}
                                    }
                                }
                                if !pledge.comment.is_empty() {
                                    p { class: "supporter-comment", "{pledge.comment}" }
                                }
                                if let Some(when) = pledge.date_pledged {
                                    p {
                                        class: "supporter-date",
                                        {when.format("%b %e, %Y").to_string()}
                                    }
                                }
                            }
                            p { class: "supporter-amount", "{format_currency(pledge.amount)}" }
                        }
                    }
                }
            }
        }
    }
}
