//! Landing page: hero with platform totals and the browsable project grid.

use dioxus::prelude::*;
use ui::format::{format_currency, platform_totals};
use ui::ProjectCard;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    let mut projects = use_resource(|| async { api::list_projects().await });

    let rendered = match &*projects.read() {
        Some(Ok(list)) => {
            let totals = platform_totals(list);
            let list = list.clone();
            rsx! {
                section {
                    class: "hero",
                    h1 {
                        "Fund Your Dreams, "
                        span { class: "accent", "Change the World" }
                    }
                    p {
                        class: "hero-tagline",
                        "Back the projects you believe in, or bring your own to life."
                    }
                    div {
                        class: "hero-stats",
                        div {
                            p { class: "stat-value accent", "{format_currency(totals.pledged)}" }
                            p { class: "stat-label", "pledged so far" }
                        }
                        div {
                            p { class: "stat-value", "{totals.backers}" }
                            p { class: "stat-label", "backers" }
                        }
                        div {
                            p { class: "stat-value", "{list.len()}" }
                            p { class: "stat-label", "projects" }
                        }
                    }
                }

                section {
                    class: "page",
                    h2 { class: "section-title", "Browse Projects" }

                    if list.is_empty() {
                        p { class: "empty-note", "No projects found." }
                    } else {
                        div {
                            class: "project-grid",
                            for project in list {
                                ProjectCard {
                                    key: "{project.id}",
                                    project: project.clone(),
                                    on_open: move |id| {
                                        nav.push(Route::ProjectDetail { id });
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            div {
                class: "page",
                div {
                    class: "panel error-panel",
                    p { "Error: {err}" }
                    button {
                        class: "link-button",
                        onclick: move |_| projects.restart(),
                        "Try Again"
                    }
                }
            }
        },
        None => rsx! {
            div {
                class: "page",
                div {
                    class: "project-grid",
                    for n in 0..6 {
                        div {
                            key: "{n}",
                            class: "project-card",
                            div { class: "skeleton skeleton-image" }
                            div { class: "skeleton skeleton-line wide" }
                            div { class: "skeleton skeleton-line" }
                        }
                    }
                }
            }
        },
    };
    rendered
}
