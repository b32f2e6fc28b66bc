use api::models::Project;
use chrono::Utc;
use dioxus::prelude::*;

use crate::format::{days_remaining, format_currency, funding_progress};

/// Card summarizing a project in the browse grid.
#[component]
pub fn ProjectCard(project: Project, on_open: EventHandler<i64>) -> Element {
    let id = project.id;
    let pledged = project.total_pledged();
    let progress = funding_progress(project.goal, pledged);
    let days_left = days_remaining(project.date_end, Utc::now());

    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_open.call(id),

            if !project.image.is_empty() {
                div {
                    class: "project-card-image",
                    img { src: "{project.image}", alt: "{project.title}" }
                }
            }

            div {
                class: "project-card-body",

                div {
                    class: "project-card-heading",
                    h2 { "{project.title}" }
                    if let Some(ref category) = project.category {
                        span { class: "category-badge", "{category}" }
                    }
                }

                p { class: "project-card-description", "{project.description}" }

                div {
                    class: "progress-track",
                    div {
                        class: "progress-fill",
                        style: "width: {progress}%",
                    }
                }

                div {
                    class: "project-card-stats",
                    div {
                        p { class: "stat-value accent", "{format_currency(pledged)}" }
                        p { class: "stat-label", "pledged" }
                    }
                    div {
                        p { class: "stat-value", "{project.backer_count()}" }
                        p { class: "stat-label", "backers" }
                    }
                    div {
                        p { class: "stat-value", "{days_left}" }
                        p { class: "stat-label", "days left" }
                    }
                }
            }
        }
    }
}
