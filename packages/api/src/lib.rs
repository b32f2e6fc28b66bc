//! # API crate — typed client for the crowdfunding API
//!
//! Every remote call the web frontend makes goes through this crate: one
//! async function per endpoint, with header construction and error
//! normalization in one place instead of scattered across the pages.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL of the remote API (compile-time override) |
//! | [`error`] | [`ApiError`] and response-body error normalization |
//! | [`models`] | Response records and per-endpoint request payloads |
//!
//! ## Functions exposed here
//!
//! - **Authentication**: [`login`], [`create_user`]
//! - **Projects**: [`list_projects`], [`get_project`], [`create_project`],
//!   [`update_project`], [`delete_project`]
//! - **Pledges**: [`create_pledge`]
//!
//! Each call is a single best-effort round trip. There are no retries, no
//! backoff, no cancellation, and no in-flight de-duplication; a failure is
//! terminal for that attempt and the caller decides whether to resubmit.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

mod config;
pub mod error;
pub mod models;

pub use config::api_base;
pub use error::ApiError;
pub use models::{Credentials, NewPledge, NewProject, NewUser, Pledge, Project, TokenResponse, User};
pub use store::Session;

use config::endpoint;

/// Exchange credentials for an auth token.
pub async fn login(credentials: &Credentials) -> Result<TokenResponse, ApiError> {
    let response = http()
        .post(endpoint("/api-token-auth/"))
        .json(credentials)
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Invalid username or password").await
}

/// Register a new user account.
pub async fn create_user(user: &NewUser) -> Result<User, ApiError> {
    let response = http()
        .post(endpoint("/users/"))
        .json(user)
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Something went wrong during signup").await
}

/// Fetch all projects, pledges embedded.
pub async fn list_projects() -> Result<Vec<Project>, ApiError> {
    let response = http()
        .get(endpoint("/projects/"))
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Failed to fetch projects").await
}

/// Fetch a single project by id.
pub async fn get_project(id: i64) -> Result<Project, ApiError> {
    let response = http()
        .get(endpoint(&format!("/projects/{id}/")))
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Failed to fetch project").await
}

/// Create a project owned by the session's user.
pub async fn create_project(session: &Session, project: &NewProject) -> Result<Project, ApiError> {
    let response = http()
        .post(endpoint("/projects/"))
        .header(AUTHORIZATION, token_header(session))
        .json(project)
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Error trying to create project").await
}

/// Replace a project's fields.
pub async fn update_project(
    session: &Session,
    id: i64,
    project: &NewProject,
) -> Result<Project, ApiError> {
    let response = http()
        .put(endpoint(&format!("/projects/{id}/")))
        .header(AUTHORIZATION, token_header(session))
        .json(project)
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Failed to update project").await
}

/// Delete a project.
pub async fn delete_project(session: &Session, id: i64) -> Result<(), ApiError> {
    let response = http()
        .delete(endpoint(&format!("/projects/{id}/")))
        .header(AUTHORIZATION, token_header(session))
        .send()
        .await
        .map_err(ApiError::Network)?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(error::from_response(
            status.as_u16(),
            &body,
            "Failed to delete project",
        ))
    }
}

/// Pledge an amount to a project.
pub async fn create_pledge(session: &Session, pledge: &NewPledge) -> Result<Pledge, ApiError> {
    let response = http()
        .post(endpoint("/pledges/"))
        .header(AUTHORIZATION, token_header(session))
        .json(pledge)
        .send()
        .await
        .map_err(ApiError::Network)?;
    parse_response(response, "Error trying to pledge").await
}

// On wasm a Client is a thin handle over the browser's fetch; one per call.
fn http() -> Client {
    Client::new()
}

fn token_header(session: &Session) -> String {
    format!("Token {}", session.token)
}

async fn parse_response<T: DeserializeOwned>(
    response: Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        response.json().await.map_err(ApiError::Network)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(error::from_response(status.as_u16(), &body, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_header_uses_token_scheme() {
        let session = Session {
            token: "abc123".to_string(),
            username: "mara".to_string(),
            user_id: 7,
        };
        assert_eq!(token_header(&session), "Token abc123");
    }
}
