//! This crate contains all shared UI for the workspace.

pub mod components;

mod auth;
pub use auth::{use_auth, Auth, AuthProvider, AuthState, LogoutButton};

mod project_card;
pub use project_card::ProjectCard;

pub mod format;
