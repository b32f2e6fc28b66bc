//! Data models for the crowdfunding API.
//!
//! Response types derive `Deserialize` and tolerate absent optional fields;
//! the server owns these records and the client only checks presence.
//! Request payloads are separate `Serialize` types so each endpoint receives
//! exactly the field set it expects.

mod pledge;
mod project;
mod user;

pub use pledge::{NewPledge, Pledge};
pub use project::{NewProject, Project};
pub use user::{Credentials, NewUser, TokenResponse, User};
