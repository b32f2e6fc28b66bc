//! Remote API location.
//!
//! The base URL is baked in at compile time, the same way the deployment
//! pipeline injects it into any other static-site build: set `KINDLING_API_URL`
//! in the environment of the build and every request targets it. Without the
//! override the client talks to a local development server.

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the crowdfunding API, without a trailing slash.
pub fn api_base() -> &'static str {
    option_env!("KINDLING_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Join an endpoint path onto the configured base URL.
pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", api_base().trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let url = endpoint("/projects/");
        assert!(url.ends_with("/projects/"));
        assert!(!url.contains("//projects"));
    }
}
