//! Pledge records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monetary commitment tied to a project, owned by the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pledge {
    pub id: i64,
    pub amount: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub anonymous: bool,
    /// Supporter username; display code hides it when `anonymous` is set.
    #[serde(default)]
    pub supporter: Option<String>,
    #[serde(default)]
    pub project: i64,
    #[serde(default)]
    pub date_pledged: Option<DateTime<Utc>>,
}

/// Payload for creating a pledge.
#[derive(Clone, Debug, Serialize)]
pub struct NewPledge {
    pub project: i64,
    pub amount: f64,
    pub comment: String,
    pub anonymous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pledge_serializes_exact_field_set() {
        let payload = NewPledge {
            project: 3,
            amount: 25.0,
            comment: "Good luck!".to_string(),
            anonymous: false,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["amount", "anonymous", "comment", "project"]);
    }

    #[test]
    fn pledge_timestamp_parses_iso8601() {
        let body = r#"{"id": 1, "amount": 25, "date_pledged": "2026-05-02T12:34:56Z"}"#;
        let pledge: Pledge = serde_json::from_str(body).unwrap();
        assert!(pledge.date_pledged.is_some());
        assert!(pledge.supporter.is_none());
        assert!(!pledge.anonymous);
    }
}
