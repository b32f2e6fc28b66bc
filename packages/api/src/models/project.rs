//! Project records and payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pledge;

/// A fundraising campaign record owned by the server.
///
/// List and detail endpoints embed the project's pledges; the detail endpoint
/// may additionally send a precomputed `sum_pledges`. Optional fields default
/// so either shape deserializes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub goal: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: Option<String>,
    pub is_open: bool,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub date_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub pledges: Vec<Pledge>,
    #[serde(default)]
    pub sum_pledges: Option<f64>,
}

impl Project {
    /// Total amount pledged, preferring the server-computed sum.
    pub fn total_pledged(&self) -> f64 {
        self.sum_pledges
            .unwrap_or_else(|| self.pledges.iter().map(|p| p.amount).sum())
    }

    pub fn backer_count(&self) -> usize {
        self.pledges.len()
    }
}

/// Payload for creating or updating a project.
#[derive(Clone, Debug, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub goal: f64,
    pub image: String,
    pub category: String,
    pub date_end: Option<DateTime<Utc>>,
    pub is_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_serializes_exact_field_set() {
        let payload = NewProject {
            title: "Community garden".to_string(),
            description: "Raised beds for the corner lot".to_string(),
            goal: 5000.0,
            image: "https://example.com/garden.jpg".to_string(),
            category: "Food".to_string(),
            date_end: None,
            is_open: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["category", "date_end", "description", "goal", "image", "is_open", "title"]
        );
    }

    #[test]
    fn deserializes_detail_response() {
        let body = r#"{
            "id": 3,
            "title": "Community garden",
            "description": "Raised beds for the corner lot",
            "goal": 5000,
            "image": "https://example.com/garden.jpg",
            "category": "Food",
            "is_open": true,
            "date_created": "2026-05-01T09:30:00Z",
            "date_end": "2026-09-01T00:00:00Z",
            "owner": "mara",
            "sum_pledges": 1250,
            "pledges": [
                {"id": 1, "amount": 1000, "comment": "Good luck!", "anonymous": false,
                 "supporter": "sam", "project": 3, "date_pledged": "2026-05-02T12:00:00Z"},
                {"id": 2, "amount": 250, "comment": "", "anonymous": true,
                 "supporter": "kim", "project": 3, "date_pledged": "2026-05-03T12:00:00Z"}
            ]
        }"#;
        let project: Project = serde_json::from_str(body).unwrap();

        assert_eq!(project.owner, "mara");
        assert_eq!(project.backer_count(), 2);
        assert_eq!(project.total_pledged(), 1250.0);
        assert_eq!(project.category.as_deref(), Some("Food"));
    }

    #[test]
    fn tolerates_absent_optional_fields() {
        let body = r#"{
            "id": 4,
            "title": "Zine press",
            "description": "A risograph for the library",
            "goal": 900,
            "is_open": false,
            "date_created": "2026-01-15T00:00:00Z"
        }"#;
        let project: Project = serde_json::from_str(body).unwrap();

        assert!(project.pledges.is_empty());
        assert!(project.date_end.is_none());
        assert!(project.category.is_none());
        assert_eq!(project.total_pledged(), 0.0);
    }

    #[test]
    fn total_pledged_sums_pledges_without_server_sum() {
        let body = r#"{
            "id": 5,
            "title": "Tool library",
            "description": "Shared workshop tools",
            "goal": 2000,
            "is_open": true,
            "date_created": "2026-03-01T00:00:00Z",
            "pledges": [
                {"id": 9, "amount": 40, "anonymous": false},
                {"id": 10, "amount": 60, "anonymous": false}
            ]
        }"#;
        let project: Project = serde_json::from_str(body).unwrap();
        assert_eq!(project.total_pledged(), 100.0);
    }
}
