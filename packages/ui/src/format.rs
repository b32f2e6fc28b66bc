//! Small display helpers shared by the views.

use api::models::Project;
use chrono::{DateTime, Utc};

/// Format a dollar amount with thousands separators, e.g. `$12,345.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as i64;
    let dollars = (cents / 100).to_string();
    let cents = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{cents:02}")
}

/// Whole days from `now` until `end`, rounded up and clamped at zero.
pub fn days_remaining(end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    let Some(end) = end else { return 0 };
    let seconds = (end - now).num_seconds();
    if seconds <= 0 {
        0
    } else {
        (seconds + 86_399) / 86_400
    }
}

/// Percent of the goal funded, clamped to `0..=100`.
pub fn funding_progress(goal: f64, pledged: f64) -> f64 {
    if goal <= 0.0 || pledged <= 0.0 {
        return 0.0;
    }
    ((pledged / goal) * 100.0).min(100.0)
}

/// Platform-wide totals shown on the home page hero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlatformTotals {
    pub pledged: f64,
    pub backers: usize,
}

/// Sum every project's embedded pledges.
pub fn platform_totals(projects: &[Project]) -> PlatformTotals {
    let mut totals = PlatformTotals::default();
    for project in projects {
        totals.pledged += project.pledges.iter().map(|p| p.amount).sum::<f64>();
        totals.backers += project.pledges.len();
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(950.0), "$950.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
    }

    #[test]
    fn currency_clamps_negative_to_zero() {
        assert_eq!(format_currency(-5.0), "$0.00");
    }

    #[test]
    fn days_remaining_rounds_up() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 6, 3, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(Some(end), now), 2);
    }

    #[test]
    fn days_remaining_is_zero_after_deadline() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
        assert_eq!(days_remaining(Some(end), now), 0);
        assert_eq!(days_remaining(None, now), 0);
    }

    #[test]
    fn progress_clamps_and_handles_zero_goal() {
        assert_eq!(funding_progress(0.0, 100.0), 0.0);
        assert_eq!(funding_progress(200.0, 0.0), 0.0);
        assert_eq!(funding_progress(200.0, 50.0), 25.0);
        assert_eq!(funding_progress(200.0, 500.0), 100.0);
    }

    #[test]
    fn totals_sum_across_projects() {
        let projects: Vec<Project> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "a", "description": "", "goal": 100, "is_open": true,
                 "date_created": "2026-01-01T00:00:00Z",
                 "pledges": [{"id": 1, "amount": 10}, {"id": 2, "amount": 15}]},
                {"id": 2, "title": "b", "description": "", "goal": 100, "is_open": true,
                 "date_created": "2026-01-01T00:00:00Z",
                 "pledges": [{"id": 3, "amount": 5}]}
            ]"#,
        )
        .unwrap();

        let totals = platform_totals(&projects);
        assert_eq!(totals.pledged, 30.0);
        assert_eq!(totals.backers, 3);
    }
}
