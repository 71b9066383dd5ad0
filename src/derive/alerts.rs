//! Alert generation
//!
//! A fixed battery of rules evaluated independently over the snapshot; every
//! triggered alert is collected and the result is stably sorted by priority.
//! Member-keyed rules iterate reviews in name order so the output is
//! identical across calls for the same snapshot and date.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::Serialize;

use crate::derive::scores::{category_average, Category};
use crate::model::{MemberReview, PortalSnapshot};

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
}

/// A derived reminder surfaced on the portal dashboard; never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub link: String,
    /// 1 = most urgent
    pub priority: u8,
}

/// Quarter label for a date: months 0-2 are Q1, 3-5 Q2, 6-8 Q3, 9-11 Q4
pub fn quarter_for(date: DateTime<Utc>) -> &'static str {
    match date.month0() / 3 {
        0 => "Q1",
        1 => "Q2",
        2 => "Q3",
        _ => "Q4",
    }
}

/// Evaluate every alert rule against the snapshot at the given instant
pub fn generate_alerts(snapshot: &PortalSnapshot, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();

    delegation_alerts(snapshot, now, &mut alerts);
    performance_alerts(snapshot, &mut alerts);

    // Stable sort keeps rule-evaluation order within a priority
    alerts.sort_by_key(|a| a.priority);
    alerts
}

fn delegation_alerts(snapshot: &PortalSnapshot, now: DateTime<Utc>, alerts: &mut Vec<Alert>) {
    let delegation = &snapshot.delegation;

    // Friday reflection reminder; the reflection list is newest-first
    if now.weekday() == Weekday::Fri {
        let reflected_this_week = delegation
            .saved_reflections
            .first()
            .and_then(|r| DateTime::parse_from_rfc3339(&r.date).ok())
            .map(|date| now.signed_duration_since(date) < Duration::days(7))
            .unwrap_or(false);

        if !reflected_this_week {
            alerts.push(Alert {
                kind: AlertKind::Warning,
                icon: "Calendar",
                title: "Weekly Reflection Due".to_string(),
                message: "It's Friday! Time for your weekly delegation reflection.".to_string(),
                link: "delegation.html#weekly".to_string(),
                priority: 1,
            });
        }
    }

    // Quarterly goals progress
    let quarter = quarter_for(now);
    if let Some(checklist) = delegation.quarterly_checklist.get(quarter) {
        let done = checklist.items.iter().filter(|i| i.done).count();
        let total = checklist.items.len();
        if (done as f64) < total as f64 / 2.0 {
            alerts.push(Alert {
                kind: AlertKind::Info,
                icon: "Target",
                title: format!("{} Goals Behind", quarter),
                message: format!(
                    "Only {}/{} quarterly goals completed. Review your progress.",
                    done, total
                ),
                link: "delegation.html#quarterly".to_string(),
                priority: 2,
            });
        }
    }

    // Low impulse redirect rate
    let impulse = &delegation.impulse_counter;
    if impulse.caught > 5 {
        let rate = f64::from(impulse.redirected) / f64::from(impulse.caught) * 100.0;
        if rate < 50.0 {
            alerts.push(Alert {
                kind: AlertKind::Warning,
                icon: "AlertTriangle",
                title: "Impulse Redirect Rate Low".to_string(),
                message: format!("Your redirect rate is {:.0}%. Aim for 70%+.", rate),
                link: "delegation.html".to_string(),
                priority: 2,
            });
        }
    }

    // Team members without stretch projects
    let without_stretch = delegation
        .delegation_team_members
        .iter()
        .filter(|m| m.stretch_project.is_empty())
        .count();
    if without_stretch > 0 {
        alerts.push(Alert {
            kind: AlertKind::Info,
            icon: "Users",
            title: "Stretch Projects Needed".to_string(),
            message: format!(
                "{} team member(s) don't have stretch projects assigned.",
                without_stretch
            ),
            link: "delegation.html#team".to_string(),
            priority: 3,
        });
    }
}

fn performance_alerts(snapshot: &PortalSnapshot, alerts: &mut Vec<Alert>) {
    let review = &snapshot.performance_review;

    let mut members: Vec<&MemberReview> = review.team_members.values().collect();
    members.sort_by(|a, b| a.name.cmp(&b.name));

    // Members without summary
    let no_summary = members
        .iter()
        .filter(|m| m.summary.trim().is_empty())
        .count();
    if no_summary > 0 {
        alerts.push(Alert {
            kind: AlertKind::Warning,
            icon: "FileText",
            title: "Missing Review Summaries".to_string(),
            message: format!("{} team member(s) need review summaries written.", no_summary),
            link: "performance.html".to_string(),
            priority: 1,
        });
    }

    // Large self vs manager rating gaps
    for member in members {
        let cares = category_average(&member.name, Category::AamvaCares, review);
        let gap = (cares.self_score - cares.manager).abs();
        if gap >= 1.5 {
            alerts.push(Alert {
                kind: AlertKind::Info,
                icon: "MessageSquare",
                title: format!("Rating Gap: {}", member.name),
                message: format!(
                    "Large gap between self ({:.1}) and manager ({:.1}) ratings. Discuss in 1:1.",
                    cares.self_score, cares.manager
                ),
                link: format!("performance.html?member={}", member.name),
                priority: 3,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        default_snapshot, ChecklistItem, ChecklistQuarter, ImpulseCounter, MemberReview, Rating,
        Reflection,
    };
    use chrono::TimeZone;

    // 2025-01-08 was a Wednesday, 2025-01-10 a Friday
    fn wednesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 12, 0, 0).unwrap()
    }

    fn friday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 12, 0, 0).unwrap()
    }

    fn empty_snapshot() -> PortalSnapshot {
        let mut snapshot = default_snapshot();
        // Assign stretch projects so the roster rule stays quiet
        for member in &mut snapshot.delegation.delegation_team_members {
            member.stretch_project = "Owns a visible initiative".to_string();
        }
        snapshot
    }

    fn find<'a>(alerts: &'a [Alert], title: &str) -> Option<&'a Alert> {
        alerts.iter().find(|a| a.title == title)
    }

    #[test]
    fn test_quarter_for_month_bands() {
        assert_eq!(quarter_for(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()), "Q1");
        assert_eq!(quarter_for(Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()), "Q2");
        assert_eq!(quarter_for(Utc.with_ymd_and_hms(2025, 9, 30, 0, 0, 0).unwrap()), "Q3");
        assert_eq!(quarter_for(Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap()), "Q4");
    }

    #[test]
    fn test_friday_without_recent_reflection_warns() {
        let snapshot = empty_snapshot();
        let alerts = generate_alerts(&snapshot, friday());

        let alert = find(&alerts, "Weekly Reflection Due").unwrap();
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.priority, 1);
    }

    #[test]
    fn test_recent_reflection_suppresses_friday_warning() {
        let mut snapshot = empty_snapshot();
        snapshot.delegation.saved_reflections.insert(
            0,
            Reflection {
                date: "2025-01-09T18:00:00+00:00".to_string(),
                ..Default::default()
            },
        );

        let alerts = generate_alerts(&snapshot, friday());
        assert!(find(&alerts, "Weekly Reflection Due").is_none());
    }

    #[test]
    fn test_no_reflection_warning_off_friday() {
        let snapshot = empty_snapshot();
        let alerts = generate_alerts(&snapshot, wednesday());
        assert!(find(&alerts, "Weekly Reflection Due").is_none());
    }

    #[test]
    fn test_quarterly_goals_behind() {
        let mut snapshot = empty_snapshot();
        let q1 = snapshot
            .delegation
            .quarterly_checklist
            .get_mut("Q1")
            .unwrap();
        q1.items[0].done = true;

        let alerts = generate_alerts(&snapshot, wednesday());
        let alert = find(&alerts, "Q1 Goals Behind").unwrap();
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.priority, 2);
        assert_eq!(
            alert.message,
            "Only 1/4 quarterly goals completed. Review your progress."
        );
    }

    #[test]
    fn test_quarterly_goals_on_track_is_quiet() {
        let mut snapshot = empty_snapshot();
        let q1 = snapshot
            .delegation
            .quarterly_checklist
            .get_mut("Q1")
            .unwrap();
        q1.items[0].done = true;
        q1.items[1].done = true;

        let alerts = generate_alerts(&snapshot, wednesday());
        assert!(find(&alerts, "Q1 Goals Behind").is_none());
    }

    #[test]
    fn test_low_impulse_redirect_rate() {
        let mut snapshot = empty_snapshot();
        snapshot.delegation.quarterly_checklist = done_quarters();
        snapshot.delegation.impulse_counter = ImpulseCounter {
            caught: 10,
            redirected: 3,
        };

        let alerts = generate_alerts(&snapshot, wednesday());
        let alert = find(&alerts, "Impulse Redirect Rate Low").unwrap();
        assert_eq!(alert.kind, AlertKind::Warning);
        assert!(alert.message.contains("30%"));
    }

    #[test]
    fn test_few_catches_never_trigger_impulse_alert() {
        let mut snapshot = empty_snapshot();
        snapshot.delegation.impulse_counter = ImpulseCounter {
            caught: 5,
            redirected: 0,
        };

        let alerts = generate_alerts(&snapshot, wednesday());
        assert!(find(&alerts, "Impulse Redirect Rate Low").is_none());
    }

    #[test]
    fn test_missing_stretch_projects_counted() {
        let mut snapshot = empty_snapshot();
        snapshot.delegation.delegation_team_members[0].stretch_project = String::new();

        let alerts = generate_alerts(&snapshot, wednesday());
        let alert = find(&alerts, "Stretch Projects Needed").unwrap();
        assert_eq!(alert.priority, 3);
        assert!(alert.message.starts_with("1 team member(s)"));
    }

    #[test]
    fn test_missing_summaries_counted() {
        let mut snapshot = empty_snapshot();
        snapshot.performance_review.team_members.insert(
            "Terry".to_string(),
            MemberReview {
                name: "Terry".to_string(),
                summary: "   ".to_string(),
                ..Default::default()
            },
        );

        let alerts = generate_alerts(&snapshot, wednesday());
        let alert = find(&alerts, "Missing Review Summaries").unwrap();
        assert_eq!(alert.kind, AlertKind::Warning);
        assert_eq!(alert.priority, 1);
        assert!(alert.message.starts_with("1 team member(s)"));
    }

    #[test]
    fn test_rating_gap_alert_per_member() {
        let mut snapshot = empty_snapshot();
        let mut member = MemberReview {
            name: "Terry".to_string(),
            summary: "Strong year.".to_string(),
            ..Default::default()
        };
        member.aamva_cares.insert(
            "coach".to_string(),
            Rating {
                self_rating: 5.0,
                manager: 3.0,
                ..Default::default()
            },
        );
        snapshot
            .performance_review
            .team_members
            .insert("Terry".to_string(), member);

        let alerts = generate_alerts(&snapshot, wednesday());
        let alert = find(&alerts, "Rating Gap: Terry").unwrap();
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(alert.priority, 3);
        assert_eq!(alert.link, "performance.html?member=Terry");
        assert!(alert.message.contains("self (5.0)"));
        assert!(alert.message.contains("manager (3.0)"));
    }

    #[test]
    fn test_alerts_sorted_by_priority_and_deterministic() {
        let mut snapshot = empty_snapshot();
        snapshot.delegation.delegation_team_members[0].stretch_project = String::new();
        snapshot.delegation.impulse_counter = ImpulseCounter {
            caught: 10,
            redirected: 2,
        };
        snapshot.performance_review.team_members.insert(
            "Terry".to_string(),
            MemberReview {
                name: "Terry".to_string(),
                ..Default::default()
            },
        );

        let first = generate_alerts(&snapshot, friday());
        let second = generate_alerts(&snapshot, friday());

        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0].priority <= w[1].priority));
    }

    // Fully completed checklist so the quarterly rule stays quiet in
    // unrelated tests
    fn done_quarters() -> std::collections::HashMap<String, ChecklistQuarter> {
        ["Q1", "Q2", "Q3", "Q4"]
            .iter()
            .map(|q| {
                (
                    q.to_string(),
                    ChecklistQuarter {
                        items: vec![ChecklistItem {
                            id: 1,
                            text: "done".to_string(),
                            done: true,
                        }],
                    },
                )
            })
            .collect()
    }
}
