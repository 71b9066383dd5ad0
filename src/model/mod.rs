//! Persisted data model for the Leadership Portal
//!
//! These types mirror the JSON documents the portal stores in the remote
//! document host, so the wire names stay camelCase. Every field carries
//! `serde(default)`: a snapshot with missing fields loads with defaults
//! instead of failing, and missing numeric ratings read as 0.

pub mod defaults;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use defaults::default_snapshot;

/// Root persisted aggregate: everything the portal saves as one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSnapshot {
    #[serde(default)]
    pub delegation: DelegationRecord,
    #[serde(default)]
    pub performance_review: PerformanceReviewRecord,
    /// RFC3339 timestamp of the last save
    #[serde(default)]
    pub last_updated: String,
}

// ============================================================================
// Delegation tracker
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationRecord {
    /// Append-only log of delegation events
    #[serde(default)]
    pub delegation_log: Vec<DelegationLogEntry>,
    #[serde(default)]
    pub delegation_team_members: Vec<TeamMember>,
    /// Keyed "Q1".."Q4"
    #[serde(default)]
    pub quarterly_checklist: HashMap<String, ChecklistQuarter>,
    #[serde(default)]
    pub impulse_counter: ImpulseCounter,
    /// Newest first
    #[serde(default)]
    pub saved_reflections: Vec<Reflection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegationLogEntry {
    #[serde(default)]
    pub id: u64,
    /// RFC3339 date of the event
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Empty when no stretch project has been assigned yet
    #[serde(default)]
    pub stretch_project: String,
    #[serde(default)]
    pub delegation_level: u8,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistQuarter {
    #[serde(default)]
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Running count of delegation impulses caught vs actually redirected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpulseCounter {
    #[serde(default)]
    pub caught: u32,
    #[serde(default)]
    pub redirected: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    /// RFC3339 date the reflection was saved
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub went_well: String,
    #[serde(default)]
    pub to_improve: String,
    #[serde(default)]
    pub next_week: String,
}

// ============================================================================
// Performance review
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReviewRecord {
    #[serde(default)]
    pub review_year: u16,
    /// Team name -> member names
    #[serde(default)]
    pub teams: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub weights: Weights,
    #[serde(default)]
    pub criteria: Rubrics,
    /// Member name -> full review
    #[serde(default)]
    pub team_members: HashMap<String, MemberReview>,
}

/// Weight triple for the overall score; consumers trust it sums to 1.0
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    #[serde(default)]
    pub aamva_cares: f64,
    #[serde(default)]
    pub competencies: f64,
    #[serde(default)]
    pub goals: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubrics {
    #[serde(default)]
    pub aamva_cares: Vec<Criterion>,
    #[serde(default)]
    pub competencies: Vec<Criterion>,
}

/// A single rated dimension within a rubric
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberReview {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
    /// Criterion id -> rating pair
    #[serde(default)]
    pub aamva_cares: HashMap<String, Rating>,
    #[serde(default)]
    pub competencies: HashMap<String, Rating>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub summary: String,
    #[serde(default, rename = "scores2024")]
    pub scores_2024: PriorScores,
}

/// Self and manager ratings for one criterion, 1-5 by convention.
/// Storage does not enforce the range; missing values read as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default, rename = "self")]
    pub self_rating: f64,
    #[serde(default)]
    pub manager: f64,
    #[serde(default)]
    pub self_comment: String,
    #[serde(default)]
    pub manager_comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "self")]
    pub self_rating: f64,
    #[serde(default)]
    pub manager: f64,
    #[serde(default)]
    pub self_comment: String,
    #[serde(default)]
    pub manager_comment: String,
}

/// Prior-year score snapshot carried for comparison views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorScores {
    #[serde(default)]
    pub aamva_cares: f64,
    #[serde(default)]
    pub competencies: f64,
    #[serde(default)]
    pub goals: f64,
    #[serde(default)]
    pub overall: f64,
}
