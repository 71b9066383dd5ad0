//! Default dataset seeded when no remote document exists yet

use chrono::Utc;
use std::collections::HashMap;

use super::{
    ChecklistItem, ChecklistQuarter, Criterion, DelegationRecord, ImpulseCounter,
    PerformanceReviewRecord, PortalSnapshot, Rubrics, TeamMember, Weights,
};

const QUARTERLY_ITEMS: [(&str, [&str; 4]); 4] = [
    (
        "Q1",
        [
            "Create Delegation Inventory",
            "Identify stretch project for each team member",
            "Implement 5-minute rule",
            "Start delegation conversations in 1:1s",
        ],
    ),
    (
        "Q2",
        [
            "Assign ownership (not tasks) to 2+ team members",
            "Practice coaching questions instead of answers",
            "Establish review checkpoints for delegated projects",
            "Have team members document their decisions",
        ],
    ),
    (
        "Q3",
        [
            "Delegate a visible initiative to a team member",
            "Have each team member lead a knowledge-sharing session",
            "Step back from daily decisions in delegated areas",
            "Ask team members what they can do now vs 6 months ago",
        ],
    ),
    (
        "Q4",
        [
            "Share delegation progress with John",
            "Gather team feedback on ownership and challenge",
            "Plan next-level delegation for next year",
            "Publicly recognize team member stretch accomplishments",
        ],
    ),
];

/// Seed the two default records plus a fresh timestamp
pub fn default_snapshot() -> PortalSnapshot {
    PortalSnapshot {
        delegation: default_delegation(),
        performance_review: default_performance_review(),
        last_updated: Utc::now().to_rfc3339(),
    }
}

fn default_delegation() -> DelegationRecord {
    let quarterly_checklist = QUARTERLY_ITEMS
        .iter()
        .map(|(quarter, texts)| {
            let items = texts
                .iter()
                .enumerate()
                .map(|(i, text)| ChecklistItem {
                    id: i as u64 + 1,
                    text: text.to_string(),
                    done: false,
                })
                .collect();
            (quarter.to_string(), ChecklistQuarter { items })
        })
        .collect();

    DelegationRecord {
        delegation_log: Vec::new(),
        delegation_team_members: vec![
            TeamMember {
                id: 1,
                name: "Team Member 1".to_string(),
                stretch_project: String::new(),
                delegation_level: 2,
                notes: String::new(),
            },
            TeamMember {
                id: 2,
                name: "Team Member 2".to_string(),
                stretch_project: String::new(),
                delegation_level: 2,
                notes: String::new(),
            },
        ],
        quarterly_checklist,
        impulse_counter: ImpulseCounter {
            caught: 0,
            redirected: 0,
        },
        saved_reflections: Vec::new(),
    }
}

fn default_performance_review() -> PerformanceReviewRecord {
    PerformanceReviewRecord {
        review_year: 2025,
        teams: HashMap::new(),
        weights: Weights {
            aamva_cares: 0.25,
            competencies: 0.25,
            goals: 0.50,
        },
        criteria: default_rubrics(),
        team_members: HashMap::new(),
    }
}

fn default_rubrics() -> Rubrics {
    Rubrics {
        aamva_cares: vec![
            criterion(
                "coach",
                "Coach",
                "Helping colleagues, employees, and leaders using a variety of positive and \
                 supportive methods and techniques.",
            ),
            criterion(
                "appreciate",
                "Appreciate",
                "Expressing the worth and importance of colleagues, employees, and leaders by \
                 recognizing the value of their ideas and efforts.",
            ),
            criterion(
                "respect",
                "Respect",
                "Treating, thinking about, and interacting with colleagues, employees, and \
                 leaders in a manner that is mindful of individual personalities.",
            ),
            criterion(
                "empower",
                "Empower",
                "Committing to making co-workers, employees, and leaders stronger through open \
                 communication and delegation.",
            ),
            criterion(
                "support",
                "Support",
                "Building strong relationships while displaying a harmonious and collaborative \
                 style.",
            ),
        ],
        competencies: vec![
            criterion(
                "jobKnowledge",
                "Application of Job Knowledge",
                "Has an understanding of the facts, principles and expectations of their job.",
            ),
            criterion(
                "managingTech",
                "Managing Technology",
                "Has an awareness of, researches and adopts effective technologies that improve \
                 the bottom line.",
            ),
            criterion(
                "problemSolving",
                "Problem Solving/Analysis",
                "Able to understand a situation by moving through the data presented and \
                 processing the information in a systematic way.",
            ),
            criterion(
                "technicalSkills",
                "Technical Skills",
                "Achieves a proficient level of technical and professional skills/knowledge in \
                 job-related areas.",
            ),
            criterion(
                "leadership",
                "Leadership",
                "Works proactively and effectively to accomplish objectives and build consensus \
                 on common goals.",
            ),
        ],
    }
}

fn criterion(id: &str, name: &str, description: &str) -> Criterion {
    Criterion {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}
