//! Score aggregation
//!
//! Averages are rounded to one decimal place before any downstream use, so
//! the overall score and rating-gap checks see exactly what the portal UI
//! displays. Missing per-entry values count as 0 in the denominator rather
//! than being excluded.

use crate::model::PerformanceReviewRecord;

/// A rated category within a member review
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    AamvaCares,
    Competencies,
}

/// Paired self and manager averages for one member and category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePair {
    pub self_score: f64,
    pub manager: f64,
}

impl ScorePair {
    pub const ZERO: ScorePair = ScorePair {
        self_score: 0.0,
        manager: 0.0,
    };
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average the self and manager ratings across every criterion entry in the
/// named category; zeros when the member or category is absent or empty
pub fn category_average(
    member: &str,
    category: Category,
    review: &PerformanceReviewRecord,
) -> ScorePair {
    let Some(member_review) = review.team_members.get(member) else {
        return ScorePair::ZERO;
    };

    let ratings = match category {
        Category::AamvaCares => &member_review.aamva_cares,
        Category::Competencies => &member_review.competencies,
    };
    if ratings.is_empty() {
        return ScorePair::ZERO;
    }

    let count = ratings.len() as f64;
    let self_sum: f64 = ratings.values().map(|r| r.self_rating).sum();
    let manager_sum: f64 = ratings.values().map(|r| r.manager).sum();

    ScorePair {
        self_score: round1(self_sum / count),
        manager: round1(manager_sum / count),
    }
}

/// Average the self and manager ratings across the member's goal list;
/// zeros when the member is absent or has no goals
pub fn goals_average(member: &str, review: &PerformanceReviewRecord) -> ScorePair {
    let goals = match review.team_members.get(member) {
        Some(member_review) if !member_review.goals.is_empty() => &member_review.goals,
        _ => return ScorePair::ZERO,
    };

    let count = goals.len() as f64;
    let self_sum: f64 = goals.iter().map(|g| g.self_rating).sum();
    let manager_sum: f64 = goals.iter().map(|g| g.manager).sum();

    ScorePair {
        self_score: round1(self_sum / count),
        manager: round1(manager_sum / count),
    }
}

/// Weighted sum of the manager averages, rounded to two decimals
pub fn overall_score(member: &str, review: &PerformanceReviewRecord) -> f64 {
    let cares = category_average(member, Category::AamvaCares, review);
    let competencies = category_average(member, Category::Competencies, review);
    let goals = goals_average(member, review);
    let w = &review.weights;

    round2(
        cares.manager * w.aamva_cares
            + competencies.manager * w.competencies
            + goals.manager * w.goals,
    )
}

/// Tailwind style classes for a rating tier
pub fn rating_color(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "text-green-600 bg-green-50"
    } else if rating >= 3.5 {
        "text-blue-600 bg-blue-50"
    } else if rating >= 2.5 {
        "text-yellow-600 bg-yellow-50"
    } else {
        "text-red-600 bg-red-50"
    }
}

/// Text label for a rating tier
pub fn rating_label(rating: f64) -> &'static str {
    if rating >= 4.5 {
        "Outstanding"
    } else if rating >= 3.5 {
        "Exceeds"
    } else if rating >= 2.5 {
        "Meets"
    } else if rating >= 1.5 {
        "Needs Improvement"
    } else {
        "Unsatisfactory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Goal, MemberReview, Rating, Weights};

    fn rating(self_rating: f64, manager: f64) -> Rating {
        Rating {
            self_rating,
            manager,
            ..Default::default()
        }
    }

    fn goal(id: &str, self_rating: f64, manager: f64) -> Goal {
        Goal {
            id: id.to_string(),
            self_rating,
            manager,
            ..Default::default()
        }
    }

    fn review_with_member(member: MemberReview) -> PerformanceReviewRecord {
        let mut review = PerformanceReviewRecord {
            weights: Weights {
                aamva_cares: 0.25,
                competencies: 0.25,
                goals: 0.50,
            },
            ..Default::default()
        };
        review.team_members.insert(member.name.clone(), member);
        review
    }

    #[test]
    fn test_category_average() {
        let mut member = MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        };
        member.aamva_cares.insert("coach".to_string(), rating(3.0, 5.0));
        member.aamva_cares.insert("respect".to_string(), rating(4.0, 4.0));
        let review = review_with_member(member);

        let pair = category_average("Terry", Category::AamvaCares, &review);
        assert_eq!(pair.self_score, 3.5);
        assert_eq!(pair.manager, 4.5);
    }

    #[test]
    fn test_category_average_rounds_to_one_decimal() {
        let mut member = MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        };
        member.aamva_cares.insert("coach".to_string(), rating(3.0, 4.0));
        member.aamva_cares.insert("respect".to_string(), rating(4.0, 4.0));
        member.aamva_cares.insert("support".to_string(), rating(3.0, 5.0));
        let review = review_with_member(member);

        // 10/3 = 3.333..., 13/3 = 4.333...
        let pair = category_average("Terry", Category::AamvaCares, &review);
        assert_eq!(pair.self_score, 3.3);
        assert_eq!(pair.manager, 4.3);
    }

    #[test]
    fn test_unknown_member_is_zero_pair() {
        let review = PerformanceReviewRecord::default();
        assert_eq!(
            category_average("Nobody", Category::AamvaCares, &review),
            ScorePair::ZERO
        );
        assert_eq!(goals_average("Nobody", &review), ScorePair::ZERO);
    }

    #[test]
    fn test_empty_goal_list_is_zero_pair() {
        let review = review_with_member(MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        });
        assert_eq!(goals_average("Terry", &review), ScorePair::ZERO);
    }

    #[test]
    fn test_missing_values_count_in_denominator() {
        let mut member = MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        };
        // Second entry has no self rating recorded; it averages as 0
        member.aamva_cares.insert("coach".to_string(), rating(4.0, 4.0));
        member.aamva_cares.insert("respect".to_string(), rating(0.0, 4.0));
        let review = review_with_member(member);

        let pair = category_average("Terry", Category::AamvaCares, &review);
        assert_eq!(pair.self_score, 2.0);
    }

    #[test]
    fn test_overall_score_is_weighted_manager_average() {
        let mut member = MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        };
        member.aamva_cares.insert("coach".to_string(), rating(3.0, 4.0));
        member
            .competencies
            .insert("leadership".to_string(), rating(3.0, 3.0));
        member.goals.push(goal("g1", 4.0, 5.0));
        let review = review_with_member(member);

        // 4.0 * 0.25 + 3.0 * 0.25 + 5.0 * 0.50 = 4.25
        assert_eq!(overall_score("Terry", &review), 4.25);
    }

    #[test]
    fn test_overall_score_within_component_bounds() {
        let mut member = MemberReview {
            name: "Terry".to_string(),
            ..Default::default()
        };
        member.aamva_cares.insert("coach".to_string(), rating(2.0, 2.0));
        member
            .competencies
            .insert("leadership".to_string(), rating(4.0, 4.0));
        member.goals.push(goal("g1", 3.0, 3.0));
        let review = review_with_member(member);

        let overall = overall_score("Terry", &review);
        assert!(overall >= 2.0 && overall <= 4.0);
    }

    #[test]
    fn test_rating_labels_at_breakpoints() {
        assert_eq!(rating_label(4.5), "Outstanding");
        assert_eq!(rating_label(3.5), "Exceeds");
        assert_eq!(rating_label(2.5), "Meets");
        assert_eq!(rating_label(1.5), "Needs Improvement");
        assert_eq!(rating_label(1.4), "Unsatisfactory");
    }

    #[test]
    fn test_rating_colors_share_breakpoints() {
        assert_eq!(rating_color(4.5), "text-green-600 bg-green-50");
        assert_eq!(rating_color(3.5), "text-blue-600 bg-blue-50");
        assert_eq!(rating_color(2.5), "text-yellow-600 bg-yellow-50");
        assert_eq!(rating_color(2.4), "text-red-600 bg-red-50");
    }
}
