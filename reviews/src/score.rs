//! # Scoring
//!
//! Corpus-wide per-category averages and the per-review total.
//!
//! Both computations read their input and nothing else, so they are safe to
//! run repeatedly over any snapshot of the review list. Inputs are assumed
//! pre-validated to [0, 10]; out-of-range values are a caller bug.

use serde::{Deserialize, Serialize};

use crate::review::{Review, Scores};

/// Per-category mean over the whole review set. Computed fresh on demand and
/// never persisted or cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AverageScores {
    pub fun: f64,
    pub completion: f64,
    pub immersion: f64,
    pub price: f64,
    pub design: f64,
}

/// Per-category arithmetic mean over `reviews`.
///
/// A review without a score block contributes 0 to every category total but
/// still counts toward the divisor. An empty input yields 0 for every
/// category.
pub fn average_scores(reviews: &[Review]) -> AverageScores {
    let mut totals = AverageScores::default();

    for review in reviews {
        if let Some(scores) = &review.scores {
            totals.fun += scores.fun;
            totals.completion += scores.completion;
            totals.immersion += scores.immersion;
            totals.price += scores.price;
            totals.design += scores.design;
        }
    }

    let count = reviews.len();
    if count == 0 {
        return AverageScores::default();
    }

    let n = count as f64;
    AverageScores {
        fun: totals.fun / n,
        completion: totals.completion / n,
        immersion: totals.immersion / n,
        price: totals.price / n,
        design: totals.design / n,
    }
}

/// Arithmetic mean of however many values are supplied. The divisor is the
/// count of values actually present, not a fixed 5. Callers must supply at
/// least one value.
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for value in values {
        sum += value;
        count += 1;
    }

    sum / count as f64
}

/// The stored total for a review: unrounded mean of the score block, or 0
/// when the block is absent.
pub fn total_score(scores: Option<&Scores>) -> f64 {
    scores.map(|scores| mean(scores.values())).unwrap_or(0.0)
}

/// One-decimal presentation of a score or total. Ranking and arithmetic use
/// the unrounded value.
pub fn display_score(value: f64) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::{AverageScores, average_scores, display_score, mean, total_score};
    use crate::review::{Review, Scores};

    fn scored_review(id: &str, value: f64) -> Review {
        Review {
            id: id.to_string(),
            theme_name: format!("theme {id}"),
            venue: "venue".to_string(),
            region: "region".to_string(),
            genres: Vec::new(),
            visit_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            participants: 2,
            success: true,
            hints_used: 0,
            time_remaining: 5,
            scores: Some(Scores {
                fun: value,
                completion: value,
                immersion: value,
                price: value,
                design: value,
            }),
            difficulty: None,
            horror: None,
            activity: None,
            device_ratio: None,
            notes: None,
            total_score: value,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn unscored_review(id: &str) -> Review {
        let mut review = scored_review(id, 0.0);
        review.scores = None;
        review
    }

    #[test]
    fn test_mean_of_flat_block() {
        assert_eq!(mean([5.0, 5.0, 5.0, 5.0, 5.0]), 5.0);
        assert_eq!(display_score(mean([5.0, 5.0, 5.0, 5.0, 5.0])), "5.0");
    }

    #[test]
    fn test_mean_of_mixed_block() {
        assert_eq!(mean([10.0, 0.0, 10.0, 0.0, 10.0]), 6.0);
    }

    #[test]
    fn test_mean_divides_by_present_count() {
        // a partial block divides by how many values showed up
        assert_eq!(mean([9.0, 6.0]), 7.5);
        assert_eq!(mean([3.0]), 3.0);
    }

    #[test]
    fn test_total_score_of_missing_block() {
        assert_eq!(total_score(None), 0.0);
    }

    #[test]
    fn test_averages_of_empty_set() {
        assert_eq!(average_scores(&[]), AverageScores::default());
    }

    #[test]
    fn test_averages_of_opposite_reviews() {
        let reviews = vec![scored_review("a", 10.0), scored_review("b", 0.0)];
        let averages = average_scores(&reviews);

        assert_eq!(averages.fun, 5.0);
        assert_eq!(averages.completion, 5.0);
        assert_eq!(averages.immersion, 5.0);
        assert_eq!(averages.price, 5.0);
        assert_eq!(averages.design, 5.0);
    }

    #[test]
    fn test_unscored_review_still_divides() {
        // one scored + one unscored halves every category
        let reviews = vec![scored_review("a", 8.0), unscored_review("b")];
        let averages = average_scores(&reviews);

        assert_eq!(averages.fun, 4.0);
        assert_eq!(averages.design, 4.0);
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(display_score(7.649999), "7.6");
        assert_eq!(display_score(mean([8.0, 7.0, 9.0, 6.0, 8.0])), "7.6");
    }
}
