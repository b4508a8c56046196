//! # List Filtering
//!
//! Exact-match filtering over an already-fetched review list, plus the
//! distinct venue/region/genre values that feed the filter dropdowns.
//!
//! Filtering is pure and order-preserving: the store returns the list sorted
//! by total score and that order survives every combination of criteria.

use serde::{Deserialize, Serialize};

use crate::review::Review;

/// The three optional filter criteria. An unset or empty value places no
/// constraint on its field; set values compose with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewFilter {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl ReviewFilter {
    pub fn is_empty(&self) -> bool {
        active(&self.region).is_none()
            && active(&self.venue).is_none()
            && active(&self.genre).is_none()
    }

    /// Case-sensitive equality for region and venue, membership for genre.
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(region) = active(&self.region) {
            if review.region != region {
                return false;
            }
        }

        if let Some(venue) = active(&self.venue) {
            if review.venue != venue {
                return false;
            }
        }

        if let Some(genre) = active(&self.genre) {
            if !review.genres.iter().any(|g| g == genre) {
                return false;
            }
        }

        true
    }

    /// The matching subset, in the input's original order.
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews.iter().filter(|review| self.matches(review)).collect()
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Distinct values for the dropdowns, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    pub venues: Vec<String>,
    pub regions: Vec<String>,
    pub genres: Vec<String>,
}

pub fn facets(reviews: &[Review]) -> Facets {
    let mut facets = Facets::default();

    for review in reviews {
        push_unique(&mut facets.venues, &review.venue);
        push_unique(&mut facets.regions, &review.region);

        for genre in &review.genres {
            push_unique(&mut facets.genres, genre);
        }
    }

    facets
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::{ReviewFilter, facets};
    use crate::review::Review;

    fn review(id: &str, venue: &str, region: &str, genres: &[&str]) -> Review {
        Review {
            id: id.to_string(),
            theme_name: format!("theme {id}"),
            venue: venue.to_string(),
            region: region.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            visit_date: NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            participants: 3,
            success: true,
            hints_used: 0,
            time_remaining: 8,
            scores: None,
            difficulty: None,
            horror: None,
            activity: None,
            device_ratio: None,
            notes: None,
            total_score: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Review> {
        vec![
            review("1", "Key & Code", "Gangnam", &["thriller", "mystery"]),
            review("2", "Locked", "Hongdae", &["horror"]),
            review("3", "Key & Code", "Gangnam", &["sf"]),
            review("4", "Locked", "Gangnam", &["thriller"]),
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let reviews = sample();
        let filtered = ReviewFilter::default().apply(&reviews);

        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_empty_string_counts_as_unset() {
        let filter = ReviewFilter {
            region: Some(String::new()),
            venue: None,
            genre: None,
        };

        assert!(filter.is_empty());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_criteria_compose_with_and() {
        let filter = ReviewFilter {
            region: Some("Gangnam".to_string()),
            venue: Some("Locked".to_string()),
            genre: Some("thriller".to_string()),
        };

        let reviews = sample();
        let filtered = filter.apply(&reviews);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "4");
    }

    #[test]
    fn test_genre_is_membership_not_equality() {
        let filter = ReviewFilter {
            region: None,
            venue: None,
            genre: Some("mystery".to_string()),
        };

        let reviews = sample();
        let filtered = filter.apply(&reviews);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = ReviewFilter {
            region: Some("gangnam".to_string()),
            venue: None,
            genre: None,
        };

        assert!(filter.apply(&sample()).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let filter = ReviewFilter {
            region: Some("Gangnam".to_string()),
            venue: None,
            genre: None,
        };

        let reviews = sample();
        let once: Vec<Review> = filter
            .apply(&reviews)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Review> = filter.apply(&once).into_iter().cloned().collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_facets_dedup_in_first_seen_order() {
        let found = facets(&sample());

        assert_eq!(found.venues, vec!["Key & Code", "Locked"]);
        assert_eq!(found.regions, vec!["Gangnam", "Hongdae"]);
        assert_eq!(found.genres, vec!["thriller", "mystery", "horror", "sf"]);
    }
}
