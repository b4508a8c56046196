//! # Review Records
//!
//! One review is one recorded play session of an escape-room theme.
//!
//! ## Document Shape
//! - Stored as a single document keyed by `id`, camelCase fields on the wire
//! - `totalScore` is written once at insert/update time and is the source of
//!   truth for ranking, it is never re-derived on read
//! - `scores` may be absent on old documents, such reviews still show up in
//!   listings and still count toward the corpus averages
//!
//! ## Validation
//! Drafts are checked once at the store boundary. The pure computations in
//! [`crate::score`] and [`crate::color`] assume in-range input and do not
//! defend against violations themselves.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 10.0;

/// The five fixed sub-scores defining a review's quality profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub fun: f64,
    pub completion: f64,
    pub immersion: f64,
    pub price: f64,
    pub design: f64,
}

impl Scores {
    /// Category values in fixed order: fun, completion, immersion, price,
    /// design.
    pub fn values(&self) -> [f64; 5] {
        [
            self.fun,
            self.completion,
            self.immersion,
            self.price,
            self.design,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub theme_name: String,
    pub venue: String,
    pub region: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub visit_date: NaiveDate,
    pub participants: u32,
    pub success: bool,
    pub hints_used: u32,
    pub time_remaining: u32,
    #[serde(default)]
    pub scores: Option<Scores>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub horror: Option<f64>,
    #[serde(default)]
    pub activity: Option<f64>,
    #[serde(default)]
    pub device_ratio: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    pub total_score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Device : lock share of the room, `device_ratio` v reads as v : 10 - v.
    pub fn device_lock_split(&self) -> Option<(f64, f64)> {
        self.device_ratio
            .map(|ratio| (ratio, RATING_MAX - ratio))
    }
}

/// A client-submitted review: everything the caller controls. Ids, the stored
/// total and timestamps are assigned at the store boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub theme_name: String,
    pub venue: String,
    pub region: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub visit_date: NaiveDate,
    pub participants: u32,
    pub success: bool,
    #[serde(default)]
    pub hints_used: u32,
    #[serde(default)]
    pub time_remaining: u32,
    #[serde(default)]
    pub scores: Option<Scores>,
    #[serde(default)]
    pub difficulty: Option<f64>,
    #[serde(default)]
    pub horror: Option<f64>,
    #[serde(default)]
    pub activity: Option<f64>,
    #[serde(default)]
    pub device_ratio: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("participants must be at least 1")]
    NoParticipants,

    #[error("{field} must be between 0 and 10, got {value}")]
    RatingOutOfRange { field: &'static str, value: f64 },

    #[error("duplicate genre tag: {0}")]
    DuplicateGenre(String),
}

impl ReviewDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_text("theme name", &self.theme_name)?;
        check_text("venue", &self.venue)?;
        check_text("region", &self.region)?;

        if self.participants == 0 {
            return Err(ValidationError::NoParticipants);
        }

        let mut seen = HashSet::new();
        for genre in &self.genres {
            if !seen.insert(genre.as_str()) {
                return Err(ValidationError::DuplicateGenre(genre.clone()));
            }
        }

        if let Some(scores) = &self.scores {
            check_rating("fun", scores.fun)?;
            check_rating("completion", scores.completion)?;
            check_rating("immersion", scores.immersion)?;
            check_rating("price", scores.price)?;
            check_rating("design", scores.design)?;
        }

        check_optional_rating("difficulty", self.difficulty)?;
        check_optional_rating("horror", self.horror)?;
        check_optional_rating("activity", self.activity)?;
        check_optional_rating("device ratio", self.device_ratio)?;

        Ok(())
    }

    /// Seal a validated draft into a stored review. The total is computed
    /// here, once, and travels with the document from now on.
    pub fn into_review(
        self,
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Review {
        Review {
            id,
            total_score: crate::score::total_score(self.scores.as_ref()),
            theme_name: self.theme_name,
            venue: self.venue,
            region: self.region,
            genres: self.genres,
            visit_date: self.visit_date,
            participants: self.participants,
            success: self.success,
            hints_used: self.hints_used,
            time_remaining: self.time_remaining,
            scores: self.scores,
            difficulty: self.difficulty,
            horror: self.horror,
            activity: self.activity,
            device_ratio: self.device_ratio,
            notes: self.notes,
            created_at,
            updated_at,
        }
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(())
}

fn check_rating(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(ValidationError::RatingOutOfRange { field, value });
    }

    Ok(())
}

fn check_optional_rating(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(value) => check_rating(field, value),
        None => Ok(()),
    }
}
