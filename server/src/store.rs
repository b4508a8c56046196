//! # Meilisearch
//!
//! Document store holding the review log.
//!
//! ## Schema
//! - One `reviews` index, primary key `id` (UUID v4, minted here at insert)
//! - Documents are the full camelCase review record from the `reviews` crate
//! - `totalScore` is sortable and `sort` leads the ranking rules, so the
//!   listing comes back exactly total-score-descending
//!
//! ## Writes
//! - Inserts and updates recompute the stored total from the submitted score
//!   block and stamp the timestamps, then wait for task completion so the
//!   caller reads its own write
//! - Updates keep `createdAt` from the existing document and 404 when the id
//!   is unknown
//!
//! ## Notes
//! - The whole log is fetched in one page. There is no pagination, this is a
//!   personal log and stays far below the page cap.
use std::sync::Arc;

use chrono::Utc;
use meilisearch_sdk::{
    client::Client,
    errors::{Error, ErrorCode, MeilisearchError},
    settings::Settings,
};
use reviews::review::{Review, ReviewDraft};
use uuid::Uuid;

use crate::error::AppError;

pub const REVIEW_INDEX: &str = "reviews";
pub const REVIEW_ID: &str = "id";
pub const REVIEW_TOTAL: &str = "totalScore";

const LIST_LIMIT: usize = 1000;

pub async fn init_review_index(meili_url: &str, meili_admin_key: &str) -> Arc<Client> {
    let meili_client = Arc::new(Client::new(meili_url, Some(meili_admin_key)).unwrap());

    meili_client
        .index(REVIEW_INDEX)
        .set_settings(&init_settings())
        .await
        .unwrap();

    meili_client
}

fn init_settings() -> Settings {
    Settings::new()
        .with_ranking_rules([
            "sort",
            "words",
            "typo",
            "proximity",
            "attribute",
            "exactness",
        ])
        .with_sortable_attributes([REVIEW_TOTAL])
}

/// Every review, best first.
pub async fn list_reviews(meili_client: &Client) -> Result<Vec<Review>, AppError> {
    let results = meili_client
        .index(REVIEW_INDEX)
        .search()
        .with_sort(&["totalScore:desc"])
        .with_limit(LIST_LIMIT)
        .execute::<Review>()
        .await?;

    Ok(results.hits.into_iter().map(|hit| hit.result).collect())
}

pub async fn get_review(meili_client: &Client, id: &str) -> Result<Review, AppError> {
    meili_client
        .index(REVIEW_INDEX)
        .get_document::<Review>(id)
        .await
        .map_err(|error| match error {
            Error::Meilisearch(MeilisearchError {
                error_code: ErrorCode::DocumentNotFound,
                ..
            }) => AppError::NotFound,
            other => AppError::Store(other),
        })
}

pub async fn insert_review(meili_client: &Client, draft: ReviewDraft) -> Result<Review, AppError> {
    let now = Utc::now();
    let review = draft.into_review(Uuid::new_v4().to_string(), now, now);

    upsert_review(meili_client, &review).await?;

    Ok(review)
}

pub async fn update_review(
    meili_client: &Client,
    id: &str,
    draft: ReviewDraft,
) -> Result<Review, AppError> {
    let existing = get_review(meili_client, id).await?;
    let review = draft.into_review(existing.id, existing.created_at, Utc::now());

    upsert_review(meili_client, &review).await?;

    Ok(review)
}

pub async fn delete_review(meili_client: &Client, id: &str) -> Result<(), AppError> {
    let _result = meili_client
        .index(REVIEW_INDEX)
        .delete_document(id)
        .await?
        .wait_for_completion(meili_client, None, None)
        .await?;

    #[cfg(feature = "verbose")]
    println!("Meili task result: {:?}", _result);

    Ok(())
}

async fn upsert_review(meili_client: &Client, review: &Review) -> Result<(), AppError> {
    let _result = meili_client
        .index(REVIEW_INDEX)
        .add_or_update(std::slice::from_ref(review), Some(REVIEW_ID))
        .await?
        .wait_for_completion(meili_client, None, None)
        .await?;

    #[cfg(feature = "verbose")]
    println!("Meili task result: {:?}", _result);

    Ok(())
}
