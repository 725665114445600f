//! PostgreSQL-backed `ReviewRepository` implementation using Diesel ORM.
//!
//! All values are bound through the query builder. Rows are converted to
//! domain types on the way out; a stored status that no longer parses is
//! reported as a query error rather than silently coerced.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ReviewRepository, ReviewRepositoryError};
use crate::domain::{NewReview, Review, ReviewStatus, ReviewSummary};

use super::models::{NewReviewRow, ReviewRow, ReviewSummaryRow};
use super::pool::DbPool;
use super::review_error_mapping::{map_diesel_error, map_pool_error, map_read_error};
use super::schema::reviews;

/// Diesel-backed implementation of the review repository port.
#[derive(Clone)]
pub struct DieselReviewRepository {
    pool: DbPool,
}

impl DieselReviewRepository {
    /// Create a repository drawing connections from `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn parse_status(raw: &str) -> Result<ReviewStatus, ReviewRepositoryError> {
    raw.parse::<ReviewStatus>()
        .map_err(|err| ReviewRepositoryError::query(err.to_string()))
}

fn row_to_review(row: ReviewRow) -> Result<Review, ReviewRepositoryError> {
    let ReviewRow {
        id,
        serial_no,
        review,
        status,
        mobile_no,
        email,
        created_at,
    } = row;

    Ok(Review {
        id,
        serial_no,
        review,
        status: parse_status(&status)?,
        mobile_no,
        email,
        created_at,
    })
}

fn row_to_summary(row: ReviewSummaryRow) -> Result<ReviewSummary, ReviewRepositoryError> {
    Ok(ReviewSummary {
        status: parse_status(&row.status)?,
        serial_no: row.serial_no,
        review: row.review,
    })
}

#[async_trait]
impl ReviewRepository for DieselReviewRepository {
    async fn list_summaries(&self) -> Result<Vec<ReviewSummary>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ReviewSummaryRow> = reviews::table
            .select(ReviewSummaryRow::as_select())
            .order((reviews::created_at.desc(), reviews::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_read_error)?;

        rows.into_iter().map(row_to_summary).collect()
    }

    async fn find_by_serial_no(
        &self,
        serial_no: i64,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ReviewRow> = reviews::table
            .filter(reviews::serial_no.eq(serial_no))
            .select(ReviewRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_review).transpose()
    }

    async fn insert(&self, review: &NewReview) -> Result<i64, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewReviewRow {
            serial_no: review.serial_no,
            review: &review.review,
            status: review.status.as_str(),
            mobile_no: &review.mobile_no,
            email: &review.email,
        };

        diesel::insert_into(reviews::table)
            .values(&row)
            .returning(reviews::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, review.serial_no))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ReviewRow> = reviews::table
            .find(id)
            .select(ReviewRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_read_error)?;

        row.map(row_to_review).transpose()
    }
}
