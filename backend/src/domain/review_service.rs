//! Review use-cases.
//!
//! [`ReviewService`] implements both review driving ports on top of a
//! [`ReviewRepository`]. Store failures are logged here with their cause and
//! surfaced to callers as [`ReviewServiceError::Database`] carrying a fixed,
//! client-safe message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    ReviewRepository, ReviewRepositoryError, ReviewServiceError, ReviewsCommand, ReviewsQuery,
};
use crate::domain::{NewReview, Review, ReviewSummary};

const FETCH_FAILED: &str = "Failed to fetch reviews from database";
const CREATE_FAILED: &str = "Failed to create review in database";
const REFETCH_MISSING: &str = "Failed to retrieve created review";

/// Service implementing [`ReviewsQuery`] and [`ReviewsCommand`].
#[derive(Clone)]
pub struct ReviewService<R> {
    repository: Arc<R>,
}

impl<R> ReviewService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_create_error(error: ReviewRepositoryError, serial_no: i64) -> ReviewServiceError {
    match error {
        // The unique index closes the window between the pre-check and insert.
        ReviewRepositoryError::DuplicateSerial { .. } => {
            info!(serial_no, "concurrent insert lost the serial_no race");
            ReviewServiceError::duplicate_serial(serial_no)
        }
        other => {
            error!(error = %other, serial_no, "failed to create review");
            ReviewServiceError::database(CREATE_FAILED)
        }
    }
}

#[async_trait]
impl<R> ReviewsQuery for ReviewService<R>
where
    R: ReviewRepository,
{
    async fn list_reviews(&self) -> Result<Vec<ReviewSummary>, ReviewServiceError> {
        self.repository.list_summaries().await.map_err(|err| {
            error!(error = %err, "failed to list reviews");
            ReviewServiceError::database(FETCH_FAILED)
        })
    }
}

#[async_trait]
impl<R> ReviewsCommand for ReviewService<R>
where
    R: ReviewRepository,
{
    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewServiceError> {
        let serial_no = review.serial_no;

        let existing = self
            .repository
            .find_by_serial_no(serial_no)
            .await
            .map_err(|err| map_create_error(err, serial_no))?;
        if existing.is_some() {
            info!(serial_no, "rejected review with duplicate serial_no");
            return Err(ReviewServiceError::duplicate_serial(serial_no));
        }

        let id = self
            .repository
            .insert(&review)
            .await
            .map_err(|err| map_create_error(err, serial_no))?;

        match self.repository.find_by_id(id).await {
            Ok(Some(created)) => {
                info!(id, serial_no, "review created");
                Ok(created)
            }
            Ok(None) => {
                error!(id, serial_no, "created review vanished before re-fetch");
                Err(ReviewServiceError::database(REFETCH_MISSING))
            }
            Err(err) => Err(map_create_error(err, serial_no)),
        }
    }
}

#[cfg(test)]
#[path = "review_service_tests.rs"]
mod tests;
