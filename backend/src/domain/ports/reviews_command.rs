//! Driving port for submitting reviews.
//!
//! Callers hand over a [`NewReview`] that has already passed validation; the
//! port is responsible for uniqueness of `serial_no` and for returning the row
//! exactly as stored.

use async_trait::async_trait;

use crate::domain::{NewReview, Review};

use super::ReviewServiceError;

/// Write-side review use-cases invoked by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsCommand: Send + Sync {
    /// Store a review, failing with
    /// [`ReviewServiceError::DuplicateSerial`] when its serial is taken.
    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewServiceError>;
}
