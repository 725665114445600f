//! Driving port for reading reviews.

use async_trait::async_trait;

use crate::domain::ReviewSummary;

use super::ReviewServiceError;

/// Read-side review use-cases invoked by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewsQuery: Send + Sync {
    /// Every review's public projection, newest first.
    async fn list_reviews(&self) -> Result<Vec<ReviewSummary>, ReviewServiceError>;
}
