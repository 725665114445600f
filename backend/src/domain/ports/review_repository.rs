//! Driven port for review persistence.

use async_trait::async_trait;

use crate::domain::{NewReview, Review, ReviewSummary};

use super::define_port_error;

define_port_error! {
    /// Errors raised by review repository adapters.
    pub enum ReviewRepositoryError {
        /// No connection could be checked out or the connection dropped.
        Connection { message: String } =>
            "review repository connection failed: {message}",
        /// Statement failed, or a stored row no longer maps onto the domain.
        Query { message: String } =>
            "review repository query failed: {message}",
        /// The store's unique constraint on `serial_no` rejected a write.
        DuplicateSerial { serial_no: i64 } =>
            "review repository rejected duplicate serial_no {serial_no}",
    }
}

/// Storage operations backing the review use-cases.
///
/// Implementations must enforce `serial_no` uniqueness themselves (a unique
/// index in SQL) and report a collision as
/// [`ReviewRepositoryError::DuplicateSerial`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Public projections of every review, newest first.
    async fn list_summaries(&self) -> Result<Vec<ReviewSummary>, ReviewRepositoryError>;

    /// Look a review up by its business key.
    async fn find_by_serial_no(
        &self,
        serial_no: i64,
    ) -> Result<Option<Review>, ReviewRepositoryError>;

    /// Persist a new review and return the store-assigned id.
    async fn insert(&self, review: &NewReview) -> Result<i64, ReviewRepositoryError>;

    /// Look a review up by its store-assigned id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewRepositoryError>;
}
