//! Test doubles shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled for `cfg(test)` and the `test-support` feature only.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::ports::{ReviewRepository, ReviewRepositoryError};
use crate::domain::{NewReview, Review, ReviewSummary};

/// In-process [`ReviewRepository`] with the same uniqueness guarantee as the
/// SQL unique index on `serial_no`.
///
/// # Examples
/// ```
/// use review_api::domain::ports::ReviewRepository;
/// use review_api::test_support::InMemoryReviewRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryReviewRepository::new();
/// assert!(repo.list_summaries().await.expect("list").is_empty());
/// assert_eq!(repo.calls(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    rows: Mutex<Vec<Review>>,
    calls: AtomicUsize,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of stored reviews.
    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn list_summaries(&self) -> Result<Vec<ReviewSummary>, ReviewRepositoryError> {
        self.record_call();
        let mut rows = self.rows.lock().await.clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows.into_iter().map(ReviewSummary::from).collect())
    }

    async fn find_by_serial_no(
        &self,
        serial_no: i64,
    ) -> Result<Option<Review>, ReviewRepositoryError> {
        self.record_call();
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.serial_no == serial_no).cloned())
    }

    async fn insert(&self, review: &NewReview) -> Result<i64, ReviewRepositoryError> {
        self.record_call();
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|row| row.serial_no == review.serial_no) {
            return Err(ReviewRepositoryError::duplicate_serial(review.serial_no));
        }
        let id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        rows.push(Review {
            id,
            serial_no: review.serial_no,
            review: review.review.clone(),
            status: review.status,
            mobile_no: review.mobile_no.clone(),
            email: review.email.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ReviewRepositoryError> {
        self.record_call();
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|row| row.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReviewStatus;
    use rstest::rstest;

    fn new_review(serial_no: i64) -> NewReview {
        NewReview {
            serial_no,
            review: format!("review {serial_no}"),
            status: ReviewStatus::Pass,
            mobile_no: "1234567890".to_owned(),
            email: "user@example.com".to_owned(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn insert_enforces_serial_uniqueness() {
        let repo = InMemoryReviewRepository::new();

        repo.insert(&new_review(1)).await.expect("first insert");
        let err = repo.insert(&new_review(1)).await.expect_err("duplicate");

        assert_eq!(err, ReviewRepositoryError::duplicate_serial(1));
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryReviewRepository::new();
        for serial in [10, 20, 30] {
            repo.insert(&new_review(serial)).await.expect("insert");
        }

        let serials: Vec<i64> = repo
            .list_summaries()
            .await
            .expect("list")
            .into_iter()
            .map(|summary| summary.serial_no)
            .collect();

        assert_eq!(serials, [30, 20, 10]);
    }
}
