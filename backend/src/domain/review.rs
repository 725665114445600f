//! Review aggregate, its canonical create request, and the public projection.
//!
//! A review is created once and never mutated. `mobile_no` and `email` are
//! write-only from the perspective of listing clients, so list endpoints work
//! with [`ReviewSummary`] rather than the full [`Review`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for a reviewed unit.
///
/// Serialised exactly as `"PASS"` or `"FAIL"`; parsing is case-sensitive.
///
/// # Examples
/// ```
/// use review_api::domain::ReviewStatus;
///
/// let status: ReviewStatus = "PASS".parse().expect("valid status");
/// assert_eq!(status, ReviewStatus::Pass);
/// assert!("pass".parse::<ReviewStatus>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReviewStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "FAIL")]
    Fail,
}

impl ReviewStatus {
    /// Wire and storage representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is neither `PASS` nor `FAIL`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown review status: {value}")]
pub struct ReviewStatusParseError {
    value: String,
}

impl FromStr for ReviewStatus {
    type Err = ReviewStatusParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            other => Err(ReviewStatusParseError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Canonical create request produced by the review validator.
///
/// ## Invariants
/// - `review` is trimmed and non-empty.
/// - `mobile_no` is exactly ten ASCII digits.
/// - `email` is trimmed, lower-cased and syntactically valid.
///
/// Construct through [`crate::domain::parse_and_validate`] so the invariants
/// hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub serial_no: i64,
    pub review: String,
    pub status: ReviewStatus,
    pub mobile_no: String,
    pub email: String,
}

/// Persisted review including store-assigned columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Store-assigned surrogate key.
    pub id: i64,
    /// Caller-supplied business key, unique across all reviews.
    pub serial_no: i64,
    pub review: String,
    pub status: ReviewStatus,
    pub mobile_no: String,
    pub email: String,
    /// Insertion timestamp assigned by the store.
    pub created_at: DateTime<Utc>,
}

/// Public projection of a review returned by list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub serial_no: i64,
    pub review: String,
    pub status: ReviewStatus,
}

impl From<Review> for ReviewSummary {
    fn from(value: Review) -> Self {
        let Review {
            serial_no,
            review,
            status,
            ..
        } = value;
        Self {
            serial_no,
            review,
            status,
        }
    }
}
