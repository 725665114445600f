//! Domain primitives, ports and use-cases.
//!
//! Purpose: define the review aggregate, the rules a submission must satisfy
//! and the services that orchestrate persistence through ports. Nothing here
//! depends on Actix or Diesel.
//!
//! Public surface:
//! - Review, NewReview, ReviewSummary, ReviewStatus: the aggregate and its
//!   projections.
//! - validate_create_request / parse_and_validate: submission validation.
//! - ReviewService: implementation of the review driving ports.
//! - Error / ErrorCode: client-facing failure.
//! - TraceId: request correlation identifier.

pub mod error;
pub mod ports;
pub mod review;
pub mod review_service;
pub mod review_validation;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::review::{NewReview, Review, ReviewStatus, ReviewStatusParseError, ReviewSummary};
pub use self::review_service::ReviewService;
pub use self::review_validation::{
    FieldError, format_field_errors, is_valid_email, is_valid_mobile_number, is_valid_status,
    parse_and_validate, validate_create_request,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Result alias for inbound adapters.
///
/// # Examples
/// ```
/// use review_api::domain::{ApiResult, Error};
///
/// fn reject() -> ApiResult<()> {
///     Err(Error::invalid_request("Invalid JSON in request body"))
/// }
/// assert!(reject().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
