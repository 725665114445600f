//! Review API handlers.
//!
//! ```text
//! GET  /api/reviews
//! POST /api/reviews {"serial_no":1001,"review":"...","status":"PASS","mobile_no":"9876543210","email":"a@b.co"}
//! ```
//!
//! Successful responses use the envelope `{"success": true, "data": ...}`.
//! The create body is read as JSON whatever its `Content-Type`, then checked
//! field by field so clients learn about every invalid field at once.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::ports::ReviewServiceError;
use crate::domain::{
    Error, Review, ReviewStatus, ReviewSummary, format_field_errors, parse_and_validate,
    validate_create_request,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::ReviewStatusSchema;
use crate::inbound::http::state::HttpState;

const INVALID_JSON: &str = "Invalid JSON in request body";
const LIST_FALLBACK: &str = "An error occurred while fetching reviews";
const CREATE_FALLBACK: &str = "An error occurred while creating the review";
const CREATED_MESSAGE: &str = "Review created successfully";

/// Public projection of a review in list responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewSummaryBody {
    #[schema(example = 1001)]
    pub serial_no: i64,
    #[schema(example = "Arrived on time and works as described.")]
    pub review: String,
    #[schema(value_type = ReviewStatusSchema)]
    pub status: ReviewStatus,
}

impl From<ReviewSummary> for ReviewSummaryBody {
    fn from(value: ReviewSummary) -> Self {
        Self {
            serial_no: value.serial_no,
            review: value.review,
            status: value.status,
        }
    }
}

/// Full stored review returned once, by the create endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewBody {
    #[schema(example = 17)]
    pub id: i64,
    #[schema(example = 1001)]
    pub serial_no: i64,
    pub review: String,
    #[schema(value_type = ReviewStatusSchema)]
    pub status: ReviewStatus,
    #[schema(example = "9876543210")]
    pub mobile_no: String,
    #[schema(example = "buyer@example.com")]
    pub email: String,
    #[serde(rename = "createdAt")]
    #[schema(value_type = String, format = DateTime, example = "2025-03-14T09:26:53Z")]
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewBody {
    fn from(value: Review) -> Self {
        let Review {
            id,
            serial_no,
            review,
            status,
            mobile_no,
            email,
            created_at,
        } = value;
        Self {
            id,
            serial_no,
            review,
            status,
            mobile_no,
            email,
            created_at,
        }
    }
}

/// Envelope for `GET /api/reviews`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewListResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: Vec<ReviewSummaryBody>,
}

/// Payload of a successful create.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewCreatedData {
    #[schema(example = "Review created successfully")]
    pub message: String,
    pub review: ReviewBody,
}

/// Envelope for `POST /api/reviews`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewCreatedResponse {
    #[schema(example = true)]
    pub success: bool,
    pub data: ReviewCreatedData,
}

/// Review submission as documented for clients.
///
/// The handler reads the raw JSON value; this type exists for the OpenAPI
/// document only.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreateReviewRequest {
    #[schema(example = 1001)]
    serial_no: i64,
    #[schema(example = "Arrived on time and works as described.")]
    review: String,
    #[schema(value_type = ReviewStatusSchema)]
    status: ReviewStatus,
    /// Exactly ten digits.
    #[schema(example = "9876543210")]
    mobile_no: String,
    #[schema(example = "buyer@example.com")]
    email: String,
}

fn json_response<T: Serialize>(
    builder: &mut actix_web::HttpResponseBuilder,
    body: &T,
    fallback: &'static str,
) -> ApiResult<HttpResponse> {
    let value = serde_json::to_value(body).map_err(|err| {
        error!(error = %err, "failed to serialise response body");
        Error::internal(fallback)
    })?;
    Ok(builder.json(value))
}

fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected unreadable review body");
    Error::invalid_request(INVALID_JSON).into()
}

/// Body extractor configuration for the review routes.
///
/// Accepts any `Content-Type` and turns every parse or read failure into the
/// invalid JSON envelope.
pub fn reviews_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(json_payload_error)
}

/// List every review, newest first. Contact details are never included.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use review_api::inbound::http::reviews::list_reviews;
///
/// let _app = App::new().service(web::scope("/api").service(list_reviews));
/// ```
#[utoipa::path(
    get,
    path = "/api/reviews",
    responses(
        (status = 200, description = "Reviews, newest first", body = ReviewListResponse),
        (status = 500, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["reviews"],
    operation_id = "listReviews"
)]
#[get("/reviews")]
pub async fn list_reviews(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let summaries = match state.reviews_query.list_reviews().await {
        Ok(summaries) => summaries,
        Err(ReviewServiceError::Database { message }) => return Err(Error::internal(message)),
        Err(other) => {
            error!(error = %other, "unexpected failure while listing reviews");
            return Err(Error::internal(LIST_FALLBACK));
        }
    };

    let body = ReviewListResponse {
        success: true,
        data: summaries.into_iter().map(ReviewSummaryBody::from).collect(),
    };
    json_response(&mut HttpResponse::Ok(), &body, LIST_FALLBACK)
}

/// Validate and store a review.
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review stored", body = ReviewCreatedResponse),
        (status = 400, description = "Invalid JSON or failed validation", body = ErrorEnvelope),
        (status = 409, description = "serial_no already used", body = ErrorEnvelope),
        (status = 500, description = "Store failure", body = ErrorEnvelope)
    ),
    tags = ["reviews"],
    operation_id = "createReview"
)]
#[post("/reviews")]
pub async fn create_review(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let Some(request) = parse_and_validate(&payload) else {
        let errors = validate_create_request(&payload);
        debug!(fields = errors.len(), "review submission failed validation");
        return Err(Error::invalid_request(format!(
            "Validation failed: {}",
            format_field_errors(&errors)
        )));
    };

    let created = state
        .reviews_command
        .create_review(request)
        .await
        .map_err(|err| match err {
            ReviewServiceError::DuplicateSerial { .. } => Error::conflict(err.to_string()),
            ReviewServiceError::Database { message } => Error::internal(message),
        })?;

    let body = ReviewCreatedResponse {
        success: true,
        data: ReviewCreatedData {
            message: CREATED_MESSAGE.to_owned(),
            review: ReviewBody::from(created),
        },
    };
    json_response(&mut HttpResponse::Created(), &body, CREATE_FALLBACK)
}
