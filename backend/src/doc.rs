//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the review endpoints, the health probes and the
//! schema wrappers for domain types. The document is served by Swagger UI in
//! debug builds and exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::reviews::{
    CreateReviewRequest, ReviewBody, ReviewCreatedData, ReviewCreatedResponse,
    ReviewListResponse, ReviewSummaryBody,
};
use crate::inbound::http::schemas::ReviewStatusSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Review API",
        description = "HTTP interface for submitting and listing customer reviews.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::reviews::list_reviews,
        crate::inbound::http::reviews::create_review,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ReviewStatusSchema,
        ErrorEnvelope,
        ReviewSummaryBody,
        ReviewBody,
        ReviewListResponse,
        ReviewCreatedData,
        ReviewCreatedResponse,
        CreateReviewRequest,
    )),
    tags(
        (name = "reviews", description = "Customer review submission and listing"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
