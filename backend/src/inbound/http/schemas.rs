//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa`; the wrappers here describe them for
//! the generated document and are referenced through `value_type`.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ReviewStatus`].
#[derive(ToSchema)]
#[schema(as = ReviewStatus)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub enum ReviewStatusSchema {
    #[schema(rename = "PASS")]
    Pass,
    #[schema(rename = "FAIL")]
    Fail,
}
