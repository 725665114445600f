//! Internal Diesel row structs for the `reviews` table.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types and reject rows that violate domain invariants.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::reviews;

/// Full row as stored.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewRow {
    pub id: i64,
    pub serial_no: i64,
    pub review: String,
    pub status: String,
    pub mobile_no: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Columns exposed by the public listing.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReviewSummaryRow {
    pub serial_no: i64,
    pub review: String,
    pub status: String,
}

/// Insertable payload; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reviews)]
pub(crate) struct NewReviewRow<'a> {
    pub serial_no: i64,
    pub review: &'a str,
    pub status: &'a str,
    pub mobile_no: &'a str,
    pub email: &'a str,
}
