//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly.

diesel::table! {
    /// Customer reviews keyed by a caller-supplied unique serial number.
    reviews (id) {
        /// Store-assigned surrogate key.
        id -> Int8,
        /// Business key; unique index `reviews_serial_no_key`.
        serial_no -> Int8,
        review -> Text,
        /// `PASS` or `FAIL`, enforced by `reviews_status_check`.
        status -> Varchar,
        mobile_no -> Varchar,
        email -> Text,
        created_at -> Timestamptz,
    }
}
