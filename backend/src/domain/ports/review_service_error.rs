//! Outcome type shared by the review driving ports.

use super::define_port_error;

define_port_error! {
    /// Failures a review use-case can report to its caller.
    ///
    /// Messages are safe to show to API clients; underlying store causes are
    /// logged where they occur and never carried here.
    pub enum ReviewServiceError {
        /// Another review already uses this serial number.
        DuplicateSerial { serial_no: i64 } =>
            "Review with serial_no {serial_no} already exists",
        /// The store failed or returned something unusable.
        Database { message: String } => "{message}",
    }
}
