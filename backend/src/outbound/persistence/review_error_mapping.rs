//! Translation of pool and Diesel failures into review repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::ReviewRepositoryError;

use super::pool::PoolError;

/// A checkout failure means the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> ReviewRepositoryError {
    ReviewRepositoryError::connection(error.message())
}

/// Map a Diesel failure raised while handling `serial_no`.
///
/// A unique violation is the only duplicate-key signal; the `reviews` table
/// has no unique constraint other than the one on `serial_no`.
pub(crate) fn map_diesel_error(error: DieselError, serial_no: i64) -> ReviewRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => debug!(
            ?kind,
            message = info.message(),
            constraint = info.constraint_name(),
            "diesel operation failed"
        ),
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ReviewRepositoryError::duplicate_serial(serial_no)
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            ReviewRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => ReviewRepositoryError::query(info.message()),
        other => ReviewRepositoryError::query(other.to_string()),
    }
}

/// Map a Diesel failure from a read that cannot collide on `serial_no`.
pub(crate) fn map_read_error(error: DieselError) -> ReviewRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            ReviewRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(_, info) => ReviewRepositoryError::query(info.message()),
        other => ReviewRepositoryError::query(other.to_string()),
    }
}
