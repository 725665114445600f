//! Shared helpers for review-api integration tests.
//!
//! Each file under `tests/` compiles as its own crate, so the helpers live
//! here and are pulled in with `mod support;`.
//!
//! - Cluster skip policy (`SKIP_TEST_CLUSTER`) so suites behave the same way
//!   when embedded PostgreSQL cannot start.
//! - Database reset through `postgres`, because `DROP DATABASE` cannot run
//!   inside the transaction Diesel would open.
//! - Schema setup from the embedded Diesel migrations.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use review_api::domain::ports::ReviewRepositoryError;

/// Migrations from `backend/migrations`.
const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Maintenance database used to create and drop test databases.
const ADMIN_DATABASE: &str = "postgres";

/// Render a `postgres` error with its SQLSTATE, detail and hint.
///
/// `Display` on `postgres::Error` often collapses to `db error`, which is
/// useless in CI logs.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    for (label, value) in [("detail", db_error.detail()), ("hint", db_error.hint())] {
        if let Some(value) = value {
            summary.push_str(&format!("; {label}: {value}"));
        }
    }
    summary
}

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Report an embedded cluster setup failure.
///
/// Prints a skip marker and returns `None` when skipping is allowed;
/// otherwise panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Drop and recreate `name` so each suite starts from an empty database.
pub fn reset_database(cluster: &TestCluster, name: &str) -> Result<(), ReviewRepositoryError> {
    let admin_url = cluster.connection().database_url(ADMIN_DATABASE);
    let mut client = Client::connect(&admin_url, NoTls)
        .map_err(|err| ReviewRepositoryError::connection(format_postgres_error(&err)))?;
    for statement in [
        format!("DROP DATABASE IF EXISTS \"{name}\" WITH (FORCE)"),
        format!("CREATE DATABASE \"{name}\""),
    ] {
        client
            .batch_execute(&statement)
            .map_err(|err| ReviewRepositoryError::query(format_postgres_error(&err)))?;
    }
    Ok(())
}

/// Run every pending migration against `url`.
pub fn migrate_schema(url: &str) -> Result<(), ReviewRepositoryError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| ReviewRepositoryError::connection(format!("{err:?}")))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| ReviewRepositoryError::query(format!("migration: {err:?}")))?;
    Ok(())
}
