//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin: they translate between Diesel row structs
//! (`models.rs`, `schema.rs`, both private) and domain types, and map every
//! database failure onto the port's error enum. Connections come from a
//! `bb8` pool through `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use review_api::outbound::persistence::{DbPool, DieselReviewRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), review_api::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://postgres@localhost/review"))?;
//! let _repo = DieselReviewRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_review_repository;
mod models;
mod pool;
mod review_error_mapping;
mod schema;

pub use diesel_review_repository::DieselReviewRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
