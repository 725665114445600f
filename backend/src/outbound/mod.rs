//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed review repository using Diesel ORM.
//!
//! Adapters convert between domain types and infrastructure representations
//! and contain no business logic.

pub mod persistence;
