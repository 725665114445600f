//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`ReviewsQuery`], [`ReviewsCommand`]) are called by inbound
//! adapters; the driven port [`ReviewRepository`] is implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod review_repository;
mod review_service_error;
mod reviews_command;
mod reviews_query;

#[cfg(test)]
pub use review_repository::MockReviewRepository;
pub use review_repository::{ReviewRepository, ReviewRepositoryError};
pub use review_service_error::ReviewServiceError;
#[cfg(test)]
pub use reviews_command::MockReviewsCommand;
pub use reviews_command::ReviewsCommand;
#[cfg(test)]
pub use reviews_query::MockReviewsQuery;
pub use reviews_query::ReviewsQuery;
