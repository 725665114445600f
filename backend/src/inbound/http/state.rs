//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on driving
//! ports, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::{ReviewsCommand, ReviewsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub reviews_query: Arc<dyn ReviewsQuery>,
    pub reviews_command: Arc<dyn ReviewsCommand>,
}

impl HttpState {
    pub fn new(
        reviews_query: Arc<dyn ReviewsQuery>,
        reviews_command: Arc<dyn ReviewsCommand>,
    ) -> Self {
        Self {
            reviews_query,
            reviews_command,
        }
    }

    /// Back both ports with a single service instance.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ReviewsQuery + ReviewsCommand + 'static,
    {
        Self {
            reviews_query: service.clone(),
            reviews_command: service,
        }
    }
}
