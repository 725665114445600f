//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod health;
pub mod reviews;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Register the review routes and their body configuration.
///
/// Mount inside the `/api` scope.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use review_api::inbound::http::configure_reviews;
///
/// let _app = App::new().service(web::scope("/api").configure(configure_reviews));
/// ```
pub fn configure_reviews(cfg: &mut web::ServiceConfig) {
    cfg.app_data(reviews::reviews_json_config())
        .service(reviews::list_reviews)
        .service(reviews::create_review);
}
