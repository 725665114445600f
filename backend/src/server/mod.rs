//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use review_api::Trace;
#[cfg(debug_assertions)]
use review_api::doc::ApiDoc;
use review_api::domain::ReviewService;
use review_api::inbound::http::configure_reviews;
use review_api::inbound::http::health::{HealthState, live, ready};
use review_api::inbound::http::state::HttpState;
use review_api::outbound::persistence::{DbPool, DieselReviewRepository};

fn build_http_state(pool: DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselReviewRepository::new(pool));
    let service = Arc::new(ReviewService::new(repository));
    web::Data::new(HttpState::from_service(service))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_reviews))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server bound to the configured address.
///
/// Returns the server together with the address actually bound, which
/// differs from the configured one when port 0 was requested. The returned
/// [`Server`] must be awaited to drive the listener. Readiness is left to
/// the caller, and Actix's own signal handling is disabled: shutdown goes
/// through [`drain`].
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<(Server, SocketAddr)> {
    let bind_addr = config.bind_addr();
    let ServerConfig { db_pool, .. } = config;
    let http_state = build_http_state(db_pool);

    let http_server = HttpServer::new(move || build_app(health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_addr)?;
    let local_addr = http_server.addrs().first().copied().unwrap_or(bind_addr);

    Ok((http_server.run(), local_addr))
}

/// Wait for `shutdown`, fail liveness for `grace`, then stop the server
/// gracefully.
///
/// The listener keeps answering during the grace period so that probes
/// observe the 503 before connections are refused.
pub async fn drain<F>(
    shutdown: F,
    health_state: web::Data<HealthState>,
    handle: ServerHandle,
    grace: Duration,
) where
    F: Future<Output = ()>,
{
    shutdown.await;
    health_state.mark_unhealthy();
    info!(grace_secs = grace.as_secs_f64(), "draining; liveness now failing");
    actix_web::rt::time::sleep(grace).await;
    handle.stop(true).await;
}
