//! Review API entry-point: loads settings, builds the database pool and runs
//! the HTTP server until a shutdown signal arrives.
//!
//! On SIGINT or SIGTERM the liveness probe starts failing, the listener keeps
//! serving for `HTTP_DRAIN_GRACE_SECS`, then in-flight requests finish and
//! the process exits.

mod server;

use std::ffi::OsString;
use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use review_api::inbound::http::health::HealthState;
use review_api::outbound::persistence::{DbPool, PoolConfig};
use review_api::settings::{DatabaseSettings, HttpSettings};
use server::{ServerConfig, create_server, drain};

const APP_NAME: &str = "review-api";

fn load_settings() -> io::Result<(DatabaseSettings, HttpSettings)> {
    let args = || [OsString::from(APP_NAME)];
    let database = DatabaseSettings::load_from_iter(args())
        .map_err(|err| io::Error::other(format!("failed to load database settings: {err}")))?;
    let http = HttpSettings::load_from_iter(args())
        .map_err(|err| io::Error::other(format!("failed to load HTTP settings: {err}")))?;
    Ok((database, http))
}

fn build_pool(settings: &DatabaseSettings) -> io::Result<DbPool> {
    let url = settings.database_url().map_err(io::Error::other)?;
    let config = PoolConfig::new(url).with_max_size(settings.connection_limit());
    DbPool::new(config).map_err(|err| io::Error::other(err.to_string()))
}

/// Resolve on the first SIGINT or SIGTERM.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => info!("SIGINT received"),
        () = terminate => info!("SIGTERM received"),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let (database, http) = load_settings()?;
    let pool = build_pool(&database)?;
    let bind_addr = http.bind_addr().map_err(io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let (server, local_addr) = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, pool.clone()),
    )?;
    actix_web::rt::spawn(drain(
        shutdown_signal(),
        health_state.clone(),
        server.handle(),
        http.drain_grace(),
    ));

    health_state.mark_ready();
    info!(
        address = %local_addr,
        database_host = database.host(),
        database = database.name(),
        "server listening"
    );

    let outcome = server.await;

    pool.release();
    info!("server stopped");
    outcome
}
