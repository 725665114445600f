//! Shared connection pool for Diesel PostgreSQL connections.
//!
//! The pool is built lazily: construction validates nothing and opens no
//! connection, so the process can start (and report liveness) before the
//! database is reachable. The first checkout dials the server; checkouts
//! beyond `max_size` wait up to `connection_timeout`.
//!
//! Pool construction must happen inside a Tokio runtime because `bb8` spawns
//! its idle-connection reaper on creation.

use std::time::Duration;

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use tracing::debug;

/// Errors raised while building the pool or checking out a connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// No connection became available, or dialling the server failed.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// The pool configuration was rejected.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Human-readable cause without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Checkout { message } | Self::Build { message } => message,
        }
    }
}

/// Sizing and timeouts for [`DbPool`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use review_api::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("postgres://postgres@localhost/review")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(5));
/// assert_eq!(config.max_size(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Defaults: ten connections, none kept idle, thirty second checkout
    /// timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 10,
            min_idle: None,
            connection_timeout: Duration::from_secs(30),
        }
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Keep this many idle connections warm. Any value other than `None`
    /// makes the pool dial the server in the background right away.
    #[must_use]
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn max_size(&self) -> u32 {
        self.max_size
    }
}

/// Cloneable handle to the process-wide connection pool.
///
/// # Examples
/// ```no_run
/// use review_api::outbound::persistence::{DbPool, PoolConfig};
///
/// # async fn run() -> Result<(), review_api::outbound::persistence::PoolError> {
/// let pool = DbPool::new(PoolConfig::new("postgres://postgres@localhost/review"))?;
/// let conn = pool.get().await?;
/// drop(conn);
/// pool.release();
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<AsyncPgConnection>,
}

impl DbPool {
    /// Build the pool without opening any connection.
    ///
    /// Must run inside a Tokio runtime; the pool spawns its idle reaper.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Build`] when the sizing is invalid.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        if config.max_size == 0 {
            return Err(PoolError::build("max_size must be at least 1"));
        }
        if config.min_idle.is_some_and(|idle| idle > config.max_size) {
            return Err(PoolError::build("min_idle must not exceed max_size"));
        }

        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.database_url);
        let inner = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Ok(Self { inner })
    }

    /// Check a connection out, dialling the server if none is idle.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Checkout`] when no connection can be obtained
    /// within the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, AsyncPgConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }

    /// Drop this handle.
    ///
    /// Nothing is closed here: the pool shuts down when its last clone is
    /// dropped, and clones held elsewhere keep it alive.
    pub fn release(self) {
        let state = self.inner.state();
        debug!(
            connections = state.connections,
            idle = state.idle_connections,
            "releasing database pool handle; connections close with the last clone"
        );
    }
}
