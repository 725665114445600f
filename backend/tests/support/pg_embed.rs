//! Embedded PostgreSQL bootstrap for integration tests.
//!
//! `pg-embed-setup-unpriv` installs binaries and data under `/var/tmp` unless
//! `PG_RUNTIME_DIR` and `PG_DATA_DIR` say otherwise. Sandboxed runners cannot
//! write there, so when either variable is missing both are pointed at a
//! fresh directory under the cargo target dir for the duration of the
//! bootstrap. Bootstraps are serialised because they mutate the process
//! environment.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const ATTEMPTS: u32 = 4;
const BACKOFF_BASE: Duration = Duration::from_millis(500);

/// Substrings of download and socket errors worth retrying.
const TRANSIENT_MARKERS: [&str; 7] = [
    "error decoding response body",
    "connection reset",
    "connection refused",
    "timed out",
    "timeout",
    "temporarily unavailable",
    "dns error",
];

struct ScratchDirs {
    runtime: PathBuf,
    data: PathBuf,
}

impl ScratchDirs {
    fn create() -> std::io::Result<Self> {
        let root = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("target"))
            .join("pg-embed")
            .join(format!("review-api-{}-{}", std::process::id(), Uuid::new_v4()));
        let dirs = Self {
            runtime: root.join("install"),
            data: root.join("data"),
        };
        std::fs::create_dir_all(&dirs.runtime)?;
        std::fs::create_dir_all(&dirs.data)?;
        Ok(dirs)
    }
}

fn is_transient(message: &str) -> bool {
    let lowered = message.to_lowercase();
    TRANSIENT_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Start a [`TestCluster`], retrying transient download failures with
/// exponential backoff.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let has_dirs =
        std::env::var_os("PG_RUNTIME_DIR").is_some() && std::env::var_os("PG_DATA_DIR").is_some();
    let _env = if has_dirs {
        None
    } else {
        let dirs = ScratchDirs::create().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(dirs.runtime.to_string_lossy().into_owned())),
            ("PG_DATA_DIR", Some(dirs.data.to_string_lossy().into_owned())),
        ]))
    };

    let mut attempt = 1;
    loop {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let message = format!("{err:?}");
                if attempt == ATTEMPTS || !is_transient(&message) {
                    return Err(message);
                }
                let delay = BACKOFF_BASE * 2u32.pow(attempt - 1);
                eprintln!("pg-embed: attempt {attempt}/{ATTEMPTS} failed, retrying in {delay:?}: {message}");
                std::thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}
