//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so logs go to
//! `<state dir>/bookmarks/bookmarks.log`. `BOOKMARKS_LOG` takes an
//! `EnvFilter` directive and defaults to `warn`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BOOKMARKS_LOG";

/// Install the global subscriber. Failing to open the log file only means
/// running without one.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn log_path() -> Option<PathBuf> {
    let root = dirs::state_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local").join("state")))?;
    Some(root.join("bookmarks").join("bookmarks.log"))
}
