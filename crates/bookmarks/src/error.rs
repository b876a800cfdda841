//! Error type shared by the store, the list model, and the clipboard.
//!
//! None of these are fatal once the UI is running: the input handler
//! reports them in the status bar and keeps the previous state.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no bookmark at index {index} (list has {len})")]
    Index { index: usize, len: usize },

    #[error("clipboard: {0}")]
    Clipboard(String),

    #[error("{0}")]
    InvalidEntry(String),

    #[error("terminal: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
