//! Flat-file bookmark storage.
//!
//! Bookmarks live in a single text file, `.bookmarks` in the working
//! directory unless the config says otherwise:
//!
//! ```text
//! https://example.com
//! remember to renew the domain
//! ```
//!
//! One entry per line, `\n` separated, no trailing newline and no escaping.
//! Every save rewrites the whole file.

use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_STORE_PATH: &str = ".bookmarks";

#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry in file order, creating the file if it is missing.
    pub fn load(&self) -> Result<Vec<String>> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|source| self.io_error(source))?;

        Ok(parse_entries(&contents))
    }

    pub fn save(&self, entries: &[String]) -> Result<()> {
        fs::write(&self.path, encode_entries(entries)).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn parse_entries(contents: &str) -> Vec<String> {
    // `lines` drops the final empty line and a trailing `\r` per line.
    contents.lines().map(str::to_string).collect()
}

fn encode_entries(entries: &[String]) -> String {
    entries.join("\n")
}
