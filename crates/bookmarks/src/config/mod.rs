//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local one taking precedence:
//! 1. User-level: `~/.config/bookmarks/config.toml`
//! 2. Local: `<cwd>/.config/bookmarks/config.toml`
//!
//! Both are optional. Missing or malformed files fall back to defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::DEFAULT_STORE_PATH;

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Selected-row colour; `None` keeps the terminal's own cyan.
    pub highlight: Option<(u8, u8, u8)>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    store: Option<RawStore>,
    ui: Option<RawUi>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStore {
    #[serde(alias = "file")]
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUi {
    #[serde(alias = "highlightColor", alias = "highlight_color")]
    highlight: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(raw) => Some(raw),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring malformed config");
            None
        }
    }
}

fn merge_config(cwd: &Path, user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_store = local.as_ref().and_then(|c| c.store.as_ref());
    let user_store = user.as_ref().and_then(|c| c.store.as_ref());
    let local_ui = local.as_ref().and_then(|c| c.ui.as_ref());
    let user_ui = user.as_ref().and_then(|c| c.ui.as_ref());

    let store_path = local_store
        .and_then(|s| s.path.clone())
        .or_else(|| user_store.and_then(|s| s.path.clone()))
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let store_path = PathBuf::from(store_path);
    let store_path = if store_path.is_absolute() {
        store_path
    } else {
        cwd.join(store_path)
    };

    let highlight = local_ui
        .and_then(|u| u.highlight.as_deref())
        .or_else(|| user_ui.and_then(|u| u.highlight.as_deref()))
        .and_then(parse_hex_color);

    Config {
        store: StoreConfig { path: store_path },
        ui: UiConfig { highlight },
    }
}

/// Parse `#rrggbb` (the `#` is optional).
fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn config_path_from_root(root: &Path) -> PathBuf {
    root.join(".config").join("bookmarks").join("config.toml")
}

fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_path_from_root(&home))
}

pub fn load_config(cwd: &Path) -> Config {
    let local_path = config_path_from_root(cwd);
    let user_path = user_config_path();

    let local_config = read_toml(&local_path);
    let user_config = user_path.and_then(|path| read_toml(&path));

    merge_config(cwd, user_config, local_config)
}
