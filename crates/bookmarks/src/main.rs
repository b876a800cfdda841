mod app;
mod bookmarks;
mod clipboard;
mod config;
mod error;
mod keymap;
mod logging;
mod store;
mod test_utils;

use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();
    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "exiting");
            eprintln!("bookmarks: {err}");
            ExitCode::FAILURE
        }
    }
}
