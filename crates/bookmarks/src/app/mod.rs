//! Application orchestration and main event loop.
//!
//! The app is a single `App` value holding all session state. Key events
//! are read and handled one at a time on the main thread; every handled
//! key is followed by a redraw.
//!
//! Submodules:
//! - state: App struct and supporting types
//! - runner: main loop and terminal setup
//! - input: key interpretation and list actions
//! - render: UI rendering

mod input;
mod render;
mod runner;
mod state;

pub use runner::run;
