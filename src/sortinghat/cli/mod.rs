//! # CLI Layer
//!
//! The only place that knows about argument parsing, process exit and where logs go.
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, logging setup and per-command handlers
//! - `render`: template data for command output

mod commands;
mod render;
mod setup;

pub use commands::run;
