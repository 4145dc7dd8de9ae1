//! # SortingHat CLI
//!
//! The binary is intentionally thin: argument parsing, logging setup, dispatch and rendering
//! live in `cli/`, and this file only calls `cli::run()` and turns an error into an exit code.
//!
//! Argument errors never get here. clap reports them and exits on its own, before any client
//! is built.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
