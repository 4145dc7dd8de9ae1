//! # Command Dispatch
//!
//! `run()` parses the command line, sets up logging, and hands each subcommand to its handler.
//! Handlers that need the server are wrapped in [`with_client`], so their first argument is a
//! [`Context`] that already holds the client built from the connection flags.

use super::render::{InfoData, INFO_TEMPLATE};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use sortinghat::display::theme::SORTINGHAT_THEME;
use sortinghat::display::TEMPLATES_DIR;
use sortinghat::{with_client, Context, Display, Result};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let display = if cli.no_color {
        Display::with_color(TEMPLATES_DIR, &SORTINGHAT_THEME, false)
    } else {
        Display::bundled()
    };

    match cli.command {
        Commands::Info { conn } => with_client(&conn, |ctx| handle_info(ctx, &display)),
    }
}

/// Logs go to stderr; stdout is reserved for rendered output. `RUST_LOG` wins over `--verbose`.
/// Log lines are coloured only when stderr is a color terminal and `--no-color` is absent.
fn init_logging(verbose: bool, no_color: bool) {
    let default = if verbose { "sortinghat=debug,warn" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color && Term::stderr().features().colors_supported())
        .init();
}

fn handle_info(ctx: &mut Context, display: &Display) -> Result<()> {
    let data = InfoData::from_client(ctx.client())?;
    display.display(INFO_TEMPLATE, true, &data)
}
