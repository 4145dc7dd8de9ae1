use clap::{Parser, Subcommand};
use sortinghat::ConnectionOptions;

#[derive(Parser, Debug)]
#[command(name = "sortinghat", bin_name = "sortinghat", version)]
#[command(about = "Command-line client for the SortingHat identities service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Never use colors in output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the server connection the client will use
    Info {
        #[command(flatten)]
        conn: ConnectionOptions,
    },
}
