//! # Connection Options
//!
//! Every command that talks to a SortingHat server takes the same six flags. They are declared
//! once here, as a clap [`Args`] group, and attached to a command with `#[command(flatten)]`
//! (or, for builder-style commands, with [`Args::augment_args`]).
//!
//! Declaration order is the registration and help order:
//!
//! | Flag              | Default     |
//! |-------------------|-------------|
//! | `-u/--user`       |             |
//! | `-p/--password`   |             |
//! | `--host`          | `localhost` |
//! | `--port`          | `9314`      |
//! | `--server-path`   | none        |
//! | `--disable-ssl`   | off         |
//!
//! Each value flag except `--disable-ssl` falls back to a `SORTINGHAT_*` environment variable
//! when absent from the command line.

use crate::client::ClientConfig;
use clap::Args;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9314;

/// Long names of the connection flags, in declaration order.
pub const CONNECTION_FLAGS: [&str; 6] = [
    "user",
    "password",
    "host",
    "port",
    "server-path",
    "disable-ssl",
];

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[command(next_help_heading = "Connection Options")]
pub struct ConnectionOptions {
    /// Name of the user to authenticate on the server
    #[arg(short = 'u', long, env = "SORTINGHAT_USER")]
    pub user: Option<String>,

    /// Password to authenticate on the server
    #[arg(
        short = 'p',
        long,
        env = "SORTINGHAT_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Address to use for connection
    #[arg(long, env = "SORTINGHAT_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port number to use for connection
    #[arg(long, env = "SORTINGHAT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the server API [default: none]
    #[arg(long, env = "SORTINGHAT_SERVER_PATH")]
    pub server_path: Option<String>,

    /// Disable SSL/TLS connection
    #[arg(long)]
    pub disable_ssl: bool,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            user: None,
            password: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            server_path: None,
            disable_ssl: false,
        }
    }
}

impl ConnectionOptions {
    pub fn use_tls(&self) -> bool {
        !self.disable_ssl
    }

    /// Captures the flag values as a client configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            host: self.host.clone(),
            port: self.port,
            path: self.server_path.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            ssl: self.use_tls(),
        }
    }
}
