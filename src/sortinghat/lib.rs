//! # SortingHat CLI Helpers
//!
//! The pieces every `sortinghat` subcommand is built from. Subcommands themselves live in the
//! binary; this library only knows how to get from parsed flags to a ready client, and from
//! data to text on the terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  options: ConnectionOptions                                 │
//! │  - the six connection flags, flattened into any command     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ parsed by clap
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  context: with_client                                       │
//! │  - builds one client per invocation                         │
//! │  - hands it to the command body inside a Context            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ command body
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  display: Display / display()                               │
//! │  - renders named templates from the templates directory     │
//! │  - writes the result to stdout                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Client Handles Do No I/O
//!
//! A [`SortingHatClient`] is configuration only. Constructing it never opens a connection, so
//! the context initializer cannot fail and commands that never reach the server (help, argument
//! errors, local rendering) never pay for one.
//!
//! ## Output
//!
//! Stdout carries rendered templates and nothing else. Diagnostics go through `tracing`, which
//! the binary routes to stderr.
//!
//! ## Module Overview
//!
//! - [`options`]: Connection flags
//! - [`client`]: Client configuration and handle
//! - [`context`]: Per-invocation context and its initializer
//! - [`display`]: Template rendering and styles
//! - [`error`]: Error types

pub mod client;
pub mod context;
pub mod display;
pub mod error;
pub mod options;

pub use client::{ClientConfig, ServiceClient, SortingHatClient};
pub use context::{with_client, Context};
pub use display::{display, Display};
pub use error::{Result, SortingHatError};
pub use options::ConnectionOptions;
