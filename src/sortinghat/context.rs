//! # Invocation Context
//!
//! Commands that talk to the server receive their client through an explicit [`Context`]
//! value instead of looking it up in shared state. [`with_client`] is the initializer: it builds
//! exactly one client from the parsed [`ConnectionOptions`], stores it in a fresh context, and
//! only then runs the command body with that context.
//!
//! ```rust
//! use sortinghat::context::with_client;
//! use sortinghat::options::ConnectionOptions;
//! use sortinghat::SortingHatClient;
//!
//! let options = ConnectionOptions {
//!     host: "example.org".into(),
//!     port: 9999,
//!     ..Default::default()
//! };
//!
//! let host = with_client::<SortingHatClient, _, _>(&options, |ctx| ctx.client().host().to_string());
//! assert_eq!(host, "example.org");
//! ```
//!
//! Flag parsing happens before this point, so a malformed value (say, a non-numeric port)
//! never reaches the initializer. The initializer itself cannot fail.

use crate::client::{ServiceClient, SortingHatClient};
use crate::options::ConnectionOptions;

/// Per-invocation state handed to a command body.
#[derive(Debug)]
pub struct Context<C = SortingHatClient> {
    client: C,
}

impl<C> Context<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}

/// Builds a client from `options` and runs `command` with it in a fresh [`Context`].
pub fn with_client<C, F, T>(options: &ConnectionOptions, command: F) -> T
where
    C: ServiceClient,
    F: FnOnce(&mut Context<C>) -> T,
{
    let config = options.client_config();
    tracing::debug!(
        host = %config.host,
        port = config.port,
        path = ?config.path,
        user = ?config.user,
        ssl = config.ssl,
        "client configured"
    );

    let mut ctx = Context::new(C::configure(config));
    command(&mut ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use std::cell::RefCell;

    thread_local! {
        static BUILT: RefCell<Vec<ClientConfig>> = const { RefCell::new(Vec::new()) };
    }

    /// Records every configuration it is built from.
    struct RecordingClient {
        config: ClientConfig,
    }

    impl ServiceClient for RecordingClient {
        fn configure(config: ClientConfig) -> Self {
            BUILT.with(|b| b.borrow_mut().push(config.clone()));
            Self { config }
        }
    }

    fn take_built() -> Vec<ClientConfig> {
        BUILT.with(|b| std::mem::take(&mut *b.borrow_mut()))
    }

    #[test]
    fn test_body_sees_configured_client() {
        take_built();
        let options = ConnectionOptions {
            host: "example.org".into(),
            port: 9999,
            disable_ssl: false,
            ..Default::default()
        };

        let seen = with_client::<RecordingClient, _, _>(&options, |ctx| {
            // The client exists before the body runs.
            assert_eq!(take_built().len(), 1);
            ctx.client().config.clone()
        });

        assert_eq!(seen.host, "example.org");
        assert_eq!(seen.port, 9999);
        assert!(seen.ssl);
        assert!(take_built().is_empty());
    }

    #[test]
    fn test_one_client_per_invocation() {
        take_built();
        let options = ConnectionOptions::default();

        with_client::<RecordingClient, _, _>(&options, |_| ());
        with_client::<RecordingClient, _, _>(&options, |_| ());

        assert_eq!(take_built().len(), 2);
    }

    #[test]
    fn test_disable_ssl_reaches_client() {
        let options = ConnectionOptions {
            disable_ssl: true,
            ..Default::default()
        };
        let ssl = with_client::<SortingHatClient, _, _>(&options, |ctx| ctx.client().uses_ssl());
        assert!(!ssl);
    }

    #[test]
    fn test_body_result_is_returned_unchanged() {
        let options = ConnectionOptions::default();
        let out: Result<u16, String> =
            with_client::<SortingHatClient, _, _>(&options, |_| Err("failed".to_string()));
        assert_eq!(out, Err("failed".to_string()));
    }

    #[test]
    fn test_body_can_take_ownership_of_client() {
        let options = ConnectionOptions {
            server_path: Some("api".into()),
            ..Default::default()
        };
        let client = with_client::<SortingHatClient, _, _>(&options, |ctx| ctx.client().clone());
        assert_eq!(client.path(), Some("api"));

        let ctx = Context::new(client);
        assert_eq!(ctx.into_client().port(), 9314);
    }
}
