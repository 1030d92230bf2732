//! # chime-client
//!
//! Data-access side of the Chime app: fetches API responses through an
//! [`ApiTransport`], unwraps the response envelope, and hands the decoded
//! transfer objects to `chime-normalize`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod repository;
pub mod transport;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use repository::Repository;
pub use transport::{ApiTransport, ReplayTransport};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter.  Calling this twice is
/// harmless; the second subscriber is dropped and the first stays active.
pub fn init_tracing(config: &ClientConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    if let Err(e) = installed {
        tracing::debug!(error = %e, "Tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice_keeps_first_subscriber() {
        let config = ClientConfig::default();
        init_tracing(&config);
        init_tracing(&config);

        tracing::info!("Still logging after a second init");
    }
}
