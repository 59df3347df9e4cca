//! Tracing setup for hosts and tests.
//!
//! The kernel only emits `tracing` events; it never installs a subscriber on
//! its own. Hosts without a subscriber of their own can call
//! [`install_tracing`] once at startup.

use std::sync::Once;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

static TRACING_INSTALLED: Once = Once::new();

/// Installs a console subscriber filtered by `RUST_LOG` (idempotent).
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. If another
/// global subscriber is already set, this leaves it in place.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(DEFAULT_LOG_LEVEL.into())
            .from_env_lossy();

        let console = fmt::layer()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(filter);

        if tracing_subscriber::registry().with(console).try_init().is_err() {
            eprintln!("trellis tracing subscriber failed to initialize");
        }
    });
}
