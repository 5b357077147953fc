//! Log setup for the native binaries.
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! `vendorhub` targets plus whatever `extra` directives the binary adds.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig, extra: &str) {
    let default_directives = if extra.is_empty() {
        format!("vendorhub={}", config.level)
    } else {
        format!("vendorhub={},{}", config.level, extra)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into());

    let registry = tracing_subscriber::registry().with(filter);

    // Output goes to stderr so terminal tables on stdout stay clean.
    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}
