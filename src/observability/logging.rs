//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Configure log level from config, overridable by environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` if set, otherwise `level` for this crate and tower-http.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("resource_router={level},tower_http={level}")))
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter("debug").to_string();
        assert!(filter.contains("resource_router=debug"));
        assert!(filter.contains("tower_http=debug"));
    }

    #[test]
    fn test_init_twice() {
        init("info");
        init("debug");
    }
}
