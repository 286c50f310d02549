//! EV Journey
//!
//! Navigation and session state core for an EV ownership and purchasing
//! companion application.
//!
//! This library provides functionality for:
//! - Tracking which platform (owner or buyer), screen and profile data is active
//! - Applying the fixed set of navigation transitions, leniently or strictly
//! - A typed flow API where unreachable transitions do not compile
//! - Deriving the owner persona from questionnaire answers
//! - Replaying TOML session scripts and exporting the navigation graph

pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod script;
pub mod state_machine;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "ev-journey");
    }
}
