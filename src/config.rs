//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use crate::profile::{BuyerProfile, OwnerProfile, SeedProfiles, seed};
use crate::state_machine::ControllerOptions;
use crate::state_machine::controller::DEFAULT_JOURNAL_LIMIT;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub seed: SeedConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Navigation controller settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Reject transitions that are unreachable from the current view
    #[serde(default)]
    pub strict: bool,

    /// Number of journal entries the controller keeps
    #[serde(default = "default_journal_limit")]
    pub journal_limit: usize,
}

/// Seed profiles; each falls back to the built-in sample when absent
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SeedConfig {
    pub owner: Option<OwnerProfile>,
    pub buyer: Option<BuyerProfile>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_journal_limit() -> usize {
    DEFAULT_JOURNAL_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            journal_limit: default_journal_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
const ZIP_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Shape checks for seed contact fields
struct ContactRules {
    email: Regex,
    zip_code: Regex,
}

impl ContactRules {
    fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::Config(format!("Invalid pattern: {}", e)))
        };
        Ok(Self {
            email: compile(EMAIL_PATTERN)?,
            zip_code: compile(ZIP_PATTERN)?,
        })
    }

    /// Empty fields are allowed; filled ones must look right
    fn check(&self, section: &str, email: &str, zip_code: &str) -> Result<()> {
        if !email.is_empty() && !self.email.is_match(email) {
            return Err(Error::Config(format!(
                "{}.email is not a valid address: {:?}",
                section, email
            )));
        }
        if !zip_code.is_empty() && !self.zip_code.is_match(zip_code) {
            return Err(Error::Config(format!(
                "{}.zipCode is not a valid zip code: {:?}",
                section, zip_code
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./ev-journey.toml
    /// 2. ~/.ev-journey/config.toml
    /// 3. /etc/ev-journey/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("ev-journey.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ev-journey").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/ev-journey/config.toml"));

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Check seed contact fields and navigation limits
    pub fn validate(&self) -> Result<()> {
        if self.navigation.journal_limit == 0 {
            return Err(Error::config("navigation.journal_limit must be at least 1"));
        }

        let rules = ContactRules::new()?;
        if let Some(owner) = &self.seed.owner {
            rules.check("seed.owner", &owner.email, &owner.zip_code)?;
        }
        if let Some(buyer) = &self.seed.buyer {
            rules.check("seed.buyer", &buyer.email, &buyer.zip_code)?;
        }

        Ok(())
    }

    /// Seed profiles for new controllers and for logout
    pub fn seed(&self) -> SeedProfiles {
        let sample = seed::sample();
        SeedProfiles {
            owner: self.seed.owner.clone().unwrap_or(sample.owner),
            buyer: self.seed.buyer.clone().unwrap_or(sample.buyer),
        }
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            strict: self.navigation.strict,
            journal_limit: self.navigation.journal_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ChargingBehavior, UsagePattern};
    use std::io::Write;

    const OWNER_SEED: &str = r#"
[navigation]
strict = true

[logging]
level = "debug"

[seed.owner]
email = "demo@example.com"
zipCode = "73301"
name = "Demo Driver"
age = 41
carMake = "Hyundai"
carModel = "Ioniq 5"
carYear = 2023
mileage = 8000
usagePattern = "commuting"
hasHomeCharger = false
homeChargerType = ""
chargingBehavior = "public"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.navigation.strict);
        assert_eq!(config.navigation.journal_limit, DEFAULT_JOURNAL_LIMIT);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.seed(), seed::sample());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml_config() {
        let config: Config = toml::from_str(OWNER_SEED).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.controller_options().strict);
        assert_eq!(config.logging.level, "debug");

        let seed = config.seed();
        assert_eq!(seed.owner.name, "Demo Driver");
        assert_eq!(seed.owner.usage_pattern, UsagePattern::Commuting);
        assert_eq!(seed.owner.charging_behavior, ChargingBehavior::Public);
        // buyer falls back to the sample
        assert_eq!(seed.buyer, seed::sample().buyer);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(OWNER_SEED.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.seed().owner.car_model, "Ioniq 5");
    }

    #[test]
    fn test_rejects_bad_seed_email() {
        let mut config = Config::default();
        config.seed.owner = Some(OwnerProfile {
            email: "not-an-email".to_string(),
            ..Default::default()
        });

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("seed.owner.email"));
    }

    #[test]
    fn test_rejects_bad_zip_and_zero_journal() {
        let mut config = Config::default();
        config.seed.buyer = Some(BuyerProfile {
            zip_code: "ABCDE".to_string(),
            ..Default::default()
        });
        assert!(config.validate().unwrap_err().to_string().contains("zipCode"));

        let mut config = Config::default();
        config.navigation.journal_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = Config::from_file("/nonexistent/ev-journey.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
