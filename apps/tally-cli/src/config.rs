//! # Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --currency usd                                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TALLY_CURRENCY=usd                                                 │
//! │     TALLY_MAX_CHANGE=500000                                            │
//! │                                                                         │
//! │  3. TOML Config File (--config, TALLY_CONFIG, or platform default)     │
//! │     ~/.config/tally/tally.toml (Linux)                                 │
//! │     ~/Library/Application Support/com.tally.tally/tally.toml (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     INR, ceiling 1_000_000 base units                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [register]
//! currency = "EUR"
//! max_change = 500000
//!
//! [[currencies]]
//! code = "EUR"
//! symbol = "€"
//! minor_digits = 2
//! denominations = [
//!   { value = 500, kind = "bill", label = "€5" },
//!   { value = 200, kind = "coin", label = "€2" },
//!   { value = 100, kind = "coin", label = "€1" },
//!   { value = 50,  kind = "coin" },
//!   { value = 20,  kind = "coin" },
//!   { value = 10,  kind = "coin" },
//!   { value = 5,   kind = "coin" },
//!   { value = 2,   kind = "coin" },
//!   { value = 1,   kind = "coin" },
//! ]
//! ```
//!
//! Denomination sets are read once at startup and never change while the
//! process runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tally_core::{Currency, Denomination, DenominationSet, ValidationError, MAX_CHANGE_AMOUNT};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

const CONFIG_FILE_NAME: &str = "tally.toml";

// =============================================================================
// Register Settings
// =============================================================================

/// Which currency the register uses and how much change it may hand back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSettings {
    /// Active currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Largest change amount (base units) the solver will attempt.
    #[serde(default = "default_max_change")]
    pub max_change: u64,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_max_change() -> u64 {
    MAX_CHANGE_AMOUNT
}

impl Default for RegisterSettings {
    fn default() -> Self {
        RegisterSettings {
            currency: default_currency(),
            max_change: default_max_change(),
        }
    }
}

// =============================================================================
// Currency Definitions
// =============================================================================

/// A currency declared in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,

    #[serde(default)]
    pub minor_digits: u8,

    /// In tie-break order; list larger values first for the usual layout.
    pub denominations: Vec<Denomination>,
}

impl CurrencyConfig {
    /// Builds the validated core currency.
    pub fn to_currency(&self) -> ConfigResult<Currency> {
        let wrap = |source| ConfigError::Currency {
            code: self.code.clone(),
            source,
        };
        let set = DenominationSet::new(self.denominations.clone()).map_err(wrap)?;
        Currency::new(&self.code, self.symbol.clone(), self.minor_digits, set).map_err(wrap)
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Complete configuration for the `tally` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub register: RegisterSettings,

    /// Extra currencies on top of the built-in presets. A config entry
    /// with a preset's code replaces that preset.
    #[serde(default)]
    pub currencies: Vec<CurrencyConfig>,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`tally.toml`)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the platform default path is
    /// optional.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.register.max_change == 0 {
            return Err(ConfigError::Invalid(
                "max_change must be greater than 0".into(),
            ));
        }

        if self.register.max_change > MAX_CHANGE_AMOUNT {
            return Err(ConfigError::Invalid(format!(
                "max_change must be at most {}",
                MAX_CHANGE_AMOUNT
            )));
        }

        let mut seen: Vec<String> = Vec::new();
        for entry in &self.currencies {
            let code = entry.code.trim().to_ascii_uppercase();
            if seen.contains(&code) {
                return Err(ConfigError::Currency {
                    code: entry.code.clone(),
                    source: ValidationError::Duplicate {
                        field: "currency code".to_string(),
                        value: code,
                    }
                    .into(),
                });
            }
            entry.to_currency()?;
            seen.push(code);
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(code) = std::env::var("TALLY_CURRENCY") {
            debug!(currency = %code, "Overriding currency from environment");
            self.register.currency = code;
        }

        if let Ok(max) = std::env::var("TALLY_MAX_CHANGE") {
            match max.parse::<u64>() {
                Ok(m) => {
                    debug!(max_change = m, "Overriding max change from environment");
                    self.register.max_change = m;
                }
                Err(_) => warn!(value = %max, "Ignoring non-numeric TALLY_MAX_CHANGE"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tally", "tally")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves a currency: config file definitions first, then presets.
    pub fn currency(&self, code: &str) -> ConfigResult<Currency> {
        let wanted = code.trim();

        if let Some(entry) = self
            .currencies
            .iter()
            .find(|c| c.code.trim().eq_ignore_ascii_case(wanted))
        {
            return entry.to_currency();
        }

        Currency::preset(wanted).map_err(|source| ConfigError::Currency {
            code: wanted.to_string(),
            source,
        })
    }

    /// Codes the register can use: config definitions first, then presets.
    pub fn currency_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .currencies
            .iter()
            .map(|c| c.code.trim().to_ascii_uppercase())
            .collect();
        for preset in Currency::presets() {
            if !codes.iter().any(|c| c == preset.code()) {
                codes.push(preset.code().to_string());
            }
        }
        codes
    }

    /// Checks a currency code typed on the command line.
    ///
    /// An unknown code here is bad input rather than a broken config file.
    pub fn check_requested_currency(&self, code: &str) -> Result<(), ValidationError> {
        let allowed = self.currency_codes();
        if allowed.iter().any(|c| c.eq_ignore_ascii_case(code.trim())) {
            Ok(())
        } else {
            Err(ValidationError::NotAllowed {
                field: "currency".to_string(),
                allowed,
            })
        }
    }

    /// The currency the register should use, after an optional CLI override.
    pub fn active_currency(&self, cli_override: Option<&str>) -> ConfigResult<Currency> {
        self.currency(cli_override.unwrap_or(&self.register.currency))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
