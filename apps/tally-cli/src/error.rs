//! # CLI Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  tally change --price 150 --paid 100                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  →  Result<String, AppError>                   │  │
//! │  │         │                                                        │  │
//! │  │  Config problem?  ─── ConfigError ─────────────┐                 │  │
//! │  │         │                                      ▼                 │  │
//! │  │  Core problem?    ─── CoreError ───────────► AppError ─────────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  stderr: ❌ Amount paid must be greater than or equal to the price      │
//! │  --json: { "code": "INSUFFICIENT_PAYMENT", "message": "..." }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::CoreError;
use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading `tally.toml` or applying overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for our schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// A configured currency failed core validation.
    #[error("Invalid currency '{code}': {source}")]
    Currency {
        code: String,
        #[source]
        source: CoreError,
    },
}

/// Result type alias for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// App Error
// =============================================================================

/// Error reported to the user.
///
/// ## Serialization
/// With `--json`, this is what goes to stderr:
/// ```json
/// {
///   "code": "NO_EXACT_CHANGE",
///   "message": "Cannot make exact change for 3 with the available denominations"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input could not be parsed or failed a rule
    ValidationError,

    /// Paid less than the price
    InsufficientPayment,

    /// The denominations cannot make the amount
    NoExactChange,

    /// Change exceeds the configured ceiling
    AmountTooLarge,

    /// Config file, environment or currency selection problem
    ConfigError,

    /// Anything else
    Internal,
}

impl ErrorCode {
    /// Process exit code: 1 for input problems, 2 for configuration.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorCode::ValidationError
            | ErrorCode::InsufficientPayment
            | ErrorCode::NoExactChange
            | ErrorCode::AmountTooLarge => 1,
            ErrorCode::ConfigError | ErrorCode::Internal => 2,
        }
    }
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to user-facing errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InsufficientPayment { .. } => AppError::new(
                ErrorCode::InsufficientPayment,
                "Amount paid must be greater than or equal to the price",
            ),
            CoreError::ExactChangeUnavailable { .. } => {
                AppError::new(ErrorCode::NoExactChange, err.to_string())
            }
            CoreError::AmountTooLarge { .. } => {
                AppError::new(ErrorCode::AmountTooLarge, err.to_string())
            }
            CoreError::UnknownCurrency(_) | CoreError::EmptyDenominationSet => {
                AppError::new(ErrorCode::ConfigError, err.to_string())
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "configuration error");
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!(error = %err, "failed to serialize output");
        AppError::internal("Failed to serialize output")
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
