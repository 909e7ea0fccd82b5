//! Error types for the capability layer
//!
//! Two families live here:
//! - [`NmsError`]: failure of a single capability call. Recoverable by the caller.
//! - [`BridgeError`]: failure to bind an adapter at activation. Always fatal.

use crate::host::HostError;
use crate::version::{format_versions, NmsVersion};

/// Result type for capability operations
pub type NmsResult<T> = Result<T, NmsError>;

/// Errors raised by an adapter while executing a capability operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NmsError {
    /// The host does not expose a symbol the adapter relies on
    #[error("Missing host symbol: {symbol}")]
    MissingSymbol { symbol: String },

    /// The host rejected or failed an invocation
    #[error("Host call '{symbol}' failed: {message}")]
    Host { symbol: String, message: String },

    /// The host answered with a value of an unexpected shape
    #[error("Could not decode result of '{operation}': {message}")]
    Decode { operation: String, message: String },

    /// Operation not available on this server version
    #[error("Operation not supported: {operation}")]
    NotSupported { operation: String },

    /// Invalid input provided by the caller
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl NmsError {
    /// Create a missing symbol error
    pub fn missing_symbol(symbol: impl Into<String>) -> Self {
        Self::MissingSymbol {
            symbol: symbol.into(),
        }
    }

    /// Create a decode error
    pub fn decode(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a not supported error
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<HostError> for NmsError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::UnknownHandle { symbol } => NmsError::MissingSymbol { symbol },
            HostError::Invocation { symbol, message } => NmsError::Host { symbol, message },
        }
    }
}

/// Activation errors. None of these are retried; each aborts plugin activation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    /// The host version string could not be normalized
    #[error("Unrecognized host version '{raw}'")]
    UnrecognizedHostVersion { raw: String },

    /// Two adapters claim the same version identifier
    #[error("Duplicate NMS adapter registered for {version}")]
    DuplicateAdapter { version: NmsVersion },

    /// No adapter is compiled in for the detected version
    #[error(
        "Unsupported host version {detected}; supported versions: {}",
        format_versions(.supported)
    )]
    UnsupportedHostVersion {
        detected: NmsVersion,
        supported: Vec<NmsVersion>,
    },

    /// The selected adapter's factory failed
    #[error("NMS adapter {version} failed to initialize: {cause}")]
    AdapterConstructionFailure { version: NmsVersion, cause: NmsError },
}

impl BridgeError {
    /// Create an unrecognized host version error
    pub fn unrecognized(raw: impl Into<String>) -> Self {
        Self::UnrecognizedHostVersion { raw: raw.into() }
    }

    /// Version identifier the error is about, when one is known
    pub fn version(&self) -> Option<NmsVersion> {
        match self {
            Self::UnrecognizedHostVersion { .. } => None,
            Self::DuplicateAdapter { version } => Some(*version),
            Self::UnsupportedHostVersion { detected, .. } => Some(*detected),
            Self::AdapterConstructionFailure { version, .. } => Some(*version),
        }
    }
}
