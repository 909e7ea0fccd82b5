//! Host boundary
//!
//! The server runtime is opaque: it reports a version string and exposes its
//! internals as named symbols that can be looked up (slow, reflective) and
//! invoked with dynamically typed arguments.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shared reference to the running host
pub type HostRef = Arc<dyn HostInternals>;

/// Version-specific, unstable internals of the server runtime.
pub trait HostInternals: Send + Sync {
    /// Version string as reported by the host, e.g. `1.21.4-R0.1-SNAPSHOT`.
    fn server_version(&self) -> String;

    /// Look up an internal symbol (`<class>#<member>`). Expensive; callers cache the result.
    fn resolve_symbol(&self, symbol: &str) -> Option<SymbolHandle>;

    /// Invoke a previously resolved symbol.
    fn invoke(&self, handle: &SymbolHandle, args: &[Value]) -> Result<Value, HostError>;
}

/// Opaque handle to a resolved host symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolHandle {
    symbol: Arc<str>,
    slot: u64,
}

impl SymbolHandle {
    pub fn new(symbol: impl Into<Arc<str>>, slot: u64) -> Self {
        Self {
            symbol: symbol.into(),
            slot,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Host-assigned slot, meaningful only to the host that produced the handle
    pub fn slot(&self) -> u64 {
        self.slot
    }
}

impl fmt::Display for SymbolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.symbol, self.slot)
    }
}

/// Errors reported by the host itself
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("Unknown symbol handle: {symbol}")]
    UnknownHandle { symbol: String },

    #[error("Invocation of '{symbol}' failed: {message}")]
    Invocation { symbol: String, message: String },
}

impl HostError {
    pub fn invocation(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invocation {
            symbol: symbol.into(),
            message: message.into(),
        }
    }
}
