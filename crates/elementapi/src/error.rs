//! Errors raised by the element layer and by plugin activation

use elementapi_config::ConfigError;
use elementapi_nms_api::{BridgeError, NmsError};

pub type ElementResult<T> = Result<T, ElementError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementError {
    #[error("Element ID cannot be empty")]
    BlankId,

    #[error("Element '{id}' is not registered")]
    UnknownElement { id: String },

    #[error(transparent)]
    Nms(#[from] NmsError),
}

impl ElementError {
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownElement { id: id.into() }
    }
}

/// Reasons the plugin refuses to enable
#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Failed to set up element layer: {0}")]
    Element(#[from] ElementError),
}
