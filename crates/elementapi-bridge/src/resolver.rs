//! Exactly-once resolution of the host's adapter
//!
//! ```text
//! Unresolved ──resolve()──▶ Resolved(binding)
//!      │
//!      └──────────────────▶ Failed(error)      (terminal)
//! ```
//!
//! The first call to [`NmsBridge::resolve`] probes the host, looks the
//! version up and runs the factory. Its outcome, success or failure, is kept
//! for the life of the bridge. Concurrent first calls block until the single
//! winning call finishes and then observe its outcome.

use crate::binding::NmsBinding;
use crate::probe::{HostVersionProbe, VersionProbe};
use elementapi_nms_api::{AdapterRegistry, BridgeError, HostRef, NmsVersion};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{error, info};

/// Observable resolution state
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeState {
    Unresolved,
    Resolved(NmsVersion),
    Failed(BridgeError),
}

/// Binds the capability interface to the adapter matching the host
pub struct NmsBridge {
    registry: AdapterRegistry,
    probe: Box<dyn VersionProbe>,
    host: HostRef,
    outcome: OnceCell<Result<NmsBinding, BridgeError>>,
}

impl NmsBridge {
    pub fn new(registry: AdapterRegistry, probe: Box<dyn VersionProbe>, host: HostRef) -> Self {
        Self {
            registry,
            probe,
            host,
            outcome: OnceCell::new(),
        }
    }

    /// Bridge that probes `host` for its own version
    pub fn for_host(registry: AdapterRegistry, host: HostRef) -> Self {
        let probe = HostVersionProbe::new(Arc::clone(&host));
        Self::new(registry, Box::new(probe), host)
    }

    /// Resolve the adapter, constructing it on the first call only.
    ///
    /// # Errors
    ///
    /// - `UnrecognizedHostVersion` if the probe cannot read the host version
    /// - `UnsupportedHostVersion` if no adapter is registered for it
    /// - `AdapterConstructionFailure` if the adapter's factory fails
    ///
    /// The same error is returned on every later call.
    pub fn resolve(&self) -> Result<NmsBinding, BridgeError> {
        self.outcome.get_or_init(|| self.bind()).clone()
    }

    pub fn state(&self) -> BridgeState {
        match self.outcome.get() {
            None => BridgeState::Unresolved,
            Some(Ok(binding)) => BridgeState::Resolved(binding.version()),
            Some(Err(err)) => BridgeState::Failed(err.clone()),
        }
    }

    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    fn bind(&self) -> Result<NmsBinding, BridgeError> {
        let result = self.try_bind();
        if let Err(err) = &result {
            error!(
                error = %err,
                detected = ?err.version().map(|v| v.to_string()),
                supported = %elementapi_nms_api::format_versions(&self.registry.supported()),
                "Failed to bind NMS adapter"
            );
        }
        result
    }

    fn try_bind(&self) -> Result<NmsBinding, BridgeError> {
        let detected = self.probe.detect()?;

        let factory = self
            .registry
            .lookup(&detected)
            .ok_or_else(|| BridgeError::UnsupportedHostVersion {
                detected,
                supported: self.registry.supported(),
            })?;

        let nms = factory(&self.host).map_err(|cause| BridgeError::AdapterConstructionFailure {
            version: detected,
            cause,
        })?;

        info!(
            version = %detected,
            origin = self.registry.origin(&detected).unwrap_or("<unknown>"),
            "Bound NMS adapter"
        );
        Ok(NmsBinding::new(detected, Arc::from(nms)))
    }
}
