//! Plugin activation

use crate::api::ElementApi;
use crate::error::ActivationError;
use elementapi_bridge::NmsBridge;
use elementapi_config::{logging, ElementApiConfig};
use elementapi_nms_api::{AdapterRegistry, HostRef};
use std::path::Path;
use tracing::{error, info};

/// Entry points the host calls when enabling the plugin
pub struct ElementApiPlugin;

impl ElementApiPlugin {
    /// Enable with an already loaded configuration and the bundled adapters.
    ///
    /// Any failure is logged at `error` level with the detected and
    /// supported versions before it is returned; the host should then
    /// refuse to enable the plugin.
    pub fn enable(host: HostRef, config: &ElementApiConfig) -> Result<ElementApi, ActivationError> {
        logging::initialize(&config.logging);
        let result = elementapi_nms_bundle::bundled_registry()
            .map_err(ActivationError::from)
            .and_then(|registry| Self::activate(registry, host, config));
        Self::report(result)
    }

    /// Enable with an explicit adapter registry
    pub fn enable_with(
        registry: AdapterRegistry,
        host: HostRef,
        config: &ElementApiConfig,
    ) -> Result<ElementApi, ActivationError> {
        logging::initialize(&config.logging);
        Self::report(Self::activate(registry, host, config))
    }

    /// Load `<data_dir>/config.toml`, then enable
    pub fn enable_from_dir(host: HostRef, data_dir: &Path) -> Result<ElementApi, ActivationError> {
        let config = ElementApiConfig::load(data_dir).map_err(|err| {
            error!(error = %err, data_dir = %data_dir.display(), "Refusing to enable ElementAPI");
            err
        })?;
        Self::enable(host, &config)
    }

    fn activate(
        registry: AdapterRegistry,
        host: HostRef,
        config: &ElementApiConfig,
    ) -> Result<ElementApi, ActivationError> {
        let bridge = NmsBridge::for_host(registry, host);
        let nms = bridge.resolve()?;
        Ok(ElementApi::new(nms, &config.elements.namespace)?)
    }

    fn report(result: Result<ElementApi, ActivationError>) -> Result<ElementApi, ActivationError> {
        match &result {
            Ok(api) => info!(version = %api.version(), "ElementAPI enabled"),
            Err(err) => error!(error = %err, "Refusing to enable ElementAPI"),
        }
        result
    }
}
