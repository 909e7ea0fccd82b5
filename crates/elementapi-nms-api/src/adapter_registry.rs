//! Link-time adapter registration and the version-keyed adapter registry
//!
//! Every adapter crate submits one [`AdapterDescriptor`] through the
//! [`nms_adapter!`](crate::nms_adapter) macro. The descriptors are collected
//! by `inventory` and loaded into an [`AdapterRegistry`], which rejects
//! duplicate versions. The registry is handed by value to the resolver, so it
//! cannot be mutated once lookups start.

use crate::capability::ElementNms;
use crate::error::{BridgeError, NmsResult};
use crate::host::HostRef;
use crate::version::NmsVersion;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

// Re-export inventory for the macro.
pub use inventory;

/// Factory signature used by statically registered adapters
pub type AdapterFactoryFn = fn(&HostRef) -> NmsResult<Box<dyn ElementNms>>;

/// Factory stored in the registry
pub type AdapterFactory = Arc<dyn Fn(&HostRef) -> NmsResult<Box<dyn ElementNms>> + Send + Sync>;

/// Describes a compiled adapter to the bridge.
///
/// Created by the `nms_adapter!` macro and collected at link-time by the
/// `inventory` crate.
pub struct AdapterDescriptor {
    pub version: NmsVersion,
    /// Crate that provides the adapter, for diagnostics
    pub origin: &'static str,
    pub factory: AdapterFactoryFn,
}

// Collect all adapter descriptors into a static collection.
inventory::collect!(AdapterDescriptor);

/// Returns an iterator over all adapters linked into the binary.
pub fn iter_adapters() -> impl Iterator<Item = &'static AdapterDescriptor> {
    inventory::iter::<AdapterDescriptor>.into_iter()
}

/// A macro for version adapters to register themselves.
///
/// ```ignore
/// nms_adapter! {
///     version: NmsVersion::new(1, 21, 3),
///     factory: V1_21R3Adapter::boxed
/// }
/// ```
#[macro_export]
macro_rules! nms_adapter {
    (
        version: $version:expr,
        factory: $factory:expr
    ) => {
        $crate::adapter_registry::inventory::submit! {
            $crate::adapter_registry::AdapterDescriptor {
                version: $version,
                origin: env!("CARGO_PKG_NAME"),
                factory: $factory,
            }
        }
    };
}

struct RegisteredAdapter {
    origin: &'static str,
    factory: AdapterFactory,
}

/// Mapping from version identifier to adapter factory. Keys are unique.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<NmsVersion, RegisteredAdapter>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from every descriptor linked into the binary.
    pub fn from_inventory() -> Result<Self, BridgeError> {
        let mut registry = Self::new();
        for descriptor in iter_adapters() {
            registry.register_descriptor(descriptor)?;
        }
        debug!(adapter_count = registry.len(), "Loaded NMS adapters from inventory");
        Ok(registry)
    }

    /// Register a factory under `version`.
    ///
    /// Fails with `DuplicateAdapter` when `version` is already present; the
    /// existing mapping is left untouched.
    pub fn register<F>(&mut self, version: NmsVersion, factory: F) -> Result<(), BridgeError>
    where
        F: Fn(&HostRef) -> NmsResult<Box<dyn ElementNms>> + Send + Sync + 'static,
    {
        self.insert(version, "<runtime>", Arc::new(factory))
    }

    /// Register a statically submitted descriptor
    pub fn register_descriptor(
        &mut self,
        descriptor: &'static AdapterDescriptor,
    ) -> Result<(), BridgeError> {
        self.insert(
            descriptor.version,
            descriptor.origin,
            Arc::new(descriptor.factory),
        )
    }

    fn insert(
        &mut self,
        version: NmsVersion,
        origin: &'static str,
        factory: AdapterFactory,
    ) -> Result<(), BridgeError> {
        if let Some(existing) = self.adapters.get(&version) {
            debug!(
                version = %version,
                existing = existing.origin,
                rejected = origin,
                "Rejected duplicate NMS adapter"
            );
            return Err(BridgeError::DuplicateAdapter { version });
        }

        debug!(version = %version, origin, "Registered NMS adapter");
        self.adapters
            .insert(version, RegisteredAdapter { origin, factory });
        Ok(())
    }

    /// Factory registered for `version`, if any
    pub fn lookup(&self, version: &NmsVersion) -> Option<&AdapterFactory> {
        self.adapters.get(version).map(|adapter| &adapter.factory)
    }

    /// Crate that registered the adapter for `version`
    pub fn origin(&self, version: &NmsVersion) -> Option<&'static str> {
        self.adapters.get(version).map(|adapter| adapter.origin)
    }

    /// All registered versions, oldest first
    pub fn supported(&self) -> Vec<NmsVersion> {
        self.adapters.keys().copied().collect()
    }

    pub fn contains(&self, version: &NmsVersion) -> bool {
        self.adapters.contains_key(version)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.adapters
                    .iter()
                    .map(|(version, adapter)| (version.to_string(), adapter.origin)),
            )
            .finish()
    }
}
