//! Version-independent NMS capability API
//!
//! This crate defines the stable contract between ElementAPI and the
//! version-specific internals of the server it runs on:
//!
//! - [`ElementNms`]: the capability interface, implemented once per supported
//!   server-internals release.
//! - [`NmsVersion`]: the normalized identifier adapters register under.
//! - [`HostInternals`]: the opaque host boundary adapters talk to.
//! - [`AdapterRegistry`] and the [`nms_adapter!`] macro: link-time adapter
//!   registration.
//! - [`HandleCache`]: exactly-once caching of reflective symbol handles.
//!
//! # Architecture
//!
//! Each version adapter lives in its own crate and depends only on this crate
//! (plus shared helpers). Adapters never reference each other, and the rest of
//! the plugin only ever sees `dyn ElementNms`.

pub mod adapter_registry;
pub mod capability;
pub mod error;
pub mod handles;
pub mod host;
pub mod version;

// Re-exports
pub use adapter_registry::{
    iter_adapters, AdapterDescriptor, AdapterFactory, AdapterFactoryFn, AdapterRegistry,
};
pub use capability::{
    BlockPos, BlockState, DamageCause, ElementNms, EntityRef, ItemRef, Location, ParticleSpec,
    TagKey, Vector, WorldRef,
};
pub use error::{BridgeError, NmsError, NmsResult};
pub use handles::HandleCache;
pub use host::{HostError, HostInternals, HostRef, SymbolHandle};
// Note: nms_adapter! macro is automatically exported at crate root due to #[macro_export]
pub use version::{format_versions, NmsVersion, ParseNmsVersionError};
