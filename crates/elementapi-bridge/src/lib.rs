//! Version bridge for ElementAPI
//!
//! Detects the host's release, selects the matching adapter from an
//! [`AdapterRegistry`](elementapi_nms_api::AdapterRegistry) and constructs it
//! exactly once. Version mismatches fail activation with a diagnostic naming
//! the detected version and every supported one.

pub mod binding;
pub mod probe;
pub mod resolver;

pub use binding::NmsBinding;
pub use probe::{normalize, FixedVersionProbe, HostVersionProbe, VersionProbe};
pub use resolver::{BridgeState, NmsBridge};
