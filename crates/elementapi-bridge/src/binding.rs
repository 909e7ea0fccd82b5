//! The bound capability handed to the feature layer

use elementapi_nms_api::{ElementNms, NmsVersion};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Adapter instance selected for the running host.
///
/// Cloning shares the same instance. Dereferences to [`ElementNms`].
#[derive(Clone)]
pub struct NmsBinding {
    version: NmsVersion,
    nms: Arc<dyn ElementNms>,
}

impl NmsBinding {
    pub fn new(version: NmsVersion, nms: Arc<dyn ElementNms>) -> Self {
        Self { version, nms }
    }

    /// Version identifier the binding was resolved for
    pub fn version(&self) -> NmsVersion {
        self.version
    }

    /// Shared handle to the underlying adapter
    pub fn nms(&self) -> Arc<dyn ElementNms> {
        Arc::clone(&self.nms)
    }

    /// Whether both bindings share one adapter instance
    pub fn ptr_eq(&self, other: &NmsBinding) -> bool {
        Arc::ptr_eq(&self.nms, &other.nms)
    }
}

impl Deref for NmsBinding {
    type Target = dyn ElementNms;

    fn deref(&self) -> &Self::Target {
        self.nms.as_ref()
    }
}

impl fmt::Debug for NmsBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NmsBinding")
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
