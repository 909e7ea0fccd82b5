//! NMS Adapter Bundle
//!
//! Single collection point for every version adapter. Depending on this crate
//! links the adapter crates enabled by its features, and their self-registered
//! descriptors become visible to [`bundled_registry`].
//!
//! The bridge and the plugin facade depend only on `elementapi-nms-api`; this
//! crate is the one place that knows which concrete versions ship.

use elementapi_nms_api::{format_versions, AdapterRegistry, BridgeError};

// Reference each adapter's profile type so the linker keeps the crate, and
// with it the inventory submission.
#[cfg(feature = "v1_17_r1")]
use elementapi_nms_v1_17_r1::V1_17R1;
#[cfg(feature = "v1_18_r1")]
use elementapi_nms_v1_18_r1::V1_18R1;
#[cfg(feature = "v1_18_r2")]
use elementapi_nms_v1_18_r2::V1_18R2;
#[cfg(feature = "v1_19_r1")]
use elementapi_nms_v1_19_r1::V1_19R1;
#[cfg(feature = "v1_19_r2")]
use elementapi_nms_v1_19_r2::V1_19R2;
#[cfg(feature = "v1_19_r3")]
use elementapi_nms_v1_19_r3::V1_19R3;
#[cfg(feature = "v1_20_r1")]
use elementapi_nms_v1_20_r1::V1_20R1;
#[cfg(feature = "v1_20_r2")]
use elementapi_nms_v1_20_r2::V1_20R2;
#[cfg(feature = "v1_20_r3")]
use elementapi_nms_v1_20_r3::V1_20R3;
#[cfg(feature = "v1_20_r4")]
use elementapi_nms_v1_20_r4::V1_20R4;
#[cfg(feature = "v1_21_r1")]
use elementapi_nms_v1_21_r1::V1_21R1;
#[cfg(feature = "v1_21_r2")]
use elementapi_nms_v1_21_r2::V1_21R2;
#[cfg(feature = "v1_21_r3")]
use elementapi_nms_v1_21_r3::V1_21R3;
#[cfg(feature = "v1_21_r4")]
use elementapi_nms_v1_21_r4::V1_21R4;
#[cfg(feature = "v1_21_r5")]
use elementapi_nms_v1_21_r5::V1_21R5;

#[allow(dead_code)]
fn _force_adapter_linkage() {
    #[cfg(feature = "v1_17_r1")]
    let _: Option<V1_17R1> = None;
    #[cfg(feature = "v1_18_r1")]
    let _: Option<V1_18R1> = None;
    #[cfg(feature = "v1_18_r2")]
    let _: Option<V1_18R2> = None;
    #[cfg(feature = "v1_19_r1")]
    let _: Option<V1_19R1> = None;
    #[cfg(feature = "v1_19_r2")]
    let _: Option<V1_19R2> = None;
    #[cfg(feature = "v1_19_r3")]
    let _: Option<V1_19R3> = None;
    #[cfg(feature = "v1_20_r1")]
    let _: Option<V1_20R1> = None;
    #[cfg(feature = "v1_20_r2")]
    let _: Option<V1_20R2> = None;
    #[cfg(feature = "v1_20_r3")]
    let _: Option<V1_20R3> = None;
    #[cfg(feature = "v1_20_r4")]
    let _: Option<V1_20R4> = None;
    #[cfg(feature = "v1_21_r1")]
    let _: Option<V1_21R1> = None;
    #[cfg(feature = "v1_21_r2")]
    let _: Option<V1_21R2> = None;
    #[cfg(feature = "v1_21_r3")]
    let _: Option<V1_21R3> = None;
    #[cfg(feature = "v1_21_r4")]
    let _: Option<V1_21R4> = None;
    #[cfg(feature = "v1_21_r5")]
    let _: Option<V1_21R5> = None;
}

/// Build the registry of every adapter linked into this bundle.
///
/// # Errors
///
/// Returns [`BridgeError::DuplicateAdapter`] if two linked crates registered
/// the same version.
pub fn bundled_registry() -> Result<AdapterRegistry, BridgeError> {
    let registry = AdapterRegistry::from_inventory()?;

    if registry.is_empty() {
        tracing::warn!("No NMS adapters linked; every host version will be unsupported");
    } else {
        tracing::info!(
            adapter_count = registry.len(),
            versions = %format_versions(&registry.supported()),
            "Loaded bundled NMS adapters"
        );
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elementapi_nms_api::NmsVersion;

    // Keep every enabled adapter linked into the test binary.
    #[cfg(feature = "v1_17_r1")]
    extern crate elementapi_nms_v1_17_r1;
    #[cfg(feature = "v1_18_r1")]
    extern crate elementapi_nms_v1_18_r1;
    #[cfg(feature = "v1_18_r2")]
    extern crate elementapi_nms_v1_18_r2;
    #[cfg(feature = "v1_19_r1")]
    extern crate elementapi_nms_v1_19_r1;
    #[cfg(feature = "v1_19_r2")]
    extern crate elementapi_nms_v1_19_r2;
    #[cfg(feature = "v1_19_r3")]
    extern crate elementapi_nms_v1_19_r3;
    #[cfg(feature = "v1_20_r1")]
    extern crate elementapi_nms_v1_20_r1;
    #[cfg(feature = "v1_20_r2")]
    extern crate elementapi_nms_v1_20_r2;
    #[cfg(feature = "v1_20_r3")]
    extern crate elementapi_nms_v1_20_r3;
    #[cfg(feature = "v1_20_r4")]
    extern crate elementapi_nms_v1_20_r4;
    #[cfg(feature = "v1_21_r1")]
    extern crate elementapi_nms_v1_21_r1;
    #[cfg(feature = "v1_21_r2")]
    extern crate elementapi_nms_v1_21_r2;
    #[cfg(feature = "v1_21_r3")]
    extern crate elementapi_nms_v1_21_r3;
    #[cfg(feature = "v1_21_r4")]
    extern crate elementapi_nms_v1_21_r4;
    #[cfg(feature = "v1_21_r5")]
    extern crate elementapi_nms_v1_21_r5;

    #[test]
    fn test_bundle_registers_every_release() {
        let registry = bundled_registry().unwrap();
        assert_eq!(registry.len(), 15);
        assert_eq!(
            format_versions(&registry.supported()),
            "1_17_R1, 1_18_R1, 1_18_R2, 1_19_R1, 1_19_R2, 1_19_R3, 1_20_R1, 1_20_R2, \
             1_20_R3, 1_20_R4, 1_21_R1, 1_21_R2, 1_21_R3, 1_21_R4, 1_21_R5"
        );
    }

    #[test]
    fn test_origins_name_the_adapter_crate() {
        let registry = bundled_registry().unwrap();
        assert_eq!(
            registry.origin(&NmsVersion::new(1, 21, 3)),
            Some("elementapi-nms-v1_21_r3")
        );
        assert_eq!(
            registry.origin(&NmsVersion::new(1, 17, 1)),
            Some("elementapi-nms-v1_17_r1")
        );
    }

    #[test]
    fn test_unknown_release_has_no_adapter() {
        let registry = bundled_registry().unwrap();
        assert!(!registry.contains(&NmsVersion::new(1, 16, 5)));
        assert!(registry.lookup(&NmsVersion::new(1, 22, 1)).is_none());
    }
}
