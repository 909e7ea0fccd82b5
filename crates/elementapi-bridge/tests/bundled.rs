//! Resolution against the bundled adapters and a simulated host

use elementapi_bridge::{BridgeState, NmsBridge};
use elementapi_nms_api::{BridgeError, HostRef, NmsError, NmsVersion};
use elementapi_nms_bundle::bundled_registry;
use elementapi_test_support::{bukkit_version, SimulatedHost};
use serde_json::Value;
use std::sync::Arc;

const UNRELOCATED_SERVER: &str = "org.bukkit.craftbukkit.CraftServer";

fn paper_host(release: &str) -> HostRef {
    Arc::new(
        SimulatedHost::builder(bukkit_version(release))
            .symbol(UNRELOCATED_SERVER, |_| Ok(Value::Null))
            .build(),
    )
}

#[test]
fn test_snapshot_version_binds_matching_adapter() {
    let bridge = NmsBridge::for_host(bundled_registry().unwrap(), paper_host("1.21.4"));

    let binding = bridge.resolve().unwrap();

    assert_eq!(binding.version(), NmsVersion::new(1, 21, 3));
    assert_eq!(binding.version().to_string(), "1_21_R3");
    assert_eq!(bridge.registry().origin(&binding.version()), Some("elementapi-nms-v1_21_r3"));
}

#[test]
fn test_future_release_is_unsupported() {
    let bridge = NmsBridge::for_host(bundled_registry().unwrap(), paper_host("1.22.0"));

    let err = bridge.resolve().unwrap_err();

    match &err {
        BridgeError::UnsupportedHostVersion { detected, supported } => {
            assert_eq!(detected.to_string(), "1_22_R1");
            assert_eq!(supported.last(), Some(&NmsVersion::new(1, 21, 5)));
            assert!(supported.windows(2).all(|pair| pair[0] < pair[1]));
        }
        other => panic!("expected UnsupportedHostVersion, got {other:?}"),
    }
    assert!(err.to_string().contains("1_22_R1"));
    assert!(err.to_string().contains("1_21_R5"));
    assert_eq!(bridge.state(), BridgeState::Failed(err));
}

#[test]
fn test_host_missing_anchor_fails_construction() {
    let host: HostRef = Arc::new(SimulatedHost::bare(bukkit_version("1.21.8")));
    let bridge = NmsBridge::for_host(bundled_registry().unwrap(), host);

    assert_eq!(
        bridge.resolve().unwrap_err(),
        BridgeError::AdapterConstructionFailure {
            version: NmsVersion::new(1, 21, 5),
            cause: NmsError::missing_symbol(UNRELOCATED_SERVER),
        }
    );
}
