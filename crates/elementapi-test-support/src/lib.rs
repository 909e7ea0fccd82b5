//! Test support utilities for ElementAPI crates

pub mod host;
pub mod mocks;

pub use host::{
    DamageRecord, EntityState, ParticleRecord, SimulatedHost, SimulatedHostBuilder, WorldState,
};
pub use mocks::{mock_nms, MockElementNms};

/// Bukkit version string a host of `major.minor.patch` reports
pub fn bukkit_version(release: &str) -> String {
    format!("{}-R0.1-SNAPSHOT", release)
}
