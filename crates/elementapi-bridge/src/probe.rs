//! Host version detection and normalization
//!
//! Hosts report their release in a few shapes:
//!
//! - Bukkit version: `1.21.4-R0.1-SNAPSHOT`
//! - Server banner: `git-Paper-196 (MC: 1.21.4)`
//! - CraftBukkit package token: `v1_21_R3` or `1_21_R3`
//!
//! [`normalize`] maps all of them onto the [`NmsVersion`] adapters register
//! under. Releases newer than the mapping table within a known minor line map
//! to the highest revision of that line; unknown minor lines map to `R1`.

use elementapi_nms_api::{BridgeError, HostRef, NmsVersion};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static PACKAGE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^v?(\d+)_(\d+)_R(\d+)$").expect("valid package token regex"));

static BANNER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(MC: (\d+)\.(\d+)(?:\.(\d+))?\)").expect("valid server banner regex")
});

static RELEASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").expect("valid release regex"));

/// First patch of each revision bucket for major version 1, as
/// `(minor, first_patch, revision)`, sorted.
const REVISIONS: &[(u8, u8, u8)] = &[
    (17, 0, 1),
    (18, 0, 1),
    (18, 2, 2),
    (19, 0, 1),
    (19, 3, 2),
    (19, 4, 3),
    (20, 0, 1),
    (20, 2, 2),
    (20, 3, 3),
    (20, 5, 4),
    (21, 0, 1),
    (21, 2, 2),
    (21, 4, 3),
    (21, 5, 4),
    (21, 6, 5),
];

/// Source of the host's version identifier
pub trait VersionProbe: Send + Sync {
    /// Identifier of the running host. Deterministic for a given host build.
    fn detect(&self) -> Result<NmsVersion, BridgeError>;
}

/// Probe that reads the version string the host reports
pub struct HostVersionProbe {
    host: HostRef,
}

impl HostVersionProbe {
    pub fn new(host: HostRef) -> Self {
        Self { host }
    }
}

impl VersionProbe for HostVersionProbe {
    fn detect(&self) -> Result<NmsVersion, BridgeError> {
        let raw = self.host.server_version();
        let version = normalize(&raw)?;
        debug!(raw = %raw, version = %version, "Detected host version");
        Ok(version)
    }
}

/// Probe that always reports the same version string
#[derive(Debug, Clone)]
pub struct FixedVersionProbe {
    raw: String,
}

impl FixedVersionProbe {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl VersionProbe for FixedVersionProbe {
    fn detect(&self) -> Result<NmsVersion, BridgeError> {
        normalize(&self.raw)
    }
}

/// Normalize a host version string into an adapter identifier.
///
/// # Errors
///
/// [`BridgeError::UnrecognizedHostVersion`] when `raw` matches none of the
/// accepted shapes.
pub fn normalize(raw: &str) -> Result<NmsVersion, BridgeError> {
    let trimmed = raw.trim();

    if let Some(caps) = PACKAGE_TOKEN.captures(trimmed) {
        return Ok(NmsVersion::new(
            number(&caps, 1, raw)?,
            number(&caps, 2, raw)?,
            number(&caps, 3, raw)?,
        ));
    }

    let caps = match BANNER.captures(trimmed) {
        Some(caps) => caps,
        None => {
            let release = trimmed.split('-').next().unwrap_or_default();
            RELEASE
                .captures(release)
                .ok_or_else(|| BridgeError::unrecognized(raw))?
        }
    };

    let major = number(&caps, 1, raw)?;
    let minor = number(&caps, 2, raw)?;
    let patch = match caps.get(3) {
        Some(_) => number(&caps, 3, raw)?,
        None => 0,
    };

    Ok(NmsVersion::new(major, minor, revision(major, minor, patch)))
}

/// Parse one captured component. Values that do not fit a `u8` are unrecognized.
fn number(caps: &regex::Captures<'_>, group: usize, raw: &str) -> Result<u8, BridgeError> {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .ok_or_else(|| BridgeError::unrecognized(raw))
}

fn revision(major: u8, minor: u8, patch: u8) -> u8 {
    if major != 1 {
        return 1;
    }
    REVISIONS
        .iter()
        .filter(|(line, first_patch, _)| *line == minor && *first_patch <= patch)
        .map(|(_, _, revision)| *revision)
        .last()
        .unwrap_or(1)
}
