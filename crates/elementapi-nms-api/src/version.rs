//! Normalized server-internals version identifiers
//!
//! Adapters register under the same token CraftBukkit uses for its relocated
//! package names, e.g. `1_21_R3`. The token is ordered by
//! `(major, minor, revision)` so the supported set can be listed oldest first.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of one server-internals release bucket (`1_21_R3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NmsVersion {
    major: u8,
    minor: u8,
    revision: u8,
}

impl NmsVersion {
    /// Creates a version identifier. `const` so adapters can register it statically.
    pub const fn new(major: u8, minor: u8, revision: u8) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    pub const fn major(&self) -> u8 {
        self.major
    }

    pub const fn minor(&self) -> u8 {
        self.minor
    }

    pub const fn revision(&self) -> u8 {
        self.revision
    }

    /// CraftBukkit package token, e.g. `v1_21_R3`.
    pub fn package_token(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for NmsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_R{}", self.major, self.minor, self.revision)
    }
}

/// Error returned when a string is not a `<major>_<minor>_R<revision>` token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid NMS version token: '{0}'")]
pub struct ParseNmsVersionError(pub String);

impl FromStr for NmsVersion {
    type Err = ParseNmsVersionError;

    /// Parses `1_21_R3` or the package form `v1_21_R3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNmsVersionError(s.to_string());
        let token = s.trim();
        let token = token.strip_prefix('v').unwrap_or(token);

        let mut parts = token.split('_');
        let major = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let minor = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
        let revision = parts
            .next()
            .and_then(|p| p.strip_prefix('R'))
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::new(major, minor, revision))
    }
}

impl Serialize for NmsVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NmsVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Formats a list of versions as `1_17_R1, 1_18_R1, ...` for diagnostics.
pub fn format_versions(versions: &[NmsVersion]) -> String {
    if versions.is_empty() {
        return "<none>".to_string();
    }
    versions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
