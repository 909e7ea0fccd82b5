//! Element identity

use crate::error::{ElementError, ElementResult};
use std::fmt;

/// A named element such as `FIRE` or `WATER`.
///
/// IDs are case-insensitive and stored upper-case; two elements are equal
/// when their IDs are. Surrounding whitespace is kept as part of the ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    id: String,
}

impl Element {
    pub fn new(id: &str) -> ElementResult<Self> {
        if id.trim().is_empty() {
            return Err(ElementError::BlankId);
        }
        Ok(Self {
            id: id.to_uppercase(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl std::str::FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
