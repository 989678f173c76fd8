//! Person name value object.

use serde::Serialize;

use campuspass_core::{DomainError, DomainResult, ValueObject};

/// A person's full name.
///
/// Valid when non-empty after trimming leading/trailing whitespace. The
/// **original** string is stored untrimmed: only emptiness is judged against
/// the trimmed form, so accessors echo back exactly what was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    /// Parse a raw name, rejecting empty and all-whitespace input.
    pub fn parse(name: String) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_input("name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PersonName {}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PersonName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
