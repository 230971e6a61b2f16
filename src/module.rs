//! Module identifier parsing and normalization
//!
//! Users refer to modules by short name (`core`) or by full package name
//! (`meanie-core`). Both normalize to the same identifier.

use crate::error::{MeanieError, Result};

/// Package name prefix for all Meanie modules
pub const PACKAGE_PREFIX: &str = "meanie-";

/// A parsed module identifier
///
/// Immutable once parsed; `name` is the short display name and
/// `package_name` the canonical package-manager name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleId {
    name: String,
    package_name: String,
}

impl ModuleId {
    /// Parse a user-supplied module identifier
    pub fn parse(input: &str) -> Result<Self> {
        let short = input.strip_prefix(PACKAGE_PREFIX).unwrap_or(input);

        if short.is_empty()
            || !short
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(MeanieError::InvalidModuleName {
                name: input.to_string(),
            });
        }

        Ok(Self {
            name: short.to_string(),
            package_name: format!("{}{}", PACKAGE_PREFIX, short),
        })
    }

    /// Parse a list of identifiers, preserving order
    pub fn parse_all(inputs: &[String]) -> Result<Vec<Self>> {
        inputs.iter().map(|input| Self::parse(input)).collect()
    }

    /// Short display name (e.g. `core`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canonical package name (e.g. `meanie-core`)
    pub fn package_name(&self) -> &str {
        &self.package_name
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
