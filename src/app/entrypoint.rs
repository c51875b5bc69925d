//! Entry point string parsing.

use std::fmt;
use std::str::FromStr;

use crate::app::ResolveError;

/// A parsed application entry point: a module path plus the attribute that
/// names the application inside it.
///
/// Accepts `module:attribute` and, when no colon is present, the dotted
/// `module.attribute` form where the last segment is the attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    module: String,
    attribute: String,
}

impl EntryPoint {
    pub fn parse(target: &str) -> Result<Self, ResolveError> {
        let (module, attribute) = match target.split_once(':') {
            Some(parts) => parts,
            // No colon: treat the final dotted segment as the attribute.
            None => match target.rsplit_once('.') {
                Some(parts) => parts,
                None => return Err(ResolveError::Malformed(target.to_string())),
            },
        };

        if module.is_empty() || attribute.is_empty() || attribute.contains(':') {
            return Err(ResolveError::Malformed(target.to_string()));
        }

        Ok(Self {
            module: module.to_string(),
            attribute: attribute.to_string(),
        })
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }
}

impl FromStr for EntryPoint {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.attribute)
    }
}
