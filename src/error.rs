// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the dashboard core.

use std::fmt;
use thiserror::Error;

/// Which lookup table a missing key was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Country,
    Dimension,
    Column,
    Scenario,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupKind::Country => "country",
            LookupKind::Dimension => "dimension",
            LookupKind::Column => "column key",
            LookupKind::Scenario => "scenario",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum CompassError {
    #[error("unknown {kind}: {key:?}")]
    NotFound { kind: LookupKind, key: String },

    #[error("invalid reference data: {0}")]
    InvalidData(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CompassError {
    pub fn not_found(kind: LookupKind, key: impl Into<String>) -> Self {
        CompassError::NotFound {
            kind,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CompassError::NotFound { .. })
    }
}

pub type CompassResult<T> = std::result::Result<T, CompassError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_table_and_key() {
        let err = CompassError::not_found(LookupKind::Column, "Hierarchy");
        assert_eq!(err.to_string(), "unknown column key: \"Hierarchy\"");
        assert!(err.is_not_found());
    }
}
