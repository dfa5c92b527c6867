//! Configuration errors.
//!
//! Every rejected update leaves the engine exactly as it was, so callers can
//! show the message and keep running.

use std::fmt;

/// Why a configuration update was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter outside its valid domain (distances, forces, color
    /// indices, render size, ...).
    OutOfRange {
        field: &'static str,
        reason: String,
    },
    /// More particles requested than the store was allocated for.
    CapacityExceeded { requested: usize, capacity: usize },
    /// A color identifier that is not `#rgb` / `#rrggbb`.
    InvalidColor(String),
    /// A settings blob that could not be parsed.
    Malformed(String),
    /// The settings store refused a write.
    Storage(String),
}

impl ConfigError {
    pub(crate) fn out_of_range(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::OutOfRange {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange { field, reason } => {
                write!(f, "{} out of range: {}", field, reason)
            }
            ConfigError::CapacityExceeded { requested, capacity } => write!(
                f,
                "particle count {} exceeds capacity {}",
                requested, capacity
            ),
            ConfigError::InvalidColor(color) => {
                write!(f, "invalid color {:?}, expected #rgb or #rrggbb", color)
            }
            ConfigError::Malformed(msg) => write!(f, "malformed settings: {}", msg),
            ConfigError::Storage(msg) => write!(f, "could not store settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ConfigError::out_of_range("minDist", "10 must be less than maxDist 5");
        assert_eq!(
            err.to_string(),
            "minDist out of range: 10 must be less than maxDist 5"
        );

        let err = ConfigError::CapacityExceeded {
            requested: 5000,
            capacity: 4096,
        };
        assert_eq!(err.to_string(), "particle count 5000 exceeds capacity 4096");
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: ConfigError = serde_json::from_str::<u32>("{").unwrap_err().into();
        assert!(matches!(err, ConfigError::Malformed(_)));
    }
}
