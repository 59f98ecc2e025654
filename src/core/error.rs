//! Configuration errors.
//!
//! The simulation itself never fails at runtime; a collision is a state
//! transition. Everything here is a precondition on the config or field that is
//! checked once, when the value is accepted.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field {width}x{height} has no area")]
    EmptyField { width: u32, height: u32 },

    #[error(
        "field height {height} is too short: pipes need at least {required} \
         (gap {gap} + 2 x min height {min_height})"
    )]
    FieldTooShort {
        height: u32,
        required: u32,
        gap: u32,
        min_height: u32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("pipe spawn cadence must be at least 1 frame")]
    ZeroCadence,

    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Read { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_too_short_message() {
        let err = ConfigError::FieldTooShort {
            height: 200,
            required: 220,
            gap: 100,
            min_height: 60,
        };
        let msg = err.to_string();
        assert!(msg.contains("200"));
        assert!(msg.contains("220"));
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let err: io::Error = ConfigError::ZeroCadence.into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let read = ConfigError::Read {
            path: PathBuf::from("/nope/config.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err: io::Error = read.into();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
