//! Settings error types.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or write persisted settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// File I/O error.
    #[error("Failed to {operation} settings file: {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be encoded as TOML.
    #[error("Failed to serialize settings")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    /// Settings file exists but is not valid TOML for this schema.
    #[error("Failed to parse settings file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SettingsError {
    /// Whether the error only means that nothing has been saved yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let missing = SettingsError::Io {
            operation: "read",
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.is_not_found());
        assert_eq!(
            missing.to_string(),
            "Failed to read settings file: settings.toml"
        );

        let denied = SettingsError::Io {
            operation: "write",
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_not_found());
    }
}
