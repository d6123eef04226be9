//! Navigation error types.
//!
//! Every fallible navigation operation returns a [`NavigationError`]. The core never
//! retries; errors propagate to the host unchanged.

use thiserror::Error;

/// Direction of a journal move, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalDirection {
    Back,
    Forward,
}

impl std::fmt::Display for JournalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Back => f.write_str("back"),
            Self::Forward => f.write_str("forward"),
        }
    }
}

/// Navigation operation error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    /// No view is registered for navigation under this name.
    #[error("No view registered for navigation target '{destination}'")]
    ViewNotRegistered { destination: String },

    /// The named region does not exist.
    #[error("Region not found: {region}")]
    RegionNotFound { region: String },

    /// A region with the same name was already added.
    #[error("Region already exists: {region}")]
    DuplicateRegion { region: String },

    /// A command was executed while its guard reported it unavailable.
    #[error("Command '{command}' is not available")]
    CommandUnavailable { command: &'static str },

    /// A screen action ran while no navigation service was attached.
    #[error("Screen is not attached to a navigation service")]
    NotAttached,

    /// The navigation service behind a journal or context has been dropped.
    #[error("Navigation service is no longer available")]
    ServiceUnavailable,

    /// The journal has no entry in the requested direction.
    #[error("Journal has no entry to go {direction} to")]
    JournalExhausted { direction: JournalDirection },
}

/// Result alias for navigation operations.
pub type Result<T> = std::result::Result<T, NavigationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = NavigationError::ViewNotRegistered {
            destination: "InitView".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No view registered for navigation target 'InitView'"
        );

        let err = NavigationError::JournalExhausted {
            direction: JournalDirection::Forward,
        };
        assert_eq!(err.to_string(), "Journal has no entry to go forward to");
    }
}
