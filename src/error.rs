//! Error types and handling for the `CityTour` application

use thiserror::Error;

/// Main error type for the `CityTour` application
#[derive(Error, Debug)]
pub enum TourError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog data that breaks the data-model invariants
    #[error("Invalid catalog data: {message}")]
    Validation { message: String },

    /// Navigation action that the current screen does not offer
    #[error("Cannot {action} from {screen}")]
    InvalidTransition { action: String, screen: String },

    /// Route path that does not name a screen
    #[error("Invalid route '{route}': {reason}")]
    InvalidRoute { route: String, reason: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TourError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_transition(action: impl ToString, screen: impl ToString) -> Self {
        Self::InvalidTransition {
            action: action.to_string(),
            screen: screen.to_string(),
        }
    }

    pub fn invalid_route<R: Into<String>, S: Into<String>>(route: R, reason: S) -> Self {
        Self::InvalidRoute {
            route: route.into(),
            reason: reason.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TourError::Validation { message } => format!("The tour data is broken: {message}"),
            TourError::InvalidTransition { action, .. } => {
                format!("You can't {action} here. Type 'help' to see what you can do.")
            }
            TourError::InvalidRoute { route, .. } => format!("No such screen: {route}"),
            TourError::Io { .. } => {
                "Terminal I/O failed. Please check your input and output streams.".to_string()
            }
            TourError::General { message } => message.clone(),
        }
    }
}
