//! Error handling types

use crate::value_objects::Phase;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for injbench
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid or incomplete configuration: bad plan values, unknown or
    /// duplicate subjects, or a subject whose wiring cannot produce the fixture
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A subject failed to resolve the root entity from its container
    #[error("Resolution error in subject '{subject}': {message}")]
    Resolution {
        /// Label of the failing subject
        subject: String,
        /// Description reported by the DI mechanism
        message: String,
    },

    /// A benchmark session was aborted
    #[error("Benchmark aborted: subject '{subject}' failed during {phase}: {source}")]
    Session {
        /// Label of the failing subject
        subject: String,
        /// Protocol phase in which the failure happened
        phase: Phase,
        /// The underlying failure
        #[source]
        source: Box<Error>,
    },
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Benchmark error creation methods
impl Error {
    /// Create a resolution error for a subject
    pub fn resolution<S: Into<String>, M: Into<String>>(subject: S, message: M) -> Self {
        Self::Resolution {
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Wrap a failure with the subject and phase it happened in
    pub fn session<S: Into<String>>(subject: S, phase: Phase, source: Error) -> Self {
        Self::Session {
            subject: subject.into(),
            phase,
            source: Box::new(source),
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Classification
impl Error {
    /// True for configuration errors, including session failures caused by one
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Configuration { .. } => true,
            Self::Session { source, .. } => source.is_configuration(),
            _ => false,
        }
    }

    /// Subject and phase of an aborted session
    pub fn failed_at(&self) -> Option<(&str, Phase)> {
        match self {
            Self::Session { subject, phase, .. } => Some((subject.as_str(), *phase)),
            _ => None,
        }
    }
}
