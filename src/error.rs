//! Error types for Nanny operations.
//!
//! This module defines [`NannyError`], the error type used throughout the
//! application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing or malformed arguments are [`NannyError::Usage`] (exit code 1)
//! - Unusable standard streams in terminal mode are fatal and carry their
//!   own exit codes
//! - Unreadable capability sources and ledger files are NOT errors; the
//!   probe and the ledger degrade to "unsupported" / "not yet consented"

use thiserror::Error;

use crate::advisory::exit;

/// Core error type for Nanny operations.
#[derive(Debug, Error)]
pub enum NannyError {
    /// Missing or invalid invocation parameters.
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Standard output could not be opened for the terminal backend.
    #[error("Standard output is not available")]
    StdoutUnavailable,

    /// Standard input could not be opened for the terminal backend.
    #[error("Standard input is not available")]
    StdinUnavailable,

    /// No graphical dialog helper could be run.
    #[error("Dialog helper unavailable: {message}")]
    DialogUnavailable { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl NannyError {
    /// Create a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::StdoutUnavailable => exit::STDOUT_UNAVAILABLE,
            Self::StdinUnavailable => exit::STDIN_UNAVAILABLE,
            Self::Usage { .. } | Self::DialogUnavailable { .. } | Self::Io(_) | Self::Other(_) => {
                exit::USAGE
            }
        }
    }
}

/// Result type alias for Nanny operations.
pub type Result<T> = std::result::Result<T, NannyError>;
