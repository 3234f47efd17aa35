//! Application-level errors

use thiserror::Error;

use crate::exitcode;

/// Failures that can escape the interactive layer.
///
/// Invalid input and user cancellation are handled inside the prompt
/// loop and never become errors; only a broken console or unusable
/// configuration does.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("console I/O failed: {context}")]
    Console {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Wrap a console failure with context.
    pub fn console(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Console {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApplicationError::Console { .. } => exitcode::IOERR,
            ApplicationError::Config { .. } => exitcode::CONFIG,
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
