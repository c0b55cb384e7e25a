//! CLI-level errors (wraps library errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::errors::CookbookError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Cookbook(#[from] CookbookError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Cookbook(e) => match e {
                CookbookError::EmptySeparator => crate::exitcode::USAGE,
                CookbookError::Io { source, .. } if source.kind() == ErrorKind::NotFound => {
                    crate::exitcode::NOINPUT
                }
                CookbookError::Io { .. } | CookbookError::Walk { .. } => crate::exitcode::IOERR,
                CookbookError::Config { .. } => crate::exitcode::CONFIG,
                CookbookError::NullElement(_)
                | CookbookError::MalformedEntry { .. }
                | CookbookError::DuplicateKey(_)
                | CookbookError::InvalidRange { .. }
                | CookbookError::UnknownVariant(_) => crate::exitcode::DATAERR,
                CookbookError::Overflow(_)
                | CookbookError::DivisionByZero
                | CookbookError::RoundingNecessary { .. } => crate::exitcode::DATAERR,
                CookbookError::IllegalState(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}
