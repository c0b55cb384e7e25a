//! Error taxonomy shared by all recipes

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CookbookError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("walk failed below {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("null element at position {0}")]
    NullElement(usize),

    #[error("entry '{entry}' does not contain separator '{separator}'")]
    MalformedEntry { entry: String, separator: String },

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("invalid range: {lower} > {upper}")]
    InvalidRange { lower: String, upper: String },

    #[error("overflow: {0}")]
    Overflow(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("rounding necessary: {p} / {q} is not exact")]
    RoundingNecessary { p: i32, q: i32 },

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("config error: {message}")]
    Config { message: String },
}

impl CookbookError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type CookbookResult<T> = Result<T, CookbookError>;
