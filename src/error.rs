//! Error types of the driver side of the crate. The engine itself never fails.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading a pattern file or writing a frame failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A pattern file could not be read.
    #[error("cannot read pattern {path:?}: {source}")]
    Pattern {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A flag was given without its value.
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument {0:?}")]
    UnknownArgument(String),

    /// The Ctrl-C handler could not be installed.
    #[error("cannot install interrupt handler: {0}")]
    Interrupt(#[from] ctrlc::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
