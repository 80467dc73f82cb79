//! # Error
//!
//! Module dedicated to process errors. It contains an [`Error`] enum
//! based on [`thiserror::Error`] and a type alias [`Result`].

use std::{io, time::Duration};

use thiserror::Error;

use crate::Output;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot spawn command {1}")]
    SpawnCommandError(#[source] io::Error, String),
    #[error("cannot get output of command {1}")]
    GetOutputError(#[source] io::Error, String),
    #[error("cannot get exit status code of command: {0}")]
    GetExitStatusCodeNotAvailableError(String),
    #[error("command {0} returned non-zero exit status code {1}: {}", .2.stderr_lossy())]
    GetExitStatusCodeNonZeroError(String, i32, Output),
    #[error("command {0} did not finish within {1:?}")]
    TimeoutError(String, Duration),
}
