use std::{num::ParseIntError, result};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("taskstatus: cannot execute {1}")]
    ToolNotFound(#[source] process::Error, String),
    #[error("taskstatus: failed to execute {1}")]
    ToolInvocationError(#[source] InvocationError, String),

    #[error("taskstatus: {0}")]
    ConfigError(#[from] status::Error),
}

/// The reason why a tool invocation failed.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error(transparent)]
    ProcessError(#[from] process::Error),
    #[error("cannot find token {0} of output {1:?}")]
    MissingTokenError(String, String),
    #[error("cannot parse token {1:?} as integer")]
    ParseCountError(#[source] ParseIntError, String),
}
