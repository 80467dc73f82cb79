use std::{io, path::PathBuf, result};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("mailstatus: invalid mailbox {0:?}: {1}")]
    InvalidMailboxPath(PathBuf, String),
    #[error("mailstatus: cannot read mailbox {1:?}")]
    ReadMailboxError(#[source] io::Error, PathBuf),
    #[error("mailstatus: cannot read maildir {1:?}")]
    ReadMaildirError(#[source] maildirpp::Error, PathBuf),

    #[error("mailstatus: {0}")]
    ConfigError(#[from] status::Error),
}
