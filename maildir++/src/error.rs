use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find maildir at {0:?}")]
    MissingRootDirError(PathBuf),
    #[error("cannot find {1} folder in maildir {0:?}")]
    MissingSubfolderError(PathBuf, &'static str),
    #[error("cannot read maildir folder {1:?}")]
    ReadSubfolderError(#[source] io::Error, PathBuf),

    #[error(transparent)]
    IoError(#[from] io::Error),
}

pub type Result<T> = result::Result<T, Error>;
