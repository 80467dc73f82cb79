//! # Error
//!
//! Module dedicated to configuration errors. It contains an
//! [`Error`] enum based on [`thiserror::Error`] and a type alias
//! [`Result`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find section [{0}] in config file {1:?}")]
    ConfigSectionMissing(String, PathBuf),
    #[error("cannot find option {1} in section [{0}]")]
    ConfigOptionMissing(String, String),
    #[error("cannot read config file {1:?}")]
    ReadConfigError(#[source] io::Error, PathBuf),
    #[error("cannot parse config file {1:?}")]
    ParseConfigError(#[source] ini::ParseError, PathBuf),
    #[error("cannot parse option {1} of section [{0}]: {2}")]
    ParseConfigOptionError(String, String, String),
}
