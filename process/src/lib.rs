#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
//! Rust library to run external commands and capture their output.
//!
//! The core concept of this library is to simplify the execution of
//! commands, following these rules:
//!
//! 1. Commands are executed asynchronously, using the [tokio] async
//! runtime.
//!
//! 2. Commands are spawned directly, without going through a shell,
//! so a missing program is reported as a spawn error rather than as
//! a shell exit code.
//!
//! 3. Commands can be given a timeout, after which the child process
//! is killed.

mod command;
mod error;
mod output;

#[doc(inline)]
pub use crate::{
    command::Command,
    error::{Error, Result},
    output::Output,
};
