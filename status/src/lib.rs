#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
//! Rust library shared by status bar collectors.
//!
//! A collector reads its own section of a shared INI configuration
//! file (see [`ConfigFile`]), computes a small result on each poll,
//! then hands a [`StatusResponse`] back to the host status bar.

pub mod config;
mod error;
pub mod expand;
pub mod response;

#[doc(inline)]
pub use crate::{
    config::{CollectorConfig, ConfigFile, Section},
    error::{Error, Result},
    response::{Block, Color, StatusResponse},
};
