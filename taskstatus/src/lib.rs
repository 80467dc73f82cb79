#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
//! Status bar collector reporting open and overdue tasks.
//!
//! Counts are obtained from an external task tool (Taskwarrior by
//! default) through the [`TaskToolClient`] adapter.

mod collector;
pub mod config;
mod error;
mod response;
pub mod tool;

#[doc(inline)]
pub use crate::{
    collector::TaskCollector,
    config::{TaskConfig, NAME},
    error::{Error, InvocationError, Result},
    response::render,
    tool::{TaskCounts, TaskToolClient, Taskwarrior},
};
