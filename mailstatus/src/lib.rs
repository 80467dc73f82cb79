#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
//! Status bar collector counting unread emails.
//!
//! The collector watches a list of Maildir and mbox mailboxes and
//! sums their unread messages. Each mailbox is fingerprinted on every
//! poll, and only scanned again when its fingerprint changed.

mod collector;
pub mod config;
mod error;
pub mod mailbox;
pub mod mbox;
mod response;

#[doc(inline)]
pub use crate::{
    collector::{MailCollector, Unread},
    config::{MailConfig, NAME},
    error::{Error, Result},
    response::render,
};
