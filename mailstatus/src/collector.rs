//! Module dedicated to the unread mail collector.

use std::path::Path;

use tracing::{debug, info};

use crate::{
    mailbox::{Fingerprint, Mailbox},
    MailConfig, Result,
};

/// The result of a poll.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unread {
    /// No mailbox is configured at all.
    NoMailbox,

    /// The total number of unread messages.
    Count(usize),
}

#[derive(Debug)]
struct MailboxState {
    mailbox: Mailbox,
    last_fingerprint: Option<Fingerprint>,
    unread: usize,
}

/// The unread mail collector.
///
/// Keeps the last fingerprint and unread count of each mailbox, so
/// that unchanged mailboxes are not scanned again.
#[derive(Debug, Default)]
pub struct MailCollector {
    mailboxes: Vec<MailboxState>,
    scans: usize,
}

impl MailCollector {
    /// Opens all the given mailboxes. A single invalid mailbox makes
    /// the whole collector fail.
    pub fn new<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let mailboxes = paths
            .into_iter()
            .map(|path| {
                Ok(MailboxState {
                    mailbox: Mailbox::open(path.as_ref())?,
                    last_fingerprint: None,
                    unread: 0,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!("watching {} mailboxes", mailboxes.len());

        Ok(Self {
            mailboxes,
            scans: 0,
        })
    }

    pub fn from_config(config: &MailConfig) -> Result<Self> {
        Self::new(&config.mailboxes)
    }

    pub fn mailboxes(&self) -> impl Iterator<Item = &Path> {
        self.mailboxes.iter().map(|state| state.mailbox.path())
    }

    /// Returns how many times a mailbox was scanned since the
    /// collector was created.
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// Returns the total number of unread messages across all
    /// mailboxes.
    pub fn unread_count(&mut self) -> Result<Unread> {
        if self.mailboxes.is_empty() {
            return Ok(Unread::NoMailbox);
        }

        let mut total = 0;

        for state in &mut self.mailboxes {
            let fingerprint = state.mailbox.fingerprint()?;

            if state.last_fingerprint.as_ref() == Some(&fingerprint) {
                debug!(path = ?state.mailbox.path(), unread = state.unread, "mailbox unchanged");
            } else {
                state.unread = state.mailbox.count_unread()?;
                state.last_fingerprint = Some(fingerprint);
                self.scans += 1;
                debug!(path = ?state.mailbox.path(), unread = state.unread, "mailbox scanned");
            }

            total += state.unread;
        }

        Ok(Unread::Count(total))
    }
}
