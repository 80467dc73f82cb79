//! Module dedicated to the mailboxes watched by the collector.

use std::{
    fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use maildirpp::Maildir;
use tracing::debug;

use crate::{mbox::Mbox, Error, Result};

/// An opaque token representing the contents of a mailbox.
///
/// Two equal fingerprints mean the mailbox did not change, so its
/// unread count does not need to be computed again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Fingerprint {
    /// Sorted message file paths of a Maildir, across `new` and
    /// `cur`. Flag changes rename files, so they change the listing
    /// too.
    Listing(Vec<PathBuf>),

    /// Size and modification time of an mbox file.
    Stat {
        len: u64,
        modified: Option<SystemTime>,
    },
}

/// A mailbox, in one of the supported formats.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mailbox {
    Maildir(Maildir),
    Mbox(Mbox),
}

impl Mailbox {
    /// Opens the mailbox at the given path.
    ///
    /// Regular files are opened as mbox, anything else must be a
    /// Maildir containing at least a `new` folder.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if path.is_file() {
            debug!(?path, "opening mbox");
            return Mbox::open(path).map(Self::Mbox);
        }

        debug!(?path, "opening maildir");
        let mdir = Maildir::from(path);
        mdir.check()
            .map_err(|err| Error::InvalidMailboxPath(mdir.path().to_owned(), err.to_string()))?;

        Ok(Self::Maildir(mdir))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Maildir(mdir) => mdir.path(),
            Self::Mbox(mbox) => mbox.path(),
        }
    }

    /// Computes the current fingerprint of the mailbox. This is
    /// cheaper than counting unread messages: message contents are
    /// never read.
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        match self {
            Self::Maildir(mdir) => {
                let mut paths = mdir
                    .list()
                    .map(|entry| entry.map(|entry| entry.path().to_owned()))
                    .collect::<maildirpp::Result<Vec<_>>>()
                    .map_err(|err| Error::ReadMaildirError(err, mdir.path().to_owned()))?;
                paths.sort();
                Ok(Fingerprint::Listing(paths))
            }
            Self::Mbox(mbox) => {
                let meta = fs::metadata(mbox.path())
                    .map_err(|err| Error::ReadMailboxError(err, mbox.path().to_owned()))?;
                Ok(Fingerprint::Stat {
                    len: meta.len(),
                    modified: meta.modified().ok(),
                })
            }
        }
    }

    /// Counts unread messages.
    ///
    /// Read messages are moved out of the Maildir `new` folder, so
    /// the files it contains are the unread ones. Mbox messages are
    /// unread as long as they lack the read flag.
    pub fn count_unread(&self) -> Result<usize> {
        match self {
            Self::Maildir(mdir) => mdir
                .count_new()
                .map_err(|err| Error::ReadMaildirError(err, mdir.path().to_owned())),
            Self::Mbox(mbox) => mbox.count_unread(),
        }
    }
}
