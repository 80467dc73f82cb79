mod error;

use std::{
    fs::{self, ReadDir},
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

#[doc(inline)]
pub use crate::error::{Error, Result};

#[cfg(unix)]
const INFORMATIONAL_SUFFIX_SEPARATOR: &str = ":";
#[cfg(windows)]
const INFORMATIONAL_SUFFIX_SEPARATOR: &str = ";";

/// This struct represents a single email message inside the
/// maildir. Creation of the struct does not read the content of the
/// email file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MailEntry {
    id: String,
    flags: String,
    path: PathBuf,
}

impl MailEntry {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn is_flagged(&self) -> bool {
        self.flags.contains('F')
    }

    pub fn is_seen(&self) -> bool {
        self.flags.contains('S')
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Subfolder {
    New,
    Cur,
}

impl Subfolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Cur => "cur",
        }
    }
}

/// An iterator over the email messages in a particular maildir
/// subfolder (either `cur` or `new`). This iterator produces a
/// `Result<MailEntry>`, which can be an `Err` if an error was
/// encountered while trying to read file system properties on a
/// particular entry, or if the subfolder itself cannot be read. A
/// missing `cur` subfolder is considered empty. Files starting with
/// a dot (.) character and entries that are not regular files (after
/// following symlinks) are ignored.
pub struct MailEntries {
    path: PathBuf,
    subfolder: Subfolder,
    readdir: Option<ReadDir>,
    opened: bool,
}

impl MailEntries {
    fn new(path: PathBuf, subfolder: Subfolder) -> MailEntries {
        MailEntries {
            path,
            subfolder,
            readdir: None,
            opened: false,
        }
    }

    fn parse_entry(&self, entry: fs::DirEntry) -> Result<Option<MailEntry>> {
        let filename = entry.file_name().to_string_lossy().to_string();
        if filename.starts_with('.') {
            return Ok(None);
        }

        let file_type = entry.file_type()?;
        let is_file = if file_type.is_symlink() {
            fs::metadata(entry.path()).map(|meta| meta.is_file()).unwrap_or(false)
        } else {
            file_type.is_file()
        };

        if !is_file {
            debug!(path = ?entry.path(), "skipping non-file maildir entry");
            return Ok(None);
        }

        let (id, flags) = match self.subfolder {
            Subfolder::New => (filename.as_str(), ""),
            Subfolder::Cur => {
                let delim = format!("{}2,", INFORMATIONAL_SUFFIX_SEPARATOR);
                filename
                    .split_once(&delim)
                    .unwrap_or((filename.as_str(), ""))
            }
        };

        Ok(Some(MailEntry {
            id: id.to_owned(),
            flags: flags.to_owned(),
            path: entry.path(),
        }))
    }
}

impl Iterator for MailEntries {
    type Item = Result<MailEntry>;

    fn next(&mut self) -> Option<Result<MailEntry>> {
        if !self.opened {
            self.opened = true;
            let dir_path = self.path.join(self.subfolder.as_str());
            match fs::read_dir(&dir_path) {
                Ok(readdir) => self.readdir = Some(readdir),
                Err(err)
                    if self.subfolder == Subfolder::Cur
                        && err.kind() == io::ErrorKind::NotFound =>
                {
                    debug!(path = ?dir_path, "no cur folder, skipping it");
                    return None;
                }
                Err(err) => return Some(Err(Error::ReadSubfolderError(err, dir_path))),
            }
        }

        loop {
            let dir_entry = self.readdir.as_mut()?.next()?;
            let result = dir_entry
                .map_err(Error::from)
                .and_then(|entry| self.parse_entry(entry));

            return match result {
                Err(e) => Some(Err(e)),
                Ok(None) => continue,
                Ok(Some(v)) => Some(Ok(v)),
            };
        }
    }
}

/// The main entry point for this library. This struct can be
/// instantiated from a path using the `from` implementations.
/// The path passed in to the `from` should be the root of the
/// maildir (the folder containing `cur`, `new`, and `tmp`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Maildir {
    path: PathBuf,
}

impl Maildir {
    /// Returns the path of the maildir base folder.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks that the maildir exists and that its `new` folder can
    /// be read. The `cur` folder is optional.
    pub fn check(&self) -> Result<()> {
        if !self.path.is_dir() {
            return Err(Error::MissingRootDirError(self.path.clone()));
        }

        let new = self.path.join(Subfolder::New.as_str());
        if !new.is_dir() {
            return Err(Error::MissingSubfolderError(self.path.clone(), "new"));
        }

        fs::read_dir(&new).map_err(|err| Error::ReadSubfolderError(err, new))?;

        Ok(())
    }

    /// Returns the number of messages found inside the `new`
    /// maildir folder.
    pub fn count_new(&self) -> Result<usize> {
        self.list_new().try_fold(0, |count, entry| entry.map(|_| count + 1))
    }

    /// Returns an iterator over the messages inside the `new`
    /// maildir folder. The order of messages in the iterator
    /// is not specified, and is not guaranteed to be stable
    /// over multiple invocations of this method.
    pub fn list_new(&self) -> MailEntries {
        MailEntries::new(self.path.clone(), Subfolder::New)
    }

    /// Returns an iterator over the messages inside the `cur`
    /// maildir folder. The order of messages in the iterator
    /// is not specified, and is not guaranteed to be stable
    /// over multiple invocations of this method.
    pub fn list_cur(&self) -> MailEntries {
        MailEntries::new(self.path.clone(), Subfolder::Cur)
    }

    /// Returns an iterator over the messages of both `new` and `cur`
    /// maildir folders.
    pub fn list(&self) -> impl Iterator<Item = Result<MailEntry>> {
        self.list_new().chain(self.list_cur())
    }
}

impl From<PathBuf> for Maildir {
    fn from(p: PathBuf) -> Maildir {
        Maildir { path: p }
    }
}

impl<'a> From<&'a Path> for Maildir {
    fn from(p: &Path) -> Maildir {
        Maildir::from(p.to_owned())
    }
}
