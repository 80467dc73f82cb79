//! Module dedicated to mbox mailboxes.
//!
//! An mbox is a single file where each message starts with a `From `
//! separator line. Read messages carry the `R` flag in their
//! `Status` (or `X-Status`) header.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{Error, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mbox {
    path: PathBuf,
}

impl Mbox {
    /// Opens the mbox at the given path. The file must be readable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Err(err) = File::open(&path) {
            return Err(Error::InvalidMailboxPath(path, err.to_string()));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of messages without the read flag.
    pub fn count_unread(&self) -> Result<usize> {
        let file =
            File::open(&self.path).map_err(|err| Error::ReadMailboxError(err, self.path.clone()))?;

        count_unread(file).map_err(|err| Error::ReadMailboxError(err, self.path.clone()))
    }
}

fn count_unread(reader: impl Read) -> std::io::Result<usize> {
    let mut unread = 0;
    let mut messages = 0;
    let mut in_headers = false;
    let mut seen = false;
    let mut prev_blank = true;

    for line in BufReader::new(reader).split(b'\n') {
        let line = line?;
        let line = line.strip_suffix(b"\r").unwrap_or(&line[..]);

        if prev_blank && line.starts_with(b"From ") {
            if messages > 0 && !seen {
                unread += 1;
            }

            messages += 1;
            in_headers = true;
            seen = false;
            prev_blank = false;
            continue;
        }

        if in_headers {
            if line.is_empty() {
                in_headers = false;
            } else if is_read_status(line) {
                seen = true;
            }
        }

        prev_blank = line.is_empty();
    }

    if messages > 0 && !seen {
        unread += 1;
    }

    debug!(messages, unread, "scanned mbox");
    Ok(unread)
}

fn is_read_status(header: &[u8]) -> bool {
    let header = String::from_utf8_lossy(header);

    let Some((name, value)) = header.split_once(':') else {
        return false;
    };

    let name = name.trim();
    let is_status = name.eq_ignore_ascii_case("status") || name.eq_ignore_ascii_case("x-status");

    is_status && value.contains('R')
}

#[cfg(test)]
mod tests {
    use super::count_unread;

    #[test]
    fn count_messages_without_read_flag() {
        let mbox = concat!(
            "From alice@localhost Mon Jan  1 00:00:00 2024\n",
            "Subject: read\n",
            "Status: RO\n",
            "\n",
            "body\n",
            "\n",
            "From bob@localhost Mon Jan  1 00:00:00 2024\n",
            "Subject: old but unread\n",
            "Status: O\n",
            "\n",
            "body\n",
            "\n",
            "From carol@localhost Mon Jan  1 00:00:00 2024\r\n",
            "Subject: new\r\n",
            "\r\n",
            "Status: R in body does not count\r\n",
        );

        assert_eq!(count_unread(mbox.as_bytes()).unwrap(), 2);
    }

    #[test]
    fn count_x_status() {
        let mbox = "From a\nX-Status: AR\n\nbody\n";
        assert_eq!(count_unread(mbox.as_bytes()).unwrap(), 0);
    }

    #[test]
    fn empty_mbox() {
        assert_eq!(count_unread("".as_bytes()).unwrap(), 0);
    }
}
