//! Module dedicated to the `[mailstatus]` configuration section.

use std::path::PathBuf;

use status::{expand, CollectorConfig, ConfigFile};

use crate::Result;

/// The name of the collector, also used as config section name.
pub const NAME: &str = "mailstatus";

pub const DEFAULT_TITLE: &str = "MAIL:";

/// The mail collector configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MailConfig {
    pub collector: CollectorConfig,

    /// The watched mailboxes, in order. Paths are shell-expanded,
    /// which means environment variables and tilde `~` are replaced
    /// by their values.
    pub mailboxes: Vec<PathBuf>,
}

impl MailConfig {
    /// Reads the `[mailstatus]` section. The `mailboxes` option is
    /// required, but may be empty.
    pub fn from_config_file(file: &ConfigFile) -> Result<Self> {
        let section = file.section(NAME)?;

        let mailboxes = section
            .words("mailboxes")?
            .into_iter()
            .map(expand::path)
            .collect();

        Ok(Self {
            collector: section.collector(DEFAULT_TITLE)?,
            mailboxes,
        })
    }
}
