//! Module dedicated to the `[taskstatus]` configuration section.

use std::time::Duration;

use status::{CollectorConfig, ConfigFile};

use crate::Result;

/// The name of the collector, also used as config section name.
pub const NAME: &str = "taskstatus";

pub const DEFAULT_TITLE: &str = "TASK:";

pub const DEFAULT_PROGRAM: &str = "task";

/// Seconds after which a tool invocation is killed.
pub const DEFAULT_TIMEOUT: u64 = 10;

/// The task collector configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TaskConfig {
    pub collector: CollectorConfig,

    /// The task tool program.
    pub program: String,

    /// Arguments passed to the program before the subcommand.
    pub args: Vec<String>,

    pub timeout: Duration,
}

impl TaskConfig {
    /// Reads the `[taskstatus]` section.
    ///
    /// The optional `command` option is the shell-quoted command line
    /// of the task tool, for example `task rc:~/.taskrc.work`.
    pub fn from_config_file(file: &ConfigFile) -> Result<Self> {
        let section = file.section(NAME)?;

        let (program, args) = match section.get("command") {
            None => (DEFAULT_PROGRAM.to_owned(), Vec::new()),
            Some(_) => {
                let mut words = section.words("command")?.into_iter();
                let program = words.next().ok_or_else(|| {
                    status::Error::ParseConfigOptionError(
                        NAME.to_owned(),
                        "command".to_owned(),
                        "empty command".to_owned(),
                    )
                })?;
                (program, words.collect())
            }
        };

        Ok(Self {
            collector: section.collector(DEFAULT_TITLE)?,
            program,
            args,
            timeout: Duration::from_secs(section.parse_or("timeout", DEFAULT_TIMEOUT)?),
        })
    }
}
