//! Module dedicated to the shared collector configuration.
//!
//! All collectors read the same INI file, each one from its own
//! section named after the collector:
//!
//! ```ini
//! [mailstatus]
//! mailboxes = ~/Mail/inbox "~/Mail/mailing lists"
//! title = MAIL:
//! order = 1
//! interval = 30
//!
//! [taskstatus]
//! interval = 60
//! ```
//!
//! A `[DEFAULT]` section provides fallback values for every other
//! section.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use ini::{Ini, ParseOption, Properties};
use tracing::{debug, warn};

use crate::{expand, Error, Result};

/// The config file used when none is given.
pub const DEFAULT_PATH: &str = "~/.i3/py3status/modules.ini";

const DEFAULT_SECTION: &str = "DEFAULT";

/// The greatest accepted `interval`, in seconds.
pub const MAX_INTERVAL: u64 = u32::MAX as u64;

/// The options shared by all collectors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CollectorConfig {
    /// The text displayed in front of the collector value.
    pub title: String,

    /// The position of the collector in the status bar.
    pub order: i64,

    /// The number of seconds the host can cache the response. `0`
    /// means no caching.
    pub interval: u64,
}

impl CollectorConfig {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            order: 0,
            interval: 0,
        }
    }
}

/// The parsed INI config file.
pub struct ConfigFile {
    path: PathBuf,
    ini: Ini,
}

impl ConfigFile {
    /// Returns the shell-expanded default config file path.
    pub fn default_path() -> PathBuf {
        expand::path(DEFAULT_PATH)
    }

    /// Reads and parses the config file at the given path.
    ///
    /// A missing file is not an error: it is considered empty, which
    /// makes any section lookup fail.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "reading config file");

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(?path, "config file not found, using empty config");
                String::new()
            }
            Err(err) => return Err(Error::ReadConfigError(err, path.to_owned())),
        };

        let ini = parse(&contents).map_err(|err| Error::ParseConfigError(err, path.to_owned()))?;

        Ok(Self {
            path: path.to_owned(),
            ini,
        })
    }

    /// Parses config file contents. The given path is only used for
    /// error reporting.
    pub fn from_contents(contents: &str, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_owned();
        let ini = parse(contents).map_err(|err| Error::ParseConfigError(err, path.clone()))?;
        Ok(Self { path, ini })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the section with the given name.
    pub fn section(&self, name: &str) -> Result<Section<'_>> {
        let props = self
            .ini
            .section(Some(name))
            .ok_or_else(|| Error::ConfigSectionMissing(name.to_owned(), self.path.clone()))?;

        Ok(Section {
            name: name.to_owned(),
            props,
            defaults: self.ini.section(Some(DEFAULT_SECTION)),
        })
    }
}

/// Quotes and backslashes are kept as they are: they belong to
/// values that are shell-lexed later on. Indented lines continue the
/// previous value.
fn parse(contents: &str) -> std::result::Result<Ini, ini::ParseError> {
    let opt = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };

    Ini::load_from_str_opt(contents, opt)
}

/// A section of the config file.
///
/// Option names are case-insensitive.
#[derive(Clone)]
pub struct Section<'a> {
    name: String,
    props: &'a Properties,
    defaults: Option<&'a Properties>,
}

impl<'a> Section<'a> {
    /// Returns the raw value of the given option, falling back to the
    /// `[DEFAULT]` section.
    pub fn get(&self, option: &str) -> Option<&'a str> {
        let find = |props: &'a Properties| {
            props
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(option))
                .map(|(_, val)| val.trim())
        };

        find(self.props).or_else(|| self.defaults.and_then(find))
    }

    /// Same as [`Section::get`], except that a missing option is an
    /// error.
    pub fn require(&self, option: &str) -> Result<&'a str> {
        self.get(option)
            .ok_or_else(|| Error::ConfigOptionMissing(self.name.clone(), option.to_owned()))
    }

    /// Parses the given option, or returns the default if the option
    /// is missing.
    pub fn parse_or<T>(&self, option: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(option) {
            None => Ok(default),
            Some(val) => val.parse().map_err(|err: T::Err| {
                Error::ParseConfigOptionError(self.name.clone(), option.to_owned(), err.to_string())
            }),
        }
    }

    /// Splits the given option into words, following shell quoting
    /// and escaping rules. A missing option is an error.
    pub fn words(&self, option: &str) -> Result<Vec<String>> {
        let val = self.require(option)?;

        shell_words::split(val).map_err(|err| {
            Error::ParseConfigOptionError(self.name.clone(), option.to_owned(), err.to_string())
        })
    }

    /// Reads the options shared by all collectors.
    pub fn collector(&self, default_title: &str) -> Result<CollectorConfig> {
        let defaults = CollectorConfig::new(default_title);

        let interval = self.parse_or("interval", defaults.interval)?;
        if interval > MAX_INTERVAL {
            return Err(Error::ParseConfigOptionError(
                self.name.clone(),
                "interval".into(),
                format!("must be at most {MAX_INTERVAL} seconds"),
            ));
        }

        let config = CollectorConfig {
            title: self.get("title").map(ToOwned::to_owned).unwrap_or(defaults.title),
            order: self.parse_or("order", defaults.order)?,
            interval,
        };

        debug!(section = %self.name, ?config, "collector config");
        Ok(config)
    }
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile").field("path", &self.path).finish()
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section").field("name", &self.name).finish()
    }
}
