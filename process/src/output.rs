//! # Output
//!
//! Module dedicated to command output. It only exposes an [`Output`]
//! struct, a wrapper around the raw standard output and standard
//! error of a command.

/// Wrapper around command output.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Output {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Output {
    /// Reads the standard output as string lossy.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Reads the standard error as string lossy.
    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// Returns `true` if either the standard output or the standard
    /// error contains the given pattern.
    pub fn contains(&self, pattern: &str) -> bool {
        self.to_string_lossy().contains(pattern) || self.stderr_lossy().contains(pattern)
    }
}

impl From<std::process::Output> for Output {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}
