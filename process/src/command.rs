use std::{fmt, process::Stdio, time::Duration};

use tokio::process::Command as AsyncCommand;
use tracing::{debug, info};

use crate::{Error, Output, Result};

/// The command structure.
///
/// Represents a program with its arguments. The program is spawned
/// directly, its standard input is closed and both standard output
/// and standard error are captured.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Command {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl Command {
    pub fn new(program: impl ToString) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            timeout: None,
        }
    }

    pub fn arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl ToString>) -> Self {
        self.args.extend(args.into_iter().map(|arg| arg.to_string()));
        self
    }

    /// Kills the command if it does not exit within the given
    /// duration.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Runs the command and waits for its output.
    ///
    /// A non-zero exit status is an error, which still carries the
    /// captured output so callers can inspect it.
    pub async fn run(&self) -> Result<Output> {
        info!(cmd = %self, "run command");

        let child = AsyncCommand::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|err| Error::SpawnCommandError(err, self.to_string()))?;

        let output = match self.timeout {
            None => child.wait_with_output().await,
            Some(timeout) => tokio::time::timeout(timeout, child.wait_with_output())
                .await
                .map_err(|_| Error::TimeoutError(self.to_string(), timeout))?,
        };

        let output = output.map_err(|err| Error::GetOutputError(err, self.to_string()))?;

        let code = output
            .status
            .code()
            .ok_or_else(|| Error::GetExitStatusCodeNotAvailableError(self.to_string()))?;

        let output = Output::from(output);

        if code == 0 {
            debug!(code, "command gracefully exited");
        } else {
            let err = output.stderr_lossy();
            debug!(code, err, "command ungracefully exited");
            return Err(Error::GetExitStatusCodeNonZeroError(
                self.to_string(),
                code,
                output,
            ));
        }

        Ok(output)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;

        for arg in &self.args {
            write!(f, " {arg}")?;
        }

        Ok(())
    }
}
