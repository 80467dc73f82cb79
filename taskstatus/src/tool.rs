//! Module dedicated to the task tool adapter.
//!
//! The collector only talks to the task tool through the
//! [`TaskToolClient`] trait. The [`Taskwarrior`] client parses the
//! textual output of the `task` CLI at fixed token positions, which
//! ties it to the current output format of Taskwarrior.

use std::time::Duration;

use async_trait::async_trait;
use process::{Command, Output};
use tracing::debug;

use crate::{error::InvocationError, Error, Result, TaskConfig};

/// Substring printed by `task overdue` when no task is overdue.
pub const NO_MATCHES: &str = "No matches";

/// The number of open and overdue tasks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TaskCounts {
    pub open: u64,
    pub overdue: u64,
}

/// The task tool client.
#[async_trait]
pub trait TaskToolClient: Send + Sync {
    /// Checks that the tool can be invoked at all.
    async fn probe(&self) -> Result<()>;

    /// Returns the current task counts.
    async fn stats(&self) -> Result<TaskCounts>;
}

/// The Taskwarrior CLI client.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Taskwarrior {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl Taskwarrior {
    pub fn new(program: impl ToString, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            timeout,
        }
    }

    pub fn from_config(config: &TaskConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            timeout: config.timeout,
        }
    }

    fn command(&self, subcommand: &str) -> Command {
        Command::new(&self.program)
            .args(&self.args)
            .arg(subcommand)
            .with_timeout(self.timeout)
    }

    async fn run(&self, cmd: &Command) -> Result<Output> {
        cmd.run()
            .await
            .map_err(|err| Error::ToolInvocationError(err.into(), cmd.to_string()))
    }
}

#[async_trait]
impl TaskToolClient for Taskwarrior {
    async fn probe(&self) -> Result<()> {
        let cmd = self.command("--version");

        match cmd.run().await {
            Ok(output) => {
                debug!(version = output.to_string_lossy().trim(), "found task tool");
                Ok(())
            }
            Err(err @ process::Error::SpawnCommandError(..)) => {
                Err(Error::ToolNotFound(err, cmd.to_string()))
            }
            Err(err) => Err(Error::ToolInvocationError(err.into(), cmd.to_string())),
        }
    }

    async fn stats(&self) -> Result<TaskCounts> {
        let cmd = self.command("stats");
        let output = self.run(&cmd).await?;
        let open = parse_stats(&output.to_string_lossy())
            .map_err(|err| Error::ToolInvocationError(err, cmd.to_string()))?;

        let cmd = self.command("overdue");
        let overdue = match cmd.run().await {
            Ok(output) => parse_overdue(&output.to_string_lossy()),
            Err(process::Error::GetExitStatusCodeNonZeroError(_, code, output))
                if output.contains(NO_MATCHES) =>
            {
                debug!(code, "no overdue task");
                Ok(0)
            }
            Err(err) => Err(err.into()),
        }
        .map_err(|err| Error::ToolInvocationError(err, cmd.to_string()))?;

        Ok(TaskCounts { open, overdue })
    }
}

/// Extracts the number of pending tasks from the output of `task
/// stats`: the 6th whitespace-separated token.
pub fn parse_stats(output: &str) -> std::result::Result<u64, InvocationError> {
    let token = output
        .split_whitespace()
        .nth(5)
        .ok_or_else(|| InvocationError::MissingTokenError("6".into(), output.to_owned()))?;

    parse_count(token)
}

/// Extracts the number of overdue tasks from the output of `task
/// overdue`: the second-to-last whitespace-separated token.
pub fn parse_overdue(output: &str) -> std::result::Result<u64, InvocationError> {
    let tokens: Vec<&str> = output.split_whitespace().collect();
    let token = tokens
        .len()
        .checked_sub(2)
        .map(|i| tokens[i])
        .ok_or_else(|| InvocationError::MissingTokenError("-2".into(), output.to_owned()))?;

    parse_count(token)
}

fn parse_count(token: &str) -> std::result::Result<u64, InvocationError> {
    token
        .parse()
        .map_err(|err| InvocationError::ParseCountError(err, token.to_owned()))
}
