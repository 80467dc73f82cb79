//! Module dedicated to the task collector.

use tracing::debug;

use crate::{Result, TaskCounts, TaskToolClient};

/// The task collector.
///
/// The collector keeps no state between polls: counts are computed
/// from scratch by the client every time.
#[derive(Debug)]
pub struct TaskCollector<C> {
    client: C,
}

impl<C: TaskToolClient> TaskCollector<C> {
    /// Probes the client before building the collector. A tool that
    /// cannot be invoked makes the collector fail.
    pub async fn new(client: C) -> Result<Self> {
        client.probe().await?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn task_counts(&self) -> Result<TaskCounts> {
        let counts = self.client.stats().await?;
        debug!(?counts, "task counts");
        Ok(counts)
    }
}
