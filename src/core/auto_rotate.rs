//! Auto-rotation timer
//!
//! The timer runs as a tokio task that only sends [`AutoRotateTick`]s; the
//! host loop hands them to the paging controller. Each timer carries a
//! generation number so a tick that was already queued when its timer was
//! stopped can be recognised and dropped.

use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// One auto-rotation interval elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRotateTick {
    pub generation: u64,
}

/// Running auto-rotation task. Dropping the handle cancels it.
#[derive(Debug)]
pub struct AutoRotateTimer {
    generation: u64,
    task: JoinHandle<()>,
}

impl AutoRotateTimer {
    /// Spawn a timer that ticks every `delay`, first tick one full delay
    /// from now. Returns `None` outside a tokio runtime.
    pub fn spawn(
        generation: u64,
        delay: Duration,
        ticks: UnboundedSender<AutoRotateTick>,
    ) -> Option<Self> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let task = runtime.spawn(async move {
            let start = tokio::time::Instant::now() + delay;
            let mut interval = tokio::time::interval_at(start, delay);
            loop {
                interval.tick().await;
                if ticks.send(AutoRotateTick { generation }).is_err() {
                    tracing::debug!("Auto-rotate receiver closed, stopping timer {}", generation);
                    break;
                }
            }
        });

        Some(Self { generation, task })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for AutoRotateTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
