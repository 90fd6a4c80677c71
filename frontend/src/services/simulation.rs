//! Simulated upload progress.
//!
//! [`ProgressSchedule`] describes the timeline (which value at which
//! time, when the completion fires) and [`run_progress`] plays it out.
//! [`UploadTask`] runs an upload future on the browser event loop and
//! aborts it when dropped, which also drops any pending `gloo-timers`
//! future and clears its timer.

use futures::future::{AbortHandle, Abortable};
use leptos::spawn_local;
use std::future::Future;

use crate::state::Tick;
use crate::UploadConfig;

// =============================================================================
// Timeline
// =============================================================================

/// One step of the simulated timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressStep {
    /// Milliseconds since encoding finished
    pub at_ms: u32,
    /// Progress value after this tick
    pub progress: u8,
}

/// Timeline of the simulated upload for a given config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressSchedule {
    pub steps: Vec<ProgressStep>,
    /// Milliseconds since encoding finished when the callback fires
    pub complete_at_ms: u32,
}

impl ProgressSchedule {
    pub fn new(config: &UploadConfig) -> Self {
        let increment = config.progress_increment.max(1);
        let mut steps = Vec::new();
        let mut progress = 0u8;
        let mut at_ms = 0u32;

        while progress < 100 {
            at_ms = at_ms.saturating_add(config.progress_interval_ms);
            progress = progress.saturating_add(increment).min(100);
            steps.push(ProgressStep { at_ms, progress });
        }

        Self {
            steps,
            complete_at_ms: at_ms.saturating_add(config.redirect_delay_ms),
        }
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Tick `advance` every interval until it reports completion, then wait
/// for the redirect delay.
///
/// `sleep` waits the given number of milliseconds; the widget passes
/// `gloo_timers::future::TimeoutFuture::new`.
///
/// Returns `false` when `advance` gave up (stale upload or disposed
/// widget), in which case no redirect should happen.
pub async fn run_progress<S, Fut, F>(config: UploadConfig, mut sleep: S, mut advance: F) -> bool
where
    S: FnMut(u32) -> Fut,
    Fut: Future<Output = ()>,
    F: FnMut() -> Option<Tick>,
{
    loop {
        sleep(config.progress_interval_ms).await;
        match advance() {
            Some(Tick::Advanced(_)) => continue,
            Some(Tick::Completed) => break,
            Some(Tick::Ignored) | None => return false,
        }
    }

    sleep(config.redirect_delay_ms).await;
    true
}

/// Handle to a spawned upload future.
///
/// Dropping the handle aborts the future.
#[derive(Debug)]
pub struct UploadTask {
    handle: AbortHandle,
}

impl UploadTask {
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + 'static,
    {
        let (handle, registration) = AbortHandle::new_pair();
        spawn_local(async move {
            if Abortable::new(future, registration).await.is_err() {
                log::debug!("Upload task aborted");
            }
        });
        Self { handle }
    }
}

impl Drop for UploadTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
