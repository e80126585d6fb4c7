//! Single-slot debounce timer.
//!
//! Every keystroke re-arms the timer; only the term that survives the
//! quiet interval produces a lookup. Last write wins, nothing is queued,
//! and dropping the debouncer aborts whatever is still pending.

use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::ui::events::AppEvent;

pub struct Debouncer {
    quiet_interval: Duration,
    runtime: Handle,
    events_tx: Sender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(quiet_interval: Duration, runtime: Handle, events_tx: Sender<AppEvent>) -> Self {
        Self {
            quiet_interval,
            runtime,
            events_tx,
            pending: None,
        }
    }

    /// Replace any scheduled lookup with one for `term`.
    pub fn arm(&mut self, term: String) {
        self.cancel();
        let delay = self.quiet_interval;
        let tx = self.events_tx.clone();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::SearchReady { term });
        }));
    }

    /// Abort the scheduled lookup, if any. A no-op with nothing pending.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
