//! Status message slot with a single owned auto-clear timer

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::StatusMessage;

#[derive(Default)]
struct Slot {
    generation: u64,
    message: Option<StatusMessage>,
}

/// Holds the current status message and clears it once its window elapses.
///
/// Each new message restarts the window. The previous timer is aborted, and a
/// timer only ever clears the message it was started for, so an old timer
/// cannot blank a newer message.
pub struct StatusNotifier {
    ttl: Duration,
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
}

impl StatusNotifier {
    /// Must be used from within a tokio runtime: `notify` spawns the timer.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
        }
    }

    /// Replace the current message and restart the window
    pub fn notify(&mut self, message: StatusMessage) {
        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.message = Some(message);
            slot.generation
        };

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    /// Clear the message now and cancel its timer
    pub fn dismiss(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        let mut slot = lock(&self.slot);
        slot.generation += 1;
        slot.message = None;
    }

    pub fn current(&self) -> Option<StatusMessage> {
        lock(&self.slot).message.clone()
    }
}

impl Drop for StatusNotifier {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

// A panic while holding the lock cannot leave the slot half-written.
fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
