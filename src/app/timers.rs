//! Cancellable one-shot timers owned by the app actor

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::navigation::NavAction;

/// What should happen when a timer fires
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    /// Close the forgot-password modal after a successful reset request
    CloseResetModal,
    /// Follow-up navigation after a successful call
    Navigate(NavAction),
}

/// Sent back to the app actor when a timer elapses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerFired {
    pub id: u64,
    pub timer: Timer,
}

/// Spawns sleeping tasks and keeps their cancel handles.
///
/// Dropping the scheduler cancels every pending timer.
pub struct Scheduler {
    fired_tx: mpsc::UnboundedSender<TimerFired>,
    pending: HashMap<u64, oneshot::Sender<()>>,
}

impl Scheduler {
    pub fn new(fired_tx: mpsc::UnboundedSender<TimerFired>) -> Self {
        Scheduler {
            fired_tx,
            pending: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, id: u64, after: Duration, timer: Timer) {
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        self.pending.insert(id, cancel_tx);

        let fired_tx = self.fired_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(after) => {
                    let _ = fired_tx.send(TimerFired { id, timer });
                }
                _ = cancel_rx => {}
            }
        });
        tracing::debug!(id, ?timer, delay_ms = after.as_millis() as u64, "Timer scheduled");
    }

    /// Cancel a pending timer; returns false if it already fired or never existed
    pub fn cancel(&mut self, id: u64) -> bool {
        match self.pending.remove(&id) {
            Some(cancel_tx) => {
                let _ = cancel_tx.send(());
                tracing::debug!(id, "Timer cancelled");
                true
            }
            None => false,
        }
    }

    /// Mark a fired timer as delivered; false means it was cancelled meanwhile
    pub fn complete(&mut self, id: u64) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        for (_, cancel_tx) in self.pending.drain() {
            let _ = cancel_tx.send(());
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        let start = tokio::time::Instant::now();
        scheduler.schedule(4, Duration::from_secs(3), Timer::CloseResetModal);

        let fired = rx.recv().await.unwrap();
        assert_eq!(fired, TimerFired { id: 4, timer: Timer::CloseResetModal });
        assert_eq!(start.elapsed(), Duration::from_secs(3));
        assert!(scheduler.complete(4));
        assert_eq!(scheduler.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.schedule(1, Duration::from_secs(1), Timer::Navigate(NavAction::GoBack));
        assert!(scheduler.cancel(1));
        assert!(!scheduler.cancel(1));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }
}
