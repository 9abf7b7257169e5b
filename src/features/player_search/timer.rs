//! Cancelable one-shot timer
//!
//! Each `schedule` aborts the previous sleep and hands out a new ticket.
//! The callback receives its ticket so the owner can tell a live firing
//! from one that raced with a cancel.

use std::time::Duration;
use tokio::task::AbortHandle;

pub struct CancelableTimer {
    delay: Duration,
    ticket: u64,
    pending: Option<AbortHandle>,
}

impl CancelableTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ticket: 0,
            pending: None,
        }
    }

    /// Cancel any pending firing and start a new one.
    ///
    /// Must be called from within a tokio runtime. The deadline is fixed
    /// here, not when the spawned task is first polled.
    pub fn schedule<F>(&mut self, on_fire: F) -> u64
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        self.ticket += 1;
        let ticket = self.ticket;
        let sleep = tokio::time::sleep(self.delay);
        let handle = tokio::spawn(async move {
            sleep.await;
            on_fire(ticket);
        });
        self.pending = Some(handle.abort_handle());
        ticket
    }

    /// Abort the pending firing, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume a firing. Returns false for tickets that were superseded or
    /// canceled after the callback already ran.
    pub fn complete(&mut self, ticket: u64) -> bool {
        if self.pending.is_some() && ticket == self.ticket {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

impl Drop for CancelableTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for CancelableTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelableTimer")
            .field("delay", &self.delay)
            .field("ticket", &self.ticket)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CancelableTimer::new(Duration::from_millis(300));
        let start = tokio::time::Instant::now();

        let ticket = timer.schedule(move |t| {
            let _ = tx.send(t);
        });

        assert_eq!(rx.recv().await, Some(ticket));
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(timer.complete(ticket));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_cancels_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = CancelableTimer::new(Duration::from_millis(300));

        let first_tx = tx.clone();
        let first = timer.schedule(move |t| {
            let _ = first_tx.send(t);
        });
        tokio::time::advance(Duration::from_millis(200)).await;
        let second = timer.schedule(move |t| {
            let _ = tx.send(t);
        });

        assert_ne!(first, second);
        assert_eq!(rx.recv().await, Some(second));
        // Both senders are gone once the aborted task is dropped
        assert_eq!(rx.recv().await, None);
        assert!(!timer.complete(first));
        assert!(timer.complete(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        {
            let mut timer = CancelableTimer::new(Duration::from_millis(50));
            timer.schedule(move |t| {
                let _ = tx.send(t);
            });
        }
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_then_stale_complete() {
        let mut timer = CancelableTimer::new(Duration::from_millis(10));
        let ticket = timer.schedule(|_| {});
        timer.cancel();
        assert!(!timer.is_pending());
        assert!(!timer.complete(ticket));
    }
}
