//! Cancellable fixed-period task.
//!
//! The landing widgets are all "do this every N milliseconds until the
//! owner goes away". [`Cadence`] packages that contract: starting one
//! returns a handle, the handle must outlive the ticking, and releasing
//! it (explicitly or by drop) leaves no timer running. `stop()` is
//! idempotent; calling it on an already-stopped cadence is a no-op.
//!
//! Must be started from within a tokio runtime.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::WidgetError;

/// Handle to a repeating background task.
pub struct Cadence {
    handle: Option<JoinHandle<()>>,
}

impl Cadence {
    /// Spawns `tick` to run once per `period`, starting one period from
    /// now. The period must be non-zero.
    pub fn start<F>(period: Duration, mut tick: F) -> Result<Self, WidgetError>
    where
        F: FnMut() + Send + 'static,
    {
        if period.is_zero() {
            return Err(WidgetError::ZeroPeriod);
        }

        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; consume it so the
            // first callback lands a full period after start.
            timer.tick().await;
            loop {
                timer.tick().await;
                tick();
            }
        });

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Stops the ticking. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the cadence still has a live timer.
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for Cadence {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_cadence(period: Duration) -> (Cadence, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let cadence = Cadence::start(period, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        (cadence, hits)
    }

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let (mut cadence, hits) = counting_cadence(Duration::from_secs(3));

        tokio::time::sleep(Duration::from_millis(3100)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        cadence.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_idempotent_and_final() {
        let (mut cadence, hits) = counting_cadence(Duration::from_secs(1));

        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(cadence.is_active());

        cadence.stop();
        cadence.stop();
        cadence.stop();
        assert!(!cadence.is_active());

        let seen = hits.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(hits.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_releases_the_timer() {
        let hits = {
            let (_cadence, hits) = counting_cadence(Duration::from_secs(1));
            hits
            // _cadence dropped here
        };

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn zero_period_is_rejected() {
        let result = Cadence::start(Duration::ZERO, || {});
        assert!(matches!(result, Err(WidgetError::ZeroPeriod)));
    }
}
