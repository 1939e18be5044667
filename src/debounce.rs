//! Trailing-edge debounce over the tokio timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Collapses a burst of values into one trailing emission.
///
/// At most one timer is pending. Every [`push`](Debouncer::push) cancels it
/// and schedules a new one, so `emit` only sees a value after `delay` has
/// passed without another push. Must be used inside a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    emit: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, emit: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            emit: Arc::new(emit),
            pending: None,
        }
    }

    pub fn push(&mut self, value: T) {
        self.cancel();
        let emit = Arc::clone(&self.emit);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            emit(value);
        }));
    }
}

impl<T> Debouncer<T> {
    /// Drop the pending value, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
