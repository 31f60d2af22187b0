//! Shared pause flag for renderers.

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// A cloneable pause flag.
///
/// Every clone shares the same flag. Whoever handles the user's pause key
/// holds one clone; the renderer consults another and blocks in
/// [`wait_resumed`](PauseToken::wait_resumed) instead of spinning.
#[derive(Debug, Clone, Default)]
pub struct PauseToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl PauseToken {
    /// Create a new token in the running state.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        self.inner.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set(&self, paused: bool) {
        let mut guard = self.lock();
        *guard = paused;
        self.inner.1.notify_all();
    }

    /// Whether the flag is currently set.
    pub fn is_paused(&self) -> bool {
        *self.lock()
    }

    /// Set the flag.
    pub fn pause(&self) {
        self.set(true);
    }

    /// Clear the flag and wake any waiter.
    pub fn resume(&self) {
        self.set(false);
    }

    /// Flip the flag. Returns the new state.
    pub fn toggle(&self) -> bool {
        let mut guard = self.lock();
        *guard = !*guard;
        self.inner.1.notify_all();
        *guard
    }

    /// Block until the flag clears or `timeout` elapses.
    ///
    /// Returns true if the token is running on return.
    pub fn wait_resumed(&self, timeout: Duration) -> bool {
        let guard = self.lock();
        let (guard, _) = self
            .inner
            .1
            .wait_timeout_while(guard, timeout, |paused| *paused)
            .unwrap_or_else(PoisonError::into_inner);
        !*guard
    }
}
