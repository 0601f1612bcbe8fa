//! Startup splash overlay
//!
//! The overlay is visible at mount and dismissed once [`SPLASH_DURATION`] has
//! passed. The delay runs on a [`SplashTimer`], which runs its completion at
//! most once and never runs it if it is cancelled or dropped first.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long the splash stays up
pub const SPLASH_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    Visible { shown_at: Instant },
    Dismissed,
}

impl SplashState {
    pub fn visible() -> Self {
        SplashState::Visible {
            shown_at: Instant::now(),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SplashState::Visible { .. })
    }

    /// Returns true if this call dismissed a visible splash
    pub fn dismiss(&mut self) -> bool {
        let was_visible = self.is_visible();
        *self = SplashState::Dismissed;
        was_visible
    }

    /// Fraction of the splash duration elapsed, clamped to `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        match self {
            SplashState::Visible { shown_at } => {
                let elapsed = shown_at.elapsed().as_secs_f64();
                (elapsed / SPLASH_DURATION.as_secs_f64()).clamp(0.0, 1.0)
            }
            SplashState::Dismissed => 1.0,
        }
    }
}

/// Cancellable one-shot delay.
///
/// Dropping the timer aborts the pending callback.
#[derive(Debug)]
pub struct SplashTimer {
    handle: Option<JoinHandle<()>>,
}

impl SplashTimer {
    /// Await `on_done` once after `delay`. Must be called inside a tokio
    /// runtime.
    ///
    /// The completion runs on the timer task, so it may wait (e.g. on a full
    /// channel) and is still aborted by [`cancel`](Self::cancel).
    pub fn start<F>(delay: Duration, on_done: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            on_done.await;
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Abort the callback if it has not fired yet
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the callback is still scheduled
    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for SplashTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
