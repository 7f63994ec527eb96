//! Timer gate that collapses bursts of triggers into a single delayed call.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{error, trace, warn};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::error::{BrowseError, Result};

/// Receives errors that would otherwise only reach whoever awaits a handle
pub type ErrorCallback = Arc<dyn Fn(&BrowseError) + Send + Sync>;

pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// How a debounced window ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceOutcome {
    /// The delay elapsed and the action ran to completion
    Executed,
    /// A newer trigger or a dispose cancelled the window before it elapsed
    Cancelled,
}

/// Completion signal for one trigger.
///
/// Dropping the handle detaches it; the window still runs or cancels as usual.
#[derive(Debug)]
pub struct DebounceHandle {
    inner: JoinHandle<Result<DebounceOutcome>>,
}

impl DebounceHandle {
    /// Wait for the window to be cancelled or for its action to finish.
    ///
    /// Errors returned by the action are passed through unchanged.
    pub async fn completion(self) -> Result<DebounceOutcome> {
        self.inner
            .await
            .map_err(|e| BrowseError::TaskError(e.to_string()))?
    }

    /// Detach the handle, but still log a panicking action and pass it to
    /// `on_error` as a `TaskError`.
    ///
    /// Errors the action returns are already reported by the debouncer itself.
    pub fn report_panics(self, on_error: Option<ErrorCallback>) {
        tokio::spawn(async move {
            if let Err(e) = self.inner.await {
                if !e.is_panic() {
                    return;
                }
                let err = BrowseError::TaskError(e.to_string());
                error!("Debounced action panicked: {}", err);
                if let Some(callback) = &on_error {
                    callback(&err);
                }
            }
        });
    }
}

/// Delays an async action until no newer trigger has arrived for `delay`.
///
/// Each instance serves exactly one input stream. Must be used from within a
/// tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Option<oneshot::Sender<()>>,
    on_error: Option<ErrorCallback>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            on_error: None,
        }
    }

    /// Also report action failures to `callback`
    pub fn with_error_callback(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action` after this debouncer's default delay.
    pub fn trigger<F, Fut>(&mut self, action: F) -> DebounceHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        self.trigger_with_delay(action, self.delay)
    }

    /// Cancel any pending window and schedule `action` after `delay`.
    ///
    /// An action that has already started is left running; only windows that
    /// have not yet elapsed are cancelled.
    pub fn trigger_with_delay<F, Fut>(&mut self, action: F, delay: Duration) -> DebounceHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        if let Some(previous) = self.pending.replace(cancel_tx) {
            // The receiver may already be gone if that window elapsed.
            let _ = previous.send(());
        }

        let on_error = self.on_error.clone();
        let inner = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = &mut cancel_rx => {
                    trace!("Debounce window cancelled");
                    return Ok(DebounceOutcome::Cancelled);
                }
                _ = sleep(delay) => {}
            }
            // Closing the receiver marks the window as no longer pending.
            drop(cancel_rx);

            match action().await {
                Ok(()) => Ok(DebounceOutcome::Executed),
                Err(e) => {
                    warn!("Debounced action failed: {}", e);
                    if let Some(callback) = &on_error {
                        callback(&e);
                    }
                    Err(e)
                }
            }
        });

        DebounceHandle { inner }
    }

    /// Whether a window is waiting for its delay to elapse
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|cancel| !cancel.is_closed())
    }

    /// Cancel the pending window, if any. Returns true if one was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        if let Some(cancel) = self.pending.take() {
            let _ = cancel.send(());
        }
        was_pending
    }

    /// Release the timer so no callback fires after the owner is gone.
    pub fn dispose(&mut self) {
        if self.cancel() {
            trace!("Disposed debouncer with a pending window");
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.dispose();
    }
}
