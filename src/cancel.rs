//! Request cancellation: abort signals and the timeout race.
//!
//! Every dispatched request is wrapped in a single race between three
//! sources: the transport future, a timeout clock started at dispatch, and an
//! optional externally owned abort signal. Exactly one source settles the
//! request; the race is not restartable and later firings are no-ops (the
//! losing futures are dropped, which also stops the in-flight exchange
//! best-effort).

use crate::base::error::{Error, RequestError, TransportError};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Shared {
    aborted: AtomicBool,
    notify: Notify,
}

/// Owner side of an abort signal, mirroring the fetch `AbortController`.
///
/// Cloning shares the same underlying state; aborting any handle aborts all
/// signals derived from it.
#[derive(Debug, Clone, Default)]
pub struct AbortController {
    inner: Arc<Shared>,
}

impl AbortController {
    /// Create a controller with an untriggered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a signal to pass into a request.
    pub fn signal(&self) -> AbortSignal {
        AbortSignal {
            inner: self.inner.clone(),
        }
    }

    /// Trigger the signal. Idempotent; pending requests racing on it fail
    /// with an abort error, already-settled ones are unaffected.
    pub fn abort(&self) {
        if !self.inner.aborted.swap(true, Ordering::AcqRel) {
            self.inner.notify.notify_waiters();
        }
    }
}

/// Consumer side of an abort signal.
#[derive(Debug, Clone)]
pub struct AbortSignal {
    inner: Arc<Shared>,
}

impl AbortSignal {
    /// Whether the signal has been triggered.
    pub fn aborted(&self) -> bool {
        self.inner.aborted.load(Ordering::Acquire)
    }

    /// Resolve once the signal triggers. Registration happens before the
    /// re-check so an abort between them is not lost.
    pub(crate) async fn triggered(&self) {
        if self.aborted() {
            return;
        }
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.aborted() {
            return;
        }
        notified.await;
    }
}

/// Race a transport future against the timeout clock and the abort signal.
///
/// The caller must have rejected an already-aborted signal before invoking
/// the transport; this function re-checks anyway so the transport future is
/// never polled in that case. Tie-break order when multiple sources are
/// ready on the same poll: abort, then timeout, then the transport result.
pub(crate) async fn race<F, T>(
    transport: F,
    timeout: Option<Duration>,
    signal: Option<&AbortSignal>,
) -> Result<T, Error>
where
    F: Future<Output = Result<T, TransportError>>,
{
    if signal.map_or(false, AbortSignal::aborted) {
        return Err(Error::Abort);
    }

    let aborted = async {
        match signal {
            Some(signal) => signal.triggered().await,
            None => std::future::pending().await,
        }
    };
    let timed_out = async {
        match timeout {
            Some(duration) => {
                tokio::time::sleep(duration).await;
                duration
            }
            None => std::future::pending().await,
        }
    };

    tokio::pin!(transport);
    tokio::select! {
        biased;
        _ = aborted => Err(Error::Abort),
        duration = timed_out => Err(RequestError::Timeout(duration).into()),
        result = &mut transport => result.map_err(|e| RequestError::Transport(e).into()),
    }
}
