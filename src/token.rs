//! Completion token bridging UI reactions to awaiting callers
//!
//! A dialog invocation creates exactly one token. Reactions wired to the
//! dialog's terminal actions settle it; the caller suspends on the paired
//! [`Pending`] until the first settlement arrives.

use crate::error::{DialogError, DialogResult};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

/// Single-assignment result cell with exactly-once settlement.
///
/// The first [`settle`](CompletionToken::settle) wins; every later attempt is
/// a silent no-op. Settlement may happen from any thread.
pub struct CompletionToken<T> {
    /// Sender half of the wakeup channel; taken by the winning settlement
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T: Send + 'static> CompletionToken<T> {
    /// Create a token and the awaitable it resolves
    pub fn new() -> (Arc<Self>, Pending<T>) {
        let (tx, rx) = oneshot::channel();
        let token = Arc::new(Self {
            sender: Mutex::new(Some(tx)),
        });
        (token, Pending { receiver: rx })
    }

    /// Settle the token with `value`.
    ///
    /// Returns true if this call won the settlement. A second settlement
    /// attempt leaves the first value in place, does not wake the waiter
    /// again, and returns false.
    pub fn settle(&self, value: T) -> bool {
        let sender = self.sender.lock().unwrap().take();
        match sender {
            Some(tx) => {
                if tx.send(value).is_err() {
                    debug!("Completion token settled after its waiter was dropped");
                }
                true
            }
            None => {
                debug!("Completion token already settled; ignoring late settlement");
                false
            }
        }
    }

    /// Check whether a settlement has already happened
    pub fn is_settled(&self) -> bool {
        self.sender.lock().unwrap().is_none()
    }
}

/// The awaitable half of a [`CompletionToken`]
pub struct Pending<T> {
    /// Receiver half of the wakeup channel
    receiver: oneshot::Receiver<T>,
}

impl<T> Pending<T> {
    /// Suspend the caller until the token is settled.
    ///
    /// Resumption happens only as a direct consequence of the first
    /// settlement; there is no polling. If every handle to the token is
    /// dropped unsettled the dialog can never resolve, which surfaces as
    /// [`DialogError::Abandoned`].
    pub async fn wait(self) -> DialogResult<T> {
        self.receiver.await.map_err(|_| DialogError::Abandoned)
    }
}
