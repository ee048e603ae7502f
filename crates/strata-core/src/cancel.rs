//! Cooperative cancellation for channel iteration.
//!
//! A [`Canceller`] / [`CancelToken`] pair is backed by a crossbeam channel
//! that never carries a message: cancelling drops the sending side, which
//! disconnects the channel. A disconnected receiver is immediately ready
//! in `select!`, so a producer blocked on a full queue wakes up as soon as
//! the iteration is cancelled.

use crossbeam_channel::{Receiver, Sender, TryRecvError};

/// Triggers cancellation of every [`CancelToken`] created alongside it.
///
/// Dropping the canceller cancels as well, so a canceller that goes out of
/// scope never leaves a producer waiting forever.
#[derive(Debug)]
pub struct Canceller {
    _tx: Sender<()>,
}

impl Canceller {
    /// Cancel all associated tokens.
    pub fn cancel(self) {
        drop(self);
    }
}

/// Observes cancellation. Cheap to clone; all clones observe the same
/// [`Canceller`].
#[derive(Clone, Debug)]
pub struct CancelToken {
    done: Receiver<()>,
}

impl CancelToken {
    /// A token that is never cancelled.
    pub fn never() -> Self {
        Self {
            done: crossbeam_channel::never(),
        }
    }

    /// Whether the associated canceller has fired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.done.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Receiver that becomes ready (disconnected) once cancelled.
    pub(crate) fn done(&self) -> &Receiver<()> {
        &self.done
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::never()
    }
}

/// Create a connected canceller and token.
pub fn cancel_pair() -> (Canceller, CancelToken) {
    let (tx, rx) = crossbeam_channel::bounded(0);
    (Canceller { _tx: tx }, CancelToken { done: rx })
}
