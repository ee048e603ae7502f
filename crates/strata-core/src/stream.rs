//! Producer/consumer iteration over a bounded channel.
//!
//! [`stream`] spawns one scoped producer thread that walks a container and
//! hands items to an [`Emitter`]; the caller drains them through a
//! [`ChannelIter`]. Because the producer is scoped, items may borrow from
//! the container (`&T`), and the producer is always joined before
//! [`stream`] returns.
//!
//! The producer stops when:
//! - it runs out of items (the channel closes and the iterator ends),
//! - the [`CancelToken`] fires (checked before every send and while a send
//!   is blocked on a full queue), or
//! - the consumer drops its [`ChannelIter`].

use std::marker::PhantomData;
use std::thread;

use crossbeam_channel::{select, Receiver, Sender};

use crate::cancel::CancelToken;

/// Sending half handed to the producer closure of [`stream`].
pub struct Emitter<'c, I> {
    tx: Sender<I>,
    cancel: &'c CancelToken,
}

impl<I> Emitter<'_, I> {
    /// Send one item to the consumer, blocking while the queue is full.
    ///
    /// Returns `false` if the iteration was cancelled or the consumer is
    /// gone; the producer must stop emitting in that case.
    pub fn emit(&mut self, item: I) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        select! {
            send(self.tx, item) -> res => res.is_ok(),
            recv(self.cancel.done()) -> _ => false,
        }
    }
}

/// Receiving half of a [`stream`]: an ordered, single-pass iterator.
///
/// The `'s` lifetime is tied to the enclosing [`stream`] call, so the
/// iterator cannot outlive the producer that feeds it.
pub struct ChannelIter<'s, I> {
    rx: Receiver<I>,
    _scope: PhantomData<fn(&'s ()) -> &'s ()>,
}

impl<I> Iterator for ChannelIter<'_, I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        self.rx.recv().ok()
    }
}

/// Run `produce` on a scoped producer thread and `consume` on the calling
/// thread, connected by a queue of `capacity` slots.
///
/// A `capacity` of zero makes every send a rendezvous with the consumer.
/// Returns whatever `consume` returns.
pub fn stream<I, P, C, R>(capacity: usize, cancel: &CancelToken, produce: P, consume: C) -> R
where
    I: Send,
    P: FnOnce(&mut Emitter<'_, I>) + Send,
    C: for<'s> FnOnce(ChannelIter<'s, I>) -> R,
{
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    thread::scope(|scope| {
        scope.spawn(move || {
            let mut emitter = Emitter { tx, cancel };
            produce(&mut emitter);
        });
        consume(ChannelIter {
            rx,
            _scope: PhantomData,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::cancel_pair;

    fn produce_all<'a>(items: &'a [u32]) -> impl FnOnce(&mut Emitter<'_, &'a u32>) + Send + 'a {
        move |emitter| {
            for item in items {
                if !emitter.emit(item) {
                    return;
                }
            }
        }
    }

    #[test]
    fn stream_yields_items_in_order() {
        let items: Vec<u32> = (0..1000).collect();
        let token = CancelToken::never();
        let seen: Vec<u32> = stream(16, &token, produce_all(&items), |it| it.copied().collect());
        assert_eq!(seen, items);
    }

    #[test]
    fn rendezvous_capacity_works() {
        let items = [1u32, 2, 3];
        let token = CancelToken::never();
        let seen: Vec<u32> = stream(0, &token, produce_all(&items), |it| it.copied().collect());
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn cancelled_before_start_yields_nothing() {
        let items = [0u32; 10];
        let (canceller, token) = cancel_pair();
        canceller.cancel();
        let count = stream(0, &token, produce_all(&items), |it| it.count());
        assert_eq!(count, 0);
    }

    #[test]
    fn cancel_mid_iteration_stops_producer() {
        let items: Vec<u32> = (0..10_000).collect();
        let (canceller, token) = cancel_pair();
        let mut canceller = Some(canceller);
        let seen = stream(4, &token, produce_all(&items), |it| {
            let mut seen = 0usize;
            for _ in it {
                seen += 1;
                if seen == 10 {
                    if let Some(c) = canceller.take() {
                        c.cancel();
                    }
                }
            }
            seen
        });
        // At most the queued items plus one in-flight send follow the cancel.
        assert!(seen >= 10);
        assert!(seen <= 10 + 4 + 1, "seen {seen}");
    }

    #[test]
    fn dropping_consumer_early_releases_producer() {
        let items: Vec<u32> = (0..10_000).collect();
        let token = CancelToken::never();
        let first: Vec<u32> = stream(1, &token, produce_all(&items), |it| {
            it.take(3).copied().collect()
        });
        assert_eq!(first, vec![0, 1, 2]);
    }
}
