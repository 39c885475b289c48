//! Pull-style cursors over push-style sequences.
//!
//! A [`Seq`] pushes its elements into a callback, which is enough for every
//! combinator except those that must advance two sources independently. This
//! module turns a sequence into a [`Cursor`]: an [`Iterator`] that asks for one
//! element at a time.
//!
//! # How It Works
//!
//! The source runs on a scoped producer thread. The producer and the consumer
//! are coupled by a demand/response handshake:
//! - the producer does not touch the source until the first [`Cursor::next`];
//! - after handing over an element, the producer's step blocks until the
//!   consumer asks for the next one, so the source is never driven ahead of
//!   demand and at most one element is in flight;
//! - dropping the cursor withdraws demand. The producer's step then returns
//!   `false`, the source stops, and the thread is joined before `drop` returns.
//!
//! A panic raised by the source is resumed on the consumer thread with its
//! original payload.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = values(1..=5).map(|v| v * v);
//! let firsts = pull(&seq, |cursor| {
//!     let a = cursor.next();
//!     let b = cursor.next();
//!     (a, b)
//! })
//! .unwrap();
//! assert_eq!(firsts, (Some(1), Some(4)));
//! ```

use std::{
    io, panic,
    sync::mpsc::{self, Receiver, SyncSender},
    thread::{self, Scope, ScopedJoinHandle},
};

use tracing::trace;

use crate::seq::Seq;

/// Settings for the producer threads behind a [`Cursor`].
///
/// Unset fields fall back to the `std::thread` defaults.
///
/// ```rust
/// use lazyseq::pull::PullConfig;
///
/// let config = PullConfig::new().name("lazyseq-pull").stack_size(4 << 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullConfig {
    name: Option<String>,
    stack_size: Option<usize>,
}

impl PullConfig {
    /// Create a config with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the producer threads.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Stack size of the producer threads, in bytes.
    ///
    /// Raise this for sources that recurse deeply while producing.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.stack_size = Some(bytes);
        self
    }

    fn builder(&self) -> thread::Builder {
        let mut builder = thread::Builder::new();
        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(bytes) = self.stack_size {
            builder = builder.stack_size(bytes);
        }
        builder
    }
}

/// A pull-style handle over a push-style sequence.
///
/// Obtained from [`pull`], [`pull_with`] or [`Cursor::spawn`]. Implements
/// [`Iterator`]; once it returns `None` it is released and stays exhausted.
pub struct Cursor<'scope, T> {
    demand: Option<SyncSender<()>>,
    items: Option<Receiver<T>>,
    producer: Option<ScopedJoinHandle<'scope, ()>>,
}

impl<'scope, T> Cursor<'scope, T> {
    /// Start a producer for `seq` inside `scope`.
    ///
    /// The source is not driven until the first call to `next`.
    ///
    /// # Errors
    ///
    /// Fails if the producer thread cannot be spawned.
    pub fn spawn<'env, S>(
        scope: &'scope Scope<'scope, 'env>,
        seq: &'env S,
        config: &PullConfig,
    ) -> io::Result<Self>
    where
        S: Seq<Item = T> + Sync,
        T: Send + 'scope,
    {
        let (demand_tx, demand_rx) = mpsc::sync_channel::<()>(1);
        let (item_tx, item_rx) = mpsc::sync_channel::<T>(1);

        let producer = config.builder().spawn_scoped(scope, move || {
            if demand_rx.recv().is_err() {
                trace!("pull cursor dropped before first demand");
                return;
            }
            seq.produce(|item| item_tx.send(item).is_ok() && demand_rx.recv().is_ok());
            trace!("pull producer finished");
        })?;
        trace!("pull producer spawned");

        Ok(Cursor {
            demand: Some(demand_tx),
            items: Some(item_rx),
            producer: Some(producer),
        })
    }

    /// Whether the cursor has been exhausted and its producer released.
    pub fn is_complete(&self) -> bool {
        self.producer.is_none()
    }

    fn release(&mut self) {
        // closing both channels makes the producer's step return false
        self.demand.take();
        self.items.take();

        if let Some(producer) = self.producer.take() {
            let outcome = producer.join();
            trace!("pull cursor released");
            if let Err(payload) = outcome {
                if !thread::panicking() {
                    panic::resume_unwind(payload);
                }
            }
        }
    }
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = match (&self.demand, &self.items) {
            (Some(demand), Some(items)) => demand.send(()).ok().and_then(|()| items.recv().ok()),
            _ => return None,
        };
        if item.is_none() {
            self.release();
        }
        item
    }
}

impl<T> std::iter::FusedIterator for Cursor<'_, T> {}

impl<T> Drop for Cursor<'_, T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Run `f` with a pull cursor over `seq`, using the default [`PullConfig`].
///
/// The cursor, and the producer thread behind it, are released before `pull`
/// returns, whether or not `f` drained it.
///
/// # Errors
///
/// Fails if the producer thread cannot be spawned.
pub fn pull<S, R, F>(seq: &S, f: F) -> io::Result<R>
where
    S: Seq + Sync,
    S::Item: Send,
    F: FnOnce(&mut Cursor<'_, S::Item>) -> R,
{
    pull_with(seq, &PullConfig::default(), f)
}

/// Like [`pull`], with explicit producer thread settings.
pub fn pull_with<S, R, F>(seq: &S, config: &PullConfig, f: F) -> io::Result<R>
where
    S: Seq + Sync,
    S::Item: Send,
    F: FnOnce(&mut Cursor<'_, S::Item>) -> R,
{
    thread::scope(|scope| {
        let mut cursor = Cursor::spawn(scope, seq, config)?;
        Ok(f(&mut cursor))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_fn, values};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_pull_drains_in_order() {
        let out = pull(&values(vec![1, 2, 3]), |cursor| cursor.collect::<Vec<_>>()).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn test_pull_empty() {
        let out = pull(&empty::<u8>(), |cursor| {
            let first = cursor.next();
            (first, cursor.is_complete(), cursor.next())
        })
        .unwrap();
        assert_eq!(out, (None, true, None));
    }

    #[test]
    fn test_pull_does_not_drive_ahead_of_demand() {
        let produced = AtomicUsize::new(0);
        let source = from_fn(|step: &mut dyn FnMut(usize) -> bool| {
            for i in 0.. {
                produced.fetch_add(1, Ordering::SeqCst);
                if !step(i) {
                    return;
                }
            }
        });

        pull(&source, |cursor| {
            assert_eq!(produced.load(Ordering::SeqCst), 0);
            assert_eq!(cursor.next(), Some(0));
            assert_eq!(cursor.next(), Some(1));
            assert_eq!(produced.load(Ordering::SeqCst), 2);
        })
        .unwrap();
        assert_eq!(produced.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_abandoned_cursor_stops_source() {
        let stopped = Mutex::new(false);
        let source = from_fn(|step: &mut dyn FnMut(u32) -> bool| {
            for i in 0.. {
                if !step(i) {
                    *stopped.lock().unwrap() = true;
                    return;
                }
            }
        });

        let first = pull(&source, |cursor| cursor.next()).unwrap();
        assert_eq!(first, Some(0));
        assert!(*stopped.lock().unwrap());
    }

    #[test]
    fn test_unused_cursor_never_drives_source() {
        let source = from_fn(|_: &mut dyn FnMut(u32) -> bool| panic!("source was driven"));
        pull(&source, |_| ()).unwrap();
    }

    #[test]
    fn test_cursor_is_fused() {
        pull(&values([1]), |cursor| {
            assert_eq!(cursor.next(), Some(1));
            assert_eq!(cursor.next(), None);
            assert!(cursor.is_complete());
            assert_eq!(cursor.next(), None);
        })
        .unwrap();
    }

    #[test]
    #[should_panic(expected = "source exploded")]
    fn test_source_panic_reaches_consumer() {
        let source = values(0..3).map(|v| {
            if v == 1 {
                panic!("source exploded");
            }
            v
        });
        let _ = pull(&source, |cursor| cursor.count());
    }

    #[test]
    fn test_pull_with_names_producer_thread() {
        let source = values(0..1).map(|_| thread::current().name().map(str::to_owned));
        let config = PullConfig::new().name("lazyseq-test").stack_size(256 * 1024);
        let name = pull_with(&source, &config, |cursor| cursor.next()).unwrap();
        assert_eq!(name, Some(Some(String::from("lazyseq-test"))));
    }

    #[test]
    fn test_cursor_spawn_in_caller_scope() {
        let left = values(vec!['a', 'b']);
        let right = values(vec![1, 2, 3]);
        let config = PullConfig::default();
        let out: Vec<_> = thread::scope(|scope| {
            let l = Cursor::spawn(scope, &left, &config).unwrap();
            let r = Cursor::spawn(scope, &right, &config).unwrap();
            l.zip(r).collect()
        });
        assert_eq!(out, vec![('a', 1), ('b', 2)]);
    }
}
