//! Positional windows: [`Skip`] drops a prefix and [`Take`] keeps one.
//!
//! Both count positions, not matches, and both take a `usize`, so a negative
//! count cannot be expressed.

use crate::seq::{Seq, Seq2};

/// Discards the first `n` elements and forwards the rest unchanged.
#[derive(Clone)]
pub struct Skip<S> {
    seq: S,
    n: usize,
}

/// Create a sequence without the first `n` elements of `seq`.
///
/// A source shorter than `n` yields an empty sequence.
pub fn skip<S: Seq>(seq: S, n: usize) -> Skip<S> {
    Skip { seq, n }
}

impl<S: Seq> Seq for Skip<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut skipped = 0;
        self.seq.produce(|item| {
            if skipped < self.n {
                skipped += 1;
                return true;
            }
            step(item)
        })
    }
}

/// Discards the first `n` pairs and forwards the rest unchanged.
#[derive(Clone)]
pub struct Skip2<S> {
    seq: S,
    n: usize,
}

/// Create a pair sequence without the first `n` pairs of `seq`.
pub fn skip2<S: Seq2>(seq: S, n: usize) -> Skip2<S> {
    Skip2 { seq, n }
}

impl<S: Seq2> Seq2 for Skip2<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        let mut skipped = 0;
        self.seq.produce(|key, value| {
            if skipped < self.n {
                skipped += 1;
                return true;
            }
            step(key, value)
        })
    }
}

/// Forwards at most the first `n` elements.
///
/// The source is told to stop right after the `n`th element, so it is never
/// asked for more than it has to produce.
#[derive(Clone)]
pub struct Take<S> {
    seq: S,
    n: usize,
}

/// Create a sequence of at most the first `n` elements of `seq`.
///
/// With `n == 0` the source is never driven at all.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let naturals = from_fn(|step: &mut dyn FnMut(u64) -> bool| {
///     let mut i = 0;
///     while step(i) {
///         i += 1;
///     }
/// });
/// assert_eq!(take(&naturals, 3).collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(take(&naturals, 0).count(), 0);
/// ```
pub fn take<S: Seq>(seq: S, n: usize) -> Take<S> {
    Take { seq, n }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        if self.n == 0 {
            return;
        }
        let mut taken = 0;
        self.seq.produce(|item| {
            taken += 1;
            step(item) && taken < self.n
        })
    }
}

/// Forwards at most the first `n` pairs.
#[derive(Clone)]
pub struct Take2<S> {
    seq: S,
    n: usize,
}

/// Create a pair sequence of at most the first `n` pairs of `seq`.
pub fn take2<S: Seq2>(seq: S, n: usize) -> Take2<S> {
    Take2 { seq, n }
}

impl<S: Seq2> Seq2 for Take2<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        if self.n == 0 {
            return;
        }
        let mut taken = 0;
        self.seq.produce(|key, value| {
            taken += 1;
            step(key, value) && taken < self.n
        })
    }
}
