//! Sequences over replayable iterables.
//!
//! Each adapter stores an `IntoIterator + Clone` and clones it on every call to
//! `produce`, so the resulting sequence can be driven any number of times.
//! Borrowed collections (`&Vec<T>`, `&[T]`, `&BTreeMap<K, V>`), ranges and most
//! std iterators qualify.

use crate::seq::{Seq, Seq2};

/// Sequence over the items of an iterable. Created via [`values`].
#[derive(Debug, Clone)]
pub struct Values<I>(I);

/// Create a sequence producing the items of `iterable` in order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = vec!["a", "b", "c"];
/// let seq = values(&words);
/// assert_eq!(seq.count(), 3);
/// assert_eq!(seq.find(|w| **w == "b"), Ok(&"b"));
/// ```
pub fn values<I>(iterable: I) -> Values<I>
where
    I: IntoIterator + Clone,
{
    Values(iterable)
}

impl<I> Seq for Values<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(I::Item) -> bool,
    {
        for item in self.0.clone() {
            if !step(item) {
                return;
            }
        }
    }
}

/// Pair sequence over an iterable of `(key, value)` tuples. Created via [`pairs`].
#[derive(Debug, Clone)]
pub struct Pairs<I>(I);

/// Create a pair sequence from an iterable of tuples, in iteration order.
///
/// Duplicate keys are produced as they appear.
pub fn pairs<I, K, V>(iterable: I) -> Pairs<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    Pairs(iterable)
}

impl<I, K, V> Seq2 for Pairs<I>
where
    I: IntoIterator<Item = (K, V)> + Clone,
{
    type Key = K;
    type Value = V;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(K, V) -> bool,
    {
        for (key, value) in self.0.clone() {
            if !step(key, value) {
                return;
            }
        }
    }
}

/// Pair sequence of `(position, item)`. Created via [`indexed`].
#[derive(Debug, Clone)]
pub struct Indexed<I>(I);

/// Create a pair sequence keyed by each item's zero-based position.
pub fn indexed<I>(iterable: I) -> Indexed<I>
where
    I: IntoIterator + Clone,
{
    Indexed(iterable)
}

impl<I> Seq2 for Indexed<I>
where
    I: IntoIterator + Clone,
{
    type Key = usize;
    type Value = I::Item;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(usize, I::Item) -> bool,
    {
        for (i, item) in self.0.clone().into_iter().enumerate() {
            if !step(i, item) {
                return;
            }
        }
    }
}
