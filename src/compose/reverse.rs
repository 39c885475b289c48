use tracing::trace;

use crate::seq::{Seq, Seq2};

/// Produces the elements of the wrapped sequence back-to-front.
///
/// Unlike every other combinator, `Reverse` consumes its whole source into a
/// buffer before producing anything, so the source must be finite. The buffer
/// lives only for the duration of one `produce` call.
#[derive(Clone)]
pub struct Reverse<S> {
    seq: S,
}

/// Create a sequence producing the elements of `seq` in reverse order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = reverse(values([1, 2, 3]));
/// assert_eq!(seq.collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
pub fn reverse<S: Seq>(seq: S) -> Reverse<S> {
    Reverse { seq }
}

impl<S: Seq> Seq for Reverse<S> {
    type Item = S::Item;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        let mut stack = Vec::new();
        self.seq.produce(|item| {
            stack.push(item);
            true
        });
        trace!(buffered = stack.len(), "reverse buffered source");

        while let Some(item) = stack.pop() {
            if !step(item) {
                break;
            }
        }
    }
}

/// Produces the pairs of the wrapped sequence back-to-front.
///
/// Buffers the whole source, like [`Reverse`]; keys stay attached to their values.
#[derive(Clone)]
pub struct Reverse2<S> {
    seq: S,
}

/// Create a pair sequence producing the pairs of `seq` in reverse order.
pub fn reverse2<S: Seq2>(seq: S) -> Reverse2<S> {
    Reverse2 { seq }
}

impl<S: Seq2> Seq2 for Reverse2<S> {
    type Key = S::Key;
    type Value = S::Value;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        let mut stack = Vec::new();
        self.seq.produce(|key, value| {
            stack.push((key, value));
            true
        });
        trace!(buffered = stack.len(), "reverse2 buffered source");

        while let Some((key, value)) = stack.pop() {
            if !step(key, value) {
                break;
            }
        }
    }
}
