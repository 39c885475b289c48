//! Terminal operations that drive a sequence and return a plain value.
//!
//! [`all`], [`any`] and [`find`] short-circuit: once the answer is known they
//! signal the source to stop, so elements past the deciding one are never
//! produced. [`count`], [`reduce`] and [`collect`] always drive the source to
//! exhaustion and therefore require it to be finite.
//!
//! Every function has a `*2` twin for [`Seq2`] sources.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let seq = values([2, 4, 6]);
//! assert!(all(&seq, |v| v % 2 == 0));
//! assert!(!all(&seq, |v| v > 2));
//! assert_eq!(find(&seq, |v| *v > 3), Ok(4));
//! assert_eq!(reduce(&seq, |acc, v| acc + v, 0), 12);
//! ```

use crate::{
    error::NotFound,
    seq::{Seq, Seq2},
};

/// Returns `true` if every element satisfies `pred`.
///
/// Stops at the first counterexample. An empty sequence yields `true`.
pub fn all<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    let mut holds = true;
    seq.produce(|item| {
        holds = pred(item);
        holds
    });
    holds
}

/// Returns `true` if every pair satisfies `pred`.
///
/// Stops at the first counterexample. An empty sequence yields `true`.
pub fn all2<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq2,
    P: FnMut(S::Key, S::Value) -> bool,
{
    let mut holds = true;
    seq.produce(|key, value| {
        holds = pred(key, value);
        holds
    });
    holds
}

/// Returns `true` as soon as an element satisfies `pred`.
///
/// An empty sequence yields `false`.
pub fn any<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    let mut matched = false;
    seq.produce(|item| {
        matched = pred(item);
        !matched
    });
    matched
}

/// Returns `true` as soon as a pair satisfies `pred`.
///
/// An empty sequence yields `false`.
pub fn any2<S, P>(seq: S, mut pred: P) -> bool
where
    S: Seq2,
    P: FnMut(S::Key, S::Value) -> bool,
{
    let mut matched = false;
    seq.produce(|key, value| {
        matched = pred(key, value);
        !matched
    });
    matched
}

/// Counts the elements of a finite sequence.
pub fn count<S>(seq: S) -> usize
where
    S: Seq,
{
    let mut n = 0;
    seq.produce(|_| {
        n += 1;
        true
    });
    n
}

/// Counts the pairs of a finite sequence.
pub fn count2<S>(seq: S) -> usize
where
    S: Seq2,
{
    let mut n = 0;
    seq.produce(|_, _| {
        n += 1;
        true
    });
    n
}

/// Returns the first element satisfying `pred`.
///
/// Nothing past the match is produced. When no element matches the result is
/// [`NotFound`]; use [`Result::unwrap_or_default`] to fall back to the zero value.
/// Item types without a [`Default`] get no implicit zero value, so the caller
/// supplies one through [`Result::unwrap_or`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = values([1, 2, 3]);
/// assert_eq!(find(&seq, |v| *v == 2), Ok(2));
/// assert_eq!(find(&seq, |v| *v == 5), Err(NotFound));
/// assert_eq!(find(&seq, |v| *v == 5).unwrap_or_default(), 0);
/// ```
pub fn find<S, P>(seq: S, mut pred: P) -> Result<S::Item, NotFound>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    let mut found = None;
    seq.produce(|item| {
        if pred(&item) {
            found = Some(item);
            return false;
        }
        true
    });
    found.ok_or(NotFound)
}

/// Returns the first pair satisfying `pred`, or [`NotFound`].
///
/// The error carries no value. When both `K` and `V` implement [`Default`],
/// [`Result::unwrap_or_default`] yields the zero pair; otherwise the caller
/// picks its own fallback with [`Result::unwrap_or`] or [`Result::unwrap_or_else`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = pairs(vec![("a", 1), ("b", 2)]);
/// assert_eq!(find2(&seq, |_, v| *v == 2), Ok(("b", 2)));
/// assert_eq!(find2(&seq, |k, _| *k == "z").unwrap_or_default(), ("", 0));
/// ```
pub fn find2<S, P>(seq: S, mut pred: P) -> Result<(S::Key, S::Value), NotFound>
where
    S: Seq2,
    P: FnMut(&S::Key, &S::Value) -> bool,
{
    let mut found = None;
    seq.produce(|key, value| {
        if pred(&key, &value) {
            found = Some((key, value));
            return false;
        }
        true
    });
    found.ok_or(NotFound)
}

/// Left fold: starts from `init` and applies `combine(acc, item)` to each
/// element in source order.
///
/// `combine` need not be commutative or associative; the application order is
/// always the production order.
pub fn reduce<S, A, F>(seq: S, mut combine: F, init: A) -> A
where
    S: Seq,
    F: FnMut(A, S::Item) -> A,
{
    let mut acc = Some(init);
    seq.produce(|item| {
        acc = acc.take().map(|a| combine(a, item));
        true
    });
    // only vacated while `combine` runs
    acc.expect("accumulator is restored after every step")
}

/// Left fold over pairs with `combine(acc, key, value)`.
pub fn reduce2<S, A, F>(seq: S, mut combine: F, init: A) -> A
where
    S: Seq2,
    F: FnMut(A, S::Key, S::Value) -> A,
{
    let mut acc = Some(init);
    seq.produce(|key, value| {
        acc = acc.take().map(|a| combine(a, key, value));
        true
    });
    acc.expect("accumulator is restored after every step")
}

/// Drains a finite sequence into any collection that can be extended.
pub fn collect<S, B>(seq: S) -> B
where
    S: Seq,
    B: Default + Extend<S::Item>,
{
    let mut out = B::default();
    seq.produce(|item| {
        out.extend(Some(item));
        true
    });
    out
}

/// Drains a finite pair sequence into any collection of `(key, value)` tuples.
pub fn collect2<S, B>(seq: S) -> B
where
    S: Seq2,
    B: Default + Extend<(S::Key, S::Value)>,
{
    let mut out = B::default();
    seq.produce(|key, value| {
        out.extend(Some((key, value)));
        true
    });
    out
}
