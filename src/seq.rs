//! Core traits for lazy sequences.
//!
//! This module defines [`Seq`] and [`Seq2`], the two shapes of sequence every
//! combinator in this crate consumes and produces. A sequence is a suspended
//! traversal: nothing happens until a consumer calls [`Seq::produce`] with a step
//! callback.
//!
//! # The Step Contract
//!
//! `produce(step)` calls `step` once per element in production order and
//! - stops as soon as `step` returns `false`, with no further calls afterwards;
//! - otherwise runs until the source is exhausted;
//! - returns normally either way.
//!
//! `produce` takes `&self`, so a sequence can be driven more than once. Each call
//! is an independent traversal, provided the underlying source can be replayed.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = values(1..=10).filter(|v| v % 2 == 0);
//!
//! let mut seen = Vec::new();
//! evens.produce(|v| {
//!     seen.push(v);
//!     v < 6
//! });
//! assert_eq!(seen, vec![2, 4, 6]);
//!
//! // Driving it again replays the whole stream.
//! assert_eq!(evens.count(), 5);
//! ```

use either::Either;

use crate::{
    compose::{self, Filter, Filter2, Map, Map2, Reverse, Reverse2, Skip, Skip2, Take, Take2, Zip},
    error::NotFound,
    terminal,
};

/// A lazy sequence of single values.
///
/// Implementors only provide [`produce`](Seq::produce); every combinator is
/// available as a provided method.
pub trait Seq {
    /// Type of the produced elements
    type Item;

    /// Drive the sequence, handing each element to `step` until it returns
    /// `false` or the source runs out.
    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Item) -> bool;

    /// Keep only elements matching `pred`.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        compose::filter(self, pred)
    }

    /// Transform every element with `f`.
    fn map<R, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> R,
    {
        compose::map(self, f)
    }

    /// Drop the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        compose::skip(self, n)
    }

    /// Forward at most the first `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        compose::take(self, n)
    }

    /// Produce the elements back-to-front. The source must be finite.
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        compose::reverse(self)
    }

    /// Pair this sequence with `other`, element by element.
    fn zip<B>(self, other: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Seq,
    {
        compose::zip(self, other)
    }

    /// Whether every element satisfies `pred`. See [`terminal::all`].
    fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        terminal::all(self, pred)
    }

    /// Whether any element satisfies `pred`. See [`terminal::any`].
    fn any<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        terminal::any(self, pred)
    }

    /// Number of elements. See [`terminal::count`].
    fn count(&self) -> usize {
        terminal::count(self)
    }

    /// First element matching `pred`. See [`terminal::find`].
    fn find<P>(&self, pred: P) -> Result<Self::Item, NotFound>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::find(self, pred)
    }

    /// Left fold over the elements. See [`terminal::reduce`].
    fn reduce<A, F>(&self, combine: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> A,
    {
        terminal::reduce(self, combine, init)
    }

    /// Drain the sequence into a collection. See [`terminal::collect`].
    fn collect<B>(&self) -> B
    where
        B: Default + Extend<Self::Item>,
    {
        terminal::collect(self)
    }
}

/// A lazy sequence of key/value pairs.
///
/// Keys are not required to be unique and carry no ordering of their own: pairs
/// come out in whatever order the source produces them.
pub trait Seq2 {
    /// Type of the produced keys
    type Key;
    /// Type of the produced values
    type Value;

    /// Drive the sequence, handing each pair to `step` until it returns `false`
    /// or the source runs out.
    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool;

    /// Keep only pairs matching `pred`.
    fn filter<P>(self, pred: P) -> Filter2<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Key, &Self::Value) -> bool,
    {
        compose::filter2(self, pred)
    }

    /// Flatten every pair into a single value with `f`.
    ///
    /// The result is a [`Seq`], not a [`Seq2`].
    fn map<R, F>(self, f: F) -> Map2<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Key, Self::Value) -> R,
    {
        compose::map2(self, f)
    }

    /// Drop the first `n` pairs.
    fn skip(self, n: usize) -> Skip2<Self>
    where
        Self: Sized,
    {
        compose::skip2(self, n)
    }

    /// Forward at most the first `n` pairs.
    fn take(self, n: usize) -> Take2<Self>
    where
        Self: Sized,
    {
        compose::take2(self, n)
    }

    /// Produce the pairs back-to-front. The source must be finite.
    fn reverse(self) -> Reverse2<Self>
    where
        Self: Sized,
    {
        compose::reverse2(self)
    }

    /// Whether every pair satisfies `pred`. See [`terminal::all2`].
    fn all<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        terminal::all2(self, pred)
    }

    /// Whether any pair satisfies `pred`. See [`terminal::any2`].
    fn any<P>(&self, pred: P) -> bool
    where
        P: FnMut(Self::Key, Self::Value) -> bool,
    {
        terminal::any2(self, pred)
    }

    /// Number of pairs. See [`terminal::count2`].
    fn count(&self) -> usize {
        terminal::count2(self)
    }

    /// First pair matching `pred`. See [`terminal::find2`].
    fn find<P>(&self, pred: P) -> Result<(Self::Key, Self::Value), NotFound>
    where
        P: FnMut(&Self::Key, &Self::Value) -> bool,
    {
        terminal::find2(self, pred)
    }

    /// Left fold over the pairs. See [`terminal::reduce2`].
    fn reduce<A, F>(&self, combine: F, init: A) -> A
    where
        F: FnMut(A, Self::Key, Self::Value) -> A,
    {
        terminal::reduce2(self, combine, init)
    }

    /// Drain the pairs into a collection. See [`terminal::collect2`].
    fn collect<B>(&self) -> B
    where
        B: Default + Extend<(Self::Key, Self::Value)>,
    {
        terminal::collect2(self)
    }
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).produce(step)
    }
}

impl<S> Seq2 for &S
where
    S: Seq2 + ?Sized,
{
    type Key = S::Key;
    type Value = S::Value;

    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool,
    {
        (**self).produce(step)
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Item) -> bool,
    {
        match self {
            Either::Left(l) => l.produce(step),
            Either::Right(r) => r.produce(step),
        }
    }
}

impl<L, R> Seq2 for Either<L, R>
where
    L: Seq2,
    R: Seq2<Key = L::Key, Value = L::Value>,
{
    type Key = L::Key;
    type Value = L::Value;

    fn produce<F>(&self, step: F)
    where
        F: FnMut(Self::Key, Self::Value) -> bool,
    {
        match self {
            Either::Left(l) => l.produce(step),
            Either::Right(r) => r.produce(step),
        }
    }
}
