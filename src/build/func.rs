use std::marker::PhantomData;

use crate::seq::{Seq, Seq2};

/// A sequence backed by a producer closure.
///
/// Created via [`from_fn`].
pub struct FromFn<T, F> {
    f: F,
    _phantom: PhantomData<fn() -> T>,
}

/// Create a sequence from a closure that pushes elements into a step callback.
///
/// The closure must stop as soon as the callback returns `false`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = from_fn(|step: &mut dyn FnMut(u32) -> bool| {
///     for i in 1.. {
///         if !step(i * i) {
///             return;
///         }
///     }
/// });
/// assert_eq!(squares.take(4).collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        f,
        _phantom: PhantomData,
    }
}

impl<T, F> Seq for FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(T) -> bool,
    {
        (self.f)(&mut step)
    }
}

impl<T, F: Clone> Clone for FromFn<T, F> {
    fn clone(&self) -> Self {
        FromFn {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

/// A pair sequence backed by a producer closure.
///
/// Created via [`from_fn2`].
pub struct FromFn2<K, V, F> {
    f: F,
    _phantom: PhantomData<fn() -> (K, V)>,
}

/// Create a pair sequence from a closure that pushes pairs into a step callback.
pub fn from_fn2<K, V, F>(f: F) -> FromFn2<K, V, F>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    FromFn2 {
        f,
        _phantom: PhantomData,
    }
}

impl<K, V, F> Seq2 for FromFn2<K, V, F>
where
    F: Fn(&mut dyn FnMut(K, V) -> bool),
{
    type Key = K;
    type Value = V;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(K, V) -> bool,
    {
        (self.f)(&mut step)
    }
}

impl<K, V, F: Clone> Clone for FromFn2<K, V, F> {
    fn clone(&self) -> Self {
        FromFn2 {
            f: self.f.clone(),
            _phantom: PhantomData,
        }
    }
}

/// Produces the same value forever.
///
/// Never exhausts on its own: pair it with [`take`](crate::compose::take) or a
/// short-circuiting terminal.
#[derive(Debug, Clone)]
pub struct Repeat<T>(T);

/// Create an infinite sequence of clones of `value`.
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    Repeat(value)
}

impl<T: Clone> Seq for Repeat<T> {
    type Item = T;

    fn produce<S>(&self, mut step: S)
    where
        S: FnMut(T) -> bool,
    {
        while step(self.0.clone()) {}
    }
}

/// A sequence with no elements.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Create an empty sequence.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Seq for Empty<T> {
    type Item = T;

    fn produce<S>(&self, _step: S)
    where
        S: FnMut(T) -> bool,
    {
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

/// A pair sequence with no pairs.
pub struct Empty2<K, V>(PhantomData<fn() -> (K, V)>);

/// Create an empty pair sequence.
pub fn empty2<K, V>() -> Empty2<K, V> {
    Empty2(PhantomData)
}

impl<K, V> Seq2 for Empty2<K, V> {
    type Key = K;
    type Value = V;

    fn produce<S>(&self, _step: S)
    where
        S: FnMut(K, V) -> bool,
    {
    }
}

impl<K, V> Clone for Empty2<K, V> {
    fn clone(&self) -> Self {
        empty2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{collect, collect2, count};

    #[test]
    fn test_from_fn_honors_stop() {
        let seq = from_fn(|step: &mut dyn FnMut(i32) -> bool| {
            for i in 0..10 {
                if !step(i) {
                    return;
                }
            }
        });
        let mut seen = Vec::new();
        seq.produce(|v| {
            seen.push(v);
            seen.len() < 3
        });
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(count(&seq), 10);
    }

    #[test]
    fn test_from_fn2() {
        let seq = from_fn2(|step: &mut dyn FnMut(char, usize) -> bool| {
            for (i, c) in "ab".chars().enumerate() {
                if !step(c, i) {
                    return;
                }
            }
        });
        let out: Vec<_> = collect2(&seq);
        assert_eq!(out, vec![('a', 0), ('b', 1)]);
    }

    #[test]
    fn test_repeat_stops_when_asked() {
        let mut calls = 0;
        repeat("hi").produce(|s| {
            assert_eq!(s, "hi");
            calls += 1;
            calls < 5
        });
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_empty_never_calls_step() {
        empty::<u8>().produce(|_| panic!("empty produced an element"));
        empty2::<u8, u8>().produce(|_, _| panic!("empty2 produced a pair"));
        let out: Vec<u8> = collect(empty::<u8>());
        assert!(out.is_empty());
    }
}
