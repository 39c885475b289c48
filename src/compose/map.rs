use crate::seq::{Seq, Seq2};

/// Transforms every element of the wrapped sequence.
#[derive(Clone)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence producing `f(item)` for every item of `seq`, one-to-one.
pub fn map<S, R, F>(seq: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> R,
{
    Map { seq, f }
}

impl<S, R, F> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> R,
{
    type Item = R;

    fn produce<G>(&self, mut step: G)
    where
        G: FnMut(R) -> bool,
    {
        self.seq.produce(|item| step((self.f)(item)))
    }
}

/// Flattens every pair of the wrapped sequence into a single value.
///
/// The output is a [`Seq`]; the paired shape is not preserved.
#[derive(Clone)]
pub struct Map2<S, F> {
    seq: S,
    f: F,
}

/// Create a sequence producing `f(key, value)` for every pair of `seq`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = map2(pairs(vec![(1, "a"), (2, "b")]), |k, v| format!("{v}{k}"));
/// assert_eq!(seq.collect::<Vec<_>>(), vec!["a1", "b2"]);
/// ```
pub fn map2<S, R, F>(seq: S, f: F) -> Map2<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> R,
{
    Map2 { seq, f }
}

impl<S, R, F> Seq for Map2<S, F>
where
    S: Seq2,
    F: Fn(S::Key, S::Value) -> R,
{
    type Item = R;

    fn produce<G>(&self, mut step: G)
    where
        G: FnMut(R) -> bool,
    {
        self.seq.produce(|key, value| step((self.f)(key, value)))
    }
}
