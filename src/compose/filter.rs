use crate::seq::{Seq, Seq2};

/// Forwards only the elements matching a predicate.
///
/// Rejected elements are skipped silently: the downstream step never sees them.
#[derive(Clone)]
pub struct Filter<S, P> {
    seq: S,
    pred: P,
}

/// Create a sequence of the elements of `seq` for which `pred` holds.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens = filter(values([1, 2, 3, 4]), |v| v % 2 == 0);
/// assert_eq!(evens.collect::<Vec<_>>(), vec![2, 4]);
/// ```
pub fn filter<S, P>(seq: S, pred: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter { seq, pred }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Item) -> bool,
    {
        self.seq
            .produce(|item| if (self.pred)(&item) { step(item) } else { true })
    }
}

/// Forwards only the pairs matching a predicate.
#[derive(Clone)]
pub struct Filter2<S, P> {
    seq: S,
    pred: P,
}

/// Create a pair sequence of the pairs of `seq` for which `pred` holds.
pub fn filter2<S, P>(seq: S, pred: P) -> Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    Filter2 { seq, pred }
}

impl<S, P> Seq2 for Filter2<S, P>
where
    S: Seq2,
    P: Fn(&S::Key, &S::Value) -> bool,
{
    type Key = S::Key;
    type Value = S::Value;

    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(S::Key, S::Value) -> bool,
    {
        self.seq.produce(|key, value| {
            if (self.pred)(&key, &value) {
                step(key, value)
            } else {
                true
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{pairs, values};
    use crate::terminal::{collect, collect2, count};

    #[test]
    fn test_filter() {
        let out: Vec<_> = collect(filter(values([1, 2, 3, 4]), |v| v % 2 == 0));
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn test_filter_is_lazy() {
        let seq = filter(values([1, 2, 3]), |_| -> bool { panic!("predicate ran eagerly") });
        drop(seq);
    }

    #[test]
    fn test_filter_honors_downstream_stop() {
        let seq = filter(values(1..=100), |v| v % 10 == 0);
        let mut seen = Vec::new();
        seq.produce(|v| {
            seen.push(v);
            seen.len() < 2
        });
        assert_eq!(seen, vec![10, 20]);
    }

    #[test]
    fn test_filter_rejecting_everything() {
        assert_eq!(count(filter(values(0..50), |_| false)), 0);
    }

    #[test]
    fn test_filter2() {
        let seq = filter2(pairs(vec![(1, "a"), (2, "bb")]), |_, v| v.len() == 2);
        let out: Vec<_> = collect2(&seq);
        assert_eq!(out, vec![(2, "bb")]);
    }
}
