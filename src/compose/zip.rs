use std::thread;

use tracing::debug;

use crate::{
    pull::{Cursor, PullConfig},
    seq::{Seq, Seq2},
};

/// Pairs two sequences element by element.
///
/// Each side is advanced through its own [`Cursor`], one element at a time, so
/// neither source is buffered. Production ends as soon as either side runs out;
/// the rest of the longer side is never produced. The right side is not asked
/// for an element once the left side is exhausted.
///
/// Both cursors are released before `produce` returns, including when the
/// downstream step stops early or panics.
#[derive(Clone)]
pub struct Zip<A, B> {
    left: A,
    right: B,
    config: PullConfig,
}

/// Create a pair sequence of `(left[i], right[i])` up to the shorter length.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let seq = zip(values([1, 2, 3, 4]), values(["a", "b", "c"]));
/// assert_eq!(
///     seq.collect::<Vec<_>>(),
///     vec![(1, "a"), (2, "b"), (3, "c")],
/// );
/// ```
pub fn zip<A: Seq, B: Seq>(left: A, right: B) -> Zip<A, B> {
    Zip {
        left,
        right,
        config: PullConfig::default(),
    }
}

impl<A, B> Zip<A, B> {
    /// Use `config` for the two cursor producer threads.
    pub fn with_config(mut self, config: PullConfig) -> Self {
        self.config = config;
        self
    }
}

impl<A, B> Seq2 for Zip<A, B>
where
    A: Seq + Sync,
    B: Seq + Sync,
    A::Item: Send,
    B::Item: Send,
{
    type Key = A::Item;
    type Value = B::Item;

    /// # Panics
    ///
    /// Panics if a cursor producer thread cannot be spawned, and re-raises any
    /// panic from either source.
    fn produce<F>(&self, mut step: F)
    where
        F: FnMut(A::Item, B::Item) -> bool,
    {
        thread::scope(|scope| {
            let mut left = Cursor::spawn(scope, &self.left, &self.config)
                .unwrap_or_else(|err| panic!("{}", spawn_failure("left", &err)));
            let mut right = Cursor::spawn(scope, &self.right, &self.config)
                .unwrap_or_else(|err| panic!("{}", spawn_failure("right", &err)));

            let mut emitted = 0_usize;
            loop {
                let Some(a) = left.next() else { break };
                let Some(b) = right.next() else { break };
                emitted += 1;
                if !step(a, b) {
                    break;
                }
            }
            debug!(emitted, "zip finished");
        })
    }
}

fn spawn_failure(side: &str, err: &std::io::Error) -> String {
    format!("failed to spawn {side} zip cursor: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, from_fn, repeat, values};
    use crate::terminal::{collect2, count, count2};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[test]
    fn test_zip_stops_at_shorter() {
        let seq = zip(values([1, 2, 3, 4]), values(["a", "b", "c"]));
        let out: Vec<_> = collect2(&seq);
        assert_eq!(out, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_zip_with_empty() {
        assert_eq!(count2(zip(empty::<i32>(), values([1, 2]))), 0);
        assert_eq!(count2(zip(values([1, 2]), empty::<i32>())), 0);
    }

    #[test]
    fn test_zip_length_is_min() {
        for (a, b) in [(0, 3), (3, 0), (2, 5), (5, 2), (4, 4)] {
            let seq = zip(values(0..a), values(0..b));
            assert_eq!(count2(&seq), count(values(0..a)).min(count(values(0..b))));
        }
    }

    #[test]
    fn test_zip_with_infinite_side() {
        let out: Vec<_> = collect2(zip(repeat('z'), values([1, 2])));
        assert_eq!(out, vec![('z', 1), ('z', 2)]);
    }

    #[test]
    fn test_zip_advances_in_lockstep() {
        let events = Mutex::new(Vec::new());
        let log = &events;
        let side = move |tag: &'static str| {
            from_fn(move |step: &mut dyn FnMut(usize) -> bool| {
                for i in 0..3 {
                    log.lock().unwrap().push(format!("{tag}{i}"));
                    if !step(i) {
                        log.lock().unwrap().push(format!("{tag}-stop"));
                        return;
                    }
                }
            })
        };

        let seq = zip(side("L"), side("R"));
        seq.produce(|a, _| {
            log.lock().unwrap().push(format!("S{a}"));
            a < 1
        });
        drop(seq);

        let events = events.into_inner().unwrap();
        assert_eq!(
            events,
            vec!["L0", "R0", "S0", "L1", "R1", "S1", "R-stop", "L-stop"]
        );
    }

    #[test]
    fn test_zip_does_not_advance_right_after_left_is_exhausted() {
        let produced = AtomicUsize::new(0);
        let right = from_fn(|step: &mut dyn FnMut(usize) -> bool| {
            for i in 0.. {
                produced.fetch_add(1, Ordering::SeqCst);
                if !step(i) {
                    return;
                }
            }
        });

        let out: Vec<_> = collect2(zip(values(["only"]), &right));
        assert_eq!(out, vec![("only", 0)]);
        assert_eq!(produced.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_zip_early_stop_releases_both_sources() {
        let live = AtomicUsize::new(0);
        let counter = &live;
        let side = move || {
            from_fn(move |step: &mut dyn FnMut(u8) -> bool| {
                counter.fetch_add(1, Ordering::SeqCst);
                for i in 0.. {
                    if !step(i) {
                        break;
                    }
                }
                counter.fetch_sub(1, Ordering::SeqCst);
            })
        };

        let seq = zip(side(), side());
        let mut seen = 0;
        seq.produce(|_, _| {
            seen += 1;
            false
        });
        assert_eq!(seen, 1);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zip_is_replayable() {
        let seq = zip(values(vec![1, 2]), values(vec![3, 4]));
        let first: Vec<_> = collect2(&seq);
        let second: Vec<_> = collect2(&seq);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zip_with_config() {
        let seq = zip(values([1]), values([2])).with_config(PullConfig::new().name("zip-side"));
        let out: Vec<_> = collect2(&seq);
        assert_eq!(out, vec![(1, 2)]);
    }

    #[test]
    fn test_spawn_failure_names_the_side() {
        let err = std::io::Error::new(std::io::ErrorKind::OutOfMemory, "no threads");
        assert_eq!(
            spawn_failure("left", &err),
            "failed to spawn left zip cursor: no threads"
        );
        assert!(spawn_failure("right", &err).contains("right zip cursor"));
    }

    #[test]
    #[should_panic(expected = "downstream failed")]
    fn test_zip_downstream_panic_propagates() {
        zip(values(0..10), values(0..10)).produce(|_, _| panic!("downstream failed"));
    }
}
