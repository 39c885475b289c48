//! Building sequences from scratch
//!
//! This module provides the sources combinators start from: closures, replayable
//! iterables, and the trivial infinite and empty sequences.

mod func;
mod iter;

pub use func::{empty, empty2, from_fn, from_fn2, repeat, Empty, Empty2, FromFn, FromFn2, Repeat};
pub use iter::{indexed, pairs, values, Indexed, Pairs, Values};
