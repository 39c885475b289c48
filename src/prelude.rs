//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core traits
pub use crate::{NotFound, Seq, Seq2};

// Sources
pub use crate::build::{empty, empty2, from_fn, from_fn2, indexed, pairs, repeat, values};

// Transformers
pub use crate::compose::{
    filter, filter2, map, map2, reverse, reverse2, skip, skip2, take, take2, zip,
};

// Terminals
pub use crate::terminal::{
    all, all2, any, any2, collect, collect2, count, count2, find, find2, reduce, reduce2,
};

// Pulling
pub use crate::pull::{pull, pull_with, Cursor, PullConfig};
