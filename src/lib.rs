//! # lazyseq: Lazy Sequence Combinators
//!
//! Build lazy sequences, transform them without materializing intermediate
//! collections, and drive them with short-circuiting terminal operations.
//!
//! ## Core Traits
//!
//! - **[`Seq`]**: a suspended traversal that pushes single values into a step callback
//! - **[`Seq2`]**: the same, for key/value pairs
//!
//! A step callback returns `true` to ask for more and `false` to stop. Stopping is
//! the only cancellation mechanism, and every combinator honors it.
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let scores = pairs(vec![("ann", 7), ("bob", 3), ("cid", 9), ("dee", 5)]);
//!
//! // Nothing runs until a terminal drives the pipeline.
//! let passing = scores.filter(|_, score| *score >= 5).map(|name, _| name);
//! assert_eq!(passing.collect::<Vec<_>>(), vec!["ann", "cid", "dee"]);
//!
//! let ranked = zip(values(1..), &passing);
//! assert_eq!(ranked.find(|_, name| *name == "cid"), Ok((2, "cid")));
//! ```
//!
//! ## Common Functions
//!
//! **Sources:** [`values`], [`pairs`], [`indexed`], [`from_fn`], [`from_fn2`],
//! [`repeat`], [`empty`]
//!
//! **Terminals:** [`all`], [`any`], [`count`], [`find`], [`reduce`], [`collect`]
//! (and their `*2` twins)
//!
//! **Transformers:** [`filter`], [`map`], [`skip`], [`take`], [`reverse`]
//! (and their `*2` twins), [`zip`]
//!
//! **Pulling:** [`pull`] turns a sequence into an [`Iterator`] for the duration
//! of a closure.

pub mod build;
pub mod compose;
pub mod error;
pub mod prelude;
pub mod pull;
pub mod terminal;

mod seq;

pub use build::*;
pub use compose::*;
pub use error::NotFound;
pub use pull::{pull, pull_with, Cursor, PullConfig};
pub use seq::{Seq, Seq2};
pub use terminal::*;
