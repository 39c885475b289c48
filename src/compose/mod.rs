//! Transforming sequences into new sequences
//!
//! Every combinator here wraps its source and defers all work until the result
//! is itself produced. The one exception to "never buffer" is [`Reverse`], which
//! has to see the end of its source before it can emit the first element.

mod filter;
mod map;
mod reverse;
mod window;
mod zip;

// Re-export composition operations
pub use filter::{filter, filter2, Filter, Filter2};
pub use map::{map, map2, Map, Map2};
pub use reverse::{reverse, reverse2, Reverse, Reverse2};
pub use window::{skip, skip2, take, take2, Skip, Skip2, Take, Take2};
pub use zip::{zip, Zip};
