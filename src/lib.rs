//! # SeqComb - Lazy Sequence Combinator Library
//!
//! Composable, lazily evaluated sequences built on a pull-based cursor protocol.
//!
//! A [`Sequence`] is a re-iterable description of a computation: chaining
//! [`select`](Sequence::select), [`filter`](Sequence::filter),
//! [`skip`](Sequence::skip), [`take`](Sequence::take) or
//! [`flat`](Sequence::flat) only composes cursor factories. Elements are
//! pulled one at a time through the whole chain when a terminal operation
//! ([`count`](Sequence::count), [`to_list`](Sequence::to_list)) or a
//! for-loop drives a fresh [`Cursor`]. The library emphasizes:
//!
//! - **Laziness**: No element is evaluated before a traversal asks for it
//! - **Re-iterability**: Every traversal gets its own cursor chain
//! - **Minimal lookahead**: Only filter and flatten buffer, and only one step
//! - **Fail-fast**: Panics in user closures propagate to the caller untouched
//!
//! ```rust
//! use seqcomb::sequence;
//!
//! let numbers = sequence![1, 2, 3, 4, 5];
//!
//! assert_eq!(numbers.filter(|x| x % 2 == 0).to_list(), vec![2, 4]);
//! assert_eq!(numbers.skip(2).take(2).to_list(), vec![3, 4]);
//! assert_eq!(numbers.flat(|x| [x, x]).count(), 10);
//! ```

pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod flatten;
pub mod map;
pub mod sequence;
pub mod skip;
pub mod take;

#[cfg(test)]
mod testing;

pub use cursor::{BoxCursor, Cursor, CursorIter};
pub use cursors::{ArrayCursor, IterCursor, SliceCursor};
pub use error::SequenceError;
pub use filter::{FilterCursor, FilterExt};
pub use flatten::{FlattenCursor, FlattenExt};
pub use map::{MapCursor, MapExt};
pub use sequence::Sequence;
pub use skip::{SkipExt, SkippedCursor};
pub use take::{BoundedCursor, TakeExt};

/// Build a [`Sequence`] from a literal list of elements
///
/// `sequence![]` is the empty sequence.
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Sequence::empty()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Sequence::of(::std::vec![$($element),+])
    };
}
