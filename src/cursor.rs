use crate::error::SequenceError;
use std::iter::FusedIterator;

/// Pull-based, forward-only traversal protocol
///
/// A cursor is created for exactly one traversal and is never shared. Every
/// combinator in this crate is a cursor wrapping another cursor, so pulling an
/// element from the outermost cursor pulls exactly as much from the source as
/// is needed to produce it.
///
/// Once a cursor reports exhaustion it keeps reporting exhaustion.
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Check whether another element is available
    ///
    /// May fetch and buffer one element from upstream to answer truthfully.
    /// Repeated calls without an intervening pull return the same answer and
    /// consume nothing further.
    fn has_more(&mut self) -> bool;

    /// Pull the next element, or `None` once the cursor is exhausted
    ///
    /// Calling this without a preceding `has_more` is allowed and behaves as if
    /// `has_more` had been called first.
    fn advance(&mut self) -> Option<Self::Item>;

    /// Pull the next element, returning an error if the cursor is exhausted
    ///
    /// Unlike `advance()`, running past the end is reported as
    /// [`SequenceError::Exhausted`].
    fn take_next(&mut self) -> Result<Self::Item, SequenceError> {
        match self.advance() {
            Some(item) => Ok(item),
            None => {
                let error = SequenceError::exhausted::<Self>();
                log::debug!("{error}");
                Err(error)
            }
        }
    }

    /// Turn this cursor into a std [`Iterator`]
    fn into_cursor_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        (**self).advance()
    }

    fn take_next(&mut self) -> Result<Self::Item, SequenceError> {
        (**self).take_next()
    }
}

/// Type-erased cursor produced by a [`Sequence`](crate::Sequence) factory
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

/// Adapter exposing a cursor through the std [`Iterator`] trait
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        CursorIter { cursor }
    }

    /// Give back the wrapped cursor, including any element it has buffered
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance()
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}
