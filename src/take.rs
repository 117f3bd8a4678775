use crate::cursor::Cursor;

/// Cursor combinator that yields at most `limit` elements of upstream
///
/// Once the limit is reached upstream is never consulted again, so an
/// expensive source is not pulled past what the consumer asked for.
pub struct BoundedCursor<C> {
    cursor: C,
    limit: usize,
    taken: usize,
}

impl<C: Cursor> BoundedCursor<C> {
    pub fn new(cursor: C, limit: usize) -> Self {
        BoundedCursor {
            cursor,
            limit,
            taken: 0,
        }
    }

    /// Number of elements yielded so far
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl<C: Cursor> Cursor for BoundedCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.taken < self.limit && self.cursor.has_more()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        if self.taken >= self.limit {
            return None;
        }
        let item = self.cursor.advance()?;
        self.taken += 1;
        Some(item)
    }
}

/// Extension trait to add .take() method support for cursors
pub trait TakeExt: Cursor + Sized {
    fn take(self, limit: usize) -> BoundedCursor<Self> {
        BoundedCursor::new(self, limit)
    }
}

impl<C> TakeExt for C where C: Cursor {}

/// Convenience function to create a BoundedCursor
pub fn take<C: Cursor>(cursor: C, limit: usize) -> BoundedCursor<C> {
    BoundedCursor::new(cursor, limit)
}
