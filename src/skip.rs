use crate::cursor::Cursor;

/// Cursor combinator that drops the first `count` elements of upstream
///
/// The prefix is discarded on first use, not on construction. Once it has
/// been dropped every call is plain delegation. A source shorter than `count`
/// simply ends up empty.
pub struct SkippedCursor<C> {
    cursor: C,
    remaining: usize,
}

impl<C: Cursor> SkippedCursor<C> {
    pub fn new(cursor: C, count: usize) -> Self {
        SkippedCursor {
            cursor,
            remaining: count,
        }
    }

    fn drop_prefix(&mut self) {
        while self.remaining > 0 {
            if self.cursor.advance().is_none() {
                log::trace!("skip ran out of elements with {} left to drop", self.remaining);
                self.remaining = 0;
                return;
            }
            self.remaining -= 1;
        }
    }
}

impl<C: Cursor> Cursor for SkippedCursor<C> {
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        self.drop_prefix();
        self.cursor.has_more()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        self.drop_prefix();
        self.cursor.advance()
    }
}

/// Extension trait to add .skip() method support for cursors
pub trait SkipExt: Cursor + Sized {
    fn skip(self, count: usize) -> SkippedCursor<Self> {
        SkippedCursor::new(self, count)
    }
}

impl<C> SkipExt for C where C: Cursor {}

/// Convenience function to create a SkippedCursor
pub fn skip<C: Cursor>(cursor: C, count: usize) -> SkippedCursor<C> {
    SkippedCursor::new(cursor, count)
}
