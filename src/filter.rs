use crate::cursor::Cursor;

/// Cursor combinator that only yields elements accepted by a predicate
///
/// Knowing whether another element exists means finding one that passes, so
/// `has_more` scans upstream and holds the first match in a one-element
/// buffer until it is taken.
pub struct FilterCursor<C: Cursor, F> {
    cursor: C,
    predicate: F,
    pending: Option<C::Item>,
}

impl<C: Cursor, F> FilterCursor<C, F> {
    pub fn new(cursor: C, predicate: F) -> Self {
        Self {
            cursor,
            predicate,
            pending: None,
        }
    }
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_more(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }

        let mut rejected = 0usize;
        while let Some(item) = self.cursor.advance() {
            if (self.predicate)(&item) {
                self.pending = Some(item);
                return true;
            }
            rejected += 1;
        }

        log::trace!("filter upstream exhausted after rejecting {rejected} elements");
        false
    }

    fn advance(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            self.pending.take()
        } else {
            None
        }
    }
}

/// Extension trait to add filter method to all cursors
pub trait FilterExt: Cursor {
    #[doc(alias = "where")]
    fn filter<F>(self, predicate: F) -> FilterCursor<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> bool,
    {
        FilterCursor::new(self, predicate)
    }
}

impl<C: Cursor> FilterExt for C {}

/// Convenience function to create a filtered cursor
pub fn filter<C, F>(cursor: C, predicate: F) -> FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    FilterCursor::new(cursor, predicate)
}
