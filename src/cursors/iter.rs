use crate::cursor::Cursor;
use std::iter::Fuse;

/// Cursor adapting any std [`Iterator`]
///
/// `Iterator` has no way to ask "is there more" without pulling, so
/// `has_more` pulls one element into a single-slot buffer and `advance`
/// hands it out before touching the iterator again. The iterator is fused so
/// exhaustion stays sticky even for iterators that resume after `None`.
#[derive(Debug, Clone)]
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    peeked: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterCursor {
            iter: iter.into_iter().fuse(),
            peeked: None,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.iter.next();
        }
        self.peeked.is_some()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        self.peeked.take().or_else(|| self.iter.next())
    }
}
