use crate::cursor::Cursor;

/// Cursor over a borrowed slice, yielding references into it
///
/// Nothing is copied. The borrow keeps the slice frozen for as long as any
/// cursor (or sequence) over it is alive.
#[derive(Debug, Copy, Clone)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor { data, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Elements not yet yielded
    pub fn remaining(&self) -> &'a [T] {
        &self.data[self.position.min(self.data.len())..]
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn has_more(&mut self) -> bool {
        self.position < self.data.len()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.data.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}
