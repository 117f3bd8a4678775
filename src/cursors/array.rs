use crate::cursor::Cursor;
use std::rc::Rc;

/// Cursor over a fixed, shared list of owned elements
///
/// The backing buffer is reference counted, so every traversal of the same
/// literal sequence walks the same allocation. Elements are cloned out one at
/// a time as they are pulled.
#[derive(Debug, Clone)]
pub struct ArrayCursor<T> {
    elements: Rc<[T]>,
    position: usize,
}

impl<T> ArrayCursor<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self::shared(elements.into())
    }

    /// Create a cursor over a buffer that is already shared
    pub fn shared(elements: Rc<[T]>) -> Self {
        ArrayCursor {
            elements,
            position: 0,
        }
    }

    /// Index of the next element to be yielded
    ///
    /// For an exhausted cursor this is the length of the backing buffer
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Clone> Cursor for ArrayCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.position < self.elements.len()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(item)
    }
}
