use crate::cursor::Cursor;
use crate::cursors::ArrayCursor;
use std::cell::Cell;
use std::rc::Rc;

/// Source cursor that records how many elements have been pulled from it
pub(crate) struct ProbeCursor<T> {
    inner: ArrayCursor<T>,
    pulls: Rc<Cell<usize>>,
}

impl<T> ProbeCursor<T> {
    pub(crate) fn new(elements: Vec<T>) -> Self {
        Self::with_counter(elements, Rc::new(Cell::new(0)))
    }

    /// Share one pull counter across several probes, e.g. one per traversal
    pub(crate) fn with_counter(elements: Vec<T>, pulls: Rc<Cell<usize>>) -> Self {
        ProbeCursor {
            inner: ArrayCursor::new(elements),
            pulls,
        }
    }

    pub(crate) fn pulls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.pulls)
    }
}

impl<T: Clone> Cursor for ProbeCursor<T> {
    type Item = T;

    fn has_more(&mut self) -> bool {
        self.inner.has_more()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        let item = self.inner.advance()?;
        self.pulls.set(self.pulls.get() + 1);
        Some(item)
    }
}
