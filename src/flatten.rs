use crate::cursor::Cursor;
use crate::cursors::IterCursor;

/// Cursor combinator that expands each element into a sub-sequence and
/// yields the sub-sequences back to back
///
/// The outer cursor is only advanced once the current inner cursor is
/// exhausted. Elements whose expansion is empty are skipped transparently:
/// `has_more` keeps pulling outer elements until it finds a non-empty
/// expansion or the outer cursor runs dry. This is a loop, so a long run of
/// empty expansions costs time but never stack.
pub struct FlattenCursor<C, F, I>
where
    I: IntoIterator,
{
    cursor: C,
    expand: F,
    inner: Option<IterCursor<I::IntoIter>>,
}

impl<C, F, I> FlattenCursor<C, F, I>
where
    I: IntoIterator,
{
    pub fn new(cursor: C, expand: F) -> Self {
        FlattenCursor {
            cursor,
            expand,
            inner: None,
        }
    }
}

impl<C, F, I> Cursor for FlattenCursor<C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoIterator,
{
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        let mut drained = 0usize;
        loop {
            if let Some(inner) = &mut self.inner {
                if inner.has_more() {
                    return true;
                }
                self.inner = None;
                drained += 1;
            }

            match self.cursor.advance() {
                Some(outer) => self.inner = Some(IterCursor::new((self.expand)(outer))),
                None => {
                    log::trace!(
                        "flatten outer cursor exhausted after draining {drained} inner cursors"
                    );
                    return false;
                }
            }
        }
    }

    fn advance(&mut self) -> Option<Self::Item> {
        if self.has_more() {
            self.inner.as_mut()?.advance()
        } else {
            None
        }
    }
}

/// Extension trait to add .flat() method support for cursors
pub trait FlattenExt: Cursor + Sized {
    fn flat<F, I>(self, expand: F) -> FlattenCursor<Self, F, I>
    where
        F: Fn(Self::Item) -> I,
        I: IntoIterator,
    {
        FlattenCursor::new(self, expand)
    }
}

impl<C> FlattenExt for C where C: Cursor {}

/// Convenience function to create a FlattenCursor
pub fn flat<C, F, I>(cursor: C, expand: F) -> FlattenCursor<C, F, I>
where
    C: Cursor,
    F: Fn(C::Item) -> I,
    I: IntoIterator,
{
    FlattenCursor::new(cursor, expand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::CursorIter;
    use crate::cursors::ArrayCursor;
    use crate::testing::ProbeCursor;

    fn drain<C: Cursor>(cursor: C) -> Vec<C::Item> {
        CursorIter::new(cursor).collect()
    }

    #[test]
    fn test_flat_duplicates() {
        let doubled = ArrayCursor::new(vec![1, 2, 3]).flat(|n| [n, n]);

        assert_eq!(drain(doubled), vec![1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_skips_empty_expansions() {
        let expanded = ArrayCursor::new(vec![0usize, 2, 0, 0, 1, 0]).flat(|n| vec!['x'; n]);

        assert_eq!(drain(expanded), vec!['x', 'x', 'x']);
    }

    #[test]
    fn test_all_empty_expansions() {
        let mut expanded = ArrayCursor::new(vec![1, 2, 3]).flat(|_| Vec::<u8>::new());

        assert!(!expanded.has_more());
        assert!(!expanded.has_more());
        assert!(expanded.take_next().unwrap_err().is_exhausted());
    }

    #[test]
    fn test_long_run_of_empty_expansions() {
        let mut outer = vec![0u32; 200_000];
        outer.push(1);
        let mut expanded = ArrayCursor::new(outer).flat(|n| 0..n);

        assert!(expanded.has_more());
        assert_eq!(expanded.advance(), Some(0));
        assert!(!expanded.has_more());
    }

    #[test]
    fn test_outer_advanced_only_when_inner_exhausted() {
        let probe = ProbeCursor::new(vec![3, 2]);
        let pulls = probe.pulls();
        let mut expanded = probe.flat(|n| 0..n);

        assert_eq!(expanded.advance(), Some(0));
        assert_eq!(pulls.get(), 1);
        assert_eq!(expanded.advance(), Some(1));
        assert_eq!(expanded.advance(), Some(2));
        assert_eq!(pulls.get(), 1);

        assert_eq!(expanded.advance(), Some(0));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_expand_called_once_per_outer_element() {
        let calls = std::cell::Cell::new(0);
        let expanded = ArrayCursor::new(vec!["ab", "", "c"]).flat(|s| {
            calls.set(calls.get() + 1);
            s.chars()
        });

        assert_eq!(drain(expanded), vec!['a', 'b', 'c']);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_flatten_nested_cursors() {
        let expanded = ArrayCursor::new(vec![vec![1, 2], vec![], vec![3]])
            .flat(|inner| CursorIter::new(ArrayCursor::new(inner)));

        assert_eq!(drain(expanded), vec![1, 2, 3]);
    }

    #[test]
    fn test_function_syntax() {
        let expanded = flat(ArrayCursor::new(vec!["a b", "c"]), |s| s.split(' '));

        assert_eq!(drain(expanded), vec!["a", "b", "c"]);
    }
}
