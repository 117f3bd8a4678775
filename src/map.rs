use crate::cursor::Cursor;

/// Cursor combinator that transforms each element using a mapping function
///
/// `has_more` is answered by upstream directly, so nothing is pulled ahead of
/// need.
pub struct MapCursor<C, F> {
    cursor: C,
    mapper: F,
}

impl<C, F> MapCursor<C, F> {
    pub fn new(cursor: C, mapper: F) -> Self {
        MapCursor { cursor, mapper }
    }
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;

    fn has_more(&mut self) -> bool {
        self.cursor.has_more()
    }

    fn advance(&mut self) -> Option<Self::Item> {
        self.cursor.advance().map(&self.mapper)
    }
}

/// Convenience function to create a MapCursor
pub fn map<C, F, U>(cursor: C, mapper: F) -> MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    MapCursor::new(cursor, mapper)
}

/// Extension trait to add .map() method support for cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> MapCursor<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        MapCursor::new(self, mapper)
    }
}

/// Implement MapExt for all cursors
impl<C> MapExt for C where C: Cursor {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ArrayCursor;
    use crate::testing::ProbeCursor;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum Token {
        Number(i64),
        Letter(char),
    }

    #[test]
    fn test_map_number_to_string() {
        let cursor = ArrayCursor::new(vec![1, 2, 3]);
        let mut mapped = cursor.map(|n| format!("Number: {}", n));

        assert_eq!(mapped.advance().unwrap(), "Number: 1");
        assert_eq!(mapped.advance().unwrap(), "Number: 2");
        assert_eq!(mapped.advance().unwrap(), "Number: 3");
        assert!(mapped.advance().is_none());
    }

    #[test]
    fn test_map_to_enum() {
        let mut mapped = ArrayCursor::new(vec!['x', 'y']).map(Token::Letter);

        assert_eq!(mapped.advance(), Some(Token::Letter('x')));
        assert_eq!(mapped.advance(), Some(Token::Letter('y')));
    }

    #[test]
    fn test_map_chaining() {
        let mut mapped = ArrayCursor::new(vec![5i64])
            .map(|n| n * 2)
            .map(|n| n + 1)
            .map(Token::Number);

        assert_eq!(mapped.advance(), Some(Token::Number(11)));
        assert!(!mapped.has_more());
    }

    #[test]
    fn test_has_more_does_not_pull() {
        let probe = ProbeCursor::new(vec![1, 2, 3]);
        let pulls = probe.pulls();
        let mut mapped = probe.map(|n| n * 10);

        assert!(mapped.has_more());
        assert!(mapped.has_more());
        assert_eq!(pulls.get(), 0);

        assert_eq!(mapped.advance(), Some(10));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_mapper_called_once_per_element() {
        let calls = Cell::new(0);
        let mut mapped = ArrayCursor::new(vec![1, 2, 3]).map(|n| {
            calls.set(calls.get() + 1);
            n
        });

        while mapped.has_more() {
            mapped.advance();
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_function_syntax() {
        let mut mapped = map(ArrayCursor::new(vec![b'9']), |byte| byte as char);

        assert_eq!(mapped.advance(), Some('9'));
        assert!(mapped.take_next().is_err());
    }
}
