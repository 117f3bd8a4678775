//! Re-iterable lazy sequences
//!
//! A [`Sequence`] never holds a cursor. It holds a factory that builds a fresh
//! cursor chain every time the sequence is traversed, so a sequence can be
//! counted, listed and looped over any number of times and every traversal
//! starts from the beginning with its own state.
//!
//! Combinators only compose factories. No element is touched until a
//! terminal operation ([`Sequence::count`], [`Sequence::to_list`]) or a
//! manual traversal pulls it.

use crate::cursor::{BoxCursor, Cursor, CursorIter};
use crate::cursors::{ArrayCursor, IterCursor, SliceCursor};
use crate::filter::FilterExt;
use crate::flatten::FlattenExt;
use crate::map::MapExt;
use crate::skip::SkipExt;
use crate::take::TakeExt;
use std::fmt;
use std::rc::Rc;

type Factory<'a, T> = Rc<dyn Fn() -> BoxCursor<'a, T> + 'a>;

/// Immutable, lazily evaluated, re-iterable description of an ordered
/// computation over elements
///
/// Cloning is cheap and shares the factory. A sequence and its cursors are
/// single threaded; traversals that need to happen elsewhere must build their
/// own sequence there.
pub struct Sequence<'a, T> {
    factory: Factory<'a, T>,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Create a sequence from a cursor factory
    ///
    /// The factory is called once per traversal and must return a cursor
    /// positioned at the start.
    pub fn from_factory<C, F>(factory: F) -> Self
    where
        F: Fn() -> C + 'a,
        C: Cursor<Item = T> + 'a,
    {
        Sequence {
            factory: Rc::new(move || Box::new(factory()) as BoxCursor<'a, T>),
        }
    }

    /// Adapt any iterable into a sequence
    ///
    /// Each traversal clones `iterable` and iterates the clone, so this is
    /// cheapest for handles such as `&Vec<T>`, slices' `iter()` or ranges.
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T> + Clone + 'a,
    {
        Self::from_factory(move || IterCursor::new(iterable.clone()))
    }

    pub fn empty() -> Self {
        Self::from_factory(|| IterCursor::new(std::iter::empty()))
    }

    /// Start a new traversal
    pub fn cursor(&self) -> BoxCursor<'a, T> {
        (self.factory)()
    }

    /// Start a new traversal through the std [`Iterator`] interface
    pub fn iter(&self) -> CursorIter<BoxCursor<'a, T>> {
        CursorIter::new(self.cursor())
    }

    /// Transform every element, one to one
    pub fn select<R, F>(&self, transform: F) -> Sequence<'a, R>
    where
        F: Fn(T) -> R + 'a,
        R: 'a,
    {
        let parent = Rc::clone(&self.factory);
        let transform = Rc::new(transform);
        Sequence::from_factory(move || {
            let transform = Rc::clone(&transform);
            parent().map(move |item| transform(item))
        })
    }

    /// Keep only the elements accepted by `predicate`, in their original order
    #[doc(alias = "where")]
    pub fn filter<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let parent = Rc::clone(&self.factory);
        let predicate = Rc::new(predicate);
        Sequence::from_factory(move || {
            let predicate = Rc::clone(&predicate);
            parent().filter(move |item: &T| predicate(item))
        })
    }

    /// Drop the first `count` elements
    ///
    /// Skipping past the end yields an empty sequence. The count is unsigned,
    /// so there is no negative case to handle.
    pub fn skip(&self, count: usize) -> Sequence<'a, T> {
        let parent = Rc::clone(&self.factory);
        Sequence::from_factory(move || parent().skip(count))
    }

    /// Yield at most `limit` elements
    pub fn take(&self, limit: usize) -> Sequence<'a, T> {
        let parent = Rc::clone(&self.factory);
        Sequence::from_factory(move || parent().take(limit))
    }

    /// Expand every element into an iterable and concatenate the results
    ///
    /// `expand` runs once per element per traversal. Elements that expand to
    /// nothing contribute nothing.
    pub fn flat<R, I, F>(&self, expand: F) -> Sequence<'a, R>
    where
        F: Fn(T) -> I + 'a,
        I: IntoIterator<Item = R> + 'a,
        R: 'a,
    {
        let parent = Rc::clone(&self.factory);
        let expand = Rc::new(expand);
        Sequence::from_factory(move || {
            let expand = Rc::clone(&expand);
            parent().flat(move |item| expand(item))
        })
    }

    /// Drain one fresh traversal and return how many elements it produced
    pub fn count(&self) -> usize {
        let mut cursor = self.cursor();
        let mut count = 0;
        while cursor.advance().is_some() {
            count += 1;
        }
        log::trace!("sequence count drained {count} elements");
        count
    }

    /// Drain one fresh traversal into a list, in traversal order
    pub fn to_list(&self) -> Vec<T> {
        let list: Vec<T> = self.iter().collect();
        log::trace!("sequence to_list drained {} elements", list.len());
        list
    }
}

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// Create a sequence over a literal list of elements
    ///
    /// The list is moved into a shared buffer; traversals clone elements out
    /// of it. See also the [`sequence!`](crate::sequence!) macro.
    pub fn of(elements: Vec<T>) -> Self {
        Self::from_shared(elements.into())
    }

    /// Create a sequence over an already shared buffer
    pub fn from_shared(elements: Rc<[T]>) -> Self {
        Self::from_factory(move || ArrayCursor::shared(Rc::clone(&elements)))
    }
}

impl<'a, T> Sequence<'a, &'a T> {
    /// Create a sequence of references into a borrowed slice
    ///
    /// Nothing is copied, and the slice cannot be modified while the
    /// sequence is alive.
    pub fn from_slice(data: &'a [T]) -> Self {
        Self::from_factory(move || SliceCursor::new(data))
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Sequence {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

impl<'a, T: Clone + 'a> From<Vec<T>> for Sequence<'a, T> {
    fn from(elements: Vec<T>) -> Self {
        Sequence::of(elements)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::of(iter.into_iter().collect())
    }
}

impl<'a, T: 'a> IntoIterator for Sequence<'a, T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: 'a> IntoIterator for &Sequence<'a, T> {
    type Item = T;
    type IntoIter = CursorIter<BoxCursor<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
