//! Source cursors that sit at the bottom of every combinator chain

pub mod array;
pub mod iter;
pub mod slice;

pub use array::ArrayCursor;
pub use iter::IterCursor;
pub use slice::SliceCursor;
