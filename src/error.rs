use thiserror::Error;

/// Errors reported by the cursor protocol
///
/// The library itself never fails under well-formed use. The only condition it
/// reports is asking a cursor for an element it does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// `take_next` was called on a cursor with no remaining elements
    #[error("iteration exhausted: {cursor} has no more elements")]
    Exhausted {
        /// Type name of the cursor that ran dry
        cursor: &'static str,
    },
}

impl SequenceError {
    pub fn exhausted<C: ?Sized>() -> Self {
        SequenceError::Exhausted {
            cursor: std::any::type_name::<C>(),
        }
    }

    /// Returns true if this error reports an exhausted cursor
    pub fn is_exhausted(&self) -> bool {
        matches!(self, SequenceError::Exhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::ArrayCursor;

    #[test]
    fn test_exhausted_display_names_cursor() {
        let error = SequenceError::exhausted::<ArrayCursor<u32>>();

        let display_str = error.to_string();
        assert!(display_str.contains("iteration exhausted"));
        assert!(display_str.contains("ArrayCursor"));
        assert!(error.is_exhausted());
    }

    #[test]
    fn test_exhausted_errors_compare_by_cursor() {
        assert_eq!(
            SequenceError::exhausted::<ArrayCursor<u32>>(),
            SequenceError::exhausted::<ArrayCursor<u32>>()
        );
        assert_ne!(
            SequenceError::exhausted::<ArrayCursor<u32>>(),
            SequenceError::exhausted::<ArrayCursor<u8>>()
        );
    }
}
