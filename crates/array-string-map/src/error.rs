//! Key encoding error types.
//!
//! The map itself never fails: lookups of absent keys report `None` or
//! `false`. These errors come only from the opt-in collision check in
//! [`check_elements`](crate::check_elements).

use std::error::Error;
use std::fmt;

/// A key whose encoding could collide with a different key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The separator is empty and the key has more than one element, so
    /// element boundaries are lost (`["ab"]` and `["a", "b"]` both encode
    /// to `"ab"`).
    EmptySeparator {
        /// Number of elements in the key.
        len: usize,
    },
    /// An element's string form contains the separator.
    SeparatorInElement {
        /// Position of the offending element within the key.
        index: usize,
        /// The element's rendered string.
        element: String,
    },
    /// An element begins or ends with part of a multi-character separator,
    /// so the boundary between it and a neighbour is ambiguous.
    SeparatorOverlap {
        /// Position of the offending element within the key.
        index: usize,
        /// The element's rendered string.
        element: String,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySeparator { len } => {
                write!(f, "empty separator cannot delimit a key of {len} elements")
            }
            Self::SeparatorInElement { index, element } => {
                write!(f, "element {index} ({element:?}) contains the separator")
            }
            Self::SeparatorOverlap { index, element } => {
                write!(f, "element {index} ({element:?}) overlaps the separator at an edge")
            }
        }
    }
}

impl Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_element() {
        let err = EncodeError::SeparatorInElement {
            index: 1,
            element: "a,b".into(),
        };
        assert_eq!(err.to_string(), "element 1 (\"a,b\") contains the separator");
    }

    #[test]
    fn display_empty_separator() {
        let err = EncodeError::EmptySeparator { len: 3 };
        assert_eq!(
            err.to_string(),
            "empty separator cannot delimit a key of 3 elements"
        );
    }
}
