//! Key encoding: elements rendered to strings and joined by a separator.
//!
//! The encoded string is the identity of an entry. Two keys collide when
//! their encodings are equal, which happens for distinct keys only if the
//! separator can be confused with element text (`["a,b"]` and `["a", "b"]`
//! under `","`) or for the empty key and `[""]`, which both encode to `""`.

use std::fmt::{Display, Write};

use crate::error::EncodeError;

/// Join the string forms of `elements` with `sep`.
///
/// Runs in time linear in the total rendered length. The empty sequence
/// encodes to the empty string.
pub fn encode_elements<E: Display>(elements: &[E], sep: &str) -> String {
    let mut encoded = String::new();
    for (index, element) in elements.iter().enumerate() {
        if index > 0 {
            encoded.push_str(sep);
        }
        // Writing into a String cannot fail.
        let _ = write!(encoded, "{element}");
    }
    encoded
}

/// Report elements whose string form could be confused with `sep`.
///
/// Flags an element that contains the separator, and (for multi-character
/// separators) one that begins or ends with part of it, since that part
/// can merge with a neighbouring separator. Returns the first problem
/// found. Not called by the map's write path.
pub fn check_elements<E: Display>(elements: &[E], sep: &str) -> Result<(), EncodeError> {
    if sep.is_empty() {
        if elements.len() > 1 {
            return Err(EncodeError::EmptySeparator {
                len: elements.len(),
            });
        }
        return Ok(());
    }

    for (index, element) in elements.iter().enumerate() {
        let rendered = element.to_string();
        if rendered.contains(sep) {
            return Err(EncodeError::SeparatorInElement {
                index,
                element: rendered,
            });
        }
        if overlaps_edge(&rendered, sep) {
            return Err(EncodeError::SeparatorOverlap {
                index,
                element: rendered,
            });
        }
    }
    Ok(())
}

/// Whether `element` starts with a proper suffix of `sep` or ends with a
/// proper prefix of it.
fn overlaps_edge(element: &str, sep: &str) -> bool {
    sep.char_indices().skip(1).any(|(split, _)| {
        let (head, tail) = sep.split_at(split);
        element.ends_with(head) || element.starts_with(tail)
    })
}
