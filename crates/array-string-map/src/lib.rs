//! An insertion-ordered map keyed by arrays.
//!
//! Native maps compare array keys by identity when the array is a reference
//! type, and by full structural equality otherwise. [`ArrayStringMap`] sits in
//! between: two keys address the same entry when their elements render to
//! the same strings, and the map hands back the exact key object that was
//! most recently stored for that entry.
//!
//! # Architecture
//!
//! ```text
//! ArrayStringMap<K, V>
//! ├── values: IndexMap<String, V>   (encoded key → value)
//! ├── keys:   IndexMap<String, K>   (encoded key → original key object)
//! └── sep:    String                (joins element strings, default U+200B)
//! ```
//!
//! Both maps are written together and share one insertion order, so
//! traversal zips them positionally.
//!
//! # Separator collisions
//!
//! The encoding is `elements.map(to_string).join(sep)`. If an element's
//! string form can contain the separator, distinct keys can collide. The
//! map does not guard against this; use [`ArrayStringMap::check_key`] when
//! keys come from untrusted input, or pick a separator that validation
//! already excludes.
//!
//! ```rust
//! use array_string_map::ArrayStringMap;
//!
//! let mut map = ArrayStringMap::new();
//! map.set(vec![1, 2], "a").set(vec![1, 3], "b");
//!
//! assert_eq!(map.get(&[1, 2]), Some(&"a"));
//! assert!(!map.has(&[2, 1]));
//! assert_eq!(map.size(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod encode;
pub mod error;
pub mod iter;
pub mod key;
pub mod map;
#[cfg(feature = "serde")]
mod serde_impl;

// Public re-exports for the primary API surface.
pub use config::MapConfig;
pub use encode::{check_elements, encode_elements};
pub use error::EncodeError;
pub use iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
pub use key::KeySequence;
pub use map::ArrayStringMap;
