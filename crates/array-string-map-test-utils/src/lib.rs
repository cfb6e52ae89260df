//! Test utilities and mock key types for array-string-map development.
//!
//! Provides a key type with an observable identity ([`TaggedKey`]), an
//! ordered reference model to check the map against ([`ReferenceMap`]),
//! and callback fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt::Display;

use array_string_map::KeySequence;

/// A key whose elements decide equivalence and whose `tag` does not.
///
/// Two `TaggedKey`s with the same elements but different tags address the
/// same map entry, so the tag reveals which instance the map kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaggedKey<E> {
    pub elements: Vec<E>,
    pub tag: u32,
}

impl<E> TaggedKey<E> {
    pub fn new(elements: Vec<E>, tag: u32) -> Self {
        Self { elements, tag }
    }
}

impl<E: Display> KeySequence for TaggedKey<E> {
    type Element = E;

    fn elements(&self) -> &[E] {
        &self.elements
    }
}

/// Insertion-ordered reference model with plain `Vec` equality on keys.
///
/// Deliberately naive (linear scans) so it is obviously correct. Mirrors
/// the map's rules: re-setting a key replaces value and key in place,
/// removal keeps the order of the rest.
#[derive(Clone, Debug)]
pub struct ReferenceMap<E, V> {
    entries: Vec<(Vec<E>, V)>,
}

impl<E: PartialEq + Clone, V> ReferenceMap<E, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn set(&mut self, key: Vec<E>, value: V) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => *entry = (key, value),
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &[E]) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_slice() == key)
            .map(|(_, v)| v)
    }

    /// Returns `true` if an entry was removed.
    pub fn delete(&mut self, key: &[E]) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k.as_slice() != key);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(Vec<E>, V)] {
        &self.entries
    }
}

impl<E: PartialEq + Clone, V> Default for ReferenceMap<E, V> {
    fn default() -> Self {
        Self::new()
    }
}
