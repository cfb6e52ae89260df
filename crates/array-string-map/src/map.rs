//! The [`ArrayStringMap`] container.

use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;

use crate::config::MapConfig;
use crate::encode::{check_elements, encode_elements};
use crate::error::EncodeError;
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use crate::key::KeySequence;

/// An insertion-ordered map whose keys are compared by element content.
///
/// Each key is encoded by joining the string forms of its elements with
/// the configured separator (see [`MapConfig::separator`]). Two keys with
/// the same encoding address the same entry, regardless of which container
/// instance carried them.
///
/// The map stores the encoded string twice: once against the value and once
/// against the original key object, so traversal yields the caller's key
/// rather than a decoded copy. Re-setting an existing entry replaces both
/// the value and the stored key object, but keeps the entry's position.
///
/// Not synchronized; wrap in a lock to share mutable access across threads.
/// Removal shifts later entries down to preserve order, so
/// [`delete`](Self::delete) and [`remove`](Self::remove) are O(n).
pub struct ArrayStringMap<K, V> {
    /// Encoded key → value.
    values: IndexMap<String, V>,
    /// Encoded key → the key object most recently set for it.
    ///
    /// Always holds exactly the encoded keys of `values`, in the same order.
    keys: IndexMap<String, K>,
    sep: String,
}

impl<K, V> ArrayStringMap<K, V> {
    /// Create an empty map using the default separator (U+200B).
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Create an empty map joining key elements with `sep`.
    ///
    /// `sep` must not occur in (or merge with) any element's string form,
    /// otherwise distinct keys can land on the same entry. It is not
    /// validated.
    pub fn with_separator(sep: impl Into<String>) -> Self {
        Self::with_config(MapConfig::new().with_separator(sep))
    }

    /// Create an empty map from a full configuration.
    pub fn with_config(config: MapConfig) -> Self {
        if config.has_custom_separator() {
            tracing::debug!(
                separator = ?config.separator,
                capacity = config.capacity,
                "array string map using custom separator"
            );
        }
        Self {
            values: IndexMap::with_capacity(config.capacity),
            keys: IndexMap::with_capacity(config.capacity),
            sep: config.separator,
        }
    }

    /// The separator used to join key elements.
    pub fn sep(&self) -> &str {
        &self.sep
    }

    /// Number of distinct encoded keys stored.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Alias for [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The encoded form of `key` under this map's separator.
    pub fn encode_key<Q: KeySequence + ?Sized>(&self, key: &Q) -> String {
        encode_elements(key.elements(), &self.sep)
    }

    /// Check whether `key` could collide with a different key under this
    /// map's separator.
    ///
    /// Opt-in: [`set`](Self::set) never calls this. Useful as a validation
    /// step when key elements come from untrusted input.
    pub fn check_key<Q: KeySequence + ?Sized>(&self, key: &Q) -> Result<(), EncodeError> {
        check_elements(key.elements(), &self.sep)
    }

    /// The value stored for `key`, if any.
    pub fn get<Q: KeySequence + ?Sized>(&self, key: &Q) -> Option<&V> {
        self.values.get(self.encode_key(key).as_str())
    }

    /// The stored key object and value for `key`, if any.
    ///
    /// The returned key is the instance most recently passed to
    /// [`set`](Self::set) for this entry, not `key` itself.
    pub fn get_key_value<Q: KeySequence + ?Sized>(&self, key: &Q) -> Option<(&K, &V)> {
        let encoded = self.encode_key(key);
        let (index, _, value) = self.values.get_full(encoded.as_str())?;
        let (_, stored) = self.keys.get_index(index)?;
        Some((stored, value))
    }

    /// Mutable access to the value stored for `key`, if any.
    pub fn get_mut<Q: KeySequence + ?Sized>(&mut self, key: &Q) -> Option<&mut V> {
        let encoded = self.encode_key(key);
        self.values.get_mut(encoded.as_str())
    }

    /// Whether an entry exists for `key`.
    pub fn has<Q: KeySequence + ?Sized>(&self, key: &Q) -> bool {
        self.values.contains_key(self.encode_key(key).as_str())
    }

    /// Remove the entry for `key`. Returns `true` if one existed.
    pub fn delete<Q: KeySequence + ?Sized>(&mut self, key: &Q) -> bool {
        self.remove(key).is_some()
    }

    /// Remove the entry for `key`, returning the stored key object and value.
    ///
    /// Later entries keep their relative order.
    pub fn remove<Q: KeySequence + ?Sized>(&mut self, key: &Q) -> Option<(K, V)> {
        let encoded = self.encode_key(key);
        let (index, _, value) = self.values.shift_remove_full(encoded.as_str())?;
        let (_, stored) = self.keys.shift_remove_index(index)?;
        Some((stored, value))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        let dropped = self.values.len();
        self.values.clear();
        self.keys.clear();
        tracing::trace!(dropped, "array string map cleared");
    }

    /// Keep only the entries for which `keep` returns `true`.
    ///
    /// Visits entries in insertion order; survivors keep their order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let keys = &self.keys;
        self.values.retain(|encoded, value| match keys.get(encoded.as_str()) {
            Some(key) => keep(key, value),
            None => false,
        });
        let values = &self.values;
        self.keys.retain(|encoded, _| values.contains_key(encoded.as_str()));
    }

    /// Iterate `(key, value)` pairs in insertion order.
    ///
    /// Each call starts a fresh traversal. Keys are the stored objects,
    /// so identity-sensitive keys (`Rc<[T]>`, `Arc<[T]>`) compare
    /// pointer-equal to the instance last passed to [`set`](Self::set).
    pub fn entries(&self) -> Iter<'_, K, V> {
        Iter::new(self.keys.values(), self.values.values())
    }

    /// Same as [`entries`](Self::entries).
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries()
    }

    /// Iterate `(key, &mut value)` pairs in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.keys.values(), self.values.values_mut())
    }

    /// Iterate stored key objects in insertion order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys::new(self.keys.values())
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.values.values())
    }

    /// Iterate values mutably in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut::new(self.values.values_mut())
    }

    /// Call `f(value, key, map)` once per entry, in insertion order.
    ///
    /// A panic in `f` unwinds out of this call and skips the remaining
    /// entries. Use [`try_for_each`](Self::try_for_each) for fallible
    /// callbacks.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self.entries() {
            f(value, key, self);
        }
    }

    /// Call `f(value, key, map)` once per entry until it returns an error.
    ///
    /// The first error is returned unchanged and no further entries are
    /// visited.
    pub fn try_for_each<E, F>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&V, &K, &Self) -> Result<(), E>,
    {
        for (key, value) in self.entries() {
            f(value, key, self)?;
        }
        Ok(())
    }
}

impl<K: KeySequence, V> ArrayStringMap<K, V> {
    /// Store `value` under `key`, returning the map for chaining.
    ///
    /// If an entry with the same encoding exists, both its value and its
    /// stored key object are replaced by the new ones; its position in
    /// iteration order is unchanged.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        let _ = self.insert(key, value);
        self
    }

    /// Store `value` under `key`, returning the value it replaced.
    ///
    /// Same replacement rules as [`set`](Self::set).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let encoded = self.encode_key(&key);
        // `IndexMap::insert` on a present key keeps its index, so both maps
        // stay aligned whether this is a new entry or an overwrite.
        let previous = self.values.insert(encoded.clone(), value);
        let _ = self.keys.insert(encoded, key);
        previous
    }
}

impl<K, V> Default for ArrayStringMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for ArrayStringMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            keys: self.keys.clone(),
            sep: self.sep.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ArrayStringMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ArrayStringMap ")?;
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Entry-wise equality in insertion order. The separators are not compared.
impl<K: PartialEq, V: PartialEq> PartialEq for ArrayStringMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().eq(other.entries())
    }
}

impl<K: Eq, V: Eq> Eq for ArrayStringMap<K, V> {}

impl<K, V, Q> Index<&Q> for ArrayStringMap<K, V>
where
    Q: KeySequence + ?Sized,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if no entry exists for `key`.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry for key {:?}", self.encode_key(key)),
        }
    }
}

impl<K: KeySequence, V> Extend<(K, V)> for ArrayStringMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K: KeySequence, V> FromIterator<(K, V)> for ArrayStringMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: KeySequence, V, const N: usize> From<[(K, V); N]> for ArrayStringMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a ArrayStringMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<'a, K, V> IntoIterator for &'a mut ArrayStringMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V> IntoIterator for ArrayStringMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.keys.into_values(), self.values.into_values())
    }
}
