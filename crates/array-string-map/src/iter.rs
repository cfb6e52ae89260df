//! Iterators over an [`ArrayStringMap`](crate::ArrayStringMap).
//!
//! Every iterator walks the two internal maps side by side. They share one
//! insertion order (every write touches both, removals shift both), so the
//! n-th stored key always belongs to the n-th stored value.

use std::fmt;
use std::iter::FusedIterator;

use indexmap::map;

/// Iterator over `(&K, &V)` in insertion order.
///
/// Created by [`ArrayStringMap::entries`](crate::ArrayStringMap::entries)
/// and [`ArrayStringMap::iter`](crate::ArrayStringMap::iter).
pub struct Iter<'a, K, V> {
    keys: map::Values<'a, String, K>,
    values: map::Values<'a, String, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(
        keys: map::Values<'a, String, K>,
        values: map::Values<'a, String, V>,
    ) -> Self {
        Self { keys, values }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over `(&K, &mut V)` in insertion order.
pub struct IterMut<'a, K, V> {
    keys: map::Values<'a, String, K>,
    values: map::ValuesMut<'a, String, V>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(
        keys: map::Values<'a, String, K>,
        values: map::ValuesMut<'a, String, V>,
    ) -> Self {
        Self { keys, values }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.values.len())
            .finish()
    }
}

/// Iterator over the stored key objects in insertion order.
pub struct Keys<'a, K> {
    inner: map::Values<'a, String, K>,
}

impl<'a, K> Keys<'a, K> {
    pub(crate) fn new(inner: map::Values<'a, String, K>) -> Self {
        Self { inner }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over values in insertion order.
pub struct Values<'a, V> {
    inner: map::Values<'a, String, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: map::Values<'a, String, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Mutable iterator over values in insertion order.
pub struct ValuesMut<'a, V> {
    inner: map::ValuesMut<'a, String, V>,
}

impl<'a, V> ValuesMut<'a, V> {
    pub(crate) fn new(inner: map::ValuesMut<'a, String, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValuesMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V> fmt::Debug for ValuesMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

/// Owning iterator over `(K, V)` in insertion order.
///
/// Created by the `IntoIterator` impl on
/// [`ArrayStringMap`](crate::ArrayStringMap).
pub struct IntoIter<K, V> {
    keys: map::IntoValues<String, K>,
    values: map::IntoValues<String, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(
        keys: map::IntoValues<String, K>,
        values: map::IntoValues<String, V>,
    ) -> Self {
        Self { keys, values }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        Some((self.keys.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((self.keys.next_back()?, self.values.next_back()?))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.values.len())
            .finish()
    }
}
