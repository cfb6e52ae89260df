//! The [`KeySequence`] trait: what the map accepts as a key.

use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use smallvec::SmallVec;

/// A flat, ordered sequence of displayable elements usable as a map key.
///
/// Equivalence is decided by element content: two keys are the same entry
/// when their elements render (via [`Display`]) to the same strings in the
/// same order. The concrete container type does not matter, so a
/// `Vec<i32>`-keyed map can be queried with `&[1, 2]` or `[1, 2]`.
///
/// Implemented for slices, arrays, `Vec`, boxed and reference-counted
/// slices, [`SmallVec`], and shared references to any of these.
pub trait KeySequence {
    /// Element type. Its `Display` output is the element's canonical string.
    type Element: Display;

    /// The elements of the key, in order.
    fn elements(&self) -> &[Self::Element];
}

impl<E: Display> KeySequence for [E] {
    type Element = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E: Display, const N: usize> KeySequence for [E; N] {
    type Element = E;

    fn elements(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E: Display> KeySequence for Vec<E> {
    type Element = E;

    fn elements(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E: Display> KeySequence for Box<[E]> {
    type Element = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E: Display> KeySequence for Rc<[E]> {
    type Element = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<E: Display> KeySequence for Arc<[E]> {
    type Element = E;

    fn elements(&self) -> &[E] {
        self
    }
}

impl<A> KeySequence for SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Display,
{
    type Element = A::Item;

    fn elements(&self) -> &[A::Item] {
        self.as_slice()
    }
}

impl<T: KeySequence + ?Sized> KeySequence for &T {
    type Element = T::Element;

    fn elements(&self) -> &[T::Element] {
        (**self).elements()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn rendered<Q: KeySequence + ?Sized>(key: &Q) -> Vec<String> {
        key.elements().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn containers_expose_same_elements() {
        let expected = vec!["1".to_owned(), "2".to_owned(), "3".to_owned()];
        let small: SmallVec<[i32; 4]> = smallvec![1, 2, 3];
        let rc: Rc<[i32]> = Rc::from(vec![1, 2, 3]);
        let arc: Arc<[i32]> = Arc::from(vec![1, 2, 3]);
        let boxed: Box<[i32]> = vec![1, 2, 3].into_boxed_slice();

        assert_eq!(rendered(&vec![1, 2, 3]), expected);
        assert_eq!(rendered(&[1, 2, 3]), expected);
        assert_eq!(rendered(&[1, 2, 3][..]), expected);
        assert_eq!(rendered(&small), expected);
        assert_eq!(rendered(&rc), expected);
        assert_eq!(rendered(&arc), expected);
        assert_eq!(rendered(&boxed), expected);
    }

    #[test]
    fn reference_forwards_to_target() {
        let key = vec!["a", "b"];
        let by_ref = &key;
        assert_eq!(by_ref.elements(), key.elements());
    }

    #[test]
    fn empty_key_has_no_elements() {
        let key: Vec<u8> = Vec::new();
        assert!(key.elements().is_empty());
    }
}
