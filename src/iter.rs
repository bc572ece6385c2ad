// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Vector`](crate::Vector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&Vector` and `&mut Vector` iterate as slices.

// Crate imports
use crate::vec::Vector;

// Alloc imports
use alloc::vec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `Vector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded, as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Vector;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    #[test]
    fn test_double_ended_and_nth() {
        let v = Vector::from([10, 20, 30, 40]);
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v = Vector::from([1, 2, 3, 4, 5]);
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 1 from back, take 3
        assert_eq!(it.as_slice(), &[1, 2]);
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let v = Vector::from([10, 20, 30]);
        let mut it = v.into_iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next_back(), Some(30));
        assert_eq!(it.next(), Some(20));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_into_iter_moves_owned_values() {
        let v: Vector<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let out: Vec<String> = v.into_iter().rev().collect();
        assert_eq!(out, ["b", "a"]);
    }

    #[test]
    fn test_borrowed_iteration() {
        let mut v = Vector::from([1, 2, 3]);
        for x in &mut v {
            *x *= 10;
        }
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 60);
        assert_eq!(v.iter().len(), 3);
    }

    #[test]
    fn test_into_iter_empty() {
        let v: Vector<u8> = Vector::new();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }
}
