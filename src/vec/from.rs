// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Alloc imports
use alloc::vec::Vec;

impl<T> From<Vec<T>> for Vector<T> {
    fn from(buf: Vec<T>) -> Self {
        Self { buf }
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(src: [T; N]) -> Self {
        Self { buf: src.into() }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(src: &[T]) -> Self {
        Self { buf: src.to_vec() }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.buf
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Vector;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_from_vec_array_and_slice() {
        let a = Vector::from(vec![1, 2, 3]);
        let b = Vector::from([1, 2, 3]);
        let c = Vector::from(&[1, 2, 3][..]);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_into_vec_round_trip() {
        let v: Vector<u8> = (0..4).collect();
        let raw: Vec<u8> = v.into();
        assert_eq!(raw, [0, 1, 2, 3]);
    }

    #[test]
    fn test_from_empty_sources() {
        let v: Vector<i32> = Vector::from([]);
        assert!(v.is_empty());
        let w: Vector<i32> = core::iter::empty().collect();
        assert!(w.is_empty());
    }
}
