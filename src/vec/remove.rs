// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

impl<T: PartialEq> Vector<T> {
    /// Removes and returns the first element equal to `value`, shifting the
    /// following elements left by one.
    ///
    /// - Returns [`Error::EmptyContainer`] if the vector is empty. This is
    ///   checked before searching.
    /// - Returns [`Error::ValueNotFound`] if no element matches.
    #[inline]
    pub fn remove(&mut self, value: &T) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        let index = self.find(value)?;
        Ok(self.buf.remove(index))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Vector};

    #[test]
    fn test_remove_shifts_left() {
        let mut v = Vector::from([1, 2, 3]);
        assert_eq!(v.remove(&2), Ok(2));
        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut v = Vector::from([4, 1, 4, 1]);
        v.remove(&1).unwrap();
        assert_eq!(v.as_slice(), &[4, 4, 1]);
    }

    #[test]
    fn test_remove_first_and_last() {
        let mut v = Vector::from([1, 2, 3, 4, 5]);
        assert_eq!(v.remove(&1), Ok(1));
        assert_eq!(v.remove(&5), Ok(5));
        assert_eq!(v.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_remove_not_found_is_noop() {
        let mut v = Vector::from([1, 2, 3]);
        assert_eq!(v.remove(&4), Err(Error::ValueNotFound));
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_remove_on_empty_reports_empty_first() {
        let mut v: Vector<i32> = Vector::new();
        assert_eq!(v.remove(&4), Err(Error::EmptyContainer));
    }
}
