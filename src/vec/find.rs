// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

impl<T: PartialEq> Vector<T> {
    /// Returns the index of the first element equal to `value`.
    ///
    /// Scans front to back. Returns [`Error::ValueNotFound`] if nothing matches.
    #[inline]
    pub fn find(&self, value: &T) -> Result<usize, Error> {
        self.buf
            .iter()
            .position(|x| x == value)
            .ok_or(Error::ValueNotFound)
    }

    /// Returns `true` if the vector contains `value` (linear search).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }
}
