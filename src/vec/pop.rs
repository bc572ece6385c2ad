// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

impl<T> Vector<T> {
    /// Removes and returns the last element.
    ///
    /// Returns [`Error::EmptyContainer`] if the vector is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        self.buf.pop().ok_or(Error::EmptyContainer)
    }
}
