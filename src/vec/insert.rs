// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

impl<T> Vector<T> {
    /// Inserts `values` at `index`, shifting the element at `index` and all
    /// after it to the right.
    ///
    /// - Inserted values keep their iteration order.
    /// - `index == len` appends.
    /// - Returns [`Error::OutOfBounds`] if `index > len`; `values` is not
    ///   consumed and the vector is unchanged.
    #[inline]
    pub fn insert<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<(), Error> {
        if index > self.len() {
            return Err(Error::OutOfBounds);
        }
        // Splice into the empty range [index..index); the tail moves once.
        drop(self.buf.splice(index..index, values));
        Ok(())
    }
}
