// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Vector<T> {
    /// Appends `value` to the end, growing storage if needed.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.buf.push(value);
    }

    /// Appends every item of `values` to the end, in iteration order.
    ///
    /// Never fails. An empty `values` is a no-op.
    #[inline]
    pub fn append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.buf.extend(values);
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Vector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.append(iter.into_iter().copied());
    }
}
