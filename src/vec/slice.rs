// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Alloc imports
use alloc::vec::Vec;

impl<T> Vector<T> {
    /// Returns the elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Consumes the vector and returns its backing `Vec`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf
    }
}
