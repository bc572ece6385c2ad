// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Alloc imports
use alloc::vec::Vec;

impl<T> Vector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Constructs an empty vector with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }
}
