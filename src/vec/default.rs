// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}
