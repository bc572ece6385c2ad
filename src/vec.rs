// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Vector` type and its inherent API.
//!
//! `Vector<T>` is a growable vector backed by `alloc::vec::Vec<T>`. Accessors and
//! mutators that can fail return [`Error`] instead of panicking, and leave the
//! vector untouched when they do.

mod append;
mod default;
mod find;
mod from;
mod insert;
mod new;
mod pop;
mod remove;
mod slice;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A growable, ordered vector with `Result`-returning access.
///
/// `Vector<T>` stores its elements contiguously in an exclusively owned buffer
/// and tracks them in insertion/positional order:
///
/// - indices are `0`-based and contiguous over `[0, len)`;
/// - `len() <= capacity()` always holds, and growth preserves every value;
/// - cloning produces an independent buffer, never an alias.
///
/// # Bounds
///
/// Element access ([`at`], [`at_mut`], [`set`]) requires `index < len`.
/// Insertion ([`insert`]) allows `index == len`, which behaves like
/// [`append`]. Anything else returns [`Error::OutOfBounds`].
///
/// # Equality
///
/// [`find`], [`remove`] and [`contains`] compare with `T: PartialEq` and scan
/// front to back; the first match wins, so results are deterministic in the
/// presence of duplicates.
///
/// # Complexity
///
/// - [`push`], [`append`] (per element) and [`pop`] are amortized `O(1)`.
/// - [`find`], [`remove`] and [`insert`] are `O(len)`.
/// - [`clear`] is `O(len)` for element drops and keeps the allocation.
///
/// [`at`]: Vector::at
/// [`at_mut`]: Vector::at_mut
/// [`set`]: Vector::set
/// [`insert`]: Vector::insert
/// [`append`]: Vector::append
/// [`push`]: Vector::push
/// [`pop`]: Vector::pop
/// [`find`]: Vector::find
/// [`remove`]: Vector::remove
/// [`contains`]: Vector::contains
/// [`clear`]: Vector::clear
#[derive(Clone)]
pub struct Vector<T> {
    pub(crate) buf: Vec<T>,
}

impl<T> Vector<T> {
    /// Returns the number of elements the vector can hold without reallocating.
    ///
    /// Always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the element at `index`, or [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.buf.get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable variant of [`at`](Vector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.buf.get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Replaces the element at `index` with `value` and returns the old element.
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`; `value` is dropped and
    /// the vector is unchanged.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let slot = self.at_mut(index)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Returns the first element, or [`Error::EmptyContainer`].
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.buf.first().ok_or(Error::EmptyContainer)
    }

    /// Returns the last element, or [`Error::EmptyContainer`].
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.buf.last().ok_or(Error::EmptyContainer)
    }

    /// Removes every element. The allocation is kept, so `capacity()` is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Shrinks the capacity as close to `len()` as the allocator allows.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for Vector<T> {}
impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
