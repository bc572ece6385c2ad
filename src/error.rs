// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `Vector`.
//!
//! These errors represent emptiness, bounds and lookup conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Vector`](crate::Vector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one element, but the vector is empty.
    ///
    /// Returned by [`front`], [`back`], [`pop`] and, before any search,
    /// by [`remove`].
    ///
    /// [`front`]: crate::Vector::front
    /// [`back`]: crate::Vector::back
    /// [`pop`]: crate::Vector::pop
    /// [`remove`]: crate::Vector::remove
    EmptyContainer,
    /// An index was outside the valid range for the operation.
    ///
    /// Access requires `index < len`; insertion allows `index <= len`.
    OutOfBounds,
    /// A full scan found no element equal to the requested value.
    ValueNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => f.write_str("vector is empty"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::ValueNotFound => f.write_str("value not found"),
        }
    }
}

impl CoreError for Error {}
