// This file is part of generics-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `generics-vector`
//!
//! A `no_std` + `alloc` growable vector whose accessors and mutators report
//! failure through [`Result`] instead of panicking.
//!
//! The core type, [`Vector<T>`], is an ordered, index-addressable sequence
//! backed by [`alloc::vec::Vec`]. It grows on demand and keeps
//! `len() <= capacity()` at all times.
//!
//! ## Error signaling
//!
//! Every operation that can fail returns `Result<_, Error>`, where
//! [`Error`] is one of:
//!
//! - [`Error::EmptyContainer`]: [`Vector::front`], [`Vector::back`],
//!   [`Vector::pop`], and [`Vector::remove`] on an empty vector.
//! - [`Error::OutOfBounds`]: [`Vector::at`] and [`Vector::set`] with
//!   `index >= len()`, or [`Vector::insert`] with `index > len()`.
//! - [`Error::ValueNotFound`]: [`Vector::find`] and [`Vector::remove`] when no
//!   element compares equal to the query.
//!
//! A failed operation leaves the vector unchanged.
//!
//! ## Equality
//!
//! Only the value-based operations ([`Vector::find`], [`Vector::remove`],
//! [`Vector::contains`]) require `T: PartialEq`. Everything else works for
//! any `T`.
//!
//! ## Example
//!
//! ```rust
//! use generics_vector::{Error, Vector};
//!
//! let mut v: Vector<i32> = Vector::new();
//! v.append([1, 2, 3]);
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.at(2), Ok(&3));
//!
//! v.insert(1, [99, 100]).unwrap();
//! assert_eq!(v.as_slice(), &[1, 99, 100, 2, 3]);
//!
//! assert_eq!(v.remove(&99), Ok(99));
//! assert_eq!(v.find(&4), Err(Error::ValueNotFound));
//! assert_eq!(v.pop(), Ok(3));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod iter;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::Vector;
