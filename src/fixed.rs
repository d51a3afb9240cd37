// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedArray` type and its inherent API.
//!
//! `FixedArray<T, N>` is the baseline memory layout: `N` contiguous slots,
//! length always equal to capacity, `O(1)` access, no resizing.

// Invariants:
// - `buf` is always fully initialized; there is no logical length.
// - Addresses returned by the layout helpers are never dereferenced.

mod layout;
mod new;
mod resize;

// Crate imports
use crate::error::Error;

// External imports - bytemuck
use bytemuck::Pod;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A fixed-length, contiguous array of `N` plain-old-data elements.
///
/// Every slot is live: [`FixedArray::new`] fills all `N` slots with the
/// type's zero value. Indexed reads and writes are `O(1)` and bounds-checked,
/// returning [`Error::IndexOutOfRange`] for `i >= N`.
///
/// There is no implicit growth. [`FixedArray::resized`] builds a new array of
/// a different length and copies `min(N, M)` elements.
///
/// # Example
///
/// ```rust
/// use shared_slice::FixedArray;
///
/// let mut arr = FixedArray::from([1i32, 2, 3, 4]);
/// assert_eq!(arr.size_bytes(), 16);
/// arr.set(2, 99).unwrap();
/// assert_eq!(arr.as_slice(), &[1, 2, 99, 4]);
///
/// let bigger = arr.resized::<5>();
/// assert_eq!(bigger.as_slice(), &[1, 2, 99, 4, 0]);
/// ```
pub struct FixedArray<T: Pod, const N: usize> {
    pub(crate) buf: [T; N],
}

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// The fixed length of this array.
    pub const LEN: usize = N;

    /// Returns the length (always `N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the element at `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T, Error> {
        self.buf
            .get(i)
            .copied()
            .ok_or(Error::IndexOutOfRange { index: i, len: N })
    }

    /// Overwrites the element at `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Result<(), Error> {
        let slot = self
            .buf
            .get_mut(i)
            .ok_or(Error::IndexOutOfRange { index: i, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Returns all `N` elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Returns all `N` elements mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Consumes the array and returns the inner `[T; N]`.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.buf
    }
}

impl<T: Pod + fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Pod + PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}
impl<T: Pod + Eq, const N: usize> Eq for FixedArray<T, N> {}
impl<T: Pod + Hash, const N: usize> Hash for FixedArray<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Pod, const N: usize> Copy for FixedArray<T, N> {}
impl<T: Pod, const N: usize> Clone for FixedArray<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Pod, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T: Pod, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
