// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::Buffer, error::Error, fixed::FixedArray, growth::GrowthPolicy, slice::Slice,
};

// External imports - bytemuck
use bytemuck::Pod;

// Alloc imports
use alloc::vec::Vec;

impl<T: Pod> Slice<T> {
    /// Constructs a nil view: no buffer, `len == cap == 0`. `O(1)`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: None,
            offset: 0,
            len: 0,
            cap: 0,
            policy: GrowthPolicy::Doubling,
        }
    }

    /// Allocates a zeroed buffer of `capacity` slots; `len == 0`.
    ///
    /// `with_capacity(0)` still allocates, so the result is not nil.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Some(Buffer::zeroed(capacity)),
            offset: 0,
            len: 0,
            cap: capacity,
            policy: GrowthPolicy::default(),
        }
    }

    /// Allocates a zeroed buffer of `capacity` slots whose first `len` slots
    /// are live.
    ///
    /// Returns [`Error::CapacityExceeded`] if `len > capacity`.
    #[inline]
    pub fn with_len(len: usize, capacity: usize) -> Result<Self, Error> {
        if len > capacity {
            return Err(Error::CapacityExceeded { len, cap: capacity });
        }
        let mut s = Self::with_capacity(capacity);
        s.len = len;
        Ok(s)
    }

    /// Copies `src` into a new buffer of capacity exactly `src.len()`.
    ///
    /// An empty `src` yields an empty, non-nil view.
    #[inline]
    pub fn from_slice(src: &[T]) -> Self {
        Self {
            buf: Some(Buffer::with_prefix(src, src.len())),
            offset: 0,
            len: src.len(),
            cap: src.len(),
            policy: GrowthPolicy::default(),
        }
    }
}

impl<T: Pod, const N: usize> From<[T; N]> for Slice<T> {
    fn from(src: [T; N]) -> Self {
        Self::from_slice(&src)
    }
}

impl<T: Pod> From<&[T]> for Slice<T> {
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T: Pod> From<Vec<T>> for Slice<T> {
    fn from(src: Vec<T>) -> Self {
        Self::from_slice(&src)
    }
}

impl<T: Pod, const N: usize> From<FixedArray<T, N>> for Slice<T> {
    fn from(src: FixedArray<T, N>) -> Self {
        Self::from_slice(src.as_slice())
    }
}
