// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{diagnostics::Layout, error::Error, fixed::FixedArray};

// External imports - bytemuck
use bytemuck::Pod;

// Core imports
use core::mem::size_of;

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// Size of one element in bytes.
    #[inline]
    pub const fn stride(&self) -> usize {
        size_of::<T>()
    }

    /// Total size of the array in bytes (`N * stride`).
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        size_of::<[T; N]>()
    }

    /// Byte offset of slot `i` from slot 0 (`i * stride`).
    #[inline]
    pub fn byte_offset(&self, i: usize) -> Result<usize, Error> {
        self.layout()
            .offset(i)
            .ok_or(Error::IndexOutOfRange { index: i, len: N })
    }

    /// Address of slot 0.
    ///
    /// Diagnostic only: the value is valid while `self` is not moved and is
    /// never dereferenced by this crate.
    #[inline]
    pub fn base_addr(&self) -> usize {
        self.buf.as_ptr() as usize
    }

    /// Address of slot `i`, computed as `base_addr() + i * stride`.
    #[inline]
    pub fn slot_addr(&self, i: usize) -> Result<usize, Error> {
        self.layout()
            .addr(i)
            .ok_or(Error::IndexOutOfRange { index: i, len: N })
    }

    /// Layout summary of this array at its current location.
    #[inline]
    pub fn layout(&self) -> Layout {
        Layout {
            base: self.base_addr(),
            stride: self.stride(),
            len: N,
        }
    }

    /// The raw bytes of all `N` slots.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.buf)
    }
}
