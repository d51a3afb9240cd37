// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedArray;

// External imports - bytemuck
use bytemuck::Pod;

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// Constructs an array with every slot set to the zero value of `T`.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: [T::zeroed(); N],
        }
    }
}

impl<T: Pod, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(buf: [T; N]) -> Self {
        Self { buf }
    }
}

impl<T: Pod, const N: usize> From<&[T; N]> for FixedArray<T, N> {
    fn from(src: &[T; N]) -> Self {
        (*src).into()
    }
}
