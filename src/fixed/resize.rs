// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::fixed::FixedArray;

// External imports - bytemuck
use bytemuck::Pod;

impl<T: Pod, const N: usize> FixedArray<T, N> {
    /// Builds a new array of length `M` holding the first `min(N, M)`
    /// elements of `self`; remaining slots are zero.
    ///
    /// `self` is untouched. This is the only way to "resize" a fixed array.
    #[inline]
    pub fn resized<const M: usize>(&self) -> FixedArray<T, M> {
        let mut out = FixedArray::<T, M>::new();
        let n = N.min(M);
        out.buf[..n].copy_from_slice(&self.buf[..n]);
        out
    }
}
