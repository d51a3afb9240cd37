// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, slice::Slice};

// External imports - bytemuck
use bytemuck::Pod;

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T: Pod> Slice<T> {
    /// Returns a view of `self[lo..hi]` over the same buffer.
    ///
    /// The result has `len = hi - lo` and `cap = capacity() - lo`: it may
    /// push into slots past `hi` that `self` still counts as live or spare.
    ///
    /// - [`Error::InvalidRange`] if `lo > hi`.
    /// - [`Error::IndexOutOfRange`] if `hi > len`.
    #[inline]
    pub fn slice(&self, lo: usize, hi: usize) -> Result<Self, Error> {
        self.check_range(lo, hi)?;
        Ok(self.sub_view(lo, hi - lo, self.cap - lo))
    }

    /// Returns a view of `self[lo..hi]` whose capacity is capped at `max`
    /// (`cap = max - lo`).
    ///
    /// With `max == hi` the next push on the result always reallocates, so
    /// it can never write into slots this view still owns.
    ///
    /// - [`Error::InvalidRange`] if `lo > hi`.
    /// - [`Error::CapacityExceeded`] if `hi > max`.
    /// - [`Error::IndexOutOfRange`] if `hi > len` or `max > capacity`.
    #[inline]
    pub fn slice_capped(&self, lo: usize, hi: usize, max: usize) -> Result<Self, Error> {
        self.check_range(lo, hi)?;
        if hi > max {
            return Err(Error::CapacityExceeded { len: hi, cap: max });
        }
        if max > self.cap {
            return Err(Error::IndexOutOfRange {
                index: max,
                len: self.cap,
            });
        }
        Ok(self.sub_view(lo, hi - lo, max - lo))
    }

    /// Full-slice form `self[..len:len]`: same elements, capacity capped to
    /// length.
    #[inline]
    pub fn full(&self) -> Self {
        self.sub_view(0, self.len, self.len)
    }

    /// [`slice`](Slice::slice) with any range syntax, e.g. `s.slice_range(1..)`.
    pub fn slice_range(&self, range: impl RangeBounds<usize>) -> Result<Self, Error> {
        let overflow = Error::IndexOutOfRange {
            index: usize::MAX,
            len: self.len,
        };
        let lo = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or(overflow)?,
            Bound::Unbounded => 0,
        };
        let hi = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1).ok_or(overflow)?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };
        self.slice(lo, hi)
    }

    fn check_range(&self, lo: usize, hi: usize) -> Result<(), Error> {
        if lo > hi {
            return Err(Error::InvalidRange { lo, hi });
        }
        if hi > self.len {
            return Err(Error::IndexOutOfRange {
                index: hi,
                len: self.len,
            });
        }
        Ok(())
    }

    fn sub_view(&self, lo: usize, len: usize, cap: usize) -> Self {
        Self {
            buf: self.buf.clone(),
            offset: self.offset + lo,
            len,
            cap,
            policy: self.policy,
        }
    }
}
