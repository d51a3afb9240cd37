// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::Buffer, growth::Growth, slice::Slice};

// External imports - bytemuck
use bytemuck::Pod;

// Alloc imports
use alloc::rc::Rc;

impl<T: Pod> Slice<T> {
    /// Appends `value`.
    ///
    /// - `len < cap`: writes into the current buffer at `offset + len`, in
    ///   `O(1)`. Any other view covering that slot observes the write.
    /// - `len == cap`: allocates a new buffer (per [`policy`](Slice::policy)),
    ///   copies the live elements, writes `value` and repoints **this view
    ///   only**. Other views keep the old buffer.
    ///
    /// Returns which of the two happened.
    #[inline]
    pub fn push(&mut self, value: T) -> Growth {
        let growth = self.reserve(1);
        self.write_spare(&[value]);
        growth
    }

    /// Appends every element of `src`, reallocating at most once.
    pub fn extend_from_slice(&mut self, src: &[T]) -> Growth {
        let growth = self.reserve(src.len());
        self.write_spare(src);
        growth
    }

    /// Ensures `spare_capacity() >= additional`.
    ///
    /// Reallocates only when the current capacity is insufficient; the new
    /// capacity is `policy.grow(capacity, len + additional)`. Reallocation
    /// severs aliasing with every other view.
    pub fn reserve(&mut self, additional: usize) -> Growth {
        let required = self.len.saturating_add(additional);
        if required <= self.cap {
            return Growth::InPlace;
        }
        let capacity = self.policy.grow(self.cap, required);
        let fresh = self.with_slice(|live| Buffer::with_prefix(live, capacity));
        let to = fresh.id();
        let from = self.storage_id();
        self.repoint(fresh, capacity);
        Growth::Reallocated { from, to, capacity }
    }

    fn repoint(&mut self, buf: Rc<Buffer<T>>, capacity: usize) {
        self.buf = Some(buf);
        self.offset = 0;
        self.cap = capacity;
    }

    /// Copies `src` into the slots directly after the live region and extends
    /// `len`. Requires `src.len() <= spare_capacity()`.
    fn write_spare(&mut self, src: &[T]) {
        if src.is_empty() {
            return;
        }
        if let Some(buf) = &self.buf {
            let start = self.offset + self.len;
            buf.slots_mut()[start..start + src.len()].copy_from_slice(src);
            self.len += src.len();
        }
    }
}
