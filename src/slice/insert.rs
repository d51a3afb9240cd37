// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, growth::Growth, slice::Slice};

// External imports - bytemuck
use bytemuck::Pod;

impl<T: Pod> Slice<T> {
    /// Inserts `value` at `index`, shifting `[index, len)` up by one. `O(len)`.
    ///
    /// Capacity is obtained through the append path, so an insert with spare
    /// capacity shifts elements inside the shared buffer (visible to aliasing
    /// views) while a full view reallocates first.
    ///
    /// Returns [`Error::InsertIndexInvalid`] if `index > len`; the view is left
    /// unchanged.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<Growth, Error> {
        if index > self.len {
            return Err(Error::InsertIndexInvalid {
                index,
                len: self.len,
            });
        }
        Ok(self.shift_insert(index, value))
    }

    /// Inserts `value` at position 0. `O(len)`; there is no constant-time
    /// prepend.
    #[inline]
    pub fn prepend(&mut self, value: T) -> Growth {
        self.shift_insert(0, value)
    }

    fn shift_insert(&mut self, index: usize, value: T) -> Growth {
        let growth = self.push(value);
        if let Some(buf) = &self.buf {
            let base = self.offset;
            let mut slots = buf.slots_mut();
            // Shift right: [index..len-1) -> [index+1..len)
            slots.copy_within(base + index..base + self.len - 1, base + index + 1);
            slots[base + index] = value;
        }
        growth
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Growth, Slice};
    use proptest::prelude::*;

    #[test]
    fn test_prepend() {
        let mut u = Slice::from([10, 20, 30, 40]);
        let g = u.prepend(0);
        assert!(g.is_reallocated());
        assert_eq!(u, [0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut v = Slice::from([1, 2, 3, 4, 5]);
        v.insert(2, 999).unwrap();
        assert_eq!(v, [1, 2, 999, 3, 4, 5]);
    }

    #[test]
    fn test_insert_at_ends() {
        let mut v = Slice::from([1, 2]);
        v.insert(2, 3).unwrap();
        assert_eq!(v, [1, 2, 3]);
        v.insert(0, 0).unwrap();
        assert_eq!(v, [0, 1, 2, 3]);
    }

    #[test]
    fn test_insert_into_nil_and_empty() {
        let mut nil: Slice<u8> = Slice::new();
        nil.insert(0, 5).unwrap();
        assert_eq!(nil, [5]);

        let mut empty: Slice<u8> = Slice::new();
        empty.prepend(9);
        assert_eq!(empty, [9]);
    }

    #[test]
    fn test_insert_past_len_is_rejected_and_noop() {
        let mut v = Slice::from([1, 2, 3]);
        let id = v.storage_id();
        assert_eq!(
            v.insert(4, 0),
            Err(Error::InsertIndexInvalid { index: 4, len: 3 })
        );
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        assert_eq!(v.storage_id(), id);
    }

    #[test]
    fn test_insert_with_spare_capacity_shifts_in_shared_buffer() {
        let mut v: Slice<i32> = Slice::with_capacity(6);
        v.extend_from_slice(&[1, 2, 3, 4]);
        let other = v.clone();
        assert_eq!(v.insert(1, 7), Ok(Growth::InPlace));
        assert_eq!(v, [1, 7, 2, 3, 4]);
        // `other` still has len 4 but sees the shifted contents.
        assert_eq!(other, [1, 7, 2, 3]);
    }

    #[test]
    fn test_insert_into_sub_view_at_offset() {
        let base = Slice::from([0, 1, 2, 3, 4, 5]);
        let mut sub = base.slice(2, 4).unwrap();
        sub.insert(1, 50).unwrap();
        assert_eq!(sub, [2, 50, 3]);
        // In-place: the slot after sub's live region belonged to base.
        assert_eq!(base, [0, 1, 2, 50, 3, 5]);
    }

    proptest! {
        #[test]
        fn insert_matches_splice(
            data in proptest::collection::vec(any::<i64>(), 0..32),
            spare in 0usize..4,
            at in any::<prop::sample::Index>(),
            x in any::<i64>(),
        ) {
            let i = at.index(data.len() + 1);
            let mut s: Slice<i64> = Slice::with_capacity(data.len() + spare);
            s.extend_from_slice(&data);
            s.insert(i, x).unwrap();

            let mut expected = data[..i].to_vec();
            expected.push(x);
            expected.extend_from_slice(&data[i..]);
            prop_assert_eq!(s.len(), data.len() + 1);
            prop_assert_eq!(s.to_vec(), expected);
        }

        #[test]
        fn prepend_matches_splice(data in proptest::collection::vec(any::<u8>(), 0..32), x in any::<u8>()) {
            let mut s = Slice::from_slice(&data);
            s.prepend(x);
            let mut expected = alloc::vec![x];
            expected.extend_from_slice(&data);
            prop_assert_eq!(s.to_vec(), expected);
        }

        #[test]
        fn insert_rejects_every_index_past_len(
            data in proptest::collection::vec(any::<u8>(), 0..16),
            past in 1usize..100,
        ) {
            let mut s = Slice::from_slice(&data);
            let len = data.len();
            prop_assert_eq!(
                s.insert(len + past, 0),
                Err(Error::InsertIndexInvalid { index: len + past, len })
            );
            prop_assert_eq!(s.to_vec(), data);
        }
    }
}
