// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, slice::Slice};

// External imports - bytemuck
use bytemuck::Pod;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::mem::size_of;

impl<T: Pod> Slice<T> {
    /// Size of one element in bytes.
    #[inline]
    pub const fn stride(&self) -> usize {
        size_of::<T>()
    }

    /// Calls `f` with the raw bytes of the live region: exactly
    /// `len * stride` bytes, never the spare capacity behind it.
    ///
    /// Read-only. Panics like [`with_slice`](Slice::with_slice) if `f`
    /// writes through an aliasing view.
    #[inline]
    pub fn with_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        if size_of::<T>() == 0 {
            return f(&[]);
        }
        self.with_slice(|live| f(bytemuck::cast_slice(live)))
    }

    /// Copies the raw bytes of the live region.
    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.with_bytes(<[u8]>::to_vec)
    }

    /// Rebuilds elements from native-endian bytes, `stride` bytes each, into
    /// a fresh buffer of exact capacity.
    ///
    /// Returns [`Error::Misaligned`] if `bytes.len()` is not a multiple of the
    /// stride. `bytes` need not be aligned for `T`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let stride = size_of::<T>();
        if stride == 0 {
            return if bytes.is_empty() {
                Ok(Self::from_slice(&[]))
            } else {
                Err(Error::Misaligned {
                    bytes: bytes.len(),
                    stride,
                })
            };
        }
        if bytes.len() % stride != 0 {
            return Err(Error::Misaligned {
                bytes: bytes.len(),
                stride,
            });
        }
        let elements: Vec<T> = bytes
            .chunks_exact(stride)
            .map(bytemuck::pod_read_unaligned)
            .collect();
        Ok(Self::from_slice(&elements))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{diagnostics::HexDump, Error, Slice};
    use alloc::{string::ToString, vec::Vec};
    use proptest::prelude::*;

    fn native_bytes(values: &[i32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn test_bytes_of_int32_slice() {
        let ints = Slice::from([1i32, 2, 3, 4]);
        let bytes = ints.to_bytes();
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes, native_bytes(&[1, 2, 3, 4]));
        if cfg!(target_endian = "little") {
            assert_eq!(
                ints.with_bytes(|b| HexDump::new(b).to_string()),
                "01 00 00 00 02 00 00 00 03 00 00 00 04 00 00 00"
            );
        }
    }

    #[test]
    fn test_bytes_exclude_spare_capacity() {
        let base = Slice::from([1i32, 2, 3, 4]);
        let head = base.slice(0, 2).unwrap();
        assert_eq!(head.capacity(), 4);
        assert_eq!(head.to_bytes(), native_bytes(&[1, 2]));
    }

    #[test]
    fn test_bytes_of_sub_view_start_at_offset() {
        let base = Slice::from([1i32, 2, 3, 4]);
        let tail = base.slice(2, 4).unwrap();
        assert_eq!(tail.to_bytes(), native_bytes(&[3, 4]));
    }

    #[test]
    fn test_bytes_of_nil_and_empty() {
        assert!(Slice::<i32>::new().to_bytes().is_empty());
        assert!(Slice::<i32>::with_capacity(4).to_bytes().is_empty());
    }

    #[test]
    fn test_from_bytes_rejects_partial_elements() {
        assert_eq!(
            Slice::<i32>::from_bytes(&[0; 6]).unwrap_err(),
            Error::Misaligned {
                bytes: 6,
                stride: 4
            }
        );
    }

    #[test]
    fn test_from_bytes_accepts_unaligned_input() {
        let mut raw = alloc::vec![0xFFu8];
        raw.extend_from_slice(&7u32.to_ne_bytes());
        let s = Slice::<u32>::from_bytes(&raw[1..]).unwrap();
        assert_eq!(s, [7]);
        assert_eq!(s.stride(), 4);
    }

    #[test]
    fn test_zero_sized_elements() {
        let s = Slice::<()>::from_bytes(&[]).unwrap();
        assert!(s.is_empty());
        let mut units: Slice<()> = Slice::new();
        units.push(());
        assert_eq!(units.len(), 1);
        assert!(units.to_bytes().is_empty());
        assert_eq!(
            Slice::<()>::from_bytes(&[1]).unwrap_err(),
            Error::Misaligned {
                bytes: 1,
                stride: 0
            }
        );
    }

    proptest! {
        #[test]
        fn bytes_round_trip_bit_for_bit(data in proptest::collection::vec(any::<u64>(), 0..32)) {
            let s = Slice::from_slice(&data);
            let bytes = s.to_bytes();
            prop_assert_eq!(bytes.len(), data.len() * s.stride());
            let back = Slice::<u64>::from_bytes(&bytes).unwrap();
            prop_assert_eq!(back.to_vec(), data);
        }

        #[test]
        fn float_bytes_round_trip_preserves_bits(data in proptest::collection::vec(0u32..0x7F80_0000, 0..16)) {
            let floats: Vec<f32> = data.iter().map(|&b| f32::from_bits(b)).collect();
            let s = Slice::from_slice(&floats);
            let back = Slice::<f32>::from_bytes(&s.to_bytes()).unwrap();
            let bits: Vec<u32> = back.to_vec().iter().map(|f| f.to_bits()).collect();
            prop_assert_eq!(bits, data);
        }
    }
}
