// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Presentation helpers for inspecting views and arrays.
//!
//! Nothing here affects behavior. These types only expose values already
//! available through the public API (storage identity, length, capacity,
//! addresses and bytes) in a printable form.
//!
//! ```rust
//! use shared_slice::{diagnostics::HexDump, Slice};
//!
//! let ints = Slice::from([1i32, 2]);
//! let dump = ints.with_bytes(|b| format!("{}", HexDump::new(b)));
//! # if cfg!(target_endian = "little") {
//! assert_eq!(dump, "01 00 00 00 02 00 00 00");
//! # }
//! ```

// Crate imports
use crate::buffer::StorageId;

// Core imports
use core::fmt;

/// The `(storage, len, cap)` triple describing a [`Slice`](crate::Slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Backing buffer, `None` for a nil view.
    pub storage: Option<StorageId>,
    /// Address of the view's first slot, `None` for a nil view.
    pub addr: Option<usize>,
    /// Live length.
    pub len: usize,
    /// Capacity from the view's first slot to the end of its buffer (or cap).
    pub cap: usize,
}

impl Header {
    /// Returns `true` if the view has no backing buffer.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.storage.is_none()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "len={} cap={} storage=", self.len, self.cap)?;
        match self.storage {
            Some(id) => write!(f, "{id}"),
            None => f.write_str("nil"),
        }
    }
}

/// Uppercase hex rendering of a byte run, e.g. `01 00 00 00`.
///
/// With [`HexDump::grouped`], element boundaries are marked with ` | `.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    bytes: &'a [u8],
    group: usize,
}

impl<'a> HexDump<'a> {
    /// Space-separated bytes, no grouping.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, group: 0 }
    }

    /// Bytes grouped by `stride` (typically the element size).
    #[inline]
    pub const fn grouped(bytes: &'a [u8], stride: usize) -> Self {
        Self {
            bytes,
            group: stride,
        }
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                if self.group > 0 && i % self.group == 0 {
                    f.write_str(" | ")?;
                } else {
                    f.write_str(" ")?;
                }
            }
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

/// Contiguous layout of `len` elements of `stride` bytes starting at `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Address of element 0.
    pub base: usize,
    /// Element size in bytes.
    pub stride: usize,
    /// Number of elements.
    pub len: usize,
}

impl Layout {
    /// Total size in bytes (`len * stride`).
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.len * self.stride
    }

    /// Byte offset of element `i` from `base`, or `None` if `i >= len`.
    #[inline]
    pub const fn offset(&self, i: usize) -> Option<usize> {
        if i < self.len {
            Some(i * self.stride)
        } else {
            None
        }
    }

    /// Address of element `i` (`base + i * stride`), or `None` if `i >= len`.
    #[inline]
    pub const fn addr(&self, i: usize) -> Option<usize> {
        match self.offset(i) {
            Some(off) => Some(self.base + off),
            None => None,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x {}B = {}B @ 0x{:X}",
            self.len,
            self.stride,
            self.size_bytes(),
            self.base
        )?;
        for i in 0..self.len {
            write!(f, "\n  [{i}] +{} 0x{:X}", i * self.stride, self.base + i * self.stride)?;
        }
        Ok(())
    }
}
