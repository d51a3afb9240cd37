// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`FixedArray`](crate::FixedArray) and [`Slice`](crate::Slice).
//!
//! All of these are contract violations reported to the immediate caller.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by indexing, slicing and insertion operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index (or range end) was outside the valid bounds.
    ///
    /// `len` is the bound that was exceeded: the live length for element
    /// access and `hi`, the capacity for a capped sub-view's `max`.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound it was checked against.
        len: usize,
    },
    /// A range whose start lies after its end.
    InvalidRange {
        /// Range start.
        lo: usize,
        /// Range end.
        hi: usize,
    },
    /// A length (or range end) larger than the capacity it must fit in.
    CapacityExceeded {
        /// The requested length.
        len: usize,
        /// The capacity it was checked against.
        cap: usize,
    },
    /// An insertion position outside `0..=len`.
    InsertIndexInvalid {
        /// The requested position.
        index: usize,
        /// The view length at the time of the call.
        len: usize,
    },
    /// A byte buffer whose length is not a whole number of elements.
    Misaligned {
        /// Number of bytes supplied.
        bytes: usize,
        /// Element stride in bytes.
        stride: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidRange { lo, hi } => {
                write!(f, "invalid range: start {lo} is greater than end {hi}")
            }
            Self::CapacityExceeded { len, cap } => {
                write!(f, "length {len} exceeds capacity {cap}")
            }
            Self::InsertIndexInvalid { index, len } => {
                write!(f, "insert index {index} out of range 0..={len}")
            }
            Self::Misaligned { bytes, stride } => {
                write!(f, "{bytes} bytes is not a multiple of the element stride {stride}")
            }
        }
    }
}

impl CoreError for Error {}
