// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `shared-slice`
//!
//! A `no_std + alloc` model of a growable, slice-capable array, **with no
//! `unsafe`**.
//!
//! Two types are provided:
//!
//! - [`FixedArray<T, N>`]: a fixed-length, contiguous block of `N` elements
//!   with `O(1)` indexed access and exact layout introspection (stride,
//!   total size, slot addresses). It never resizes; [`FixedArray::resized`]
//!   builds a new array and copies.
//! - [`Slice<T>`]: a view `(buffer, offset, len, cap)` over a
//!   reference-counted backing buffer. Several views may
//!   alias one buffer and observe each other's writes.
//!
//! ## Aliasing and the copy-on-grow boundary
//!
//! - Cloning a [`Slice`] or taking a sub-view ([`Slice::slice`]) yields
//!   another view of the **same** buffer. Writes through either are visible
//!   through both.
//! - [`Slice::push`] writes in place while `len < cap`. That write lands in
//!   the shared buffer, so it may overwrite a slot another view already
//!   reads.
//! - Once `len == cap`, the next push allocates a fresh buffer (per the
//!   view's [`GrowthPolicy`]), copies the live elements and repoints only the
//!   pushing view. Other views keep the old buffer and stop seeing its writes.
//! - [`Slice::slice_capped`] / [`Slice::full`] cap a view's capacity so the
//!   next push is guaranteed to reallocate.
//!
//! Buffers are never resized in place; "identity changed" is observable via
//! [`Slice::storage_id`], an opaque serial number standing in for an address.
//!
//! ## Elements
//!
//! Elements are plain-old-data (`T: bytemuck::Pod`). This gives every slot a
//! zero value, a fixed stride, and a safe byte view, used by
//! [`Slice::with_bytes`] and [`FixedArray::as_bytes`].
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`FixedArray`] and [`Slice`] as
//!   sequences. Deserializing a [`Slice`] always produces a fresh buffer.
//!
//! ## Threading
//!
//! Views are `!Send` and `!Sync` (`Rc` + `RefCell`). Holding a borrow from
//! [`Slice::with_slice`] or [`Slice::with_bytes`] while mutating an aliasing
//! view panics, like any other `RefCell` conflict.
//!
//! Storage identities come from a process-wide `AtomicUsize` counter, so the
//! crate requires a target with pointer-width atomic read-modify-write
//! (`target_has_atomic = "ptr"`). Targets without it, such as
//! `thumbv6m-none-eabi`, are rejected at compile time.
//!
//! ## Example
//!
//! ```rust
//! use shared_slice::Slice;
//!
//! let base = Slice::from([1, 2, 3, 4, 5]);
//! let sub = base.slice(1, 4).unwrap();
//! assert_eq!(sub.to_vec(), [2, 3, 4]);
//!
//! sub.set(1, 99).unwrap();
//! assert_eq!(base.to_vec(), [1, 2, 99, 4, 5]);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod buffer;
pub mod diagnostics;
mod error;
mod fixed;
mod growth;
#[cfg(feature = "serde")]
mod serde;
mod slice;

// Public exports (crate API surface)
pub use buffer::StorageId;
pub use error::Error;
pub use fixed::FixedArray;
pub use growth::{Growth, GrowthPolicy};
pub use slice::Slice;
