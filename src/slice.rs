// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Slice` view type and its inherent API.
//!
//! A `Slice<T>` is a `(buffer, offset, len, cap)` window onto a
//! reference-counted backing buffer. Clones and sub-views share it;
//! growth beyond `cap` allocates a new one for the growing view only.

// Invariants:
// - `len <= cap`.
// - `buf.is_none()` implies `offset == 0 && len == 0 && cap == 0` (nil view).
// - `buf.is_some()` implies `offset + cap` is within the buffer.
// - Slots `[offset, offset + len)` are live; `[offset + len, offset + cap)`
//   may hold values written through other views.

mod append;
mod bytes;
mod insert;
mod new;
mod view;

// Crate imports
use crate::{
    buffer::{Buffer, StorageId},
    diagnostics::{Header, Layout},
    error::Error,
    growth::GrowthPolicy,
};

// External imports - bytemuck
use bytemuck::Pod;

// Alloc imports
use alloc::{rc::Rc, vec::Vec};

// Core imports
use core::{
    cell::Ref,
    fmt,
    hash::{Hash, Hasher},
    mem::size_of,
};

/// A growable view over a shared, reference-counted backing buffer.
///
/// `Slice<T>` behaves like a slice header: a pointer into a buffer, a live
/// length and a capacity measured from the view's first slot to the end of
/// the buffer (or to an explicit cap).
///
/// # Aliasing
///
/// - [`Clone`] and the sub-view constructors ([`slice`], [`slice_capped`],
///   [`full`]) produce views of the **same** buffer. [`set`] through any of
///   them is visible through all views that cover that slot.
/// - [`push`] with spare capacity writes into the shared buffer at
///   `offset + len`. A parent view whose live region covers that slot sees
///   the new value. This is defined behavior.
/// - When a push exceeds capacity, a new buffer is allocated, the live
///   elements are copied, and only the pushing view is repointed. From then
///   on the two views are independent.
///
/// Use [`full`] (capacity capped to length) to guarantee the next push
/// reallocates instead of writing into memory a parent still owns.
///
/// # Nil vs. empty
///
/// [`Slice::new`] has no buffer at all ([`is_nil`] is `true`).
/// [`Slice::with_capacity(0)`](Slice::with_capacity) has a zero-length
/// buffer. Both compare equal by value.
///
/// # Complexity
///
/// - [`get`] / [`set`] / sub-views: `O(1)`.
/// - [`push`]: amortized `O(1)` under a geometric [`GrowthPolicy`]; `O(len)`
///   when it reallocates.
/// - [`prepend`] / [`insert`]: `O(len)`.
///
/// [`slice`]: Slice::slice
/// [`slice_capped`]: Slice::slice_capped
/// [`full`]: Slice::full
/// [`set`]: Slice::set
/// [`get`]: Slice::get
/// [`push`]: Slice::push
/// [`prepend`]: Slice::prepend
/// [`insert`]: Slice::insert
/// [`is_nil`]: Slice::is_nil
pub struct Slice<T: Pod> {
    pub(crate) buf: Option<Rc<Buffer<T>>>,
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) cap: usize,
    pub(crate) policy: GrowthPolicy,
}

impl<T: Pod> Slice<T> {
    /// Returns the live length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the capacity, counted from this view's first slot.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the view has no backing buffer.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.buf.is_none()
    }

    /// Returns `cap - len`, the number of pushes that will not reallocate.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.cap - self.len
    }

    /// Returns the growth policy used when this view reallocates.
    #[inline]
    pub const fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Returns this view with a different growth policy.
    ///
    /// Views derived from it inherit the policy.
    #[inline]
    pub fn with_policy(mut self, policy: GrowthPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Identity of the backing buffer, `None` for a nil view.
    #[inline]
    pub fn storage_id(&self) -> Option<StorageId> {
        self.buf.as_ref().map(|b| b.id())
    }

    /// Returns `true` if both views reference the same buffer.
    ///
    /// Their live regions may or may not overlap.
    #[inline]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.buf, &other.buf) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Address of this view's first slot, `None` for a nil view.
    ///
    /// Diagnostic only; never dereferenced.
    #[inline]
    pub fn base_addr(&self) -> Option<usize> {
        self.buf
            .as_ref()
            .map(|b| b.base_addr() + self.offset * size_of::<T>())
    }

    /// The `(storage, addr, len, cap)` header of this view.
    #[inline]
    pub fn header(&self) -> Header {
        Header {
            storage: self.storage_id(),
            addr: self.base_addr(),
            len: self.len,
            cap: self.cap,
        }
    }

    /// Layout of the live region. A nil view reports base `0`.
    #[inline]
    pub fn layout(&self) -> Layout {
        Layout {
            base: self.base_addr().unwrap_or(0),
            stride: size_of::<T>(),
            len: self.len,
        }
    }

    /// Returns the element at `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Result<T, Error> {
        self.check_index(i)?;
        Ok(self.with_slice(|s| s[i]))
    }

    /// Overwrites the element at `i` in the shared buffer.
    ///
    /// Takes `&self`: every view of the buffer may write through it.
    #[inline]
    pub fn set(&self, i: usize, value: T) -> Result<(), Error> {
        self.check_index(i)?;
        if let Some(buf) = &self.buf {
            buf.slots_mut()[self.offset + i] = value;
        }
        Ok(())
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Calls `f` with the live region as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `f` writes through a view of the same buffer.
    #[inline]
    pub fn with_slice<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        match self.live() {
            Some(live) => f(&live),
            None => f(&[]),
        }
    }

    /// Copies the live region into a `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.with_slice(<[T]>::to_vec)
    }

    /// Copies the live region into a fresh buffer of capacity exactly `len`.
    ///
    /// Unlike [`Clone`], the result shares nothing with `self`.
    #[inline]
    pub fn deep_clone(&self) -> Self {
        self.with_slice(Self::from_slice).with_policy(self.policy)
    }

    fn live(&self) -> Option<Ref<'_, [T]>> {
        let buf = self.buf.as_ref()?;
        let (start, end) = (self.offset, self.offset + self.len);
        Some(Ref::map(buf.slots(), |s| &s[start..end]))
    }

    #[inline]
    fn check_index(&self, i: usize) -> Result<(), Error> {
        if i < self.len {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index: i,
                len: self.len,
            })
        }
    }
}

impl<T: Pod> Clone for Slice<T> {
    /// Returns another view of the same buffer (no element copy).
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            offset: self.offset,
            len: self.len,
            cap: self.cap,
            policy: self.policy,
        }
    }
}

impl<T: Pod> Default for Slice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for Slice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_slice(|elements| {
            f.debug_struct("Slice")
                .field("len", &self.len)
                .field("cap", &self.cap)
                .field("storage", &self.storage_id())
                .field("elements", &elements)
                .finish()
        })
    }
}

impl<T: Pod + PartialEq> PartialEq for Slice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.with_slice(|a| other.with_slice(|b| a == b))
    }
}
impl<T: Pod + Eq> Eq for Slice<T> {}
impl<T: Pod + Ord> Ord for Slice<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.with_slice(|a| other.with_slice(|b| a.cmp(b)))
    }
}
impl<T: Pod + PartialOrd> PartialOrd for Slice<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.with_slice(|a| other.with_slice(|b| a.partial_cmp(b)))
    }
}
impl<T: Pod + Hash> Hash for Slice<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.with_slice(|s| s.hash(state))
    }
}

impl<T: Pod + PartialEq> PartialEq<[T]> for Slice<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.with_slice(|a| a == other)
    }
}
impl<T: Pod + PartialEq, const N: usize> PartialEq<[T; N]> for Slice<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.with_slice(|a| a == &other[..])
    }
}
