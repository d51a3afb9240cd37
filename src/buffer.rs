// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backing storage shared between [`Slice`](crate::Slice) views.
//!
//! A [`Buffer`] is one zero-initialized allocation of `capacity` slots. Its
//! shape never changes after allocation; growing a view means allocating a
//! new buffer. Views hold it through `Rc`, so it lives exactly as long as the
//! last view referencing it.

// External imports - bytemuck
use bytemuck::Pod;

// Alloc imports
use alloc::{boxed::Box, rc::Rc, vec};

// Core imports
use core::{
    cell::{Ref, RefCell, RefMut},
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

#[cfg(not(target_has_atomic = "ptr"))]
compile_error!("shared-slice needs pointer-width atomics to number its buffers");

static NEXT_STORAGE_ID: AtomicUsize = AtomicUsize::new(1);

/// Opaque identity of one backing allocation.
///
/// Serial numbers are handed out in allocation order and never reused, so two
/// views report the same `StorageId` exactly when they share a buffer, and a
/// view's id changes exactly when it reallocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageId(usize);

impl StorageId {
    fn next() -> Self {
        Self(NEXT_STORAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw serial number.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for StorageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fixed-capacity allocation of `T` slots.
pub(crate) struct Buffer<T: Pod> {
    id: StorageId,
    slots: RefCell<Box<[T]>>,
}

impl<T: Pod> Buffer<T> {
    /// Allocates `capacity` zeroed slots.
    pub(crate) fn zeroed(capacity: usize) -> Rc<Self> {
        Rc::new(Self {
            id: StorageId::next(),
            slots: RefCell::new(vec![T::zeroed(); capacity].into_boxed_slice()),
        })
    }

    /// Allocates `capacity` slots and copies `prefix` into the front.
    ///
    /// Requires `prefix.len() <= capacity`.
    pub(crate) fn with_prefix(prefix: &[T], capacity: usize) -> Rc<Self> {
        let buf = Self::zeroed(capacity);
        buf.slots_mut()[..prefix.len()].copy_from_slice(prefix);
        buf
    }

    #[inline]
    pub(crate) fn id(&self) -> StorageId {
        self.id
    }

    /// Address of slot 0, for diagnostics only.
    #[inline]
    pub(crate) fn base_addr(&self) -> usize {
        self.slots.borrow().as_ptr() as usize
    }

    #[inline]
    pub(crate) fn slots(&self) -> Ref<'_, [T]> {
        Ref::map(self.slots.borrow(), |s| &**s)
    }

    #[inline]
    pub(crate) fn slots_mut(&self) -> RefMut<'_, [T]> {
        RefMut::map(self.slots.borrow_mut(), |s| &mut **s)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Buffer;

    #[test]
    fn test_zeroed_buffer_has_capacity_and_zero_slots() {
        let buf = Buffer::<i32>::zeroed(5);
        assert_eq!(buf.slots().len(), 5);
        assert!(buf.slots().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_with_prefix_copies_front_and_zeroes_tail() {
        let buf = Buffer::with_prefix(&[7u16, 8, 9], 5);
        assert_eq!(&*buf.slots(), &[7, 8, 9, 0, 0]);
    }

    #[test]
    fn test_storage_ids_are_unique_and_increasing() {
        let a = Buffer::<u8>::zeroed(1);
        let b = Buffer::<u8>::zeroed(1);
        assert_ne!(a.id(), b.id());
        assert!(a.id() < b.id());
        assert_eq!(alloc::format!("{}", a.id()), alloc::format!("#{}", a.id().get()));
    }

    #[test]
    fn test_zero_capacity_buffer_is_still_an_allocation() {
        let buf = Buffer::<u64>::zeroed(0);
        assert!(buf.slots().is_empty());
    }

    #[test]
    fn test_writes_through_slots_mut_are_visible() {
        let buf = Buffer::<i32>::zeroed(3);
        buf.slots_mut()[1] = 42;
        assert_eq!(buf.slots()[1], 42);
    }
}
