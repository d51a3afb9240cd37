// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Slice`](crate::Slice) and [`FixedArray`](crate::FixedArray).
//!
//! - **Serialize**: as a sequence of the live elements (`len` for a `Slice`,
//!   `N` for a `FixedArray`). Capacity, storage identity and aliasing are not
//!   part of the serialized form.
//! - **Deserialize**: a `Slice` from any sequence, into a fresh buffer of
//!   exact capacity; a `FixedArray<T, N>` from a sequence of exactly `N`
//!   elements.

// Crate imports
use crate::{fixed::FixedArray, slice::Slice};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - bytemuck
use bytemuck::Pod;

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

fn serialize_elements<T: Serialize, S: Serializer>(sl: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(sl.len()))?;
    for item in sl {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Pod + Serialize> Serialize for Slice<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.with_slice(|sl| serialize_elements(sl, s))
    }
}

impl<T: Pod + Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_elements(self.as_slice(), s)
    }
}

struct SliceVisitor<T>(PhantomData<T>);

impl<'de, T> de::Visitor<'de> for SliceVisitor<T>
where
    T: Deserialize<'de> + Pod,
{
    type Value = Slice<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut elements = Vec::with_capacity(a.size_hint().unwrap_or(0).min(4096));
        while let Some(elem) = a.next_element::<T>()? {
            elements.push(elem);
        }
        Ok(Slice::from_slice(&elements))
    }
}

impl<'de, T> Deserialize<'de> for Slice<T>
where
    T: Deserialize<'de> + Pod,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SliceVisitor(PhantomData))
    }
}

struct FixedVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for FixedVisitor<T, N>
where
    T: Deserialize<'de> + Pod,
{
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with exactly {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedArray::<T, N>::new();
        let mut filled = 0;
        while let Some(elem) = a.next_element::<T>()? {
            out.set(filled, elem)
                .map_err(|_| <A::Error as de::Error>::invalid_length(filled + 1, &self))?;
            filled += 1;
        }
        if filled != N {
            return Err(de::Error::invalid_length(filled, &self));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedArray<T, N>
where
    T: Deserialize<'de> + Pod,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(FixedVisitor::<T, N>(PhantomData))
    }
}
