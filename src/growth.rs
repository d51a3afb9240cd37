// This file is part of shared-slice.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capacity growth policies and the outcome of a growing operation.

// Crate imports
use crate::buffer::StorageId;

/// How a [`Slice`](crate::Slice) picks a new capacity when it must reallocate.
///
/// Every policy returns a capacity strictly greater than the old one and at
/// least the required minimum, and grows geometrically so that appending is
/// amortized `O(1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrowthPolicy {
    /// `0 -> 1`, otherwise `2 * old`.
    #[default]
    Doubling,
    /// Doubling below `threshold`; above it each step adds
    /// `(cap + 3 * threshold) / 4`, easing the factor from 2x toward 1.25x.
    Tapered {
        /// Capacity at which the growth factor starts to fall.
        threshold: usize,
    },
    /// `old + old / 2`: a 1.5x factor that trades more reallocations for
    /// less spare capacity.
    Moderate,
}

impl GrowthPolicy {
    /// Default threshold for [`GrowthPolicy::Tapered`].
    pub const TAPER_THRESHOLD: usize = 256;

    /// [`GrowthPolicy::Tapered`] with [`Self::TAPER_THRESHOLD`].
    #[inline]
    pub const fn tapered() -> Self {
        Self::Tapered {
            threshold: Self::TAPER_THRESHOLD,
        }
    }

    /// Returns the capacity to allocate when a buffer of capacity `old` must
    /// hold at least `required` elements.
    pub fn grow(self, old: usize, required: usize) -> usize {
        let floor = required.max(old.saturating_add(1));
        let proposed = match self {
            Self::Doubling => double(old),
            Self::Tapered { threshold } if old < threshold => double(old),
            Self::Tapered { threshold } => {
                let mut cap = old;
                while cap < floor {
                    let step = (cap.saturating_add(threshold.saturating_mul(3)) / 4).max(1);
                    cap = cap.saturating_add(step);
                }
                cap
            }
            Self::Moderate => old.saturating_add(old / 2),
        };
        proposed.max(floor)
    }
}

fn double(old: usize) -> usize {
    if old == 0 {
        1
    } else {
        old.saturating_mul(2)
    }
}

/// What a growing operation did to the view's backing storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    /// The write fit in the existing capacity; the buffer is unchanged and any
    /// aliasing view observes the written slots.
    InPlace,
    /// A new buffer was allocated and the live elements copied into it. Other
    /// views still reference `from`.
    Reallocated {
        /// The previous buffer, `None` for a nil view.
        from: Option<StorageId>,
        /// The newly allocated buffer.
        to: StorageId,
        /// Capacity of the new buffer.
        capacity: usize,
    },
}

impl Growth {
    /// Returns `true` for [`Growth::Reallocated`].
    #[inline]
    pub const fn is_reallocated(&self) -> bool {
        matches!(self, Self::Reallocated { .. })
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowthPolicy;
    use proptest::prelude::*;

    #[test]
    fn test_doubling_sequence_from_zero() {
        let p = GrowthPolicy::Doubling;
        assert_eq!(p.grow(0, 1), 1);
        assert_eq!(p.grow(1, 2), 2);
        assert_eq!(p.grow(2, 3), 4);
        assert_eq!(p.grow(4, 5), 8);
    }

    #[test]
    fn test_doubling_respects_large_requirement() {
        assert_eq!(GrowthPolicy::Doubling.grow(4, 20), 20);
    }

    #[test]
    fn test_moderate_grows_by_half() {
        let p = GrowthPolicy::Moderate;
        assert_eq!(p.grow(0, 1), 1);
        assert_eq!(p.grow(1, 2), 2);
        assert_eq!(p.grow(4, 5), 6);
        assert_eq!(p.grow(100, 101), 150);
        assert_eq!(p.grow(4, 20), 20);
    }

    #[test]
    fn test_every_policy_amortizes_appends() {
        for policy in [
            GrowthPolicy::Doubling,
            GrowthPolicy::Moderate,
            GrowthPolicy::tapered(),
            GrowthPolicy::Tapered { threshold: 0 },
        ] {
            let (mut cap, mut reallocs) = (0, 0);
            for len in 1..=10_000 {
                if len > cap {
                    cap = policy.grow(cap, len);
                    reallocs += 1;
                }
            }
            assert!(reallocs < 100, "{policy:?}: {reallocs} reallocations");
        }
    }

    #[test]
    fn test_tapered_doubles_below_threshold() {
        let p = GrowthPolicy::tapered();
        assert_eq!(p.grow(0, 1), 1);
        assert_eq!(p.grow(128, 129), 256);
    }

    #[test]
    fn test_tapered_slows_above_threshold() {
        let p = GrowthPolicy::tapered();
        // 256 + (256 + 768) / 4 = 512
        assert_eq!(p.grow(256, 257), 512);
        // 1024 + (1024 + 768) / 4 = 1472
        assert_eq!(p.grow(1024, 1025), 1472);
    }

    #[test]
    fn test_tapered_zero_threshold_terminates() {
        let p = GrowthPolicy::Tapered { threshold: 0 };
        assert_eq!(p.grow(1, 2), 2);
    }

    fn arb_policy() -> impl Strategy<Value = GrowthPolicy> {
        prop_oneof![
            Just(GrowthPolicy::Doubling),
            Just(GrowthPolicy::Moderate),
            (0usize..64).prop_map(|threshold| GrowthPolicy::Tapered { threshold }),
        ]
    }

    proptest! {
        #[test]
        fn grow_is_strictly_larger_and_meets_requirement(
            policy in arb_policy(),
            old in 0usize..10_000,
            extra in 1usize..100,
        ) {
            let required = old + extra;
            let new = policy.grow(old, required);
            prop_assert!(new > old);
            prop_assert!(new >= required);
        }

        #[test]
        fn doubling_is_geometric(old in 1usize..1_000_000) {
            prop_assert!(GrowthPolicy::Doubling.grow(old, old + 1) >= 2 * old);
        }

        #[test]
        fn every_policy_is_geometric(policy in arb_policy(), old in 8usize..1_000_000) {
            // 1.25x is the slowest factor any policy settles on.
            prop_assert!(policy.grow(old, old + 1) >= old + old / 4);
        }
    }
}
