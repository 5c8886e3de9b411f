// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Capacity below which a full backing store is doubled.
pub const DEFAULT_DOUBLING_THRESHOLD: usize = 1024;

/// Growth applied at or above the threshold, in percent of the old capacity.
pub const DEFAULT_LARGE_GROWTH_PERCENT: usize = 125;

/// Decides the capacity of the next backing store when an append overflows.
///
/// - capacity < `doubling_threshold`: `2 × capacity`
/// - otherwise: `capacity × large_growth_percent / 100`, rounded half up
///
/// Either way the result is raised to the capacity the append actually needs.
///
/// # Example
///
/// ```rust
/// use sliceworks_seq::GrowthPolicy;
///
/// let policy = GrowthPolicy::default();
///
/// assert_eq!(policy.next_capacity(4, 5), 8);
/// assert_eq!(policy.next_capacity(1024, 1025), 1280);
/// // A large append skips straight to what is required.
/// assert_eq!(policy.next_capacity(4, 100), 100);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GrowthPolicy {
    /// Capacities strictly below this value double.
    pub doubling_threshold: usize,
    /// Percentage applied to capacities at or above the threshold.
    pub large_growth_percent: usize,
}

impl GrowthPolicy {
    /// Creates a policy with explicit parameters.
    pub const fn new(doubling_threshold: usize, large_growth_percent: usize) -> Self {
        Self {
            doubling_threshold,
            large_growth_percent,
        }
    }

    /// Capacity obtained by growing `capacity` once, ignoring any minimum.
    pub fn grown_capacity(&self, capacity: usize) -> usize {
        if capacity < self.doubling_threshold {
            return capacity.saturating_mul(2);
        }

        let extra = self.large_growth_percent.saturating_sub(100);
        // Split the product so `capacity * extra` cannot overflow for large stores.
        let whole = (capacity / 100).saturating_mul(extra);
        let rest = ((capacity % 100).saturating_mul(extra)).saturating_add(50) / 100;

        capacity.saturating_add(whole.saturating_add(rest))
    }

    /// Capacity of the store that replaces one of `capacity` slots when
    /// `required` slots are needed.
    pub fn next_capacity(&self, capacity: usize, required: usize) -> usize {
        self.grown_capacity(capacity).max(required)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLING_THRESHOLD, DEFAULT_LARGE_GROWTH_PERCENT)
    }
}
