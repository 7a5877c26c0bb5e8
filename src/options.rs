//! Construction-time configuration for [`DynamicArray`](crate::DynamicArray).

use crate::error::{ArrayError, Result};

/// Controls how a growable array changes its capacity.
///
/// * On overflow the capacity is multiplied by `growth_factor`.
/// * After a removal, if `len < capacity / shrink_divisor` the buffer is shrunk to `len`.
///
/// The default `{ growth_factor: 2, shrink_divisor: 4 }` doubles on overflow and shrinks
/// at quarter utilization, leaving a gap between the two thresholds so alternating
/// insert/remove near a boundary cannot thrash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityPolicy {
    /// Multiplier applied to the capacity when a growable array is full. `2..=16`.
    pub growth_factor: usize,
    /// A removal that leaves `len < capacity / shrink_divisor` shrinks the buffer to `len`.
    /// At least 2.
    pub shrink_divisor: usize,
}

impl CapacityPolicy {
    /// Largest accepted `growth_factor`. Beyond this a single growth step over-allocates
    /// by more than an order of magnitude.
    pub const MAX_GROWTH_FACTOR: usize = 16;

    pub const fn new(growth_factor: usize, shrink_divisor: usize) -> Self {
        Self {
            growth_factor,
            shrink_divisor,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !(2..=Self::MAX_GROWTH_FACTOR).contains(&self.growth_factor) {
            return Err(ArrayError::InvalidPolicy(format!(
                "growth factor must be in 2..={}, got {}",
                Self::MAX_GROWTH_FACTOR,
                self.growth_factor
            )));
        }
        if self.shrink_divisor < 2 {
            return Err(ArrayError::InvalidPolicy(format!(
                "shrink divisor must be at least 2, got {}",
                self.shrink_divisor
            )));
        }
        Ok(())
    }

    /// Capacity after one growth step. Never less than `required`, so an array that was
    /// tightened down to zero slots can still grow.
    #[inline]
    pub(crate) fn grown(&self, capacity: usize, required: usize) -> usize {
        capacity.saturating_mul(self.growth_factor).max(required)
    }

    #[inline]
    pub(crate) fn should_shrink(&self, len: usize, capacity: usize) -> bool {
        len < capacity / self.shrink_divisor
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// Mode flags chosen when an array is created.
///
/// ```rust
/// use dynamic_array::ArrayOptions;
///
/// let opts = ArrayOptions::new().sorted().fixed();
/// assert!(opts.sorted && opts.fixed);
/// assert_eq!(ArrayOptions::default(), ArrayOptions::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayOptions {
    /// Start in sorted mode. Initial values are sorted on construction.
    pub sorted: bool,
    /// Freeze the capacity for the lifetime of the array.
    pub fixed: bool,
    /// Growth/shrink parameters. Ignored by fixed arrays.
    pub policy: CapacityPolicy,
}

impl ArrayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sorted(mut self) -> Self {
        self.sorted = true;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    pub fn with_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }
}
