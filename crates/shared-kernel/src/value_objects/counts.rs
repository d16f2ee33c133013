// crates/shared-kernel/src/value_objects/counts.rs
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of set bits found inside the 16-bit window, always in `0..=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BitCount(u8);

impl BitCount {
    pub const MAX: u8 = 16;
    pub const ZERO: Self = Self(0);

    /// Builds a count, rejecting anything wider than the window.
    pub fn try_new(value: u32) -> DomainResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= Self::MAX)
            .map(Self)
            .ok_or(DomainError::CountOutOfRange { value, max: u32::from(Self::MAX) })
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Adds `n`, pinned at [`BitCount::MAX`].
    #[inline]
    #[must_use]
    pub const fn plus(self, n: u8) -> Self {
        let sum = self.0.saturating_add(n);
        if sum > Self::MAX { Self(Self::MAX) } else { Self(sum) }
    }

    #[inline]
    #[must_use]
    pub const fn incremented(self) -> Self {
        self.plus(1)
    }
}

impl Default for BitCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<u32> for BitCount {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<BitCount> for u32 {
    fn from(count: BitCount) -> Self {
        Self::from(count.0)
    }
}

mod display {
    use std::fmt;

    use super::BitCount;

    impl fmt::Display for BitCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
