// crates/shared-kernel/src/value_objects/bit_field.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Unsigned input value; only bits 0 through 15 take part in counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitField(u64);

impl BitField {
    /// Number of bit positions examined by a count.
    pub const WIDTH: u32 = 16;
    pub const LOW_MASK: u64 = 0xFFFF;

    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The 16-bit window the counter looks at.
    #[inline]
    pub const fn low16(self) -> u16 {
        (self.0 & Self::LOW_MASK) as u16
    }

    /// True when bits above position 15 are set and will be ignored.
    #[inline]
    pub const fn has_high_bits(self) -> bool {
        self.0 & !Self::LOW_MASK != 0
    }
}

impl From<u16> for BitField {
    fn from(value: u16) -> Self {
        Self(u64::from(value))
    }
}

impl From<u32> for BitField {
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<u64> for BitField {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// Accepts decimal, `0x` hex, `0b` binary and `0o` octal, with `_` separators.
impl FromStr for BitField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace('_', "");
        let lower = cleaned.to_ascii_lowercase();
        let (digits, radix) = split_radix(&lower);
        if digits.is_empty() {
            return Err(invalid(s, "no digits"));
        }
        u64::from_str_radix(digits, radix)
            .map(Self)
            .map_err(|e| invalid(s, &e.to_string()))
    }
}

fn split_radix(s: &str) -> (&str, u32) {
    const PREFIXES: &[(&str, u32)] = &[("0x", 16), ("0b", 2), ("0o", 8)];
    PREFIXES
        .iter()
        .find_map(|(prefix, radix)| s.strip_prefix(prefix).map(|rest| (rest, *radix)))
        .unwrap_or((s, 10))
}

fn invalid(input: &str, reason: &str) -> DomainError {
    DomainError::InvalidValue { input: input.to_string(), reason: reason.to_string() }
}
