use count_bits_shared_kernel::{BitCount, BitField};

/// Counts the set bits inside the low 16 bits of a value.
///
/// Implementations must be pure: the same input always yields the same
/// count, and bits at position 16 and above never contribute.
pub trait BitCounter {
    fn count(&self, value: BitField) -> BitCount;
}

/// Walks a single-bit mask across positions 0..16.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MaskCounter;

impl BitCounter for MaskCounter {
    fn count(&self, value: BitField) -> BitCount {
        let raw = value.value();
        let mut mask: u64 = 1;
        let mut count = BitCount::zero();

        for position in 0..BitField::WIDTH {
            if raw & mask != 0 {
                log::trace!("bit {position} set in {value}");
                count = count.incremented();
            }
            mask <<= 1;
        }
        count
    }
}

impl<F> BitCounter for F
where
    F: Fn(BitField) -> BitCount,
{
    fn count(&self, value: BitField) -> BitCount {
        self(value)
    }
}

/// Counts with the reference [`MaskCounter`].
#[must_use]
pub fn count_bits(value: impl Into<BitField>) -> BitCount {
    MaskCounter.count(value.into())
}
