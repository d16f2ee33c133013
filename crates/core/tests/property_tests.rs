use count_bits_core::{count_bits, run_self_test, BitCounter, MaskCounter};
use count_bits_shared_kernel::{BitCount, BitField};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matches_popcount_of_low16(value in any::<u64>()) {
        let expected = (value & 0xFFFF).count_ones();
        prop_assert_eq!(u32::from(count_bits(value)), expected);
    }

    #[test]
    fn never_exceeds_window(value in any::<u64>()) {
        prop_assert!(count_bits(value).value() <= BitCount::MAX);
    }

    #[test]
    fn high_bits_never_contribute(low in any::<u16>(), high in any::<u64>()) {
        let widened = (high << 16) | u64::from(low);
        prop_assert_eq!(count_bits(widened), count_bits(low));
    }

    #[test]
    fn repeated_counts_agree(value in any::<u64>()) {
        let field = BitField::new(value);
        let first = MaskCounter.count(field);
        for _ in 0..4 {
            prop_assert_eq!(MaskCounter.count(field), first);
        }
    }

    #[test]
    fn complement_fills_window(value in any::<u16>()) {
        let ones = count_bits(value).value();
        let zeros = count_bits(!value).value();
        prop_assert_eq!(ones + zeros, 16);
    }
}

#[test]
fn self_test_passes_with_reference_counter() {
    assert_eq!(run_self_test(&MaskCounter).exit_code(), 0);
}

#[test]
fn self_test_reports_first_case_for_always_zero() {
    let broken = |_: BitField| BitCount::zero();
    assert_eq!(run_self_test(&broken).exit_code(), 1);
}
