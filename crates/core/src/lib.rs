#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod counter;
pub mod greeting;

pub use counter::{count_bits, BitCounter, MaskCounter};
pub use greeting::{greet, print_str, CharSink, GREETING};
pub use self_test::{run_self_test, run_self_test_with, SelfTestCase, SelfTestOutcome, SELF_TEST_CASES};
