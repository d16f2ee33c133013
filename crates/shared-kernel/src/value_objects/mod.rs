// crates/shared-kernel/src/value_objects/mod.rs
pub mod bit_field;
pub mod counts;

pub use bit_field::BitField;
pub use counts::BitCount;
