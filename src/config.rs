// src/config.rs
use count_bits_shared_kernel::BitField;
use derive_builder::Builder;

use crate::options::{Mode, OutputFormat};

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub mode: Mode,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub values: Vec<BitField>,
    #[builder(default)]
    pub read_stdin: bool,
    #[builder(default)]
    pub total_row: bool,
    #[builder(default)]
    pub verbose: bool,
}
