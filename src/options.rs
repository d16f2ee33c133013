// src/options.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
}

impl OutputFormat {
    /// Field separator for the delimited formats.
    pub const fn delimiter(self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(","),
            Self::Tsv => Some("\t"),
            _ => None,
        }
    }
}

/// What a single invocation does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Run the fixed cases and exit with their status.
    #[default]
    SelfTest,
    /// Count the low 16 bits of each input value.
    Count,
    /// Print the greeting one character at a time.
    Hello,
}
