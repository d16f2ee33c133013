// src/cli/value_enum.rs
use clap::ValueEnum;

use crate::options::OutputFormat;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    Jsonl,
    Yaml,
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliOutputFormat, OutputFormat, Table, Csv, Tsv, Json, Jsonl, Yaml);
map_enum!(OutputFormat, CliOutputFormat, Table, Csv, Tsv, Json, Jsonl, Yaml);
