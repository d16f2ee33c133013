// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::{Args, Command, CountArgs, SelfTestArgs};
pub use value_enum::CliOutputFormat;

use clap::Parser;
use count_bits_shared_kernel::{PresentationError, PresentationResult};

use crate::config::{Config, ConfigBuilder};
use crate::options::Mode;

/// Parse CLI arguments and materialise a [`Config`].
///
/// # Errors
///
/// Returns `Err` when the builder rejects the parsed options.
pub fn load_config() -> PresentationResult<Config> {
    let args = Args::parse();
    build_config(args)
}

/// Convert parsed CLI arguments into a configuration.
///
/// A missing subcommand runs the self-test with default output.
///
/// # Errors
///
/// Returns `Err` when the builder rejects the parsed options.
pub fn build_config(args: Args) -> PresentationResult<Config> {
    let mut builder = ConfigBuilder::default();

    match args.command.unwrap_or(Command::SelfTest(SelfTestArgs::default())) {
        Command::SelfTest(opts) => {
            builder
                .mode(Mode::SelfTest)
                .format(opts.format)
                .verbose(opts.verbose);
        }
        Command::Count(opts) => {
            builder
                .mode(Mode::Count)
                .format(opts.format)
                .values(opts.values)
                .read_stdin(opts.stdin)
                .total_row(opts.total_row);
        }
        Command::Hello => {
            builder.mode(Mode::Hello);
        }
    }

    builder
        .build()
        .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
}
