// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use anyhow::Result;

fn main() -> ExitCode {
    count_bits::logging::init();

    match run() {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u8> {
    let config = count_bits::cli::load_config()?;
    let status = count_bits::app::run(&config)?;
    if status != 0 {
        log::warn!("self-test failed with status {status}");
        eprintln!("[count_bits] self-test failed: case {status}");
    }
    Ok(status)
}
