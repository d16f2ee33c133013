// src/app.rs
use std::io::{self, BufRead, Write};

use count_bits_core::{greet, run_self_test_with, CharSink, MaskCounter};
use count_bits_shared_kernel::{BitField, ErrorContext, InfrastructureError, Result};

use crate::config::Config;
use crate::options::Mode;
use crate::output::{self, BitReport, CaseReport, SelfTestReport};

/// Runs the configured mode against the process's stdin/stdout.
///
/// Returns the status the process should exit with.
///
/// # Errors
///
/// Returns `Err` when reading input or writing output fails.
pub fn run(config: &Config) -> Result<u8> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, stdin.lock(), &mut stdout.lock())
}

/// Like [`run`], with explicit input and output streams.
///
/// # Errors
///
/// Returns `Err` when reading input or writing output fails.
pub fn run_with<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<u8> {
    log::debug!("resolved config: {config:?}");

    match config.mode {
        Mode::SelfTest => Ok(self_test(config, out)),
        Mode::Count => count(config, input, out).map(|()| 0),
        Mode::Hello => hello(out).map(|()| 0),
    }
}

fn self_test<W: Write>(config: &Config, out: &mut W) -> u8 {
    let mut checks = Vec::new();
    let outcome = run_self_test_with(&MaskCounter, |case, actual| {
        checks.push(CaseReport::new(case, actual));
    });
    let report = SelfTestReport { exit_code: outcome.exit_code(), outcome, checks };

    // Report failures never change the case status.
    if let Err(e) = output::write_self_test(out, &report, config) {
        log::warn!("self-test report not written: {e}");
        eprintln!("[count_bits] failed to write self-test report: {e}");
    }
    report.exit_code
}

fn count<R: BufRead, W: Write>(config: &Config, input: R, out: &mut W) -> Result<()> {
    let mut values = config.values.clone();
    if config.read_stdin {
        values.extend(read_values(input)?);
    }

    let reports: Vec<_> = values
        .into_iter()
        .inspect(|v| {
            if v.has_high_bits() {
                log::info!("{v}: bits above position 15 are ignored");
            }
        })
        .map(|v| BitReport::measure(&MaskCounter, v))
        .collect();

    output::write_counts(out, &reports, config).context("writing counts")
}

/// Reads whitespace-separated values, one or more per line.
///
/// # Errors
///
/// Returns `Err` on a read failure or on the first token that is not a value.
pub fn read_values<R: BufRead>(input: R) -> Result<Vec<BitField>> {
    let mut values = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|source| InfrastructureError::StdinRead { source })?;
        for token in line.split_whitespace() {
            let value = token
                .parse::<BitField>()
                .with_context(|| format!("stdin line {}", index + 1))?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Character sink over any byte stream.
pub struct WriteSink<W: Write> {
    inner: W,
}

impl<W: Write> WriteSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CharSink for WriteSink<W> {
    type Error = io::Error;

    fn put_char(&mut self, c: char) -> io::Result<()> {
        let mut buf = [0_u8; 4];
        self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())
    }
}

fn hello<W: Write>(out: &mut W) -> Result<()> {
    let mut sink = WriteSink::new(&mut *out);
    greet(&mut sink).context("writing greeting")?;
    out.flush().context("flushing greeting")
}
