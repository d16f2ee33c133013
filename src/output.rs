// src/output.rs
use std::io::Write;

use count_bits_core::{BitCounter, SelfTestCase, SelfTestOutcome};
use count_bits_shared_kernel::{BitCount, BitField, Result};
use serde::Serialize;

use crate::config::Config;
use crate::options::OutputFormat;

/// One counted input value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitReport {
    pub input: BitField,
    pub low16: String,
    pub bits: BitCount,
}

impl BitReport {
    pub fn measure(counter: &impl BitCounter, input: BitField) -> Self {
        Self {
            input,
            low16: format!("{:#06X}", input.low16()),
            bits: counter.count(input),
        }
    }
}

/// One checked self-test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub case: u8,
    pub input: BitField,
    pub expected: BitCount,
    pub actual: BitCount,
    pub ok: bool,
}

impl CaseReport {
    pub fn new(case: &SelfTestCase, actual: BitCount) -> Self {
        Self {
            case: case.ordinal,
            input: case.input,
            expected: case.expected,
            actual,
            ok: actual == case.expected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub outcome: SelfTestOutcome,
    pub exit_code: u8,
    pub checks: Vec<CaseReport>,
}

fn total_bits(reports: &[BitReport]) -> u64 {
    reports.iter().map(|r| u64::from(r.bits.value())).sum()
}

/// Writes counted values in the configured format.
///
/// # Errors
///
/// Returns `Err` when writing to `out` or serializing fails.
pub fn write_counts<W: Write>(out: &mut W, reports: &[BitReport], config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_count_table(out, reports, config.total_row),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = config.format.delimiter().unwrap_or(",");
            write_count_sv(out, reports, delimiter, config.total_row)
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Jsonl => write_count_jsonl(out, reports),
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, reports)?;
            Ok(())
        }
    }
}

fn write_count_table<W: Write>(out: &mut W, reports: &[BitReport], total_row: bool) -> Result<()> {
    writeln!(out, "count_bits v{}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(out, "  BITS     LOW16      INPUT")?;
    writeln!(out, "----------------------------")?;
    for r in reports {
        writeln!(out, "{:>6}{:>10}      {}", r.bits.value(), r.low16, r.input)?;
    }
    if total_row {
        writeln!(out, "---")?;
        writeln!(out, "{:>6}                TOTAL ({} values)", total_bits(reports), reports.len())?;
    }
    Ok(())
}

fn write_count_sv<W: Write>(
    out: &mut W,
    reports: &[BitReport],
    delimiter: &str,
    total_row: bool,
) -> Result<()> {
    writeln!(out, "input{delimiter}low16{delimiter}bits")?;
    for r in reports {
        writeln!(out, "{}{delimiter}{}{delimiter}{}", r.input.value(), r.low16, r.bits)?;
    }
    if total_row {
        writeln!(out, "TOTAL{delimiter}{delimiter}{}", total_bits(reports))?;
    }
    Ok(())
}

fn write_count_jsonl<W: Write>(out: &mut W, reports: &[BitReport]) -> Result<()> {
    for r in reports {
        let mut v = serde_json::to_value(r)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "value".into());
        }
        writeln!(out, "{v}")?;
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "values": reports.len(),
        "bits": total_bits(reports),
    });
    writeln!(out, "{total_obj}")?;
    Ok(())
}

/// Writes a self-test result in the configured format.
///
/// # Errors
///
/// Returns `Err` when writing to `out` or serializing fails.
pub fn write_self_test<W: Write>(out: &mut W, report: &SelfTestReport, config: &Config) -> Result<()> {
    match config.format {
        OutputFormat::Table => write_self_test_text(out, report, config.verbose),
        OutputFormat::Csv | OutputFormat::Tsv => {
            let delimiter = config.format.delimiter().unwrap_or(",");
            writeln!(out, "case{delimiter}input{delimiter}expected{delimiter}actual{delimiter}ok")?;
            for c in &report.checks {
                writeln!(
                    out,
                    "{}{delimiter}{}{delimiter}{}{delimiter}{}{delimiter}{}",
                    c.case,
                    c.input.value(),
                    c.expected,
                    c.actual,
                    c.ok
                )?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Jsonl => {
            for c in &report.checks {
                let mut v = serde_json::to_value(c)?;
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("type".to_string(), "case".into());
                }
                writeln!(out, "{v}")?;
            }
            let summary = serde_json::json!({
                "type": "summary",
                "version": crate::VERSION,
                "exit_code": report.exit_code,
            });
            writeln!(out, "{summary}")?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, report)?;
            Ok(())
        }
    }
}

fn write_self_test_text<W: Write>(out: &mut W, report: &SelfTestReport, verbose: bool) -> Result<()> {
    if verbose {
        for c in &report.checks {
            let mark = if c.ok { "ok" } else { "FAIL" };
            writeln!(
                out,
                "[{}] count({}) = {:>2} (expected {:>2}) {mark}",
                c.case,
                c.input,
                c.actual.value(),
                c.expected.value()
            )?;
        }
    }
    match &report.outcome {
        SelfTestOutcome::Passed { checked } => {
            writeln!(out, "[count_bits] self-test passed: {checked} cases")?;
        }
        SelfTestOutcome::Failed { case, actual } => {
            writeln!(
                out,
                "[count_bits] self-test FAILED at case {}: count({}) = {actual}, expected {}",
                case.ordinal, case.input, case.expected
            )?;
        }
    }
    Ok(())
}
