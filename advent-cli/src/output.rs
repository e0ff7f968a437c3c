//! Output formatting for dispatch results

use advent_framework::{DayReport, PartReport, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::io::{self, Write};

/// Output formatter for dispatch results
pub struct OutputFormatter {
    quiet: bool,
    show_unverified: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool, show_unverified: bool) -> Self {
        Self {
            quiet,
            show_unverified,
        }
    }

    /// Write the outcome of dispatching `day`
    pub fn write_result<W: Write>(
        &self,
        out: &mut W,
        day: u8,
        result: &Result<DayReport, SolverError>,
    ) -> io::Result<()> {
        match result {
            Ok(report) => self.write_report(out, report),
            Err(e) => self.write_error(out, day, e),
        }
    }

    /// Write one line per part, plus failure details
    ///
    /// Outside quiet mode, a day with any unverified part ends with a summary line.
    pub fn write_report<W: Write>(&self, out: &mut W, report: &DayReport) -> io::Result<()> {
        for part in &report.parts {
            // load time is shared by both parts; show it once
            let load = (part.part == 1).then_some(report.load_duration);
            if self.quiet {
                self.write_part_quiet(out, report.day, part)?;
            } else {
                self.write_part_full(out, report.day, part, load)?;
            }
        }
        if !self.quiet && !report.all_verified() {
            let verified = report.parts.iter().filter(|p| p.verified()).count();
            writeln!(
                out,
                "Day {:02}: {} of {} parts verified on the example",
                report.day,
                verified,
                report.parts.len()
            )?;
        }
        Ok(())
    }

    /// Write a resolution or execution diagnostic
    pub fn write_error<W: Write>(&self, out: &mut W, day: u8, error: &SolverError) -> io::Result<()> {
        if !self.quiet {
            if error.is_resolution() {
                writeln!(out, "Error while resolving day {:02}:", day)?;
            } else {
                writeln!(out, "Error while executing day {:02}:", day)?;
            }
        }
        writeln!(out, "{}", error)
    }

    /// Write the registered days and their tags
    pub fn write_listing<W: Write>(&self, out: &mut W, registry: &SolverRegistry) -> io::Result<()> {
        for info in registry.iter_info() {
            if self.quiet || info.tags.is_empty() {
                writeln!(out, "day{:02}", info.day)?;
            } else {
                writeln!(out, "day{:02} [{}]", info.day, info.tags.join(", "))?;
            }
        }
        Ok(())
    }

    /// Quiet mode: the answer alone, or a diagnostic line per problem
    fn write_part_quiet<W: Write>(&self, out: &mut W, day: u8, part: &PartReport) -> io::Result<()> {
        let prefix = format!("Day {:02} Part {}", day, part.part);
        let verified = match &part.test {
            Ok(outcome) if outcome.passed => true,
            Ok(outcome) => {
                writeln!(out, "{}: {}", prefix, outcome.describe_failure())?;
                false
            }
            Err(e) => {
                writeln!(out, "{}: example test error - {}", prefix, e)?;
                false
            }
        };

        match &part.answer {
            Ok(result) if verified => writeln!(out, "{}", result.answer),
            Ok(result) if self.show_unverified => {
                writeln!(out, "{}: unverified answer {}", prefix, result.answer)
            }
            Err(e) if verified || self.show_unverified => {
                writeln!(out, "{}: Error - {}", prefix, e)
            }
            _ => Ok(()),
        }
    }

    /// Full mode: answer with timings, or failure notice with details
    fn write_part_full<W: Write>(
        &self,
        out: &mut W,
        day: u8,
        part: &PartReport,
        load: Option<TimeDelta>,
    ) -> io::Result<()> {
        let prefix = format!("Day {:02} Part {}", day, part.part);

        let verified = match &part.test {
            Ok(outcome) if outcome.passed => true,
            Ok(outcome) => {
                writeln!(out, "{}: example test failed", prefix)?;
                writeln!(out, "  {}", outcome.describe_failure())?;
                false
            }
            Err(e) => {
                writeln!(out, "{}: example test error - {}", prefix, e)?;
                false
            }
        };

        match &part.answer {
            Ok(result) if verified => {
                let load_timing = load
                    .map(|d| format!("load: {}, ", format_duration(d)))
                    .unwrap_or_default();
                writeln!(
                    out,
                    "{}: {} ({}solve: {})",
                    prefix,
                    result.answer,
                    load_timing,
                    format_duration(result.duration())
                )
            }
            Ok(result) if self.show_unverified => {
                writeln!(out, "  unverified answer: {}", result.answer)
            }
            Ok(_) => Ok(()),
            Err(e) if verified || self.show_unverified => {
                writeln!(out, "{}: Error - {}", prefix, e)
            }
            Err(_) => Ok(()),
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}
