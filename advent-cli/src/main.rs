//! Advent CLI - runs one day's solver: example self-test, then real input

mod cli;
mod config;
mod error;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_framework::{Dispatcher, FileSource, RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use log::LevelFilter;
use output::OutputFormatter;
use std::io::{self, Write};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(config.log_level);

    // Build registry with tag filtering
    let registry = build_registry(&config.tags)?;
    let formatter = OutputFormatter::new(config.quiet, config.show_unverified);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.list {
        if registry.is_empty() {
            writeln!(out, "No solvers found matching the specified filters.")?;
        } else {
            formatter.write_listing(&mut out, &registry)?;
        }
        return Ok(());
    }

    if registry.is_empty() {
        log::warn!("no solvers match tags {:?}", config.tags);
    }

    if !config.day_provided {
        log::info!("no day given, using today's date: day {:02}", config.day);
    }

    let source = FileSource::new(config.inputs_dir.clone());
    execute(&registry, &source, config.day, &formatter, &mut out)
}

/// Dispatch a single day and print its report or diagnostic
///
/// Resolution and input errors are printed, not returned: they do not make
/// the process fail.
fn execute<W: Write>(
    registry: &SolverRegistry,
    source: &FileSource,
    day: u8,
    formatter: &OutputFormatter,
    out: &mut W,
) -> Result<(), CliError> {
    log::info!("reading inputs from {}", source.root().display());
    let result = Dispatcher::new(registry, source).execute(day);
    formatter.write_result(out, day, &result)?;
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

/// Route `log` records to stderr; `RUST_LOG` overrides the flag-derived level
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_linked_solutions_are_registered() {
        let registry = build_registry(&[]).unwrap();
        assert!(registry.contains(1));
        assert!(registry.contains(2));
    }

    #[test]
    fn test_tag_filter() {
        let registry = build_registry(&["grouped".to_string()]).unwrap();
        assert_eq!(registry.days().collect::<Vec<_>>(), vec![1]);

        let registry = build_registry(&["2022".to_string(), "lines".to_string()]).unwrap();
        assert_eq!(registry.days().collect::<Vec<_>>(), vec![2]);

        let registry = build_registry(&["no-such-tag".to_string()]).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_execute_day_from_files() {
        let temp = TempDir::new().unwrap();
        let day_dir = temp.path().join("day02");
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("test.txt"), "A Y\nB X\nC Z\n").unwrap();
        fs::write(day_dir.join("input.txt"), "A X\nA X\n").unwrap();

        let registry = build_registry(&[]).unwrap();
        let source = FileSource::new(temp.path());
        let formatter = OutputFormatter::new(true, false);
        let mut out = Vec::new();

        execute(&registry, &source, 2, &formatter, &mut out).unwrap();

        // Rock vs Rock draws twice: (1 + 3) * 2; losing to Rock means Scissors: (3 + 0) * 2
        assert_eq!(String::from_utf8(out).unwrap(), "8\n6\n");
    }

    #[test]
    fn test_execute_unregistered_day_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let registry = build_registry(&[]).unwrap();
        let source = FileSource::new(temp.path());
        let formatter = OutputFormatter::new(false, false);
        let mut out = Vec::new();

        execute(&registry, &source, 25, &formatter, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error while resolving day 25:"));
    }

    #[test]
    fn test_execute_with_filtered_out_day_reports_resolution_error() {
        let temp = TempDir::new().unwrap();
        let registry = build_registry(&["no-such-tag".to_string()]).unwrap();
        let source = FileSource::new(temp.path());
        let formatter = OutputFormatter::new(false, false);
        let mut out = Vec::new();

        execute(&registry, &source, 1, &formatter, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Error while resolving day 01:\nNo solver registered for day 01\n");
    }

    #[test]
    fn test_execute_missing_input_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let registry = build_registry(&[]).unwrap();
        let source = FileSource::new(temp.path());
        let formatter = OutputFormatter::new(false, false);
        let mut out = Vec::new();

        execute(&registry, &source, 1, &formatter, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Error while executing day 01:"));
        assert!(text.contains("input.txt"));
    }
}
