//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use chrono::{Datelike, Local, NaiveDate};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--inputs` is not given
pub const INPUTS_ENV: &str = "ADVENT_INPUTS";

/// Inputs directory used when neither `--inputs` nor the environment names one
pub const DEFAULT_INPUTS_DIR: &str = "inputs";

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day to run
    pub day: u8,
    /// Whether the day was given explicitly (vs derived from today's date)
    pub day_provided: bool,
    /// Directory holding the per-day input folders
    pub inputs_dir: PathBuf,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// List registered days instead of running one
    pub list: bool,
    /// Show real answers whose example self-test failed
    pub show_unverified: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Log level for the env_logger backend
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, the environment and today's date
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let env_inputs = std::env::var(INPUTS_ENV).ok();
        let today = Local::now().date_naive();
        Self::resolve(args, env_inputs, today)
    }

    fn resolve(args: Args, env_inputs: Option<String>, today: NaiveDate) -> Result<Self, CliError> {
        let day_provided = args.day.is_some();
        let day = args.day.unwrap_or_else(|| day_of_month(today));

        let inputs_dir = match (args.inputs, env_inputs) {
            (Some(dir), _) => dir,
            (None, Some(dir)) if dir.is_empty() => {
                return Err(CliError::Config(format!("{} is set but empty", INPUTS_ENV)));
            }
            (None, Some(dir)) => PathBuf::from(dir),
            (None, None) => PathBuf::from(DEFAULT_INPUTS_DIR),
        };
        let inputs_dir = expand_tilde(&inputs_dir);

        Ok(Config {
            day,
            day_provided,
            inputs_dir,
            tags: args.tags,
            list: args.list,
            show_unverified: args.show_unverified,
            quiet: args.quiet,
            log_level: log_level(args.verbose, args.quiet),
        })
    }
}

/// Day of the month, which is always within 1-31
fn day_of_month(date: NaiveDate) -> u8 {
    date.day() as u8
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, 0) => LevelFilter::Error,
        (_, 0) => LevelFilter::Warn,
        (_, 1) => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
