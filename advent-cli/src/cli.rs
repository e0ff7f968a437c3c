//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Daily puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run daily puzzle solvers", version)]
pub struct Args {
    /// Day to run (defaults to today's day of the month)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    pub day: Option<u8>,

    /// Directory holding dayDD/input.txt and dayDD/test.txt
    /// (falls back to $ADVENT_INPUTS, then ./inputs)
    #[arg(short, long)]
    pub inputs: Option<PathBuf>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered days and exit
    #[arg(long)]
    pub list: bool,

    /// Print real answers even when the example self-test failed
    #[arg(long)]
    pub show_unverified: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
