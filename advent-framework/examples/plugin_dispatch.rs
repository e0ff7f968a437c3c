//! Example solver registered through the plugin system
//!
//! A tiny day whose second part has a wrong expected answer, to show how the
//! dispatcher reports a failing example self-test next to a passing one.
//!
//! Run with: cargo run --example plugin_dispatch

use advent_framework::input::parse_lines_with;
use advent_framework::{
    AutoRegisterSolver, Dispatcher, MemorySource, ParseError, RegistryBuilder, SolveError, Solver,
};

/// Example solver that processes lines of integers
///
/// - Part 1: Sum all numbers
/// - Part 2: Product of all numbers
#[derive(AutoRegisterSolver)]
#[advent(tags = ["example"])]
pub struct ExampleDay;

impl Solver for ExampleDay {
    const DAY: u8 = 24;
    type Input = Vec<i64>;
    type Answer = i64;

    fn parse(text: &str) -> Result<Self::Input, ParseError> {
        parse_lines_with(text, |line| line.trim().parse::<i64>())
    }

    fn part_one(input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(input.iter().sum())
    }

    fn part_two(input: &Self::Input) -> Result<Self::Answer, SolveError> {
        Ok(input.iter().product())
    }

    fn expected_test_result_one() -> Self::Answer {
        6
    }

    fn expected_test_result_two() -> Self::Answer {
        // the example product is 6
        7
    }
}

fn main() {
    println!("=== Plugin Dispatch Example ===\n");

    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let source = MemorySource::new().with_day(24, "1\n2\n3\n4\n5\n", "1\n2\n3\n");

    let report = match Dispatcher::new(&registry, &source).execute(24) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error dispatching day 24: {}", e);
            return;
        }
    };

    for part in &report.parts {
        match (&part.test, &part.answer) {
            (Ok(outcome), Ok(result)) if outcome.passed => {
                println!("Part {}: {} (example verified)", part.part, result.answer)
            }
            (Ok(outcome), _) => println!("Part {}: {}", part.part, outcome.describe_failure()),
            (Err(e), _) => eprintln!("Error testing part {}: {}", part.part, e),
        }
    }
}
