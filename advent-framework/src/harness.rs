//! Example self-tests
//!
//! Every solver declares the answers its parts must produce on the example
//! input from the puzzle statement. [`run_test`] computes a part on that
//! example and compares the two values.

use crate::error::SolveError;
use crate::instance::SolverInstance;
use crate::solver::{Solver, SolverExt};
use std::fmt;

/// Outcome of checking one part against its expected example answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome<A> {
    /// The part that was checked
    pub part: u8,
    /// Value computed on the example input
    pub computed: A,
    /// Value declared by the solver
    pub expected: A,
    /// Whether `computed == expected`
    pub passed: bool,
}

impl<A: PartialEq> TestOutcome<A> {
    /// Build an outcome, deriving `passed` from value equality
    pub fn new(part: u8, computed: A, expected: A) -> Self {
        let passed = computed == expected;
        Self {
            part,
            computed,
            expected,
            passed,
        }
    }
}

impl<A> TestOutcome<A> {
    /// Convert both values, keeping the original comparison result
    pub fn map_values<B>(self, mut f: impl FnMut(A) -> B) -> TestOutcome<B> {
        TestOutcome {
            part: self.part,
            computed: f(self.computed),
            expected: f(self.expected),
            passed: self.passed,
        }
    }
}

impl<A: fmt::Display> TestOutcome<A> {
    /// Human-readable description of a mismatch
    pub fn describe_failure(&self) -> String {
        format!(
            "Part {} on the example: expected {}, got {}",
            self.part, self.expected, self.computed
        )
    }
}

/// Run part `part` of a solver on its example input and compare with the expected answer
///
/// # Returns
/// * `Ok(TestOutcome)` - The part was computed; `passed` tells whether it matched
/// * `Err(SolveError)` - The part is out of range or failed to compute
pub fn run_test<S: Solver>(
    instance: &SolverInstance<S>,
    part: u8,
) -> Result<TestOutcome<S::Answer>, SolveError> {
    let computed = instance.solve_part(part, Some(instance.example()))?;
    let expected = S::expected_for(part)?;
    let outcome = TestOutcome::new(part, computed, expected);

    if !outcome.passed {
        log::warn!("day {:02}: {}", S::DAY, outcome.describe_failure());
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::input::parse_grouped_with;

    /// Sums of groups; part two's declared answer is deliberately wrong
    struct GroupSums;

    impl Solver for GroupSums {
        const DAY: u8 = 12;
        type Input = Vec<Vec<i64>>;
        type Answer = i64;

        fn parse(text: &str) -> Result<Self::Input, ParseError> {
            parse_grouped_with(text, |l| l.parse::<i64>())
        }

        fn part_one(input: &Self::Input) -> Result<Self::Answer, SolveError> {
            Ok(input.iter().map(|g| g.iter().sum::<i64>()).max().unwrap_or(0))
        }

        fn part_two(input: &Self::Input) -> Result<Self::Answer, SolveError> {
            Ok(input.iter().flatten().sum())
        }

        fn expected_test_result_one() -> Self::Answer {
            7
        }

        fn expected_test_result_two() -> Self::Answer {
            100
        }
    }

    fn instance() -> SolverInstance<GroupSums> {
        let example = GroupSums::parse("1\n2\n\n3\n4\n").unwrap();
        SolverInstance::from_parsed(vec![vec![50]], example)
    }

    #[test]
    fn test_passing_part() {
        let outcome = run_test(&instance(), 1).unwrap();
        assert_eq!(outcome, TestOutcome::new(1, 7, 7));
        assert!(outcome.passed);
    }

    #[test]
    fn test_failing_part_uses_example_not_real_input() {
        let outcome = run_test(&instance(), 2).unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.computed, 10);
        assert_eq!(outcome.expected, 100);
    }

    #[test]
    fn test_describe_failure_mentions_both_values() {
        let outcome = run_test(&instance(), 2).unwrap();
        let message = outcome.describe_failure();
        assert!(message.contains("expected 100"));
        assert!(message.contains("got 10"));
    }

    #[test]
    fn test_repeated_runs_agree() {
        let instance = instance();
        for part in 1..=2 {
            let first = run_test(&instance, part).unwrap();
            let second = run_test(&instance, part).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_out_of_range_part() {
        assert!(matches!(
            run_test(&instance(), 3),
            Err(SolveError::PartOutOfRange(3))
        ));
    }

    #[test]
    fn test_map_values_keeps_passed() {
        let outcome = TestOutcome::new(1, 1.0_f64, 1.0).map_values(|v| format!("{v:.1}"));
        assert!(outcome.passed);
        assert_eq!(outcome.computed, "1.0");

        let outcome = TestOutcome::new(2, 3, 4).map_values(|_| "same");
        assert!(!outcome.passed);
        assert_eq!(outcome.computed, outcome.expected);
    }
}
