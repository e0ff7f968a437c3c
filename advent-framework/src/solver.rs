//! Core solver trait and related types

use crate::error::{ParseError, SolveError};
use std::fmt;

/// Number of parts every daily puzzle has
pub const PARTS: u8 = 2;

/// Core trait that all daily solvers must implement.
///
/// A solver is identified by its day number and defines:
/// - How its input text is parsed (`Input` type and `parse()`)
/// - How each of the two parts is computed from the parsed input
/// - The known-correct answers for the example input bundled with the puzzle
///
/// All functions are associated functions: a solver carries no state of its
/// own. The loaded inputs live in a [`SolverInstance`](crate::SolverInstance).
///
/// # Example
///
/// ```
/// use advent_framework::input::parse_lines_with;
/// use advent_framework::{ParseError, SolveError, Solver};
///
/// struct Day9;
///
/// impl Solver for Day9 {
///     const DAY: u8 = 9;
///     type Input = Vec<i64>;
///     type Answer = i64;
///
///     fn parse(text: &str) -> Result<Self::Input, ParseError> {
///         parse_lines_with(text, |line| line.parse::<i64>())
///     }
///
///     fn part_one(input: &Self::Input) -> Result<Self::Answer, SolveError> {
///         Ok(input.iter().sum())
///     }
///
///     fn part_two(input: &Self::Input) -> Result<Self::Answer, SolveError> {
///         Ok(input.iter().product())
///     }
///
///     fn expected_test_result_one() -> Self::Answer {
///         6
///     }
///
///     fn expected_test_result_two() -> Self::Answer {
///         6
///     }
/// }
///
/// let input = Day9::parse("1\n2\n3\n").unwrap();
/// assert_eq!(Day9::part_one(&input).unwrap(), 6);
/// ```
pub trait Solver {
    /// Day of the month this solver answers (1-31)
    const DAY: u8;

    /// Parsed form of the input text
    type Input;

    /// Answer produced by both parts
    type Answer: PartialEq + fmt::Debug + fmt::Display;

    /// Parse the input text into the solver's input structure
    fn parse(text: &str) -> Result<Self::Input, ParseError>;

    /// Compute the first part
    fn part_one(input: &Self::Input) -> Result<Self::Answer, SolveError>;

    /// Compute the second part
    fn part_two(input: &Self::Input) -> Result<Self::Answer, SolveError>;

    /// Expected answer of the first part on the example input
    fn expected_test_result_one() -> Self::Answer;

    /// Expected answer of the second part on the example input
    fn expected_test_result_two() -> Self::Answer;
}

/// Part-indexed access to a [`Solver`]
pub trait SolverExt: Solver {
    /// Compute part `part` (1 or 2)
    ///
    /// # Returns
    /// * `Err(SolveError::PartOutOfRange)` - `part` is neither 1 nor 2
    fn solve_part(input: &Self::Input, part: u8) -> Result<Self::Answer, SolveError> {
        match part {
            1 => Self::part_one(input),
            2 => Self::part_two(input),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }

    /// Expected example answer of part `part` (1 or 2)
    fn expected_for(part: u8) -> Result<Self::Answer, SolveError> {
        match part {
            1 => Ok(Self::expected_test_result_one()),
            2 => Ok(Self::expected_test_result_two()),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
