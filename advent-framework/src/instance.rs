//! Solver instance implementation

use crate::error::{InputError, SolveError};
use crate::harness::{self, TestOutcome};
use crate::solver::{PARTS, Solver, SolverExt};
use crate::source::{InputKind, InputSource};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A solver together with its loaded inputs
///
/// Both the real input and the example input are read and parsed once, when
/// the instance is created. Nothing afterwards touches the input source.
pub struct SolverInstance<S: Solver> {
    input: S::Input,
    example: S::Input,
    load_start: DateTime<Utc>,
    load_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Create a new solver instance by loading and parsing both inputs
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Both inputs loaded, with load timing recorded
    /// * `Err(InputError)` - An input is missing, unreadable or malformed
    pub fn load(source: &dyn InputSource) -> Result<Self, InputError> {
        let load_start = Utc::now();
        let input = load_input::<S>(source, InputKind::Real)?;
        let example = load_input::<S>(source, InputKind::Example)?;
        let load_end = Utc::now();
        log::debug!("loaded inputs for day {:02}", S::DAY);

        Ok(Self {
            input,
            example,
            load_start,
            load_end,
        })
    }

    /// Create an instance from already parsed inputs
    pub fn from_parsed(input: S::Input, example: S::Input) -> Self {
        let now = Utc::now();
        Self {
            input,
            example,
            load_start: now,
            load_end: now,
        }
    }

    /// The parsed real input
    pub fn input(&self) -> &S::Input {
        &self.input
    }

    /// The parsed example input
    pub fn example(&self) -> &S::Input {
        &self.example
    }

    /// Compute part one on `input`, or on the real input when `None`
    pub fn part_one(&self, input: Option<&S::Input>) -> Result<S::Answer, SolveError> {
        S::part_one(input.unwrap_or(&self.input))
    }

    /// Compute part two on `input`, or on the real input when `None`
    pub fn part_two(&self, input: Option<&S::Input>) -> Result<S::Answer, SolveError> {
        S::part_two(input.unwrap_or(&self.input))
    }

    /// Compute part `part` on `input`, or on the real input when `None`
    pub fn solve_part(&self, part: u8, input: Option<&S::Input>) -> Result<S::Answer, SolveError> {
        S::solve_part(input.unwrap_or(&self.input), part)
    }
}

fn load_input<S: Solver>(source: &dyn InputSource, kind: InputKind) -> Result<S::Input, InputError> {
    let text = source.read(S::DAY, kind)?;
    S::parse(&text).map_err(|e| InputError::Parse {
        day: S::DAY,
        kind,
        source: e,
    })
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The concrete `SolverInstance<S>` implements this trait, allowing the
/// registry and the dispatcher to handle every day uniformly. Answers are
/// rendered to strings at this boundary.
///
/// # Example
///
/// ```no_run
/// use advent_framework::DynSolver;
///
/// fn example(solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let outcome = solver.run_test(1)?;
///     if outcome.passed {
///         let result = solver.solve(1)?;
///         println!("Part 1: {} (took {:?})", result.answer, result.duration());
///     }
///     println!("Load took {:?}", solver.load_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Solve the specified part on the real input, with timing
    fn solve(&self, part: u8) -> Result<SolveResult, SolveError>;

    /// Check the specified part against the expected example answer
    fn run_test(&self, part: u8) -> Result<TestOutcome<String>, SolveError>;

    /// Get the load start time (UTC)
    fn load_start(&self) -> DateTime<Utc>;

    /// Get the load end time (UTC)
    fn load_end(&self) -> DateTime<Utc>;

    /// Convenience: get load duration as TimeDelta
    fn load_duration(&self) -> TimeDelta {
        self.load_end() - self.load_start()
    }
}

impl<S: Solver> DynSolver for SolverInstance<S> {
    fn day(&self) -> u8 {
        S::DAY
    }

    fn parts(&self) -> u8 {
        PARTS
    }

    fn solve(&self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = self.solve_part(part, None)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer: answer.to_string(),
            solve_start,
            solve_end,
        })
    }

    fn run_test(&self, part: u8) -> Result<TestOutcome<String>, SolveError> {
        harness::run_test(self, part).map(|outcome| outcome.map_values(|v| v.to_string()))
    }

    fn load_start(&self) -> DateTime<Utc> {
        self.load_start
    }

    fn load_end(&self) -> DateTime<Utc> {
        self.load_end
    }
}
