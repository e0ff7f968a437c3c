//! Day dispatcher: resolve, instantiate, self-test, solve

use crate::error::{SolveError, SolverError};
use crate::harness::TestOutcome;
use crate::instance::{DynSolver, SolveResult};
use crate::registry::SolverRegistry;
use crate::source::InputSource;
use chrono::TimeDelta;

/// What happened to one part of a dispatched day
#[derive(Debug)]
pub struct PartReport {
    /// The part number
    pub part: u8,
    /// Example self-test outcome, or the error raised while computing it
    pub test: Result<TestOutcome<String>, SolveError>,
    /// Answer on the real input, or the error raised while computing it
    pub answer: Result<SolveResult, SolveError>,
}

impl PartReport {
    /// Whether the example self-test ran and matched
    pub fn verified(&self) -> bool {
        matches!(&self.test, Ok(outcome) if outcome.passed)
    }
}

/// Result of dispatching one day
#[derive(Debug)]
pub struct DayReport {
    /// The dispatched day
    pub day: u8,
    /// Time spent loading and parsing both inputs
    pub load_duration: TimeDelta,
    /// One report per part, in part order
    pub parts: Vec<PartReport>,
}

impl DayReport {
    /// Whether every part passed its example self-test
    pub fn all_verified(&self) -> bool {
        self.parts.iter().all(PartReport::verified)
    }
}

/// Resolves a day through a registry and runs it against an input source
pub struct Dispatcher<'a> {
    registry: &'a SolverRegistry,
    source: &'a dyn InputSource,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a registry and an input source
    pub fn new(registry: &'a SolverRegistry, source: &'a dyn InputSource) -> Self {
        Self { registry, source }
    }

    /// Run one day
    ///
    /// Each part is self-tested on the example and then solved on the real
    /// input. Parts are independent: a failure in one does not stop the other,
    /// and the real answer is computed whatever the test outcome.
    ///
    /// # Returns
    /// * `Ok(DayReport)` - The solver was created and both parts attempted
    /// * `Err(SolverError::NotFound | SolverError::InvalidDay)` - The day could
    ///   not be resolved; nothing was read or computed
    /// * `Err(SolverError::Input)` - The solver could not load its inputs
    pub fn execute(&self, day: u8) -> Result<DayReport, SolverError> {
        log::info!("dispatching day {:02}", day);
        let solver = self.registry.create_solver(day, self.source)?;

        let parts = (1..=solver.parts())
            .map(|part| run_part(&*solver, part))
            .collect();

        Ok(DayReport {
            day,
            load_duration: solver.load_duration(),
            parts,
        })
    }
}

fn run_part(solver: &dyn DynSolver, part: u8) -> PartReport {
    let test = solver.run_test(part);
    let answer = solver.solve(part);
    log::debug!(
        "day {:02} part {}: test {}, answer {}",
        solver.day(),
        part,
        match &test {
            Ok(outcome) if outcome.passed => "passed",
            Ok(_) => "failed",
            Err(_) => "errored",
        },
        if answer.is_ok() { "computed" } else { "errored" }
    );

    PartReport { part, test, answer }
}
