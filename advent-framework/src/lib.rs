//! Daily Puzzle Solver Framework
//!
//! A small framework for daily two-part puzzles. Each day is a solver that
//! parses its input, computes two answers, and declares the answers it must
//! produce on the example from the puzzle statement.
//!
//! # Overview
//!
//! This library provides:
//! - Line and blank-line-grouped input parsing ([`input`])
//! - Input sources for real and example texts ([`FileSource`], [`MemorySource`])
//! - The [`Solver`] trait and its loaded form, [`SolverInstance`]
//! - An example self-test harness ([`run_test`], [`TestOutcome`])
//! - A day registry with plugin auto-registration ([`RegistryBuilder`])
//! - A dispatcher that ties them together ([`Dispatcher`])
//!
//! # Flow
//!
//! ```ignore
//! let registry = RegistryBuilder::new().register_all_plugins()?.build();
//! let source = FileSource::new("inputs");
//! let report = Dispatcher::new(&registry, &source).execute(1)?;
//! for part in &report.parts {
//!     // part.test: did the example match? part.answer: the real answer
//! }
//! ```
//!
//! # Plugin Registration
//!
//! Use `#[derive(AutoRegisterSolver)]` on a type implementing [`Solver`]:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[advent(tags = ["grouped"])]
//! pub struct Day01;
//! ```
//! [`RegistryBuilder::register_all_plugins`] then picks it up, keyed by
//! `Solver::DAY`.

mod dispatch;
mod error;
mod harness;
pub mod input;
mod instance;
mod registry;
mod solver;
mod source;

// Re-export public API
pub use dispatch::{DayReport, Dispatcher, PartReport};
pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use harness::{TestOutcome, run_test};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, MAX_DAY, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{PARTS, Solver, SolverExt};
pub use source::{FileSource, InputKind, InputSource, MemorySource};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use advent_macros::AutoRegisterSolver;
