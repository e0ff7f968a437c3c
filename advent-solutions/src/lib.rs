//! Daily puzzle solutions with automatic registration
//!
//! Each day is a unit struct implementing `advent_framework::Solver` and
//! deriving `AutoRegisterSolver`, so linking this crate is enough for
//! `RegistryBuilder::register_all_plugins` to find it.

pub mod days;
