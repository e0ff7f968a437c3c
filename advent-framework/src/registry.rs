//! Solver registry for resolving day numbers to solver factories

use crate::error::{InputError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use crate::source::InputSource;

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// Highest day number a solver can be registered for
pub const MAX_DAY: u8 = 31;

/// Calculate flat index from day, returning None if out of bounds
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day > MAX_DAY {
        return None;
    }
    Some((day - 1) as usize)
}

/// Reconstruct day from flat index
#[inline]
fn from_index(index: usize) -> u8 {
    index as u8 + 1
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function type for creating solver instances
///
/// `Send + Sync` is required so that factories can be built from the
/// `inventory` statics.
pub type SolverFactory =
    Box<dyn Fn(&dyn InputSource) -> Result<Box<dyn DynSolver>, InputError> + Send + Sync>;

/// Factory entry with metadata
struct SolverFactoryEntry {
    factory: SolverFactory,
    tags: &'static [&'static str],
}

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The day number (1-31)
    pub day: u8,
    /// Tags the solver was registered with
    pub tags: &'static [&'static str],
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder rejects duplicate and out-of-range days at registration time,
/// and the built registry is immutable.
///
/// # Example
///
/// ```ignore
/// # use advent_framework::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_solver::<Day01>()
///     .unwrap()
///     .register_solver::<Day02>()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..MAX_DAY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory function for a specific day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range or already registered
    pub fn register<F>(self, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&dyn InputSource) -> Result<Box<dyn DynSolver>, InputError> + Send + Sync + 'static,
    {
        self.register_tagged(day, &[], factory)
    }

    /// Register a solver factory function with tags
    pub fn register_tagged<F>(
        mut self,
        day: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(&dyn InputSource) -> Result<Box<dyn DynSolver>, InputError> + Send + Sync + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateDay(day));
        }

        log::debug!("registering solver for day {:02}", day);
        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            tags,
        });
        Ok(self)
    }

    /// Register a solver type under its own day number
    pub fn register_solver<S>(self) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_solver_tagged::<S>(&[])
    }

    /// Register a solver type under its own day number, with tags
    pub fn register_solver_tagged<S>(
        self,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_tagged(S::DAY, tags, |source: &dyn InputSource| {
            let instance = SolverInstance::<S>::load(source)?;
            Ok(Box::new(instance) as Box<dyn DynSolver>)
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_framework::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_framework::RegistryBuilder;
    /// // Register only solvers tagged as "grouped"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grouped"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific day
    ///
    /// The input source is only touched once the day has been resolved.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Solver created with both inputs loaded
    /// * `Err(SolverError::InvalidDay)` - Day outside 1-31
    /// * `Err(SolverError::NotFound)` - No solver registered for the day
    /// * `Err(SolverError::Input)` - The solver failed to load its inputs
    pub fn create_solver(
        &self,
        day: u8,
        source: &dyn InputSource,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(source).map_err(SolverError::Input)
    }

    /// Check if a solver exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    /// Get metadata for a specific day
    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        calc_index(day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo { day, tags: e.tags })
    }

    /// Iterate over metadata for all registered days, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: from_index(i),
                tags: e.tags,
            })
        })
    }

    /// Registered days, in ascending order
    pub fn days(&self) -> impl Iterator<Item = u8> + '_ {
        self.iter_info().map(|info| info.day)
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different solver
/// types can be collected behind `&'static dyn RegisterableSolver`.
///
/// Any type implementing `Solver + Sync` gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Day this solver answers
    fn day(&self) -> u8;

    /// Register this solver type with the builder
    fn register_with(
        &self,
        builder: RegistryBuilder,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn day(&self) -> u8 {
        S::DAY
    }

    fn register_with(
        &self,
        builder: RegistryBuilder,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver_tagged::<S>(tags)
    }
}

/// Plugin information for automatic solver registration
///
/// Usually submitted by `#[derive(AutoRegisterSolver)]`, but can be written
/// by hand:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         solver: &Day01,
///         tags: &["grouped"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering
    pub tags: &'static [&'static str],
}

impl SolverPlugin {
    /// Day the plugin's solver answers
    pub fn day(&self) -> u8 {
        self.solver.day()
    }
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
