//! The `engine` module ties everything together: a bounded table of
//! populations, the registered kernel handles, the worker grid and the
//! process-scoped random source.
//!
//! An `Engine` is configured once through its builder, drives any number
//! of runs, and releases its populations and random source when dropped.

use crate::evolve::Evolution;
use crate::genetic::{Evaluated, Objective, Score, SumGenes};
use crate::grid::WorkerGrid;
use crate::island::{IslandConfig, IslandRunner, RunResult};
use crate::migration::channel::ChannelTransport;
use crate::migration::policy::{BestMigrants, EmigrationPolicy, ImmigrationPolicy, ReplaceWorst};
use crate::migration::{MigrationEngine, Transport};
use crate::mutation::SingleGeneMutation;
use crate::operator::{CrossoverOp, MutateOp};
use crate::population::{InitKind, Population, PopulationError};
use crate::random::{RandomSource, Seed};
use crate::recombination::UniformCrossover;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Default number of blocks of the worker grid.
pub const DEFAULT_BLOCKS: usize = 8;

/// Default number of threads per block of the worker grid.
pub const DEFAULT_THREADS_PER_BLOCK: usize = 128;

/// Default capacity of the population table.
pub const DEFAULT_POPULATION_CAPACITY: usize = 8;

/// An opaque handle to a population owned by an `Engine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PopulationId(usize);

/// An error that can occur during execution of an `Engine` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The population table is full.
    CapacityExhausted(String),
    /// Creating a population failed.
    Population(PopulationError),
    /// The operation needs at least one individual.
    EmptyPopulation(String),
    /// The handle does not name a population of this engine.
    UnknownPopulation(String),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::CapacityExhausted(details) => write!(f, "{}", details),
            EngineError::Population(error) => Display::fmt(error, f),
            EngineError::EmptyPopulation(details) => write!(f, "{}", details),
            EngineError::UnknownPopulation(details) => write!(f, "{}", details),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<PopulationError> for EngineError {
    fn from(error: PopulationError) -> Self {
        EngineError::Population(error)
    }
}

/// The engine owns a bounded array of populations, the user kernel handles
/// and the grid dimensions.
///
/// Kernel handles are stored as opaque `Arc<dyn ..>` registrations; the
/// setters overwrite them atomically from the caller's perspective (they
/// are not called concurrently with `run`). The engine starts out with
/// `SumGenes` as a placeholder objective and the default crossover and
/// mutation operators installed.
pub struct Engine {
    grid: WorkerGrid,
    capacity: usize,
    populations: Vec<Population>,
    random: RandomSource,
    objective: Arc<dyn Objective>,
    crossover: Arc<dyn CrossoverOp>,
    mutate: Arc<dyn MutateOp>,
    emigration: Arc<dyn EmigrationPolicy>,
    immigration: Arc<dyn ImmigrationPolicy>,
}

impl Engine {
    /// Returns a builder for configuring a new `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Allocates a new population in the engine's table.
    pub fn create_population(
        &mut self,
        size: usize,
        genome_len: usize,
        init: InitKind,
    ) -> Result<PopulationId, EngineError> {
        if self.populations.len() >= self.capacity {
            return Err(EngineError::CapacityExhausted(format!(
                "population table already holds {} of {} entries",
                self.populations.len(),
                self.capacity
            )));
        }
        let population = Population::create(size, genome_len, init, &mut self.random)?;
        self.populations.push(population);
        Ok(PopulationId(self.populations.len() - 1))
    }

    /// Returns the population behind the given handle.
    pub fn population(&self, id: PopulationId) -> Result<&Population, EngineError> {
        self.populations
            .get(id.0)
            .ok_or_else(|| unknown_population(id))
    }

    /// Returns the worker grid of this engine.
    pub fn grid(&self) -> &WorkerGrid {
        &self.grid
    }

    /// Registers the objective applied by the evaluator.
    pub fn set_objective(&mut self, objective: impl Objective + 'static) {
        self.objective = Arc::new(objective);
    }

    /// Registers the crossover operator used for breeding.
    pub fn set_crossover(&mut self, crossover: impl CrossoverOp + 'static) {
        self.crossover = Arc::new(crossover);
    }

    /// Registers the mutation operator applied to every child.
    pub fn set_mutate(&mut self, mutate: impl MutateOp + 'static) {
        self.mutate = Arc::new(mutate);
    }

    /// Registers the policy that fills outbound boats.
    pub fn set_emigration_policy(&mut self, emigration: impl EmigrationPolicy + 'static) {
        self.emigration = Arc::new(emigration);
    }

    /// Registers the policy that integrates inbound boats.
    pub fn set_immigration_policy(&mut self, immigration: impl ImmigrationPolicy + 'static) {
        self.immigration = Arc::new(immigration);
    }

    /// Evolves the population for `generations` generations as a single
    /// island, stopping early when `target_score` is reached.
    pub fn run(
        &mut self,
        id: PopulationId,
        generations: u64,
        target_score: Option<Score>,
    ) -> Result<RunResult, EngineError> {
        let mut config = IslandConfig::new(generations);
        config.target_score = target_score;
        self.run_impl::<ChannelTransport>(id, &config, None)
    }

    /// Evolves the population as one island of an archipelago reachable
    /// through the given transport, polling migration every
    /// `config.migration_interval` generations.
    pub fn run_with_transport<T>(
        &mut self,
        id: PopulationId,
        config: &IslandConfig,
        transport: T,
    ) -> Result<RunResult, EngineError>
    where
        T: Transport,
    {
        let migration = if transport.num_islands() > 1 && config.migrants > 0 {
            let genome_len = self.population(id)?.genome_len();
            Some(MigrationEngine::new(
                transport,
                config.migrants * genome_len,
            ))
        } else {
            None
        };
        self.run_impl(id, config, migration)
    }

    fn run_impl<T>(
        &mut self,
        id: PopulationId,
        config: &IslandConfig,
        migration: Option<MigrationEngine<T>>,
    ) -> Result<RunResult, EngineError>
    where
        T: Transport,
    {
        if self.population(id)?.size() == 0 {
            return Err(EngineError::EmptyPopulation(format!(
                "population {:?} has no individuals to evolve",
                id
            )));
        }
        let objective = Arc::clone(&self.objective);
        let crossover = Arc::clone(&self.crossover);
        let mutate = Arc::clone(&self.mutate);
        let emigration = Arc::clone(&self.emigration);
        let immigration = Arc::clone(&self.immigration);
        let population = self
            .populations
            .get_mut(id.0)
            .ok_or_else(|| unknown_population(id))?;
        let evolution = Evolution::new(
            &self.grid,
            objective.as_ref(),
            crossover.as_ref(),
            mutate.as_ref(),
        );
        let runner = IslandRunner::new(
            evolution,
            population,
            &mut self.random,
            emigration.as_ref(),
            immigration.as_ref(),
            migration,
        );
        Ok(runner.run(config))
    }

    /// Copies the best individual of the given population to host memory.
    /// On ties the first-seen individual wins. The scores consulted are
    /// those of the last evaluation.
    pub fn best_of(&self, id: PopulationId) -> Result<Evaluated, EngineError> {
        let population = self.population(id)?;
        population.best().ok_or_else(|| {
            EngineError::EmptyPopulation(format!("population {:?} has no individuals", id))
        })
    }
}

fn unknown_population(id: PopulationId) -> EngineError {
    EngineError::UnknownPopulation(format!("no population with handle {:?}", id))
}

/// Configures and creates an `Engine`.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineBuilder {
    blocks: usize,
    threads_per_block: usize,
    capacity: usize,
    seed: Option<Seed>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        EngineBuilder {
            blocks: DEFAULT_BLOCKS,
            threads_per_block: DEFAULT_THREADS_PER_BLOCK,
            capacity: DEFAULT_POPULATION_CAPACITY,
            seed: None,
        }
    }
}

impl EngineBuilder {
    /// Sets the number of blocks of the worker grid.
    pub fn with_blocks(mut self, blocks: usize) -> Self {
        self.blocks = blocks;
        self
    }

    /// Sets the number of threads per block of the worker grid.
    pub fn with_threads_per_block(mut self, threads_per_block: usize) -> Self {
        self.threads_per_block = threads_per_block;
        self
    }

    /// Sets the capacity of the population table. Values below 1 are
    /// clamped to 1.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Seeds the engine's random source, for reproducible runs.
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Creates the engine: seeds the random source and installs the
    /// default operators and migration policies.
    pub fn build(self) -> Engine {
        let random = match self.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::new(),
        };
        Engine {
            grid: WorkerGrid::new(self.blocks, self.threads_per_block),
            capacity: self.capacity.max(1),
            populations: Vec::new(),
            random,
            objective: Arc::new(SumGenes),
            crossover: Arc::new(UniformCrossover::new()),
            mutate: Arc::new(SingleGeneMutation::default()),
            emigration: Arc::new(BestMigrants),
            immigration: Arc::new(ReplaceWorst),
        }
    }
}
