//! Re-exports the parts of the crate surface that almost every user needs.

//
// Genetic
//
pub use crate::genetic::{Evaluated, Gene, Objective, Score, SumGenes};

//
// Engine
//
pub use crate::engine::{Engine, EngineBuilder, EngineError, PopulationId};

//
// Population
//
pub use crate::population::{InitKind, Population, PopulationError, MIN_GENOME_LEN};

//
// Grid and pipeline
//
pub use crate::evolve::{Evolution, GenerationState};
pub use crate::grid::WorkerGrid;

//
// Operators
//
pub use crate::mutation::SingleGeneMutation;
pub use crate::operator::{CrossoverOp, GeneticOperator, MutateOp};
pub use crate::recombination::UniformCrossover;
pub use crate::selection::TOURNAMENT_SIZE;

//
// Islands and migration
//
pub use crate::island::{run_islands, IslandConfig, RunResult};
pub use crate::migration::policy::{
    BestMigrants, EmigrationPolicy, ImmigrationPolicy, ReplaceWorst,
};
pub use crate::migration::{MigrationEngine, Transport};

//
// Random
//
pub use crate::random::{get_rng, random_seed, Prng, RandomSource, Rng, Seed};

//
// Termination and statistics
//
pub use crate::statistic::ProcessingTime;
pub use crate::termination::{or, FitnessLimit, GenerationLimit, StopFlag, Termination};
