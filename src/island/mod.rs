//! The `island` module couples the generation pipeline with the migration
//! cadence and the termination conditions, and spawns whole archipelagos
//! of islands as threads of one process.

use crate::engine::{Engine, EngineError, PopulationId};
use crate::evolve::Evolution;
use crate::genetic::{Evaluated, Score};
use crate::migration::channel;
use crate::migration::policy::{EmigrationPolicy, ImmigrationPolicy};
use crate::migration::{MigrationEngine, Transport};
use crate::population::Population;
use crate::random::RandomSource;
use crate::statistic::ProcessingTime;
use crate::termination::{or, FitnessLimit, GenerationLimit, StopFlag, StopReason, Termination};
use chrono::{DateTime, Duration, Local};
use log::info;
use std::thread;

/// Parameters of one run of the island runner.
#[derive(Clone, Debug, PartialEq)]
pub struct IslandConfig {
    /// Number of generations to process.
    pub generations: u64,
    /// Migration is polled every `migration_interval` generations.
    pub migration_interval: u64,
    /// Number of genomes per boat.
    pub migrants: usize,
    /// Optional termination threshold on the best score.
    pub target_score: Option<Score>,
}

impl IslandConfig {
    /// Creates a configuration that runs the given number of generations
    /// with migration polled every generation but no migrants.
    pub fn new(generations: u64) -> Self {
        IslandConfig {
            generations,
            migration_interval: 1,
            migrants: 0,
            target_score: None,
        }
    }

    /// Sets the migration cadence and boat size.
    pub fn with_migration(mut self, interval: u64, migrants: usize) -> Self {
        self.migration_interval = interval;
        self.migrants = migrants;
        self
    }

    /// Sets the termination threshold on the best score.
    pub fn with_target_score(mut self, target: Score) -> Self {
        self.target_score = Some(target);
        self
    }

    /// Converts a migrant percentage into a migrant count for the given
    /// population size.
    pub fn migrants_from_pct(population_size: usize, pct: f32) -> usize {
        (((population_size as f32) * pct / 100.0).round() as usize).min(population_size)
    }
}

/// The outcome of one island's run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// The best individual of the final generation, copied to host memory.
    pub best: Evaluated,
    /// The number of generations processed.
    pub generations: u64,
    /// Why the run stopped.
    pub stop_reason: StopReason,
    /// The local time when the run started.
    pub started_at: DateTime<Local>,
    /// Wall time of the whole run.
    pub duration: Duration,
    /// Accumulated stage processing time.
    pub processing_time: ProcessingTime,
    /// Boats posted by this island.
    pub boats_sent: u64,
    /// Boats received and integrated by this island.
    pub boats_received: u64,
}

/// Runs the evolutionary pipeline of one island, yielding to migration at
/// the tick boundary.
pub struct IslandRunner<'a, T>
where
    T: Transport,
{
    evolution: Evolution<'a>,
    population: &'a mut Population,
    random: &'a mut RandomSource,
    emigration: &'a dyn EmigrationPolicy,
    immigration: &'a dyn ImmigrationPolicy,
    migration: Option<MigrationEngine<T>>,
}

impl<'a, T> IslandRunner<'a, T>
where
    T: Transport,
{
    pub fn new(
        evolution: Evolution<'a>,
        population: &'a mut Population,
        random: &'a mut RandomSource,
        emigration: &'a dyn EmigrationPolicy,
        immigration: &'a dyn ImmigrationPolicy,
        migration: Option<MigrationEngine<T>>,
    ) -> Self {
        IslandRunner {
            evolution,
            population,
            random,
            emigration,
            immigration,
            migration,
        }
    }

    /// Processes generations until a termination condition is met, then
    /// evaluates once more so the final scores describe the surviving
    /// generation, and returns the best individual.
    pub fn run(mut self, config: &IslandConfig) -> RunResult {
        let started_at = Local::now();
        let mut termination = build_termination(config);
        let interval = config.migration_interval.max(1);
        let mut processing_time = ProcessingTime::zero();
        let mut generation = 0;
        let mut stop_reason = StopReason::from("Run stopped before the first generation.");
        info!("run started: {} generations requested", config.generations);
        while generation < config.generations {
            generation += 1;
            let state = self
                .evolution
                .advance(generation, self.population, self.random);
            processing_time += state.processing_time;
            if let Some(migration) = self.migration.as_mut() {
                if generation % interval == 0 {
                    let population = &mut *self.population;
                    let immigration = self.immigration;
                    migration
                        .immigration_tick(|boat, from| immigration.integrate(population, boat, from));
                    let population = &*self.population;
                    let emigration = self.emigration;
                    migration.emigration_tick(|boat| emigration.fill_boat(population, boat));
                }
            }
            match termination.evaluate(&state) {
                StopFlag::StopNow(reason) => {
                    stop_reason = reason;
                    break;
                }
                StopFlag::Continue => {}
            }
        }
        self.evolution.evaluate(self.population);
        let best = self
            .population
            .best()
            .unwrap_or_else(|| panic!("no best individual in an empty population"));
        let (boats_sent, boats_received) = self
            .migration
            .as_ref()
            .map(|migration| (migration.boats_sent(), migration.boats_received()))
            .unwrap_or((0, 0));
        let duration = Local::now().signed_duration_since(started_at);
        info!(
            "run finished after {} generations: {}",
            generation, stop_reason
        );
        RunResult {
            best,
            generations: generation,
            stop_reason,
            started_at,
            duration,
            processing_time,
            boats_sent,
            boats_received,
        }
    }
}

fn build_termination(config: &IslandConfig) -> Box<dyn Termination> {
    match config.target_score {
        Some(target) => Box::new(or(
            FitnessLimit::new(target),
            GenerationLimit::new(config.generations),
        )),
        None => Box::new(GenerationLimit::new(config.generations)),
    }
}

/// Spawns one thread per island over a fully connected channel mesh, runs
/// every island to completion and collects their results in rank order.
///
/// The `setup` function is invoked once per island with the island's rank
/// and returns the engine and population that island evolves.
pub fn run_islands<F>(
    islands: usize,
    config: &IslandConfig,
    setup: F,
) -> Vec<Result<RunResult, EngineError>>
where
    F: Fn(usize) -> (Engine, PopulationId) + Send + Sync,
{
    let transports = channel::mesh(islands);
    thread::scope(|scope| {
        let setup = &setup;
        let handles: Vec<_> = transports
            .into_iter()
            .enumerate()
            .map(|(rank, transport)| {
                let config = config.clone();
                scope.spawn(move || {
                    let (mut engine, population) = setup(rank);
                    engine.run_with_transport(population, &config, transport)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("island thread panicked"))
            .collect()
    })
}
