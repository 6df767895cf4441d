//! # archipel
//!
//! `archipel` is a library for evolving populations of fixed-length `f32`
//! genomes with a genetic algorithm (GA) that is data-parallel by
//! construction: every per-individual operation runs as a kernel over a
//! fixed grid of workers, and independent islands can exchange migrants
//! through an asynchronous, non-blocking migration protocol.
//!
//! There are three main elements to this approach:
//! * The [Population](crate::population::Population): four flat buffers on
//!   worker-visible memory — the live generation, a scratch generation that
//!   is swapped in at generation end, one score per individual and a
//!   per-individual strip of pre-staged uniform random floats.
//! * The kernels: a user [Objective](crate::genetic::Objective) plus
//!   [CrossoverOp](crate::operator::CrossoverOp) and
//!   [MutateOp](crate::operator::MutateOp) operators, invoked once per
//!   individual by the [WorkerGrid](crate::grid::WorkerGrid).
//! * The [Engine](crate::engine::Engine): owns populations, kernel handles
//!   and the random source, and drives the per-generation pipeline
//!   (refresh random → evaluate → crossover → mutate → swap), optionally
//!   coupled to peers through the
//!   [MigrationEngine](crate::migration::MigrationEngine).
//!
//! Terminology:
//! * Gene: one `f32` value of a genome.
//! * Genome: a contiguous, fixed-length sequence of genes (minimum length 4).
//! * Generation: one pass of the evolutionary pipeline.
//! * Island: an independent evolutionary process exchanging migrants with
//!   peers.
//! * Boat: one outbound migration buffer of `k` genomes.
//!
//! All intra-process parallelism is implemented using [rayon]; islands
//! communicate over a message-passing seam ([Transport](crate::migration::Transport))
//! that assumes only non-blocking send, non-blocking receive and a
//! test-for-completion primitive.
//!
//! ## Quick Usage
//!
//! ```rust
//! use archipel::prelude::*;
//!
//! let mut engine = Engine::builder()
//!     .with_blocks(8)
//!     .with_threads_per_block(64)
//!     .build();
//!
//! // the search goal to optimize towards
//! engine.set_objective(SumGenes);
//!
//! let population = engine
//!     .create_population(64, 16, InitKind::UniformRandom)
//!     .unwrap();
//!
//! let result = engine.run(population, 10, None).unwrap();
//!
//! println!(
//!     "best score after {} generations: {}",
//!     result.generations, result.best.score
//! );
//! ```
//!
//! ## Tests
//!
//! Use the `with_seed` builder step to create deterministic test results.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

pub mod prelude;

pub mod genetic;

pub mod operator;

pub mod random;

pub mod population;

pub mod grid;

pub mod selection;

pub mod recombination;

pub mod mutation;

pub mod evolve;

pub mod termination;

pub mod migration;

pub mod island;

pub mod engine;

pub mod statistic;
