//! The `population` module defines the `Population` store: four flat
//! buffers sized by `(size, genome_len)` standing in for accelerator
//! memory.
//!
//! * `current` — the live generation, `size × genome_len` genes.
//! * `next` — a scratch generation of identical shape, swapped with
//!   `current` at generation end.
//! * `score` — one float per individual, written by the evaluator.
//! * `rand` — `size × genome_len` floats, refreshed each generation and
//!   consumed by selection, crossover and mutation.
//!
//! `current` and `next` are distinct allocations for the whole lifetime of
//! the population; `swap_generations` exchanges the two buffers without
//! copying any genes.

use crate::genetic::{Evaluated, Gene, Score};
use crate::random::RandomSource;
use std::fmt::{self, Display};
use std::mem;

/// The minimum genome length accepted by `Population::create`.
pub const MIN_GENOME_LEN: usize = 4;

/// How the first generation of a population is initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitKind {
    /// Fill `current` by copying from a freshly drawn random pool, i.e.
    /// every gene is uniform in `[0, 1)`.
    UniformRandom,
}

/// An error that can occur when creating a `Population`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopulationError {
    /// The requested genome length is below `MIN_GENOME_LEN`.
    GenomeTooShort(String),
    /// A buffer reservation failed.
    AllocationFailed(String),
}

impl Display for PopulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PopulationError::GenomeTooShort(details) => write!(f, "{}", details),
            PopulationError::AllocationFailed(details) => write!(f, "{}", details),
        }
    }
}

impl std::error::Error for PopulationError {}

/// A collection of `size` genomes plus their parallel score and random
/// buffers, double-buffered across generations.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    size: usize,
    genome_len: usize,
    current: Vec<Gene>,
    next: Vec<Gene>,
    score: Vec<Score>,
    rand: Vec<f32>,
}

impl Population {
    /// Allocates the four buffers and initializes the first generation.
    ///
    /// The genome length is immutable for the population's lifetime and
    /// must be at least `MIN_GENOME_LEN`.
    pub fn create(
        size: usize,
        genome_len: usize,
        init: InitKind,
        random: &mut RandomSource,
    ) -> Result<Population, PopulationError> {
        if genome_len < MIN_GENOME_LEN {
            return Err(PopulationError::GenomeTooShort(format!(
                "genome length {} is below the required minimum of {}",
                genome_len, MIN_GENOME_LEN
            )));
        }
        let genes = size.checked_mul(genome_len).ok_or_else(|| {
            PopulationError::AllocationFailed(format!(
                "population of {} genomes of length {} overflows the gene buffer size",
                size, genome_len
            ))
        })?;
        let mut population = Population {
            size,
            genome_len,
            current: alloc_buffer(genes)?,
            next: alloc_buffer(genes)?,
            score: alloc_buffer(size)?,
            rand: alloc_buffer(genes)?,
        };
        match init {
            InitKind::UniformRandom => {
                random.refill(&mut population.rand);
                population.current.copy_from_slice(&population.rand);
            }
        }
        Ok(population)
    }

    /// Returns the number of individuals in this `Population`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of genes per genome.
    pub fn genome_len(&self) -> usize {
        self.genome_len
    }

    /// Returns the live generation as one flat gene buffer.
    pub fn current(&self) -> &[Gene] {
        &self.current
    }

    /// Returns the scores of the last evaluated generation.
    pub fn scores(&self) -> &[Score] {
        &self.score
    }

    /// Returns the per-individual random pool.
    pub fn rand_pool(&self) -> &[f32] {
        &self.rand
    }

    /// Returns the genome of the individual at `index`.
    pub fn genome(&self, index: usize) -> &[Gene] {
        &self.current[index * self.genome_len..][..self.genome_len]
    }

    /// Returns the genome of the individual at `index` for writing.
    pub fn genome_mut(&mut self, index: usize) -> &mut [Gene] {
        &mut self.current[index * self.genome_len..][..self.genome_len]
    }

    /// Exchanges the `current` and `next` buffers. Only the two logical
    /// pointers move; no genes are copied. Two consecutive swaps restore
    /// the original buffers.
    pub fn swap_generations(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Returns the best individual of the last evaluated generation, or
    /// `None` for an empty population. On ties the first-seen individual
    /// wins.
    pub fn best(&self) -> Option<Evaluated> {
        if self.size == 0 {
            return None;
        }
        let mut best = 0;
        for (index, &score) in self.score.iter().enumerate() {
            if score > self.score[best] {
                best = index;
            }
        }
        Some(Evaluated {
            genome: self.genome(best).to_vec(),
            score: self.score[best],
        })
    }

    pub(crate) fn rand_pool_mut(&mut self) -> &mut [f32] {
        &mut self.rand
    }

    pub(crate) fn scores_mut(&mut self) -> &mut [Score] {
        &mut self.score
    }

    pub(crate) fn eval_buffers(&mut self) -> (&[Gene], &mut [Score]) {
        (&self.current, &mut self.score)
    }

    pub(crate) fn breed_buffers(&mut self) -> (&[Gene], &[Score], &[f32], &mut [Gene]) {
        (&self.current, &self.score, &self.rand, &mut self.next)
    }

    pub(crate) fn mutate_buffers(&mut self) -> (&[f32], &mut [Gene]) {
        (&self.rand, &mut self.next)
    }
}

fn alloc_buffer(len: usize) -> Result<Vec<f32>, PopulationError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|error| {
        PopulationError::AllocationFailed(format!(
            "failed to allocate a buffer of {} floats: {}",
            len, error
        ))
    })?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}
