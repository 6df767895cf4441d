//! The `evolve` module drives one generation of the evolutionary pipeline.
//!
//! The stages of one generation, in order:
//!
//! 1. **Refresh**: refill the population's random pool with fresh uniform
//!    floats.
//! 2. **Evaluate**: apply the objective to every individual of the live
//!    generation, writing its score.
//! 3. **Crossover**: for every output slot, tournament-select two parents
//!    from the live generation and breed a child into the scratch
//!    generation.
//! 4. **Mutate**: apply the mutation operator to every child in place.
//! 5. **Swap**: exchange the live and scratch generations.
//!
//! Evaluation precedes selection because selection needs the scores of the
//! live generation; mutation follows crossover so the structure-preserving
//! mixing dominates, with mutation as a perturbation.

use crate::genetic::{Objective, Score};
use crate::grid::WorkerGrid;
use crate::operator::{CrossoverOp, MutateOp};
use crate::population::Population;
use crate::random::RandomSource;
use crate::selection;
use crate::statistic::{timed, ProcessingTime};
use log::trace;

/// The results of one pass of the pipeline, i.e. the processing of the
/// evolution from one generation to the next generation.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationState {
    /// The number of the generation just processed. Generations are counted
    /// from 1.
    pub generation: u64,
    /// Highest score within the evaluated generation.
    pub highest_score: Score,
    /// Lowest score within the evaluated generation.
    pub lowest_score: Score,
    /// Average score of the evaluated generation.
    pub average_score: Score,
    /// Time spent processing this generation's stages.
    pub processing_time: ProcessingTime,
}

/// The `Evolution` couples the worker grid with the three kernel handles
/// and runs the per-generation pipeline over a population.
pub struct Evolution<'a> {
    grid: &'a WorkerGrid,
    objective: &'a dyn Objective,
    crossover: &'a dyn CrossoverOp,
    mutate: &'a dyn MutateOp,
}

impl<'a> Evolution<'a> {
    pub fn new(
        grid: &'a WorkerGrid,
        objective: &'a dyn Objective,
        crossover: &'a dyn CrossoverOp,
        mutate: &'a dyn MutateOp,
    ) -> Self {
        Evolution {
            grid,
            objective,
            crossover,
            mutate,
        }
    }

    /// Processes one generation over the given population. The population
    /// must not be empty.
    pub fn advance(
        &self,
        generation: u64,
        population: &mut Population,
        random: &mut RandomSource,
    ) -> GenerationState {
        let refresh = timed(|| random.refill(population.rand_pool_mut())).run();
        let evaluation = timed(|| self.evaluate(population)).run();
        let breeding = timed(|| self.breed(population)).run();
        let mutation = timed(|| self.mutate_offspring(population)).run();
        let (highest_score, lowest_score, average_score) = score_stats(population.scores());
        population.swap_generations();
        let processing_time = refresh.time + evaluation.time + breeding.time + mutation.time;
        trace!(
            "generation {}: highest {} lowest {} average {}",
            generation,
            highest_score,
            lowest_score,
            average_score
        );
        GenerationState {
            generation,
            highest_score,
            lowest_score,
            average_score,
            processing_time,
        }
    }

    /// Scores the live generation, so that `scores()[i]` reflects the
    /// objective applied to genome `i`. Used once more after the final
    /// generation of a run.
    pub fn evaluate(&self, population: &mut Population) {
        let genome_len = population.genome_len();
        let (current, score) = population.eval_buffers();
        let objective = self.objective;
        self.grid.launch(score, 1, |index, slot| {
            let genome = &current[index * genome_len..][..genome_len];
            slot[0] = objective.evaluate(genome);
        });
    }

    fn breed(&self, population: &mut Population) {
        let genome_len = population.genome_len();
        let (current, score, rand, next) = population.breed_buffers();
        let crossover = self.crossover;
        self.grid.launch(next, genome_len, |index, child| {
            let strip = &rand[index * genome_len..][..genome_len];
            let (parent_a, parent_b) = selection::select_parents(score, strip);
            crossover.crossover(
                &current[parent_a * genome_len..][..genome_len],
                &current[parent_b * genome_len..][..genome_len],
                child,
                strip,
            );
        });
    }

    fn mutate_offspring(&self, population: &mut Population) {
        let genome_len = population.genome_len();
        let (rand, next) = population.mutate_buffers();
        let mutate = self.mutate;
        self.grid.launch(next, genome_len, |index, child| {
            mutate.mutate(child, &rand[index * genome_len..][..genome_len]);
        });
    }
}

fn score_stats(scores: &[Score]) -> (Score, Score, Score) {
    let mut highest = scores[0];
    let mut lowest = scores[0];
    let mut total = 0.0f64;
    for &score in scores {
        if score > highest {
            highest = score;
        }
        if score < lowest {
            lowest = score;
        }
        total += f64::from(score);
    }
    let average = (total / scores.len() as f64) as Score;
    (highest, lowest, average)
}
