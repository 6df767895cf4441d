//! Host-side callbacks that move genomes between a population and the
//! migration boat buffers.
//!
//! Policies run between kernel launches and are the only path by which the
//! migration layer reads or writes population buffers. Both default
//! policies rank individuals by the scores of the last evaluated
//! generation.

use crate::genetic::{Gene, Score};
use crate::population::Population;

/// Fills the outbound boat from the local population when a boat departs.
pub trait EmigrationPolicy: Send + Sync {
    /// Copies migrants from the population into `boat`. The boat holds
    /// `boat.len() / population.genome_len()` genome slots.
    fn fill_boat(&self, population: &Population, boat: &mut [Gene]);
}

/// Integrates a just-received boat into the local population.
pub trait ImmigrationPolicy: Send + Sync {
    /// Writes the immigrants in `boat` into the population. `from` is the
    /// rank of the sending island.
    fn integrate(&self, population: &mut Population, boat: &[Gene], from: usize);
}

/// The default `EmigrationPolicy`: boats carry copies of the best-scoring
/// `k` individuals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestMigrants;

impl EmigrationPolicy for BestMigrants {
    fn fill_boat(&self, population: &Population, boat: &mut [Gene]) {
        let genome_len = population.genome_len();
        let migrants = boat.len() / genome_len;
        let ranked = ranked_indices(population.scores());
        for (slot, &index) in ranked.iter().take(migrants).enumerate() {
            boat[slot * genome_len..][..genome_len].copy_from_slice(population.genome(index));
        }
    }
}

/// The default `ImmigrationPolicy`: immigrants overwrite the worst-scoring
/// `k` individuals of the live generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaceWorst;

impl ImmigrationPolicy for ReplaceWorst {
    fn integrate(&self, population: &mut Population, boat: &[Gene], _from: usize) {
        let genome_len = population.genome_len();
        let migrants = boat.len() / genome_len;
        let ranked = ranked_indices(population.scores());
        let worst: Vec<usize> = ranked.iter().rev().take(migrants).copied().collect();
        for (slot, index) in worst.into_iter().enumerate() {
            population
                .genome_mut(index)
                .copy_from_slice(&boat[slot * genome_len..][..genome_len]);
        }
    }
}

/// Returns all individual indices ordered from best to worst score, with
/// ties kept in index order.
fn ranked_indices(scores: &[Score]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    indices
}
