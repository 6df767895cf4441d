//! The `recombination` module provides `CrossoverOp`s that combine two
//! parent genomes into one child.
//!
//! The provided `CrossoverOp`s are:
//! * `UniformCrossover` — the engine's default.

use crate::genetic::Gene;
use crate::operator::{CrossoverOp, GeneticOperator};

/// The `UniformCrossover` operator walks the genes of the parents one by
/// one and picks the gene of one parent per locus: gene `j` of the child is
/// `parent_a[j]` if `rand_strip[j] > 0.5`, else `parent_b[j]`. The child
/// has the same length as its parents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UniformCrossover {}

impl UniformCrossover {
    pub fn new() -> Self {
        UniformCrossover {}
    }
}

impl GeneticOperator for UniformCrossover {
    fn name(&self) -> String {
        "Uniform-Crossover".to_string()
    }
}

impl CrossoverOp for UniformCrossover {
    fn crossover(
        &self,
        parent_a: &[Gene],
        parent_b: &[Gene],
        child: &mut [Gene],
        rand_strip: &[f32],
    ) {
        for (locus, gene) in child.iter_mut().enumerate() {
            *gene = if rand_strip[locus] > 0.5 {
                parent_a[locus]
            } else {
                parent_b[locus]
            };
        }
    }
}
