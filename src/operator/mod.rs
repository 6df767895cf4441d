//! A `GeneticOperator` defines a function used to guide the genetic
//! algorithm towards a solution to a given problem. There are two kernel
//! operators — crossover and mutation — which work in conjunction with
//! tournament selection (see the `selection` module) to breed the next
//! generation.
//!
//! Operators execute on the worker grid, once per individual. They are
//! stored by the engine as opaque `Arc<dyn ..>` handles, so user operators
//! are registered rather than compiled in.
//!
//! ## The random strip
//!
//! Operators never own a random generator. Each individual `i` of a
//! population with genome length `L` owns the strip
//! `rand[i·L .. (i+1)·L]` of the pre-staged random pool, refreshed once per
//! generation. The strip is shared by the three consumers with stable
//! offsets:
//!
//! * tournament selection reads offsets `[0, 2·TOURNAMENT_SIZE)`,
//! * crossover reads one float per gene, `strip[j]` for gene `j`,
//! * the default mutation reads `strip[0..3)`.
//!
//! The pool width of `L` floats per individual over-allocates for simple
//! mutations but keeps all three consumers inside one shared draw. Do not
//! shrink it without co-designing all three.

use crate::genetic::Gene;

/// Common behaviour of crossover and mutation operators.
pub trait GeneticOperator {
    /// The name of the operator used for display purposes. It is
    /// recommended to combine the method implemented by this operator with
    /// the kind of operator, e.g. "Uniform-Crossover" or
    /// "Single-Gene-Mutation".
    fn name(&self) -> String;
}

/// A `CrossoverOp` defines a function of how to combine two parent genomes
/// to derive a new genome. It is analogous to reproduction and biological
/// crossover: a process of taking two parent solutions and producing an
/// offspring solution from them.
pub trait CrossoverOp: GeneticOperator + Send + Sync {
    /// Breeds one child from the two given parents, writing the result to
    /// `child`. All three slices have the same length; `rand_strip` is the
    /// individual's strip of the random pool.
    fn crossover(&self, parent_a: &[Gene], parent_b: &[Gene], child: &mut [Gene], rand_strip: &[f32]);
}

/// A `MutateOp` defines a function of how a genome mutates. It is used to
/// maintain genetic diversity from one generation to the next, and should
/// perturb sparingly: if set too aggressive, the search turns into a
/// primitive random search.
pub trait MutateOp: GeneticOperator + Send + Sync {
    /// Mutates the given genome in place, drawing any randomness it needs
    /// from the individual's `rand_strip`.
    fn mutate(&self, genome: &mut [Gene], rand_strip: &[f32]);
}
