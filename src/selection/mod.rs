//! The `selection` module implements the tournament selection method.
//!
//! Because selection runs inside a grid kernel it never owns a random
//! generator: each output slot draws its candidates from the individual's
//! pre-staged random strip. A draw `f` in `[0, 1)` names the candidate
//! `⌊f · size⌋`; each tournament picks the highest-scoring of its
//! `TOURNAMENT_SIZE` candidates, and on ties the first-seen candidate wins.

use crate::genetic::Score;

/// The number of participants in each tournament. A tournament size of 1
/// would be equivalent to random selection.
pub const TOURNAMENT_SIZE: usize = 2;

fn candidate_index(draw: f32, size: usize) -> usize {
    ((draw * size as f32) as usize).min(size - 1)
}

/// Runs one tournament over the candidates named by `draws` and returns
/// the index of the winner.
pub fn tournament(score: &[Score], draws: &[f32]) -> usize {
    debug_assert!(!score.is_empty());
    debug_assert!(!draws.is_empty());
    let mut winner = candidate_index(draws[0], score.len());
    for &draw in &draws[1..] {
        let challenger = candidate_index(draw, score.len());
        if score[challenger] > score[winner] {
            winner = challenger;
        }
    }
    winner
}

/// Selects the two parents for one output slot.
///
/// Parent A is the winner of a tournament over `rand_strip[0 .. T)`,
/// parent B of a disjoint tournament over `rand_strip[T .. 2·T)` with
/// `T = TOURNAMENT_SIZE`.
pub fn select_parents(score: &[Score], rand_strip: &[f32]) -> (usize, usize) {
    let parent_a = tournament(score, &rand_strip[..TOURNAMENT_SIZE]);
    let parent_b = tournament(score, &rand_strip[TOURNAMENT_SIZE..2 * TOURNAMENT_SIZE]);
    (parent_a, parent_b)
}

#[cfg(test)]
mod tests;
