use super::*;
use proptest::prelude::*;

#[test]
fn draws_name_candidates_by_scaled_index() {
    assert_eq!(candidate_index(0.0, 10), 0);
    assert_eq!(candidate_index(0.25, 10), 2);
    assert_eq!(candidate_index(0.99, 10), 9);
}

#[test]
fn the_highest_scoring_candidate_wins_the_tournament() {
    let score = [1.0, 5.0, 3.0, 8.0, 2.0];

    // candidates 1 and 3, candidate 3 scores higher
    assert_eq!(tournament(&score, &[0.2, 0.6]), 3);
    // same candidates in the opposite draw order
    assert_eq!(tournament(&score, &[0.6, 0.2]), 3);
}

#[test]
fn ties_go_to_the_first_seen_candidate() {
    let score = [4.0, 4.0, 4.0, 4.0];

    // candidates 2 then 1 score equal, so candidate 2 stays the winner
    assert_eq!(tournament(&score, &[0.5, 0.25]), 2);
    assert_eq!(tournament(&score, &[0.25, 0.5]), 1);
}

#[test]
fn parents_come_from_disjoint_strip_blocks() {
    let score = [0.0, 1.0, 2.0, 3.0];
    let strip = [0.0, 0.3, 0.6, 0.9, 0.1, 0.1];

    let (parent_a, parent_b) = select_parents(&score, &strip);

    // parent A competes candidates 0 and 1, parent B candidates 2 and 3
    assert_eq!(parent_a, 1);
    assert_eq!(parent_b, 3);
}

proptest! {

    #[test]
    fn the_winner_never_scores_below_any_candidate(
        score in proptest::collection::vec(-100.0f32..100.0, 1..50),
        draws in proptest::collection::vec(0.0f32..1.0, 1..8),
    ) {
        let winner = tournament(&score, &draws);

        for draw in draws {
            let candidate = candidate_index(draw, score.len());
            prop_assert!(score[winner] >= score[candidate]);
        }
    }
}
