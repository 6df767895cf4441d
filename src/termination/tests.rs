use super::*;
use crate::statistic::ProcessingTime;

fn state(generation: u64, highest_score: f32) -> GenerationState {
    GenerationState {
        generation,
        highest_score,
        lowest_score: 0.0,
        average_score: 0.0,
        processing_time: ProcessingTime::zero(),
    }
}

#[test]
fn the_generation_limit_stops_at_its_maximum() {
    let mut limit = GenerationLimit::new(3);

    assert_eq!(limit.evaluate(&state(1, 0.0)), StopFlag::Continue);
    assert_eq!(limit.evaluate(&state(2, 0.0)), StopFlag::Continue);
    assert!(matches!(limit.evaluate(&state(3, 0.0)), StopFlag::StopNow(_)));
}

#[test]
fn the_fitness_limit_stops_once_the_target_is_reached() {
    let mut limit = FitnessLimit::new(10.0);

    assert_eq!(limit.evaluate(&state(1, 9.9)), StopFlag::Continue);
    assert!(matches!(limit.evaluate(&state(2, 10.0)), StopFlag::StopNow(_)));
}

#[test]
fn the_or_combinator_stops_when_either_condition_is_met() {
    let mut either = or(FitnessLimit::new(10.0), GenerationLimit::new(5));

    assert_eq!(either.evaluate(&state(1, 0.0)), StopFlag::Continue);
    assert!(matches!(either.evaluate(&state(2, 11.0)), StopFlag::StopNow(_)));
    assert!(matches!(either.evaluate(&state(5, 0.0)), StopFlag::StopNow(_)));
}
