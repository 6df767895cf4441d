//! End-to-end runs of a single island.

#[macro_use]
extern crate galvanic_assert;

use archipel::prelude::*;
use galvanic_assert::matchers::*;

#[test]
fn genes_of_a_fresh_population_lie_in_the_unit_interval() {
    let mut engine = Engine::builder().with_seed([1; 32]).build();
    let population = engine
        .create_population(100, 100, InitKind::UniformRandom)
        .unwrap();

    let stored = engine.population(population).unwrap();

    assert_that!(&stored.current().len(), eq(100 * 100));
    assert!(stored.current().iter().all(|gene| (0.0..1.0).contains(gene)));
}

#[test]
fn the_best_score_trends_upward_under_sum_of_genes() {
    let mut engine = Engine::builder().with_seed([7; 32]).build();
    engine.set_objective(SumGenes);
    let population = engine
        .create_population(100, 100, InitKind::UniformRandom)
        .unwrap();

    let mut best_per_generation = Vec::with_capacity(100);
    for _ in 0..100 {
        let result = engine.run(population, 1, None).unwrap();
        best_per_generation.push(result.best.score);
    }

    let windowed: Vec<f32> = best_per_generation
        .windows(10)
        .map(|window| window.iter().sum::<f32>() / 10.0)
        .collect();
    for pair in windowed.windows(2) {
        assert!(
            pair[1] >= pair[0] - 2.5,
            "moving average regressed: {} -> {}",
            pair[0],
            pair[1]
        );
    }
    assert!(
        *windowed.last().unwrap() > windowed[0] + 3.0,
        "no improvement over 100 generations: {} -> {}",
        windowed[0],
        windowed.last().unwrap()
    );
}

#[test]
fn the_population_concentrates_around_the_sphere_optimum() {
    #[derive(Clone, Debug)]
    struct Sphere;
    impl Objective for Sphere {
        fn evaluate(&self, genome: &[Gene]) -> Score {
            -genome.iter().map(|gene| (gene - 0.5) * (gene - 0.5)).sum::<f32>()
        }
    }

    let mut engine = Engine::builder().with_seed([11; 32]).build();
    engine.set_objective(Sphere);
    let population = engine
        .create_population(256, 8, InitKind::UniformRandom)
        .unwrap();

    let result = engine.run(population, 400, None).unwrap();

    assert!(
        result.best.score > -0.12,
        "best score after 400 generations: {}",
        result.best.score
    );
    let mean_deviation: f32 = result
        .best
        .genome
        .iter()
        .map(|gene| (gene - 0.5).abs())
        .sum::<f32>()
        / result.best.genome.len() as f32;
    assert!(
        mean_deviation < 0.1,
        "genes stray from the optimum by {} on average",
        mean_deviation
    );
}

#[test]
fn a_reached_target_score_is_reported_as_the_stop_reason() {
    let mut engine = Engine::builder().with_seed([3; 32]).build();
    engine.set_objective(SumGenes);
    let population = engine
        .create_population(50, 16, InitKind::UniformRandom)
        .unwrap();

    let result = engine.run(population, 1_000, Some(0.0)).unwrap();

    assert_that!(&result.generations, eq(1));
    assert!(result.stop_reason.contains("score"));
}

#[test]
fn runs_without_a_target_stop_at_the_generation_limit() {
    let mut engine = Engine::builder().with_seed([3; 32]).build();
    let population = engine
        .create_population(30, 8, InitKind::UniformRandom)
        .unwrap();

    let result = engine.run(population, 17, None).unwrap();

    assert_that!(&result.generations, eq(17));
    assert!(result.stop_reason.contains("generations"));
    assert!(result.duration >= chrono::Duration::zero());
}
