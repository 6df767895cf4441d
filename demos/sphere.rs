//! Minimizes the sphere function over genomes of 16 genes, first on a
//! single island, then on an archipelago of four islands exchanging
//! migrants.
//!
//! Run with `cargo run --example sphere`.

use archipel::prelude::*;

#[derive(Clone, Debug)]
struct Sphere;

impl Objective for Sphere {
    fn evaluate(&self, genome: &[Gene]) -> Score {
        -genome
            .iter()
            .map(|gene| (gene - 0.5) * (gene - 0.5))
            .sum::<f32>()
    }
}

fn main() {
    env_logger::init();

    let mut engine = Engine::builder()
        .with_blocks(8)
        .with_threads_per_block(64)
        .build();
    engine.set_objective(Sphere);
    let population = engine
        .create_population(256, 16, InitKind::UniformRandom)
        .expect("create population");

    let result = engine.run(population, 200, Some(-0.01)).expect("run");
    println!(
        "single island: {} after {} generations, best score {:.6}",
        result.stop_reason, result.generations, result.best.score
    );

    let migrants = IslandConfig::migrants_from_pct(256, 10.0);
    let config = IslandConfig::new(200)
        .with_migration(5, migrants)
        .with_target_score(-0.01);
    let results = run_islands(4, &config, |_rank| {
        let mut engine = Engine::builder().build();
        engine.set_objective(Sphere);
        let population = engine
            .create_population(256, 16, InitKind::UniformRandom)
            .expect("create population");
        (engine, population)
    });

    for (rank, result) in results.into_iter().enumerate() {
        let result = result.expect("island run");
        println!(
            "island {}: best {:.6} after {} generations, {} boats out, {} boats in",
            rank, result.best.score, result.generations, result.boats_sent, result.boats_received
        );
    }
}
