use super::*;

#[test]
fn a_firing_mutation_replaces_exactly_one_gene() {
    let mut genome = [0.1, 0.2, 0.3, 0.4, 0.5];
    // locus ⌊0.5 · 5⌋ = 2, fires because 0.005 ≤ 0.01, replacement 0.9
    let strip = [0.5, 0.005, 0.9, 0.0, 0.0];

    SingleGeneMutation::default().mutate(&mut genome, &strip);

    assert_eq!(genome, [0.1, 0.2, 0.9, 0.4, 0.5]);
}

#[test]
fn the_mutation_does_not_fire_above_its_probability() {
    let mut genome = [0.1, 0.2, 0.3, 0.4];
    let strip = [0.5, 0.011, 0.9, 0.0];

    SingleGeneMutation::default().mutate(&mut genome, &strip);

    assert_eq!(genome, [0.1, 0.2, 0.3, 0.4]);
}

#[test]
fn the_mutation_fires_at_exactly_its_probability() {
    let mut genome = [0.1, 0.2, 0.3, 0.4];
    let strip = [0.0, 0.5, 0.7, 0.0];

    SingleGeneMutation::new(0.5).mutate(&mut genome, &strip);

    assert_eq!(genome, [0.7, 0.2, 0.3, 0.4]);
}

#[test]
fn the_locus_draw_is_clamped_to_the_genome() {
    let mut genome = [0.1, 0.2, 0.3, 0.4];
    let strip = [0.999_999, 0.0, 0.7, 0.0];

    SingleGeneMutation::new(1.0).mutate(&mut genome, &strip);

    assert_eq!(genome, [0.1, 0.2, 0.3, 0.7]);
}
