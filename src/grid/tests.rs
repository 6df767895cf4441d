use super::*;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn stride_is_blocks_times_threads() {
    assert_eq!(WorkerGrid::new(8, 64).stride(), 512);
}

#[test]
fn zero_dimensions_are_clamped() {
    assert_eq!(WorkerGrid::new(0, 0).stride(), 1);
}

#[test]
fn a_ten_thousand_wide_population_needs_twenty_tiles_on_an_8x64_grid() {
    let grid = WorkerGrid::new(8, 64);

    assert_eq!(grid.stride(), 512);
    assert_eq!(grid.tiles(10_000), 20);
}

#[test]
fn every_index_is_visited_exactly_once() {
    let grid = WorkerGrid::new(8, 64);
    let mut visits = vec![0u32; 10_000];

    grid.launch(&mut visits, 1, |_, slot| slot[0] += 1);

    assert!(visits.iter().all(|&count| count == 1));
}

#[test]
fn kernel_indices_match_slot_positions() {
    let grid = WorkerGrid::new(4, 16);
    let mut out = vec![0usize; 1_000];

    grid.launch(&mut out, 1, |index, slot| slot[0] = index);

    for (position, &value) in out.iter().enumerate() {
        assert_eq!(position, value);
    }
}

#[test]
fn chunked_launches_hand_each_individual_its_own_slice() {
    let grid = WorkerGrid::new(2, 3);
    let mut out = vec![0usize; 7 * 4];

    grid.launch(&mut out, 4, |index, slot| {
        assert_eq!(slot.len(), 4);
        slot.fill(index);
    });

    for index in 0..7 {
        assert!(out[index * 4..(index + 1) * 4].iter().all(|&v| v == index));
    }
}

#[test]
fn total_kernel_invocations_match_the_population_size() {
    let grid = WorkerGrid::new(3, 5);
    let invocations = AtomicUsize::new(0);
    let mut out = vec![0u8; 1_234];

    grid.launch(&mut out, 1, |_, _| {
        invocations.fetch_add(1, Ordering::Relaxed);
    });

    assert_eq!(invocations.load(Ordering::Relaxed), 1_234);
}

proptest! {

    #[test]
    fn coverage_is_exact_for_any_grid_and_size(
        blocks in 1usize..16,
        threads in 1usize..64,
        size in 0usize..3_000,
    ) {
        let grid = WorkerGrid::new(blocks, threads);
        let mut visits = vec![0u32; size];

        grid.launch(&mut visits, 1, |_, slot| slot[0] += 1);

        prop_assert!(visits.iter().all(|&count| count == 1));
    }
}
