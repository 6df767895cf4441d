//! The `grid` module runs kernels — data-parallel functions keyed by a
//! per-individual index — over populations of arbitrary size using a fixed
//! grid of `blocks × threads_per_block` workers.
//!
//! When the grid is smaller than the population, the launcher iterates in
//! tiles: each tile covers one grid-width of individuals, clamped at the
//! population end, and the launcher joins all workers of a tile before the
//! next one starts. That join is the kernel-completion barrier between
//! pipeline stages: a stage never observes a partially processed
//! predecessor. Decoupling population size from grid occupancy also keeps
//! per-tile memory demand proportional to the grid, not to the population.

use rayon::prelude::*;

/// A fixed grid of parallel workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerGrid {
    blocks: usize,
    threads_per_block: usize,
}

impl WorkerGrid {
    /// Creates a grid of `blocks × threads_per_block` workers. Zero
    /// dimensions are clamped to one.
    pub fn new(blocks: usize, threads_per_block: usize) -> Self {
        WorkerGrid {
            blocks: blocks.max(1),
            threads_per_block: threads_per_block.max(1),
        }
    }

    /// Returns the number of blocks in this grid.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Returns the number of threads per block.
    pub fn threads_per_block(&self) -> usize {
        self.threads_per_block
    }

    /// Returns the number of individuals covered by one tile.
    pub fn stride(&self) -> usize {
        self.blocks * self.threads_per_block
    }

    /// Returns the number of tiles needed to cover `size` individuals.
    pub fn tiles(&self, size: usize) -> usize {
        let stride = self.stride();
        (size + stride - 1) / stride
    }

    /// Runs `kernel` once for every individual, handing it the individual's
    /// index and its `chunk`-sized slot of `out`.
    ///
    /// `out.len()` must be a multiple of `chunk`; the number of individuals
    /// is `out.len() / chunk`. Tiles run in index order with an offset
    /// stride of `stride()`; the final tile is clamped so no worker sees an
    /// index at or beyond the population end.
    pub fn launch<T, K>(&self, out: &mut [T], chunk: usize, kernel: K)
    where
        T: Send,
        K: Fn(usize, &mut [T]) + Sync,
    {
        if chunk == 0 || out.is_empty() {
            return;
        }
        debug_assert_eq!(out.len() % chunk, 0);
        let size = out.len() / chunk;
        let stride = self.stride();
        let mut offset = 0;
        while offset < size {
            let tile_end = (offset + stride).min(size);
            out[offset * chunk..tile_end * chunk]
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(tid, slot)| kernel(offset + tid, slot));
            offset = tile_end;
        }
    }
}

#[cfg(test)]
mod tests;
