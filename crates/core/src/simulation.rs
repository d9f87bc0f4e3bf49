//! Forest fire simulation engine
//!
//! Owns the current grid snapshot and advances it one tick at a time. Each
//! step burns every currently-burning cell down to ash and gives each of its
//! orthogonal `Tree` neighbors an independent chance to ignite. The driver
//! (timer loop, renderer) stays outside: it calls [`ForestFireSimulation::step`]
//! at whatever cadence it likes and reads snapshots in between.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cell::CellState;
use crate::config::SimulationConfig;
use crate::grid::CellGrid;

/// Orthogonal neighbor offsets, visited north, south, west, east
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Main forest fire simulation
///
/// Exclusively owns its grid: external readers get a shared snapshot via
/// [`ForestFireSimulation::grid`] and must not hold it across a `step` call,
/// since stepping replaces the underlying storage wholesale.
pub struct ForestFireSimulation {
    grid: CellGrid,
    probability: f64,
    steps_elapsed: u64,
    rng: StdRng,
}

impl ForestFireSimulation {
    /// Create a simulation from a config, with an OS-seeded random source
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a simulation with a deterministic random source
    ///
    /// Runs built from the same config and seed produce identical grids on
    /// every step.
    #[must_use]
    pub fn with_seed(config: &SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &SimulationConfig, rng: StdRng) -> Self {
        let mut grid = CellGrid::new(config.height, config.width);

        let mut dropped = 0_usize;
        for &(row, col) in &config.initial_fire_positions {
            if let Some(cell) = grid.cell_at_mut(row, col) {
                *cell = CellState::Fire;
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!("dropped {dropped} out-of-range ignition points");
        }

        info!(
            "forest fire simulation initialized: {}x{} grid, {} cells burning, p={}",
            grid.height(),
            grid.width(),
            grid.count(CellState::Fire),
            config.probability
        );

        ForestFireSimulation {
            grid,
            probability: config.probability,
            steps_elapsed: 0,
            rng,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// Every cell burning at the start of the call is ash afterwards, and
    /// each of its in-bounds `Tree` neighbors (read from the pre-step grid)
    /// ignites with the configured probability. Ignitions from this step
    /// never propagate further within the same step. Safe to call once no
    /// fire remains; only the step counter moves.
    pub fn step(&mut self) {
        let mut next = self.grid.clone();

        for (row, col, state) in self.grid.cells() {
            if !state.is_burning() {
                continue;
            }
            let row = row as i32;
            let col = col as i32;

            if let Some(cell) = next.cell_at_mut(row, col) {
                *cell = CellState::Ash;
            }

            for (d_row, d_col) in NEIGHBOR_OFFSETS {
                let n_row = row + d_row;
                let n_col = col + d_col;
                // Neighbor eligibility is judged on the pre-step grid
                if self.grid.cell_at(n_row, n_col) != Some(CellState::Tree) {
                    continue;
                }
                if self.rng.random::<f64>() < self.probability {
                    if let Some(cell) = next.cell_at_mut(n_row, n_col) {
                        *cell = CellState::Fire;
                    }
                }
            }
        }

        self.grid = next;
        self.steps_elapsed += 1;

        debug!(
            "step {}: {} burning, {} ash",
            self.steps_elapsed,
            self.grid.count(CellState::Fire),
            self.grid.count(CellState::Ash)
        );
    }

    /// Check whether the fire has burned out
    ///
    /// True iff no cell is currently burning. Once true it stays true.
    #[must_use]
    pub fn no_fire_remaining(&self) -> bool {
        self.grid.count(CellState::Fire) == 0
    }

    /// Count the cells that have turned to ash
    #[must_use]
    pub fn count_ash_cells(&self) -> usize {
        self.grid.count(CellState::Ash)
    }

    /// Number of completed steps
    #[must_use]
    pub fn steps_elapsed(&self) -> u64 {
        self.steps_elapsed
    }

    /// Read-only view of the current grid snapshot
    #[must_use]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Configured per-neighbor ignition chance
    #[must_use]
    pub fn propagation_probability(&self) -> f64 {
        self.probability
    }

    /// Get statistics
    #[must_use]
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            steps_elapsed: self.steps_elapsed,
            tree_cells: self.grid.count(CellState::Tree),
            fire_cells: self.grid.count(CellState::Fire),
            ash_cells: self.grid.count(CellState::Ash),
            total_cells: self.grid.height() * self.grid.width(),
        }
    }
}

/// Statistics for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationStats {
    pub steps_elapsed: u64,
    pub tree_cells: usize,
    pub fire_cells: usize,
    pub ash_cells: usize,
    pub total_cells: usize,
}
