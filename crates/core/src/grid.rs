//! Rectangular grid of cell states
//!
//! One `CellGrid` is a snapshot of the whole forest at a single tick. The
//! step rule reads the previous snapshot while writing a cloned one, so the
//! grid needs nothing beyond bounds-checked access and a full deep copy.

use serde::{Deserialize, Serialize};

use crate::cell::CellState;

/// Fixed-size rectangular grid of cell states
///
/// Cells are stored in row-major order: `[row * width + col]`. Dimensions
/// are set at construction and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellGrid {
    height: usize,
    width: usize,
    cells: Vec<CellState>,
}

impl CellGrid {
    /// Create a new grid with every cell set to `Tree`
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        CellGrid {
            height,
            width,
            cells: vec![CellState::Tree; height * width],
        }
    }

    /// Grid row count
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid column count
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if the specified cell is within the grid bounds
    #[must_use]
    pub fn is_valid_cell(&self, row: i32, col: i32) -> bool {
        row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width
    }

    /// Flat index for a coordinate, `None` when out of bounds
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_valid_cell(row, col) {
            Some(row as usize * self.width + col as usize)
        } else {
            None
        }
    }

    /// Read a cell
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the coordinate lies outside the
    /// grid. Callers holding coordinates of unknown validity should prefer
    /// [`CellGrid::cell_at`].
    pub fn get(&self, row: i32, col: i32) -> Result<CellState, GridError> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(GridError::OutOfBounds { row, col })
    }

    /// Write a cell
    ///
    /// # Errors
    /// Returns `GridError::OutOfBounds` if the coordinate lies outside the
    /// grid.
    pub fn set(&mut self, row: i32, col: i32, state: CellState) -> Result<(), GridError> {
        let idx = self
            .index(row, col)
            .ok_or(GridError::OutOfBounds { row, col })?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Get cell state at a coordinate (bounds-checked)
    #[must_use]
    pub fn cell_at(&self, row: i32, col: i32) -> Option<CellState> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Get mutable cell state at a coordinate (bounds-checked)
    pub fn cell_at_mut(&mut self, row: i32, col: i32) -> Option<&mut CellState> {
        let idx = self.index(row, col)?;
        Some(&mut self.cells[idx])
    }

    /// Iterate over all cells as `(row, col, state)`, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &state)| (idx / self.width, idx % self.width, state))
    }

    /// Count cells currently in the given state
    #[must_use]
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }
}

/// Errors for strict grid access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, height) x [0, width)`
    OutOfBounds { row: i32, col: i32 },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({row}, {col}) is outside the grid")
            }
        }
    }
}

impl std::error::Error for GridError {}
