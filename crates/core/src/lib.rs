//! Forest Fire Simulation Core Library
//!
//! A discrete-time cellular automaton for stochastic forest fire spread on a
//! 2D grid. Cells are trees, burning, or ash; every tick, each burning cell
//! turns to ash and each of its four orthogonal tree neighbors ignites with
//! a configured probability, until no fire remains.
//!
//! The crate is presentation-agnostic: it exposes state queries and a single
//! `step` mutator, and leaves rendering and tick cadence to an external
//! driver (see the `demo-bevy` workspace member).

// Cell states and the grid snapshot they live in
pub mod cell;
pub mod grid;

// Run parameters, loaded from a TOML key-value file with defaults
pub mod config;

// The engine: transition rule, termination, statistics
pub mod simulation;

// Re-export core types
pub use cell::CellState;
pub use config::SimulationConfig;
pub use grid::{CellGrid, GridError};
pub use simulation::{ForestFireSimulation, SimulationStats};
