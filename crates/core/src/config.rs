//! Simulation configuration with file loading and defaults
//!
//! Settings come from a small TOML key-value file. Every key degrades
//! independently: a missing or malformed value is replaced by its default,
//! and a missing or unreadable file yields the default configuration. The
//! engine never sees a partially-populated config.

use std::path::Path;

use tracing::{debug, warn};

/// Parameters for a forest fire run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Grid column count
    pub width: usize,
    /// Grid row count
    pub height: usize,
    /// Per-neighbor ignition chance, in `[0, 1]`
    pub probability: f64,
    /// Initial ignition coordinates as `(row, col)` pairs
    ///
    /// Duplicates and out-of-range entries are allowed here; the engine
    /// skips invalid ones while seeding.
    pub initial_fire_positions: Vec<(i32, i32)>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            width: 30,
            height: 30,
            probability: 0.5,
            initial_fire_positions: vec![(15, 15)],
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or unreadable file falls back entirely to the defaults;
    /// no error surfaces past this point.
    #[must_use]
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) => {
                warn!(
                    "config file {} not found ({err}), using default settings",
                    path.as_ref().display()
                );
                SimulationConfig::default()
            }
        }
    }

    /// Parse configuration from TOML text, key by key
    ///
    /// Each recognized key is read independently so one malformed value
    /// cannot spoil the rest of the file.
    #[must_use]
    pub fn from_toml_str(contents: &str) -> Self {
        let defaults = SimulationConfig::default();
        let table: toml::Table = match contents.parse() {
            Ok(table) => table,
            Err(err) => {
                warn!("config is not valid TOML ({err}), using default settings");
                return defaults;
            }
        };

        let width = read_dimension(&table, "width").unwrap_or(defaults.width);
        let height = read_dimension(&table, "height").unwrap_or(defaults.height);
        let probability = read_probability(&table).unwrap_or(defaults.probability);
        let initial_fire_positions = match table.get("fire_start").and_then(toml::Value::as_str) {
            Some(raw) => parse_fire_start(raw),
            None => defaults.initial_fire_positions,
        };

        SimulationConfig {
            width,
            height,
            probability,
            initial_fire_positions,
        }
    }
}

/// Read a positive grid dimension, `None` when absent or malformed
fn read_dimension(table: &toml::Table, key: &str) -> Option<usize> {
    let value = table.get(key)?.as_integer()?;
    if value > 0 {
        Some(value as usize)
    } else {
        debug!("ignoring non-positive {key} = {value}");
        None
    }
}

/// Read the ignition probability, clamped into `[0, 1]`
fn read_probability(table: &toml::Table) -> Option<f64> {
    let value = table.get("probability")?;
    let probability = value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))?;
    if probability.is_finite() {
        Some(probability.clamp(0.0, 1.0))
    } else {
        debug!("ignoring non-finite probability");
        None
    }
}

/// Parse a `;`-separated list of `row,col` ignition coordinates
///
/// Entries with the wrong field count or non-numeric parts are dropped
/// silently, matching the tolerant posture of the rest of the loader.
#[must_use]
pub fn parse_fire_start(raw: &str) -> Vec<(i32, i32)> {
    let mut positions = Vec::new();
    for entry in raw.split(';') {
        let fields: Vec<&str> = entry.split(',').collect();
        if fields.len() != 2 {
            debug!("skipping malformed fire_start entry '{entry}'");
            continue;
        }
        if let (Ok(row), Ok(col)) = (
            fields[0].trim().parse::<i32>(),
            fields[1].trim().parse::<i32>(),
        ) {
            positions.push((row, col));
        } else {
            debug!("skipping non-numeric fire_start entry '{entry}'");
        }
    }
    positions
}
