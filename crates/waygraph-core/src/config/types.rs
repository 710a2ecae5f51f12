//! Configuration type definitions

use crate::graph::{Algorithm, Connectivity};
use serde::{Deserialize, Serialize};

/// Default modulus for way counts (a prime just above 10^9)
pub const DEFAULT_WAY_MODULUS: u64 = 1_000_000_007;

/// Solver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Algorithm selection and way counting
    #[serde(default)]
    pub solver: SolverSection,

    /// Grid document interpretation
    #[serde(default)]
    pub grid: GridSection,
}

/// `[solver]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverSection {
    /// Algorithm for `distances` when none is given on the command line
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Modulus applied to way counts
    #[serde(default = "default_way_modulus")]
    pub way_modulus: u64,
}

impl Default for SolverSection {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            way_modulus: DEFAULT_WAY_MODULUS,
        }
    }
}

/// `[grid]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSection {
    /// Moves allowed between cells
    #[serde(default)]
    pub connectivity: Connectivity,

    /// Characters that mark open cells
    #[serde(default = "default_passable")]
    pub passable: Vec<char>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::default(),
            passable: default_passable(),
        }
    }
}

fn default_way_modulus() -> u64 {
    DEFAULT_WAY_MODULUS
}

fn default_passable() -> Vec<char> {
    vec!['0', '.']
}
