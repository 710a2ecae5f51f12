//! Grid mazes as graphs with unit-cost moves between open cells

use crate::bail_input;
use crate::error::{Result, WaygraphError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Weight, WeightProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Grid position, written `row,col`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = WaygraphError;

    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: Option<&str>| part.and_then(|p| p.trim().parse::<usize>().ok());
        let mut parts = s.split(',');
        match (parse(parts.next()), parse(parts.next()), parts.next()) {
            (Some(row), Some(col), None) => Ok(Cell { row, col }),
            _ => Err(WaygraphError::invalid_value("cell (expected row,col)", s)),
        }
    }
}

/// Allowed moves between neighboring cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Up, down, left, right
    #[default]
    Four,
    /// Orthogonal plus diagonal moves
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(isize, isize)] {
        const FOUR: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        const EIGHT: [(isize, isize); 8] = [
            (-1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
        ];
        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

impl FromStr for Connectivity {
    type Err = WaygraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "four" | "4" => Ok(Connectivity::Four),
            "eight" | "8" => Ok(Connectivity::Eight),
            other => Err(WaygraphError::unsupported("connectivity", other, "four, eight")),
        }
    }
}

/// Rectangular grid; nodes are open cells, every move costs 1.
///
/// The open/blocked layout is copied at construction, so the caller's
/// grid is never marked or mutated by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
    connectivity: Connectivity,
}

impl GridGraph {
    /// Build from a row-major grid and a passability test
    pub fn from_rows<T>(
        grid: &[Vec<T>],
        passable: impl Fn(&T) -> bool,
        connectivity: Connectivity,
    ) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut open = Vec::with_capacity(rows * cols);
        for (r, row) in grid.iter().enumerate() {
            if row.len() != cols {
                bail_input!(
                    "grid row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    cols
                );
            }
            open.extend(row.iter().map(&passable));
        }
        Ok(Self {
            rows,
            cols,
            open,
            connectivity,
        })
    }

    /// Build from text lines; characters in `passable` are open cells
    pub fn parse<S: AsRef<str>>(
        lines: &[S],
        passable: &[char],
        connectivity: Connectivity,
    ) -> Result<Self> {
        let grid: Vec<Vec<char>> = lines
            .iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        Self::from_rows(&grid, |c| passable.contains(c), connectivity)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols && self.open[cell.row * self.cols + cell.col]
    }

    fn step(&self, cell: Cell, (dr, dc): (isize, isize)) -> Option<Cell> {
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        let next = Cell { row, col };
        self.is_open(next).then_some(next)
    }
}

impl GraphProvider<Cell> for GridGraph {
    fn contains(&self, node: &Cell) -> bool {
        self.is_open(*node)
    }

    fn expand(&self, node: &Cell) -> Vec<(Cell, Weight)> {
        self.connectivity
            .offsets()
            .iter()
            .filter_map(|&offset| self.step(*node, offset))
            .map(|cell| (cell, 1))
            .collect()
    }

    fn weight_profile(&self) -> Option<WeightProfile> {
        Some(WeightProfile::Unit)
    }
}
