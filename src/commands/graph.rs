//! Loading graph documents and reading node names from arguments

use std::fmt;
use std::path::Path;

use waygraph_core::config::SolverConfig;
use waygraph_core::document::{GraphDocument, LoadedGraph};
use waygraph_core::error::{Result, WaygraphError};
use waygraph_core::graph::{Cell, Node};

/// Node types the CLI can name: document strings and `row,col` grid cells
pub trait CliNode: Node + Ord + fmt::Display {
    fn parse_arg(raw: &str) -> Result<Self>;
}

impl CliNode for String {
    fn parse_arg(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl CliNode for Cell {
    fn parse_arg(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

/// Read a document and build the graph it describes
pub fn load_graph(path: &Path, config: &SolverConfig) -> Result<LoadedGraph> {
    if !path.exists() {
        return Err(WaygraphError::not_found("graph document", path.display()));
    }
    let document = GraphDocument::load(path)?;
    document.build(&config.grid)
}
