use super::parse::parse_algorithm;
use clap::Args;
use std::path::PathBuf;
use waygraph_core::graph::Algorithm;

#[derive(Args, Debug, Clone)]
pub struct DistancesArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Source node (grid cells are written row,col)
    #[arg(long, short)]
    pub source: String,

    /// Search strategy (auto, dijkstra, bfs, zero-one); overrides the config
    #[arg(long, short, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,
}

#[derive(Args, Debug, Clone)]
pub struct LevelsArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Source node (can be specified multiple times)
    #[arg(long, short, required = true, action = clap::ArgAction::Append)]
    pub source: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct WaysArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Source node
    #[arg(long, short)]
    pub source: String,

    /// Modulus for the path counts; overrides the config
    #[arg(long, short)]
    pub modulus: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Start node
    #[arg(long, short)]
    pub source: String,

    /// End node
    #[arg(long, short)]
    pub target: String,
}

#[derive(Args, Debug, Clone)]
pub struct ReachArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Source node
    #[arg(long, short)]
    pub source: String,
}
