//! Command implementations for waygraph

pub mod dispatch;
pub mod distances;
pub mod format;
pub mod graph;
pub mod levels;
pub mod path;
pub mod reach;
pub mod ways;
