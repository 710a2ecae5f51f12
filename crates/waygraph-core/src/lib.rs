//! Waygraph Core Library
//!
//! Single-source shortest paths, way counts and reachability over explicit
//! and implicit graphs with non-negative integer weights.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
