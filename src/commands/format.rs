//! Shared output helpers for commands

use std::fmt::Display;

use serde::Serialize;
use waygraph_core::error::Result;

/// Print `node<TAB>value` lines
pub fn print_rows<N: Display, V: Display>(rows: &[(N, V)]) {
    for (node, value) in rows {
        println!("{}\t{}", node, value);
    }
}

/// Pretty-print a JSON document on stdout
pub fn print_json<T: Serialize + ?Sized>(output: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}
