use waygraph_core::error::WaygraphError;
use waygraph_core::format::OutputFormat;
use waygraph_core::graph::Algorithm;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>()
        .map_err(|e: WaygraphError| e.to_string())
}

/// Parse a search strategy name from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>()
}
