//! Graph documents: serialized graph descriptions the CLI loads
//!
//! A document holds either an explicit edge list (string node names) or a
//! text grid. Supported encodings are JSON, TOML and YAML, chosen by file
//! extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GridSection;
use crate::error::{Result, WaygraphError};
use crate::graph::{AdjacencyList, GridGraph, Weight};
use crate::{bail_input, bail_unsupported};

/// One edge record; `weight` defaults to 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// On-disk graph description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDocument {
    /// Undirected documents add every edge in both directions
    pub directed: bool,

    /// Nodes that exist even without edges
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeRecord>,

    /// Text rows of a grid maze
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Vec<String>>,
}

/// Document as decoded, before weights are checked
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default = "default_directed")]
    directed: bool,
    #[serde(default)]
    nodes: Vec<String>,
    #[serde(default)]
    edges: Vec<RawEdge>,
    #[serde(default)]
    grid: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEdge {
    from: String,
    to: String,
    #[serde(default)]
    weight: Option<RawWeight>,
}

/// Decoders disagree on how integers arrive; accept either sign here and
/// reject negatives afterwards
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Unsigned(u64),
    Signed(i64),
}

fn default_directed() -> bool {
    true
}

impl TryFrom<RawEdge> for EdgeRecord {
    type Error = WaygraphError;

    fn try_from(raw: RawEdge) -> Result<Self> {
        let weight = match raw.weight {
            None => 1,
            Some(RawWeight::Unsigned(weight)) => weight,
            Some(RawWeight::Signed(weight)) => Weight::try_from(weight).map_err(|_| {
                WaygraphError::invalid_value(
                    "edge weight (must be non-negative)",
                    format!("{} -> {}: {}", raw.from, raw.to, weight),
                )
            })?,
        };
        Ok(EdgeRecord {
            from: raw.from,
            to: raw.to,
            weight,
        })
    }
}

impl TryFrom<RawDocument> for GraphDocument {
    type Error = WaygraphError;

    fn try_from(raw: RawDocument) -> Result<Self> {
        let edges = raw
            .edges
            .into_iter()
            .map(EdgeRecord::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(GraphDocument {
            directed: raw.directed,
            nodes: raw.nodes,
            edges,
            grid: raw.grid,
        })
    }
}

/// Encoding of a document file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEncoding {
    Json,
    Toml,
    Yaml,
}

impl DocumentEncoding {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "json" => Ok(DocumentEncoding::Json),
            "toml" => Ok(DocumentEncoding::Toml),
            "yaml" | "yml" => Ok(DocumentEncoding::Yaml),
            other => {
                bail_unsupported!("graph document extension", other, "json, toml, yaml, yml")
            }
        }
    }
}

/// A document turned into a searchable graph
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    Explicit(AdjacencyList<String>),
    Grid(GridGraph),
}

impl GraphDocument {
    /// Read and decode a document, picking the decoder from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let encoding = DocumentEncoding::from_path(path)?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, encoding)
    }

    pub fn parse(content: &str, encoding: DocumentEncoding) -> Result<Self> {
        let raw: RawDocument = match encoding {
            DocumentEncoding::Json => serde_json::from_str(content)?,
            DocumentEncoding::Toml => toml::from_str(content)?,
            DocumentEncoding::Yaml => serde_yaml::from_str(content)?,
        };
        raw.try_into()
    }

    /// Build the graph this document describes
    pub fn build(&self, grid_config: &GridSection) -> Result<LoadedGraph> {
        let has_explicit = !self.nodes.is_empty() || !self.edges.is_empty();
        match (&self.grid, has_explicit) {
            (Some(_), true) => {
                bail_input!("a document holds either a grid or nodes/edges, not both")
            }
            (None, false) => {
                bail_input!("document describes no graph (no grid, nodes or edges)")
            }
            (Some(rows), false) => Ok(LoadedGraph::Grid(GridGraph::parse(
                rows,
                &grid_config.passable,
                grid_config.connectivity,
            )?)),
            (None, true) => Ok(LoadedGraph::Explicit(self.build_adjacency())),
        }
    }

    fn build_adjacency(&self) -> AdjacencyList<String> {
        let mut graph = AdjacencyList::new();
        for node in &self.nodes {
            graph.add_node(node.clone());
        }
        for edge in &self.edges {
            if self.directed {
                graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            } else {
                graph.add_undirected_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            }
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = self.directed,
            "built adjacency list"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Cell, GraphProvider};
    use tempfile::tempdir;

    #[test]
    fn test_parse_json_edges_with_default_weight() {
        let doc = GraphDocument::parse(
            r#"{"edges": [{"from": "a", "to": "b"}, {"from": "b", "to": "c", "weight": 4}]}"#,
            DocumentEncoding::Json,
        )
        .unwrap();
        assert!(doc.directed);
        assert_eq!(doc.edges[0].weight, 1);
        assert_eq!(doc.edges[1].weight, 4);
    }

    #[test]
    fn test_parse_toml_document() {
        let doc = GraphDocument::parse(
            "directed = false\nnodes = [\"z\"]\n\n[[edges]]\nfrom = \"a\"\nto = \"b\"\nweight = 2\n",
            DocumentEncoding::Toml,
        )
        .unwrap();
        assert!(!doc.directed);
        assert_eq!(doc.nodes, vec!["z".to_string()]);

        let LoadedGraph::Explicit(graph) = doc.build(&GridSection::default()).unwrap() else {
            panic!("expected explicit graph");
        };
        assert_eq!(graph.expand(&"b".to_string()), vec![("a".to_string(), 2)]);
        assert!(graph.contains(&"z".to_string()));
    }

    #[test]
    fn test_parse_yaml_grid() {
        let doc = GraphDocument::parse("grid:\n  - \"0.#\"\n  - \"000\"\n", DocumentEncoding::Yaml)
            .unwrap();
        let LoadedGraph::Grid(grid) = doc.build(&GridSection::default()).unwrap() else {
            panic!("expected grid");
        };
        assert!(grid.contains(&Cell::new(0, 1)));
        assert!(!grid.contains(&Cell::new(0, 2)));
    }

    #[test]
    fn test_negative_weight_is_invalid_value() {
        let err = GraphDocument::parse(
            r#"{"edges": [{"from": "a", "to": "b", "weight": -3}]}"#,
            DocumentEncoding::Json,
        )
        .unwrap_err();
        assert!(matches!(err, WaygraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_negative_weight_in_toml_is_invalid_value() {
        let err = GraphDocument::parse(
            "[[edges]]\nfrom = \"a\"\nto = \"b\"\nweight = -1\n",
            DocumentEncoding::Toml,
        )
        .unwrap_err();
        assert!(matches!(err, WaygraphError::InvalidValue { .. }));
    }

    #[test]
    fn test_negative_weight_in_yaml_is_invalid_value() {
        let err = GraphDocument::parse(
            "edges:\n  - {from: a, to: b, weight: -3}\n",
            DocumentEncoding::Yaml,
        )
        .unwrap_err();
        assert!(matches!(err, WaygraphError::InvalidValue { .. }));
        assert!(err.to_string().contains("a -> b: -3"));
    }

    #[test]
    fn test_large_unsigned_weight_accepted() {
        let doc = GraphDocument::parse(
            r#"{"edges": [{"from": "a", "to": "b", "weight": 18446744073709551615}]}"#,
            DocumentEncoding::Json,
        )
        .unwrap();
        assert_eq!(doc.edges[0].weight, u64::MAX);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = GraphDocument::parse(r#"{"edge": []}"#, DocumentEncoding::Json).unwrap_err();
        assert!(matches!(err, WaygraphError::Json(_)));
    }

    #[test]
    fn test_grid_and_edges_conflict() {
        let doc = GraphDocument {
            directed: true,
            nodes: vec![],
            edges: vec![EdgeRecord {
                from: "a".into(),
                to: "b".into(),
                weight: 1,
            }],
            grid: Some(vec!["00".into()]),
        };
        let err = doc.build(&GridSection::default()).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_empty_document_rejected() {
        let doc = GraphDocument::parse("{}", DocumentEncoding::Json).unwrap();
        assert!(doc.build(&GridSection::default()).is_err());
    }

    #[test]
    fn test_encoding_from_extension() {
        assert_eq!(
            DocumentEncoding::from_path(Path::new("g.YML")).unwrap(),
            DocumentEncoding::Yaml
        );
        let err = DocumentEncoding::from_path(Path::new("g.csv")).unwrap_err();
        assert!(matches!(err, WaygraphError::Unsupported { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("graph.json");
        fs::write(&path, r#"{"nodes": ["solo"]}"#).unwrap();
        let doc = GraphDocument::load(&path).unwrap();
        assert_eq!(doc.nodes, vec!["solo".to_string()]);
    }
}
