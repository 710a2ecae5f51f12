use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Command for waygraph that reads its default config from `config_dir`
pub fn waygraph(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("waygraph");
    cmd.env("WAYGRAPH_CONFIG_DIR", config_dir)
        .env_remove("WAYGRAPH_CONFIG")
        .env_remove("WAYGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Weighted four-node graph plus the isolated node `5`
#[allow(dead_code)]
pub const WEIGHTED_JSON: &str = r#"{
  "nodes": ["5"],
  "edges": [
    {"from": "0", "to": "1", "weight": 4},
    {"from": "0", "to": "2", "weight": 1},
    {"from": "2", "to": "1", "weight": 1},
    {"from": "1", "to": "3", "weight": 1},
    {"from": "2", "to": "3", "weight": 5}
  ]
}"#;

#[allow(dead_code)]
pub const DIAMOND_TOML: &str = r#"
[[edges]]
from = "A"
to = "B"

[[edges]]
from = "A"
to = "C"

[[edges]]
from = "B"
to = "D"

[[edges]]
from = "C"
to = "D"
"#;

#[allow(dead_code)]
pub const MAZE_YAML: &str = "grid:\n  - \"000\"\n  - \"110\"\n  - \"000\"\n";

/// Write `content` to `dir/name` and return the path
pub fn write_document(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write document");
    path
}
