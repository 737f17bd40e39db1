//! Loads the plugin configuration map from a YAML/JSON file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Source argument that selects stdin instead of a file.
pub const STDIN_SOURCE: &str = "-";

/// Read `source` (a path, or `-` for stdin) into a configuration map.
///
/// JSON is a subset of YAML, so both formats are accepted. An empty document
/// yields an empty map.
///
/// # Errors
///
/// Returns an error if the source cannot be read, does not parse, or its
/// top level is not a mapping.
pub fn load_config_map(source: &str) -> Result<Map<String, Value>> {
    let content = if source == STDIN_SOURCE {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read config from stdin")?;
        buf
    } else {
        let path = Path::new(source);
        std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?
    };
    parse_config_map(&content).with_context(|| format!("cannot parse {source}"))
}

/// Parse a YAML/JSON document into a configuration map.
///
/// # Errors
///
/// Returns an error if the document does not parse or is not a mapping.
pub fn parse_config_map(content: &str) -> Result<Map<String, Value>> {
    if content.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = serde_yaml::from_str(content)?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => anyhow::bail!("expected a mapping at the top level, found {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
