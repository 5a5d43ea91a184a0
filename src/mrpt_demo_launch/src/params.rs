//! ROS 2 parameter file loading

use crate::error::LaunchError;
use serde_yaml::Value;
use std::{fs, path::Path};

/// Keys that apply a parameter block to every node
const WILDCARD_KEYS: &[&str] = &["/**", "**"];

fn applies_to(key: &str, node_name: &str) -> bool {
    WILDCARD_KEYS.contains(&key) || key.trim_start_matches('/') == node_name
}

/// Load the parameters a ROS 2 YAML parameter file assigns to `node_name`.
///
/// Blocks keyed by the node name (with or without a leading '/') or by a
/// `/**` wildcard are merged in file order. Nested maps flatten to dotted
/// keys.
pub fn load_param_file(path: &Path, node_name: &str) -> Result<Vec<(String, String)>, LaunchError> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|e| LaunchError::Yaml {
        file: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut params = Vec::new();

    // ROS 2 parameter files have the structure:
    // node_name:
    //   ros__parameters:
    //     param1: value1
    if let Value::Mapping(root_map) = yaml {
        for (node_key, node_value) in root_map.iter() {
            let Some(node_key) = node_key.as_str() else {
                continue;
            };
            if !applies_to(node_key, node_name) {
                log::debug!(
                    "Skipping parameter block '{}' in {} for node '{}'",
                    node_key,
                    path.display(),
                    node_name
                );
                continue;
            }
            if let Value::Mapping(node_map) = node_value {
                if let Some(Value::Mapping(params_map)) = node_map.get("ros__parameters") {
                    flatten_params("", params_map, &mut params);
                }
            }
        }
    }

    Ok(params)
}

/// Recursively flatten nested parameter maps
fn flatten_params(prefix: &str, map: &serde_yaml::Mapping, output: &mut Vec<(String, String)>) {
    for (key, value) in map.iter() {
        if let Value::String(key_str) = key {
            let full_key = if prefix.is_empty() {
                key_str.clone()
            } else {
                format!("{}.{}", prefix, key_str)
            };

            match value {
                Value::Mapping(nested_map) => {
                    flatten_params(&full_key, nested_map, output);
                }
                Value::String(s) => {
                    output.push((full_key, s.clone()));
                }
                Value::Number(n) => {
                    output.push((full_key, n.to_string()));
                }
                Value::Bool(b) => {
                    output.push((full_key, b.to_string()));
                }
                Value::Sequence(seq) => {
                    // Arrays get serialized as JSON
                    let json_str =
                        serde_json::to_string(seq).unwrap_or_else(|_| format!("{:?}", seq));
                    output.push((full_key, json_str));
                }
                Value::Null => {
                    output.push((full_key, "null".to_string()));
                }
                Value::Tagged(tagged) => {
                    output.push((full_key, format!("{:?}", tagged.value)));
                }
            }
        }
    }
}
