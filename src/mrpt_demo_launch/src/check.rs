//! Verify that files referenced by a resolved launch exist

use crate::record::{RecordJson, RecordRef};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingPath {
    /// Node name or include file that references the path
    pub referenced_by: String,
    pub kind: PathKind,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    LaunchFile,
    ParamsFile,
    /// Path argument of a node (`-d <file>`)
    ConfigFile,
    /// Include argument naming a file or directory
    LaunchArgument,
}

/// Include arguments whose value is a path the included launch reads
const PATH_ARGUMENTS: &[&str] = &["mrpt_metricmap_file", "map_yaml_file"];

/// Node flags followed by a config file path
const PATH_FLAGS: &[&str] = &["-d"];

/// List every referenced path that is missing on disk, in launch order
pub fn check_paths(record: &RecordJson) -> Vec<MissingPath> {
    let mut missing = Vec::new();

    for entry in record.ordered() {
        match entry {
            RecordRef::Include(include) => {
                push_if_missing(&mut missing, &include.file, PathKind::LaunchFile, &include.file);
                for (name, value) in &include.launch_arguments {
                    if PATH_ARGUMENTS.contains(&name.as_str()) {
                        push_if_missing(&mut missing, &include.file, PathKind::LaunchArgument, value);
                    }
                }
            }
            RecordRef::Node(node) => {
                let owner = node.name.clone().unwrap_or_else(|| node.executable.clone());
                for file in &node.params_files {
                    push_if_missing(&mut missing, &owner, PathKind::ParamsFile, file);
                }
                for (_, value) in node.params.iter().filter(|(k, _)| k.ends_with("_file")) {
                    push_if_missing(&mut missing, &owner, PathKind::ConfigFile, value);
                }
                if let Some(args) = &node.args {
                    for pair in args.windows(2) {
                        if PATH_FLAGS.contains(&pair[0].as_str()) {
                            push_if_missing(&mut missing, &owner, PathKind::ConfigFile, &pair[1]);
                        }
                    }
                }
            }
        }
    }

    missing
}

fn push_if_missing(missing: &mut Vec<MissingPath>, owner: &str, kind: PathKind, path: &str) {
    if Path::new(path).exists() {
        log::debug!("Found {}", path);
        return;
    }
    log::warn!("{} references missing path {}", owner, path);
    missing.push(MissingPath {
        referenced_by: owner.to_string(),
        kind,
        path: path.to_string(),
    });
}
