//! Command-line and record generation

use crate::actions::{IncludeAction, LaunchAction, LaunchDescription, NodeAction, NodeParameter};
use crate::error::GenerationError;
use crate::params::load_param_file;
use crate::record::types::{IncludeRecord, NodeRecord, RecordJson};
use crate::substitution::{resolve_substitutions, LaunchContext};
use std::path::Path;

pub struct CommandGenerator;

impl CommandGenerator {
    /// Resolve every action of `description` against `context`.
    ///
    /// Launch arguments must already be applied to the context.
    pub fn generate(
        description: &LaunchDescription,
        context: &LaunchContext,
    ) -> Result<RecordJson, GenerationError> {
        let mut record = RecordJson::new();

        for argument in &description.arguments {
            if let Some(value) = context.get_configuration(&argument.name) {
                record.arguments.push((argument.name.clone(), value));
            }
        }

        for (order, action) in description.actions.iter().enumerate() {
            match action {
                LaunchAction::Node(node) => {
                    record
                        .node
                        .push(Self::generate_node_record(node, order, context)?);
                }
                LaunchAction::Include(include) => {
                    record
                        .include
                        .push(Self::generate_include_record(include, order, context)?);
                }
            }
        }

        Ok(record)
    }

    pub fn generate_include_record(
        include: &IncludeAction,
        order: usize,
        context: &LaunchContext,
    ) -> Result<IncludeRecord, GenerationError> {
        let file = resolve_substitutions(&include.file, context)?;
        let launch_arguments = include
            .args
            .iter()
            .map(|(name, value)| Ok((name.clone(), resolve_substitutions(value, context)?)))
            .collect::<Result<Vec<_>, GenerationError>>()?;

        log::debug!("Including launch file: {}", file);

        Ok(IncludeRecord {
            order,
            file,
            launch_arguments,
        })
    }

    pub fn generate_node_record(
        node: &NodeAction,
        order: usize,
        context: &LaunchContext,
    ) -> Result<NodeRecord, GenerationError> {
        let cmd = Self::generate_node_command(node, context)?;

        let package = resolve_substitutions(&node.package, context)?;
        let executable = resolve_substitutions(&node.executable, context)?;
        let name = Self::resolve_node_name(node, &executable, context)?;

        // Parameters are merged in declaration order so later entries win
        let mut params = Vec::new();
        let mut params_files = Vec::new();
        for entry in &node.parameters {
            match entry {
                NodeParameter::File(file_subs) => {
                    let param_file_path = resolve_substitutions(file_subs, context)?;
                    match load_param_file(Path::new(&param_file_path), &name) {
                        Ok(file_params) => params.extend(file_params),
                        Err(e) => {
                            log::warn!("Failed to load parameter file {}: {}", param_file_path, e);
                        }
                    }
                    params_files.push(param_file_path);
                }
                NodeParameter::Inline(block) => {
                    for p in block {
                        params.push((p.name.clone(), resolve_substitutions(&p.value, context)?));
                    }
                }
            }
        }

        let args = Self::resolve_arguments(node, context)?;

        Ok(NodeRecord {
            order,
            executable,
            package,
            name: Some(name),
            namespace: "/".to_string(),
            output: node.output.clone(),
            params,
            params_files,
            args: if args.is_empty() { None } else { Some(args) },
            cmd,
        })
    }

    /// Build the process command line:
    /// `<exec> [args...] --ros-args -r __node:=<name> [--params-file <f>] [-p k:=v]`
    pub fn generate_node_command(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<Vec<String>, GenerationError> {
        let mut cmd = Vec::new();

        // 1. Resolve executable path
        let package = resolve_substitutions(&node.package, context)?;
        let executable = resolve_substitutions(&node.executable, context)?;
        cmd.push(Self::resolve_executable_path(&package, &executable, context));

        // 2. Plain arguments
        cmd.extend(Self::resolve_arguments(node, context)?);

        // 3. ROS args delimiter
        cmd.push("--ros-args".to_string());

        // 4. Node name
        let node_name = Self::resolve_node_name(node, &executable, context)?;
        cmd.push("-r".to_string());
        cmd.push(format!("__node:={}", node_name));

        // 5. Parameters, files and inline values interleaved as declared
        for entry in &node.parameters {
            match entry {
                NodeParameter::File(file_subs) => {
                    cmd.push("--params-file".to_string());
                    cmd.push(resolve_substitutions(file_subs, context)?);
                }
                NodeParameter::Inline(block) => {
                    for p in block {
                        let value = resolve_substitutions(&p.value, context)?;
                        cmd.push("-p".to_string());
                        cmd.push(format!("{}:={}", p.name, value));
                    }
                }
            }
        }

        Ok(cmd)
    }

    fn resolve_arguments(
        node: &NodeAction,
        context: &LaunchContext,
    ) -> Result<Vec<String>, GenerationError> {
        node.arguments
            .iter()
            .map(|a| resolve_substitutions(a, context).map_err(GenerationError::from))
            .collect()
    }

    fn resolve_node_name(
        node: &NodeAction,
        executable: &str,
        context: &LaunchContext,
    ) -> Result<String, GenerationError> {
        let name = match &node.name {
            Some(name_subs) => resolve_substitutions(name_subs, context)?,
            None => executable.to_string(),
        };
        if !is_valid_node_name(&name) {
            return Err(GenerationError::InvalidNodeName(name));
        }
        Ok(name)
    }

    /// `<prefix>/lib/<package>/<executable>`, or the bare executable when the
    /// package is not in the index
    fn resolve_executable_path(package: &str, executable: &str, context: &LaunchContext) -> String {
        match context.packages().find_prefix(package) {
            Some(prefix) => prefix
                .join("lib")
                .join(package)
                .join(executable)
                .to_string_lossy()
                .into_owned(),
            None => {
                log::warn!(
                    "Package '{}' not found; using '{}' from PATH",
                    package,
                    executable
                );
                executable.to_string()
            }
        }
    }
}

fn is_valid_node_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
