//! record.json data structures

use serde::{Deserialize, Serialize};

/// Root structure for record.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordJson {
    /// Resolved values of the declared launch arguments
    pub arguments: Vec<(String, String)>,
    pub node: Vec<NodeRecord>,
    pub include: Vec<IncludeRecord>,
}

impl RecordJson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Number of launch actions (nodes plus includes)
    pub fn action_count(&self) -> usize {
        self.node.len() + self.include.len()
    }

    /// Records in launch order
    pub fn ordered(&self) -> Vec<RecordRef<'_>> {
        let mut records: Vec<RecordRef<'_>> = self
            .node
            .iter()
            .map(RecordRef::Node)
            .chain(self.include.iter().map(RecordRef::Include))
            .collect();
        records.sort_by_key(RecordRef::order);
        records
    }

    pub fn find_node(&self, name: &str) -> Option<&NodeRecord> {
        self.node.iter().find(|n| n.name.as_deref() == Some(name))
    }

    /// First include whose file path ends with `file_name`
    pub fn find_include(&self, file_name: &str) -> Option<&IncludeRecord> {
        self.include.iter().find(|i| i.file.ends_with(file_name))
    }
}

/// A borrowed node or include record
#[derive(Debug, Clone, Copy)]
pub enum RecordRef<'a> {
    Node(&'a NodeRecord),
    Include(&'a IncludeRecord),
}

impl RecordRef<'_> {
    pub fn order(&self) -> usize {
        match self {
            RecordRef::Node(node) => node.order,
            RecordRef::Include(include) => include.order,
        }
    }
}

/// Node record structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeRecord {
    /// Position in the launch description
    pub order: usize,
    pub executable: String,
    pub package: String,
    pub name: Option<String>,
    pub namespace: String,
    pub output: Option<String>,
    pub params: Vec<(String, String)>,
    pub params_files: Vec<String>,
    pub args: Option<Vec<String>>,
    pub cmd: Vec<String>,
}

/// Included launch file with its resolved arguments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncludeRecord {
    pub order: usize,
    pub file: String,
    pub launch_arguments: Vec<(String, String)>,
}

impl IncludeRecord {
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.launch_arguments
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
