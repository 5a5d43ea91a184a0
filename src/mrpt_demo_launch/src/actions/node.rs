//! Node action implementation

use crate::substitution::Substitution;

/// Node action representing a ROS 2 node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAction {
    pub package: Vec<Substitution>,
    pub executable: Vec<Substitution>,
    pub name: Option<Vec<Substitution>>,
    pub output: Option<String>,
    pub parameters: Vec<NodeParameter>,
    pub arguments: Vec<Vec<Substitution>>,
}

/// One entry of a node's `parameters` list
#[derive(Debug, Clone, PartialEq)]
pub enum NodeParameter {
    /// Path to a YAML parameter file
    File(Vec<Substitution>),
    /// Inline name/value pairs
    Inline(Vec<Parameter>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Vec<Substitution>,
}

impl NodeAction {
    pub fn new(package: &str, executable: &str) -> Self {
        Self {
            package: vec![Substitution::text(package)],
            executable: vec![Substitution::text(executable)],
            name: None,
            output: None,
            parameters: Vec::new(),
            arguments: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(vec![Substitution::text(name)]);
        self
    }

    pub fn output(mut self, output: &str) -> Self {
        self.output = Some(output.to_string());
        self
    }

    pub fn param_file(mut self, file: Vec<Substitution>) -> Self {
        self.parameters.push(NodeParameter::File(file));
        self
    }

    /// Add an inline parameter. Consecutive inline parameters share one block.
    pub fn param(mut self, name: impl Into<String>, value: Vec<Substitution>) -> Self {
        let param = Parameter {
            name: name.into(),
            value,
        };
        match self.parameters.last_mut() {
            Some(NodeParameter::Inline(block)) => block.push(param),
            _ => self.parameters.push(NodeParameter::Inline(vec![param])),
        }
        self
    }

    pub fn argument(mut self, value: Vec<Substitution>) -> Self {
        self.arguments.push(value);
        self
    }

    pub fn param_files(&self) -> impl Iterator<Item = &Vec<Substitution>> {
        self.parameters.iter().filter_map(|p| match p {
            NodeParameter::File(file) => Some(file),
            NodeParameter::Inline(_) => None,
        })
    }

    pub fn inline_params(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().flat_map(|p| match p {
            NodeParameter::File(_) => &[][..],
            NodeParameter::Inline(block) => block.as_slice(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_node() {
        let node = NodeAction::new("rviz2", "rviz2").name("rviz2");

        assert_eq!(node.package, vec![Substitution::text("rviz2")]);
        assert_eq!(node.name, Some(vec![Substitution::text("rviz2")]));
        assert!(node.output.is_none());
        assert!(node.parameters.is_empty());
    }

    #[test]
    fn test_parameter_order() {
        let node = NodeAction::new("mvsim", "mvsim_node")
            .param_file(vec![Substitution::text("/p.yaml")])
            .param("world_file", vec![Substitution::text("/w.xml")])
            .param("headless", vec![Substitution::text("true")]);

        assert_eq!(node.parameters.len(), 2);
        assert!(matches!(node.parameters[0], NodeParameter::File(_)));
        match &node.parameters[1] {
            NodeParameter::Inline(block) => {
                assert_eq!(block.len(), 2);
                assert_eq!(block[0].name, "world_file");
                assert_eq!(block[1].name, "headless");
            }
            other => panic!("expected inline block, got {:?}", other),
        }
    }

    #[test]
    fn test_param_accessors() {
        let node = NodeAction::new("mvsim", "mvsim_node")
            .param("a", vec![Substitution::text("1")])
            .param_file(vec![Substitution::text("/p.yaml")])
            .param("b", vec![Substitution::text("2")]);

        assert_eq!(node.param_files().count(), 1);
        let names: Vec<_> = node.inline_params().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
