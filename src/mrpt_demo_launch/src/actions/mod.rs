//! Action module

pub mod arg;
pub mod include;
pub mod node;

pub use arg::DeclaredArgument;
pub use include::IncludeAction;
pub use node::{NodeAction, NodeParameter, Parameter};

use crate::error::Result;
use crate::substitution::LaunchContext;
use std::collections::HashMap;

/// A single launch action
#[derive(Debug, Clone, PartialEq)]
pub enum LaunchAction {
    Include(IncludeAction),
    Node(NodeAction),
}

impl LaunchAction {
    pub fn kind(&self) -> &'static str {
        match self {
            LaunchAction::Include(_) => "include",
            LaunchAction::Node(_) => "node",
        }
    }
}

impl From<IncludeAction> for LaunchAction {
    fn from(include: IncludeAction) -> Self {
        LaunchAction::Include(include)
    }
}

impl From<NodeAction> for LaunchAction {
    fn from(node: NodeAction) -> Self {
        LaunchAction::Node(node)
    }
}

/// Declared arguments plus the ordered list of actions to launch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchDescription {
    pub arguments: Vec<DeclaredArgument>,
    pub actions: Vec<LaunchAction>,
}

impl LaunchDescription {
    pub fn new(actions: Vec<LaunchAction>) -> Self {
        Self {
            arguments: Vec::new(),
            actions,
        }
    }

    pub fn with_argument(mut self, argument: DeclaredArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Populate the context from CLI args and declared defaults.
    pub fn apply_arguments(
        &self,
        context: &mut LaunchContext,
        cli_args: &HashMap<String, String>,
    ) -> Result<()> {
        for (name, value) in cli_args {
            if !self.arguments.iter().any(|a| &a.name == name) {
                log::warn!("Launch argument '{}' is not declared by this launch", name);
                context.set_configuration(name.clone(), value.clone());
            }
        }

        for argument in &self.arguments {
            argument.apply(context, cli_args)?;
        }
        Ok(())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeAction> {
        self.actions.iter().filter_map(|a| match a {
            LaunchAction::Node(node) => Some(node),
            LaunchAction::Include(_) => None,
        })
    }

    pub fn includes(&self) -> impl Iterator<Item = &IncludeAction> {
        self.actions.iter().filter_map(|a| match a {
            LaunchAction::Include(include) => Some(include),
            LaunchAction::Node(_) => None,
        })
    }
}
