//! Declared launch argument

use crate::error::{LaunchError, Result};
use crate::substitution::LaunchContext;
use std::collections::HashMap;

/// Launch argument declaration
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredArgument {
    pub name: String,
    pub default: Option<String>,
    pub description: Option<String>,
}

impl DeclaredArgument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Apply argument to context.
    /// Priority: 1) cli_args, 2) value already in context, 3) default value
    pub fn apply(
        &self,
        context: &mut LaunchContext,
        cli_args: &HashMap<String, String>,
    ) -> Result<()> {
        if let Some(value) = cli_args.get(&self.name) {
            context.set_configuration(self.name.clone(), value.clone());
            return Ok(());
        }

        if context.get_configuration(&self.name).is_some() {
            return Ok(());
        }

        match &self.default {
            Some(value) => {
                context.set_configuration(self.name.clone(), value.clone());
                Ok(())
            }
            None => Err(LaunchError::MissingArgument(self.name.clone())),
        }
    }
}
