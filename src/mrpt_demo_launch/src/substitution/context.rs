//! Launch context for managing configurations

use crate::substitution::package::PackageIndex;
use std::collections::HashMap;

/// Launch context holding configurations and the package index
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    packages: PackageIndex,
}

impl LaunchContext {
    /// Context with no configurations and an empty package index.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_packages(packages: PackageIndex) -> Self {
        Self {
            configurations: HashMap::new(),
            packages,
        }
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }

    pub fn packages(&self) -> &PackageIndex {
        &self.packages
    }

    pub fn packages_mut(&mut self) -> &mut PackageIndex {
        &mut self.packages
    }
}
