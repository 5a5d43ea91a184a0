//! Include action implementation

use crate::substitution::Substitution;

/// Include action representing a nested launch file
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeAction {
    pub file: Vec<Substitution>,
    /// Args as Vec to preserve order (later args can reference earlier ones)
    pub args: Vec<(String, Vec<Substitution>)>,
}

impl IncludeAction {
    pub fn new(file: Vec<Substitution>) -> Self {
        Self {
            file,
            args: Vec::new(),
        }
    }

    /// Launch file `<share(package)>/launch/<file_name>`
    pub fn from_package(package: &str, file_name: &str) -> Self {
        Self::new(vec![Substitution::path_join(
            vec![Substitution::FindPackageShare(package.to_string())],
            &["launch", file_name],
        )])
    }

    pub fn arg(mut self, name: impl Into<String>, value: Vec<Substitution>) -> Self {
        self.args.push((name.into(), value));
        self
    }

    pub fn arg_names(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(|(name, _)| name.as_str())
    }
}
