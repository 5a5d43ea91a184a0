//! Error types for mrpt_demo_launch

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Launch argument '{0}' has no default and was not provided (pass {0}:=<value>)")]
    MissingArgument(String),

    #[error("Invalid launch argument format: '{0}' (expected key:=value)")]
    InvalidArgument(String),

    #[error("Invalid package directory override: '{0}' (expected package=directory)")]
    InvalidPackageOverride(String),

    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("YAML error in {file}: {message}")]
    Yaml { file: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum SubstitutionError {
    #[error("Undefined variable: '{0}'. Did you forget to declare it as a launch argument?")]
    UndefinedVariable(String),

    #[error(
        "Undefined environment variable: '{0}'. Make sure the variable is set in your environment."
    )]
    UndefinedEnvVar(String),

    #[error("Package '{0}' not found. Ensure the package is installed and sourced.")]
    PackageNotFound(String),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Substitution error: {0}")]
    Substitution(#[from] SubstitutionError),

    #[error("Invalid node name '{0}': use letters, digits and underscores, not starting with a digit")]
    InvalidNodeName(String),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
