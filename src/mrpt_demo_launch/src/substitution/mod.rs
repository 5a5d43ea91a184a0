//! Substitution module

pub mod context;
pub mod package;
pub mod types;

pub use context::LaunchContext;
pub use package::PackageIndex;
pub use types::{join_path, resolve_substitutions, Substitution};
