//! Package share directory lookup through the ament resource index

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Distributions probed under /opt/ros when ROS_DISTRO does not resolve a package
const FALLBACK_DISTROS: &[&str] = &[
    "rolling", "kilted", "jazzy", "iron", "humble", "galactic", "foxy",
];

/// Resolves ROS 2 package names to their installed share directories
#[derive(Debug, Clone, Default)]
pub struct PackageIndex {
    /// Install prefixes from AMENT_PREFIX_PATH, searched in order
    prefixes: Vec<PathBuf>,
    /// System install prefixes (/opt/ros/<distro>) probed without the marker
    system_prefixes: Vec<PathBuf>,
    overrides: HashMap<String, PathBuf>,
}

impl PackageIndex {
    /// Index with no prefixes; only overrides resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from AMENT_PREFIX_PATH and ROS_DISTRO.
    pub fn from_env() -> Self {
        let prefixes = std::env::var("AMENT_PREFIX_PATH")
            .map(|value| split_prefix_path(&value))
            .unwrap_or_default();

        let mut distros: Vec<String> = Vec::new();
        if let Ok(distro) = std::env::var("ROS_DISTRO") {
            if !distro.is_empty() {
                distros.push(distro);
            }
        }
        for distro in FALLBACK_DISTROS {
            if !distros.iter().any(|d| d == distro) {
                distros.push(distro.to_string());
            }
        }

        log::debug!(
            "Package index: {} ament prefixes, {} system distros",
            prefixes.len(),
            distros.len()
        );

        Self {
            prefixes,
            system_prefixes: distros
                .into_iter()
                .map(|d| PathBuf::from("/opt/ros").join(d))
                .collect(),
            overrides: HashMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<PathBuf>) -> Self {
        self.prefixes.push(prefix.into());
        self
    }

    pub fn with_override(mut self, package: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.set_override(package, dir);
        self
    }

    /// Pin a package's share directory, bypassing the index
    pub fn set_override(&mut self, package: impl Into<String>, dir: impl Into<PathBuf>) {
        self.overrides.insert(package.into(), dir.into());
    }

    /// Find a package's share directory
    pub fn find_share(&self, package: &str) -> Option<PathBuf> {
        if let Some(dir) = self.overrides.get(package) {
            return Some(dir.clone());
        }

        for prefix in &self.prefixes {
            let marker = prefix
                .join("share/ament_index/resource_index/packages")
                .join(package);
            if marker.is_file() {
                return Some(prefix.join("share").join(package));
            }
        }

        for prefix in &self.system_prefixes {
            let share = prefix.join("share").join(package);
            if share.is_dir() {
                return Some(share);
            }
        }

        log::debug!("Package '{}' not found in index", package);
        None
    }

    /// Find a package's install prefix (the parent of `share/<package>`)
    pub fn find_prefix(&self, package: &str) -> Option<PathBuf> {
        let share = self.find_share(package)?;
        share_to_prefix(&share)
    }
}

fn split_prefix_path(value: &str) -> Vec<PathBuf> {
    value
        .split(':')
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn share_to_prefix(share: &Path) -> Option<PathBuf> {
    share.parent()?.parent().map(Path::to_path_buf)
}
