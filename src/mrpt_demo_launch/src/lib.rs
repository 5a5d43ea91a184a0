//! mrpt_demo_launch library
//!
//! Launch description for the MRPT particle-filter localization demo: the
//! localization and map server launch files from `mrpt_pf_localization` and
//! `mrpt_map`, the `mvsim` simulator and `rviz2`, wired to the maps, worlds
//! and configs shipped in `mrpt_tutorials`.

pub mod actions;
pub mod check;
pub mod demo;
pub mod error;
pub mod params;
pub mod record;
pub mod substitution;
pub mod xml;

use actions::LaunchDescription;
use check::MissingPath;
use error::Result;
use record::{CommandGenerator, RecordJson};
use std::collections::HashMap;
use substitution::{LaunchContext, PackageIndex};

/// The demo launch description bound to a context
pub struct DemoLaunch {
    description: LaunchDescription,
    context: LaunchContext,
}

impl DemoLaunch {
    /// Apply CLI launch arguments (`key:=value` pairs) to the demo description
    pub fn new(packages: PackageIndex, cli_args: &HashMap<String, String>) -> Result<Self> {
        Self::from_description(demo::generate_launch_description(), packages, cli_args)
    }

    pub fn from_description(
        description: LaunchDescription,
        packages: PackageIndex,
        cli_args: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut context = LaunchContext::with_packages(packages);
        description.apply_arguments(&mut context, cli_args)?;
        Ok(Self {
            description,
            context,
        })
    }

    pub fn description(&self) -> &LaunchDescription {
        &self.description
    }

    pub fn context(&self) -> &LaunchContext {
        &self.context
    }

    pub fn record(&self) -> Result<RecordJson> {
        let record = CommandGenerator::generate(&self.description, &self.context)?;
        log::info!(
            "Resolved {} actions ({} nodes, {} includes)",
            record.action_count(),
            record.node.len(),
            record.include.len()
        );
        Ok(record)
    }

    /// XML launch file with `$(...)` substitutions left for `ros2 launch`
    pub fn launch_xml(&self) -> String {
        xml::to_launch_xml(&self.description)
    }

    /// XML launch file with absolute paths
    pub fn resolved_launch_xml(&self) -> Result<String> {
        Ok(xml::to_resolved_launch_xml(&self.description, &self.context)?)
    }

    pub fn check(&self) -> Result<Vec<MissingPath>> {
        Ok(check::check_paths(&self.record()?))
    }
}

/// Resolve the demo launch and generate record.json
pub fn generate_record(
    packages: PackageIndex,
    cli_args: &HashMap<String, String>,
) -> Result<RecordJson> {
    DemoLaunch::new(packages, cli_args)?.record()
}

/// Parse a `key:=value` launch argument
pub fn parse_launch_arg(s: &str) -> Result<(String, String)> {
    match s.split_once(":=") {
        Some((key, value)) if !key.is_empty() && !value.contains(":=") => {
            Ok((key.to_string(), value.to_string()))
        }
        _ => Err(error::LaunchError::InvalidArgument(s.to_string())),
    }
}

/// Parse a `package=directory` share directory override
pub fn parse_package_override(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((package, dir)) if !package.is_empty() && !dir.is_empty() => {
            Ok((package.to_string(), dir.to_string()))
        }
        _ => Err(error::LaunchError::InvalidPackageOverride(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::TUTORIALS_PACKAGE;

    fn packages() -> PackageIndex {
        PackageIndex::new()
            .with_override(TUTORIALS_PACKAGE, "/ws/install/mrpt_tutorials/share/mrpt_tutorials")
            .with_override("mrpt_pf_localization", "/ws/share/mrpt_pf_localization")
            .with_override("mrpt_map", "/ws/share/mrpt_map")
    }

    #[test]
    fn test_generate_record() {
        let record = generate_record(packages(), &HashMap::new()).unwrap();
        assert_eq!(record.action_count(), 4);
        assert_eq!(
            record.arguments,
            vec![("log_level".to_string(), "INFO".to_string())]
        );
    }

    #[test]
    fn test_log_level_override() {
        let mut cli_args = HashMap::new();
        cli_args.insert("log_level".to_string(), "DEBUG".to_string());

        let record = generate_record(packages(), &cli_args).unwrap();
        let include = record.find_include("localization.launch.py").unwrap();
        assert_eq!(include.argument("log_level"), Some("DEBUG"));
    }

    #[test]
    fn test_missing_tutorials_package() {
        let packages = PackageIndex::new().with_override("mrpt_map", "/ws/share/mrpt_map");
        let err = generate_record(packages, &HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("mrpt_pf_localization"));
    }

    #[test]
    fn test_launch_xml_without_packages() {
        let launch = DemoLaunch::new(PackageIndex::new(), &HashMap::new()).unwrap();
        let xml = launch.launch_xml();
        assert!(xml.contains("$(find-pkg-share mrpt_tutorials)/maps/demo_world2.yaml"));
        assert!(launch.resolved_launch_xml().is_err());
    }

    #[test]
    fn test_parse_launch_arg() {
        assert_eq!(
            parse_launch_arg("log_level:=DEBUG").unwrap(),
            ("log_level".to_string(), "DEBUG".to_string())
        );
        assert_eq!(
            parse_launch_arg("empty:=").unwrap(),
            ("empty".to_string(), String::new())
        );
        assert!(parse_launch_arg("log_level=DEBUG").is_err());
        assert!(parse_launch_arg(":=x").is_err());
        assert!(parse_launch_arg("a:=b:=c").is_err());
    }

    #[test]
    fn test_parse_package_override() {
        assert_eq!(
            parse_package_override("mvsim=/opt/mvsim/share/mvsim").unwrap(),
            ("mvsim".to_string(), "/opt/mvsim/share/mvsim".to_string())
        );
        assert!(parse_package_override("mvsim").is_err());
        assert!(parse_package_override("=/x").is_err());
    }
}
