//! Particle-filter localization demo on the mvsim `demo_world2` world.
//!
//! Starts `mrpt_pf_localization`, the `mrpt_map` map server, the `mvsim`
//! simulator and `rviz2`, all configured with files from the
//! `mrpt_tutorials` share directory.

use crate::actions::{DeclaredArgument, IncludeAction, LaunchDescription, NodeAction};
use crate::substitution::Substitution;

pub const TUTORIALS_PACKAGE: &str = "mrpt_tutorials";
pub const PF_LOCALIZATION_PACKAGE: &str = "mrpt_pf_localization";
pub const MAP_PACKAGE: &str = "mrpt_map";
pub const MVSIM_PACKAGE: &str = "mvsim";
pub const RVIZ2_PACKAGE: &str = "rviz2";

pub const PF_LOCALIZATION_LAUNCH: &str = "localization.launch.py";
pub const MAP_SERVER_LAUNCH: &str = "mrpt_map_server.launch.py";

/// Include argument: directory holding the metric map
pub const ARG_METRICMAP_FILE: &str = "mrpt_metricmap_file";
pub const ARG_LOG_LEVEL: &str = "log_level";
/// Include argument: map server YAML description
pub const ARG_MAP_YAML_FILE: &str = "map_yaml_file";
/// mvsim node parameter
pub const PARAM_WORLD_FILE: &str = "world_file";

pub const DEFAULT_LOG_LEVEL: &str = "INFO";

fn tutorials_dir() -> Vec<Substitution> {
    vec![Substitution::FindPackageShare(TUTORIALS_PACKAGE.to_string())]
}

/// `<mrpt_tutorials share>/<components...>`
fn tutorials_path(components: &[&str]) -> Vec<Substitution> {
    vec![Substitution::path_join(tutorials_dir(), components)]
}

fn pf_localization_launch() -> IncludeAction {
    IncludeAction::from_package(PF_LOCALIZATION_PACKAGE, PF_LOCALIZATION_LAUNCH)
        .arg(ARG_METRICMAP_FILE, tutorials_path(&["", ""]))
        .arg(
            ARG_LOG_LEVEL,
            vec![Substitution::LaunchConfiguration(ARG_LOG_LEVEL.to_string())],
        )
}

fn mrpt_map_launch() -> IncludeAction {
    IncludeAction::from_package(MAP_PACKAGE, MAP_SERVER_LAUNCH)
        .arg(ARG_MAP_YAML_FILE, tutorials_path(&["maps", "demo_world2.yaml"]))
}

fn mvsim_node() -> NodeAction {
    NodeAction::new(MVSIM_PACKAGE, "mvsim_node")
        .name("mvsim")
        .output("screen")
        .param_file(tutorials_path(&["params", "mvsim_ros2_params.yaml"]))
        .param(
            PARAM_WORLD_FILE,
            tutorials_path(&["mvsim", "demo_world2.world.xml"]),
        )
}

fn rviz2_node() -> NodeAction {
    NodeAction::new(RVIZ2_PACKAGE, "rviz2")
        .name("rviz2")
        .argument(vec![Substitution::text("-d")])
        .argument(tutorials_path(&["rviz2", "gridmap.rviz"]))
}

/// Build the demo launch description.
///
/// Actions, in order: localization include, mvsim node, rviz2 node, map
/// server include.
pub fn generate_launch_description() -> LaunchDescription {
    LaunchDescription::new(vec![
        pf_localization_launch().into(),
        mvsim_node().into(),
        rviz2_node().into(),
        mrpt_map_launch().into(),
    ])
    .with_argument(
        DeclaredArgument::new(ARG_LOG_LEVEL)
            .default_value(DEFAULT_LOG_LEVEL)
            .description("Logging level forwarded to mrpt_pf_localization"),
    )
}
