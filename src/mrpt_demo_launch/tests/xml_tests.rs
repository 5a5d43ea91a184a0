use mrpt_demo_launch::{substitution::PackageIndex, DemoLaunch};
use std::collections::HashMap;

fn element_names(xml: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(xml).unwrap();
    doc.root_element()
        .children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name().to_string())
        .collect()
}

#[test]
fn test_portable_xml_structure() {
    let launch = DemoLaunch::new(PackageIndex::new(), &HashMap::new()).unwrap();
    let xml = launch.launch_xml();

    assert_eq!(
        element_names(&xml),
        vec!["arg", "include", "node", "node", "include"]
    );
}

#[test]
fn test_portable_xml_substitutions() {
    let launch = DemoLaunch::new(PackageIndex::new(), &HashMap::new()).unwrap();
    let xml = launch.launch_xml();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let includes: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("include"))
        .collect();
    assert_eq!(
        includes[0].attribute("file"),
        Some("$(find-pkg-share mrpt_pf_localization)/launch/localization.launch.py")
    );
    let args: Vec<_> = includes[0]
        .children()
        .filter(|n| n.has_tag_name("arg"))
        .map(|n| (n.attribute("name").unwrap(), n.attribute("value").unwrap()))
        .collect();
    assert_eq!(
        args,
        vec![
            ("mrpt_metricmap_file", "$(find-pkg-share mrpt_tutorials)/"),
            ("log_level", "$(var log_level)"),
        ]
    );

    let mvsim = doc
        .descendants()
        .find(|n| n.has_tag_name("node") && n.attribute("name") == Some("mvsim"))
        .unwrap();
    assert_eq!(mvsim.attribute("pkg"), Some("mvsim"));
    assert_eq!(mvsim.attribute("exec"), Some("mvsim_node"));
    assert_eq!(mvsim.attribute("output"), Some("screen"));
    let params: Vec<_> = mvsim.children().filter(|n| n.is_element()).collect();
    assert_eq!(params.len(), 2);
    assert_eq!(
        params[0].attribute("from"),
        Some("$(find-pkg-share mrpt_tutorials)/params/mvsim_ros2_params.yaml")
    );
    assert_eq!(params[1].attribute("name"), Some("world_file"));
    assert_eq!(
        params[1].attribute("value"),
        Some("$(find-pkg-share mrpt_tutorials)/mvsim/demo_world2.world.xml")
    );
}

#[test]
fn test_resolved_xml_paths() {
    let packages = PackageIndex::new()
        .with_override("mrpt_tutorials", "/tuts")
        .with_override("mrpt_pf_localization", "/pf")
        .with_override("mrpt_map", "/map");
    let mut cli_args = HashMap::new();
    cli_args.insert("log_level".to_string(), "WARN".to_string());

    let launch = DemoLaunch::new(packages, &cli_args).unwrap();
    let xml = launch.resolved_launch_xml().unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let rviz2 = doc
        .descendants()
        .find(|n| n.has_tag_name("node") && n.attribute("name") == Some("rviz2"))
        .unwrap();
    assert_eq!(rviz2.attribute("args"), Some("-d /tuts/rviz2/gridmap.rviz"));

    let values: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name("arg") && n.attribute("value").is_some())
        .map(|n| n.attribute("value").unwrap())
        .collect();
    assert_eq!(values, vec!["/tuts/", "WARN", "/tuts/maps/demo_world2.yaml"]);

    assert!(doc
        .descendants()
        .any(|n| n.attribute("file") == Some("/map/launch/mrpt_map_server.launch.py")));
}

#[test]
fn test_resolved_xml_share_dir_with_space() {
    let tuts = "/home/u/my ws/share/mrpt_tutorials";
    let packages = PackageIndex::new()
        .with_override("mrpt_tutorials", tuts)
        .with_override("mrpt_pf_localization", "/pf")
        .with_override("mrpt_map", "/map");

    let launch = DemoLaunch::new(packages, &HashMap::new()).unwrap();
    let xml = launch.resolved_launch_xml().unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let rviz2 = doc
        .descendants()
        .find(|n| n.has_tag_name("node") && n.attribute("name") == Some("rviz2"))
        .unwrap();
    let tokens: Vec<_> = rviz2.attribute("args").unwrap().split_whitespace().collect();
    assert_eq!(
        tokens,
        vec!["-d", "$(find-pkg-share mrpt_tutorials)/rviz2/gridmap.rviz"]
    );

    // The record keeps the resolved path as a single argument
    let record = launch.record().unwrap();
    assert_eq!(
        record.find_node("rviz2").unwrap().args,
        Some(vec![
            "-d".to_string(),
            format!("{}/rviz2/gridmap.rviz", tuts)
        ])
    );

    // Attributes that are not split keep the resolved path
    let map_yaml = doc
        .descendants()
        .find(|n| n.has_tag_name("arg") && n.attribute("name") == Some("map_yaml_file"))
        .unwrap();
    assert_eq!(
        map_yaml.attribute("value"),
        Some(format!("{}/maps/demo_world2.yaml", tuts).as_str())
    );
}
