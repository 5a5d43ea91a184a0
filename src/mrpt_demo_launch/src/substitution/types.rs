//! Substitution types

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;

/// Substitution enum representing different types of substitutions
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - Launch configuration variable
    LaunchConfiguration(String),
    /// $(env VAR [default]) - Environment variable with optional default
    EnvironmentVariable {
        name: String,
        default: Option<String>,
    },
    /// $(find-pkg-share package_name) - Find ROS 2 package share directory
    FindPackageShare(String),
    /// Path components joined the way `os.path.join` does
    PathJoin(Vec<Vec<Substitution>>),
}

impl Substitution {
    pub fn text(s: impl Into<String>) -> Self {
        Substitution::Text(s.into())
    }

    /// Join `base` with literal path components.
    pub fn path_join(base: Vec<Substitution>, components: &[&str]) -> Self {
        let mut parts = vec![base];
        parts.extend(components.iter().map(|c| vec![Substitution::text(*c)]));
        Substitution::PathJoin(parts)
    }

    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
            Substitution::EnvironmentVariable { name, default } => {
                std::env::var(name).or_else(|_| {
                    default
                        .clone()
                        .ok_or_else(|| SubstitutionError::UndefinedEnvVar(name.clone()))
                })
            }
            Substitution::FindPackageShare(package_name) => context
                .packages()
                .find_share(package_name)
                .map(|p| p.to_string_lossy().into_owned())
                .ok_or_else(|| SubstitutionError::PackageNotFound(package_name.clone())),
            Substitution::PathJoin(parts) => {
                let components = parts
                    .iter()
                    .map(|p| resolve_substitutions(p, context))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(join_path(&components))
            }
        }
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

/// Join path components with '/'.
///
/// Empty components still contribute a separator, so a trailing `""` yields
/// a directory path ending in '/'. An absolute component discards everything
/// before it.
pub fn join_path<S: AsRef<str>>(components: &[S]) -> String {
    let mut path = String::new();
    for (i, component) in components.iter().enumerate() {
        let component = component.as_ref();
        if component.starts_with('/') {
            path = component.to_string();
        } else if i == 0 || path.is_empty() || path.ends_with('/') {
            path.push_str(component);
        } else {
            path.push('/');
            path.push_str(component);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::PackageIndex;

    #[test]
    fn test_text_substitution() {
        let sub = Substitution::Text("hello".to_string());
        let context = LaunchContext::new();
        assert_eq!(sub.resolve(&context).unwrap(), "hello");
    }

    #[test]
    fn test_launch_configuration() {
        let sub = Substitution::LaunchConfiguration("my_var".to_string());
        let mut context = LaunchContext::new();
        context.set_configuration("my_var".to_string(), "value123".to_string());
        assert_eq!(sub.resolve(&context).unwrap(), "value123");
    }

    #[test]
    fn test_undefined_variable() {
        let sub = Substitution::LaunchConfiguration("undefined".to_string());
        let context = LaunchContext::new();
        assert!(matches!(
            sub.resolve(&context),
            Err(SubstitutionError::UndefinedVariable(name)) if name == "undefined"
        ));
    }

    #[test]
    fn test_env_var_with_default() {
        let sub = Substitution::EnvironmentVariable {
            name: "MRPT_DEMO_LAUNCH_NONEXISTENT_VAR".to_string(),
            default: Some("default_value".to_string()),
        };
        let context = LaunchContext::new();
        assert_eq!(sub.resolve(&context).unwrap(), "default_value");
    }

    #[test]
    fn test_env_var_missing() {
        let sub = Substitution::EnvironmentVariable {
            name: "MRPT_DEMO_LAUNCH_NONEXISTENT_VAR".to_string(),
            default: None,
        };
        let context = LaunchContext::new();
        assert!(sub.resolve(&context).is_err());
    }

    #[test]
    fn test_find_package_share_override() {
        let packages = PackageIndex::new().with_override("mrpt_tutorials", "/opt/tuts");
        let context = LaunchContext::with_packages(packages);
        let sub = Substitution::FindPackageShare("mrpt_tutorials".to_string());
        assert_eq!(sub.resolve(&context).unwrap(), "/opt/tuts");
    }

    #[test]
    fn test_find_package_share_missing() {
        let context = LaunchContext::new();
        let sub = Substitution::FindPackageShare("no_such_pkg".to_string());
        assert!(matches!(
            sub.resolve(&context),
            Err(SubstitutionError::PackageNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_multiple() {
        let subs = vec![
            Substitution::Text("Hello ".to_string()),
            Substitution::LaunchConfiguration("name".to_string()),
            Substitution::Text("!".to_string()),
        ];
        let mut context = LaunchContext::new();
        context.set_configuration("name".to_string(), "World".to_string());
        assert_eq!(
            resolve_substitutions(&subs, &context).unwrap(),
            "Hello World!"
        );
    }

    #[test]
    fn test_join_path() {
        assert_eq!(
            join_path(&["/share/tuts", "maps", "demo_world2.yaml"]),
            "/share/tuts/maps/demo_world2.yaml"
        );
        assert_eq!(join_path(&["/share/tuts/", "maps"]), "/share/tuts/maps");
    }

    #[test]
    fn test_join_path_empty_components() {
        // Trailing empty components produce a single trailing separator
        assert_eq!(join_path(&["/share/tuts", "", ""]), "/share/tuts/");
        assert_eq!(join_path(&["", "maps"]), "maps");
    }

    #[test]
    fn test_join_path_absolute_component() {
        assert_eq!(join_path(&["/share/tuts", "/etc", "x.yaml"]), "/etc/x.yaml");
    }

    #[test]
    fn test_path_join_substitution() {
        let packages = PackageIndex::new().with_override("mrpt_tutorials", "/opt/tuts");
        let context = LaunchContext::with_packages(packages);
        let sub = Substitution::path_join(
            vec![Substitution::FindPackageShare("mrpt_tutorials".to_string())],
            &["rviz2", "gridmap.rviz"],
        );
        assert_eq!(sub.resolve(&context).unwrap(), "/opt/tuts/rviz2/gridmap.rviz");
    }
}
