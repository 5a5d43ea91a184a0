//! Render a launch description as a ROS 2 XML launch file
//!
//! Two modes: portable output keeps `$(find-pkg-share ..)` and `$(var ..)`
//! substitutions for `ros2 launch` to resolve, resolved output writes the
//! absolute paths computed against a [`LaunchContext`].

use crate::actions::{IncludeAction, LaunchAction, LaunchDescription, NodeAction, NodeParameter};
use crate::error::SubstitutionError;
use crate::substitution::{join_path, resolve_substitutions, LaunchContext, Substitution};
use std::convert::Infallible;
use std::fmt::Write as _;

/// Render with substitutions kept in XML `$(...)` syntax
pub fn to_launch_xml(description: &LaunchDescription) -> String {
    let portable = |subs: &[Substitution]| -> Result<String, Infallible> {
        Ok(substitutions_to_xml(subs))
    };
    match render(description, &portable) {
        Ok(xml) => xml,
        Err(never) => match never {},
    }
}

/// Render with every substitution resolved against `context`
pub fn to_resolved_launch_xml(
    description: &LaunchDescription,
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    render(description, &|subs: &[Substitution]| {
        resolve_substitutions(subs, context)
    })
}

type Resolver<'a, E> = dyn Fn(&[Substitution]) -> Result<String, E> + 'a;

fn render<E>(description: &LaunchDescription, value: &Resolver<'_, E>) -> Result<String, E> {
    let mut out = String::from("<?xml version=\"1.0\"?>\n<launch>\n");

    for argument in &description.arguments {
        let mut attrs = vec![("name", argument.name.clone())];
        if let Some(default) = &argument.default {
            attrs.push(("default", default.clone()));
        }
        if let Some(description) = &argument.description {
            attrs.push(("description", description.clone()));
        }
        write_empty_element(&mut out, 1, "arg", &attrs);
    }

    for action in &description.actions {
        match action {
            LaunchAction::Include(include) => write_include(&mut out, include, value)?,
            LaunchAction::Node(node) => write_node(&mut out, node, value)?,
        }
    }

    out.push_str("</launch>\n");
    Ok(out)
}

fn write_include<E>(
    out: &mut String,
    include: &IncludeAction,
    value: &Resolver<'_, E>,
) -> Result<(), E> {
    let attrs = [("file", value(&include.file)?)];
    if include.args.is_empty() {
        write_empty_element(out, 1, "include", &attrs);
        return Ok(());
    }

    write_start_element(out, 1, "include", &attrs);
    for (name, arg_value) in &include.args {
        write_empty_element(
            out,
            2,
            "arg",
            &[("name", name.clone()), ("value", value(arg_value)?)],
        );
    }
    write_end_element(out, 1, "include");
    Ok(())
}

fn write_node<E>(
    out: &mut String,
    node: &NodeAction,
    value: &Resolver<'_, E>,
) -> Result<(), E> {
    let mut attrs = vec![
        ("pkg", value(&node.package)?),
        ("exec", value(&node.executable)?),
    ];
    if let Some(name) = &node.name {
        attrs.push(("name", value(name)?));
    }
    if let Some(output) = &node.output {
        attrs.push(("output", output.clone()));
    }
    if !node.arguments.is_empty() {
        let args = node
            .arguments
            .iter()
            .map(|a| Ok(argument_token(a, value(a)?)))
            .collect::<Result<Vec<_>, E>>()?;
        attrs.push(("args", args.join(" ")));
    }

    if node.parameters.is_empty() {
        write_empty_element(out, 1, "node", &attrs);
        return Ok(());
    }

    write_start_element(out, 1, "node", &attrs);
    for entry in &node.parameters {
        match entry {
            NodeParameter::File(file) => {
                write_empty_element(out, 2, "param", &[("from", value(file)?)]);
            }
            NodeParameter::Inline(block) => {
                for p in block {
                    write_empty_element(
                        out,
                        2,
                        "param",
                        &[("name", p.name.clone()), ("value", value(&p.value)?)],
                    );
                }
            }
        }
    }
    write_end_element(out, 1, "node");
    Ok(())
}

/// The `args` attribute is split on whitespace, so an argument whose value
/// contains whitespace is written in `$(...)` form when that form has none
fn argument_token(subs: &[Substitution], rendered: String) -> String {
    if !rendered.contains(char::is_whitespace) {
        return rendered;
    }
    let portable = substitutions_to_xml(subs);
    if portable.contains(char::is_whitespace) {
        log::warn!(
            "Node argument '{}' contains whitespace and will be split by the launch frontend",
            rendered
        );
        return rendered;
    }
    log::debug!("Writing argument '{}' as '{}'", rendered, portable);
    portable
}

/// Substitutions in XML launch syntax
pub fn substitutions_to_xml(subs: &[Substitution]) -> String {
    subs.iter().map(substitution_to_xml).collect()
}

fn substitution_to_xml(sub: &Substitution) -> String {
    match sub {
        Substitution::Text(s) => s.clone(),
        Substitution::LaunchConfiguration(name) => format!("$(var {})", name),
        Substitution::EnvironmentVariable { name, default } => match default {
            Some(default) => format!("$(env {} {})", name, default),
            None => format!("$(env {})", name),
        },
        Substitution::FindPackageShare(package) => format!("$(find-pkg-share {})", package),
        Substitution::PathJoin(parts) => {
            let components: Vec<String> = parts.iter().map(|p| substitutions_to_xml(p)).collect();
            join_path(&components)
        }
    }
}

fn write_attrs(out: &mut String, attrs: &[(&str, String)]) {
    for (name, value) in attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
}

fn write_empty_element(out: &mut String, depth: usize, tag: &str, attrs: &[(&str, String)]) {
    indent(out, depth);
    let _ = write!(out, "<{}", tag);
    write_attrs(out, attrs);
    out.push_str("/>\n");
}

fn write_start_element(out: &mut String, depth: usize, tag: &str, attrs: &[(&str, String)]) {
    indent(out, depth);
    let _ = write!(out, "<{}", tag);
    write_attrs(out, attrs);
    out.push_str(">\n");
}

fn write_end_element(out: &mut String, depth: usize, tag: &str) {
    indent(out, depth);
    let _ = writeln!(out, "</{}>", tag);
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
