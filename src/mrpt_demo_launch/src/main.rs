//! mrpt_demo_launch CLI

use clap::{Parser, Subcommand};
use mrpt_demo_launch::{
    error::LaunchError, parse_launch_arg, parse_package_override, substitution::PackageIndex,
    DemoLaunch,
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    process,
};

#[derive(Parser)]
#[command(name = "mrpt_demo_launch")]
#[command(about = "Particle-filter localization demo launch (mvsim + rviz2)", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(short, long, global = true)]
    quiet: bool,

    /// Share directory override (package=directory), may be repeated
    #[arg(long = "package-dir", global = true, value_parser = parse_override)]
    package_dirs: Vec<(String, String)>,
}

#[derive(clap::Args)]
struct LaunchArgs {
    /// Launch arguments (key:=value)
    #[arg(value_parser = parse_arg)]
    args: Vec<(String, String)>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved launch description as JSON
    Describe {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the resolved launch description to record.json
    Record {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output file path (default: record.json)
        #[arg(short, long, default_value = "record.json")]
        output: PathBuf,
    },

    /// Render the launch description as an XML launch file
    Xml {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Write absolute paths instead of $(find-pkg-share ...) substitutions
        #[arg(long)]
        resolved: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that every referenced launch, parameter and config file exists
    Check {
        #[command(flatten)]
        launch: LaunchArgs,
    },
}

impl Commands {
    fn launch_args(&self) -> HashMap<String, String> {
        let launch = match self {
            Commands::Describe { launch, .. }
            | Commands::Record { launch, .. }
            | Commands::Xml { launch, .. }
            | Commands::Check { launch } => launch,
        };
        launch.args.iter().cloned().collect()
    }
}

fn parse_arg(s: &str) -> Result<(String, String), String> {
    parse_launch_arg(s).map_err(|e| e.to_string())
}

fn parse_override(s: &str) -> Result<(String, String), String> {
    parse_package_override(s).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut packages = PackageIndex::from_env();
    for (package, dir) in cli.package_dirs {
        log::debug!("Using {} for package {}", dir, package);
        packages.set_override(package, dir);
    }
    let cli_args = cli.command.launch_args();

    match run(cli.command, packages, &cli_args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but found problems
fn run(
    command: Commands,
    packages: PackageIndex,
    cli_args: &HashMap<String, String>,
) -> Result<bool, LaunchError> {
    let launch = DemoLaunch::new(packages, cli_args)?;

    match command {
        Commands::Describe { output, .. } => {
            let json = launch.record()?.to_json()?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Record { output, .. } => {
            let record = launch.record()?;
            std::fs::write(&output, record.to_json()?)?;
            log::info!("Generated record.json: {}", output.display());
        }
        Commands::Xml {
            resolved, output, ..
        } => {
            let xml = if resolved {
                launch.resolved_launch_xml()?
            } else {
                launch.launch_xml()
            };
            write_output(output.as_deref(), &xml)?;
        }
        Commands::Check { .. } => {
            let missing = launch.check()?;
            if !missing.is_empty() {
                for m in &missing {
                    eprintln!("missing {:?}: {} (referenced by {})", m.kind, m.path, m.referenced_by);
                }
                return Ok(false);
            }
            log::info!("All referenced files exist");
        }
    }

    Ok(true)
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), LaunchError> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            log::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
