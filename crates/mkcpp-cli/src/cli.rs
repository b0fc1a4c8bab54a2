//! Flag registration and the single scaffold "command".
//!
//! This module is the only place that knows flag names, the usage text, and
//! how parsed flags map onto a [`ProjectConfig`]. No filesystem logic lives
//! here.

use std::path::Path;

use tracing::{debug, instrument};

use mkcpp_adapters::LocalFilesystem;
use mkcpp_core::{
    application::ScaffoldService,
    domain::{BinaryName, ProjectConfig},
    flags::{FlagSet, Invocation, handle_args},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Usage text, printed verbatim for `-h/--help` and empty invocations.
pub const USAGE: &str = "Usage:\n\tmkcpp <project_name> [flags]\n\nFlags:\n\t-h, --help\t\t\t: Outputs this message.\n\t-n, --name=<name>\t\t: Sets the project binary's name.\n\t-d, --description=<desc>\t: Sets the project's description\n\t-v, --version=<ver>\t\t: Sets the project version.\n\t-s, --shared\t\t\t: Makes the project a shared library.\n";

/// Values collected from flags before defaults are applied.
///
/// This is the handler context: every flag handler mutates exactly this
/// struct, nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub shared: bool,
}

/// Register the four project flags. `help` is added by the parser itself.
///
/// Valued flags ignore a missing value rather than erroring: `--name`
/// without `=<value>` leaves the override untouched.
pub fn build_flag_set() -> FlagSet<FlagOverrides> {
    let mut set = FlagSet::new();
    set.register("n", "name", |ctx: &mut FlagOverrides, value| {
        if let Some(v) = value {
            ctx.name = Some(v.to_string());
        }
    });
    set.register("s", "shared", |ctx: &mut FlagOverrides, _value| {
        ctx.shared = true;
    });
    set.register("v", "version", |ctx: &mut FlagOverrides, value| {
        if let Some(v) = value {
            ctx.version = Some(v.to_string());
        }
    });
    set.register("d", "description", |ctx: &mut FlagOverrides, value| {
        if let Some(v) = value {
            ctx.description = Some(v.to_string());
        }
    });
    set
}

/// Merge flag overrides with configuration defaults into a resolved
/// [`ProjectConfig`]. Precedence: flag, then config file/env, then built-in.
pub fn resolve(
    project_name: String,
    overrides: FlagOverrides,
    app_config: &AppConfig,
) -> ProjectConfig {
    let mut config = ProjectConfig::new(project_name);

    if let Some(name) = overrides.name {
        config.name = BinaryName::Explicit(name);
    }
    if let Some(version) = overrides.version.or_else(|| app_config.defaults.version.clone()) {
        config.version = version;
    }
    config.description = overrides
        .description
        .or_else(|| app_config.defaults.description.clone());
    config.shared = overrides.shared;

    config
}

/// Parse the argument list and scaffold when a project name was given.
#[instrument(skip_all)]
pub fn run(args: &[String], app_config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let mut set = build_flag_set();
    let mut overrides = FlagOverrides::default();

    let project_name = match handle_args(args, &mut set, &mut overrides, USAGE) {
        // Usage was printed, or a leading-dash first argument was handled
        // as a flag; either way the run ends successfully here.
        Invocation::UsageRequested | Invocation::FlagOnly => return Ok(()),
        Invocation::Run { project_name } => project_name,
    };

    let config = resolve(project_name, overrides, app_config);
    debug!(?config, "configuration resolved");

    let cwd = std::env::current_dir().map_err(|e| CliError::CurrentDir { source: e })?;

    show_summary(&config, &cwd, output)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    service.scaffold(&config, &cwd)?;

    output.success(&format!("Project '{}' created!", config.project_name))?;
    Ok(())
}

/// Print the project summary the way the tool always has, directory
/// included, before anything touches the disk.
fn show_summary(config: &ProjectConfig, cwd: &Path, output: &OutputManager) -> CliResult<()> {
    output.header("Project Information:")?;
    output.print(&format!("\tName: {}", config.binary_name()))?;
    output.print(&format!("\tVersion: {}", config.version))?;
    if let Some(description) = &config.description {
        output.print(&format!("\tDescription: {description}"))?;
    }
    output.print(&format!("\tShared: {}", config.shared))?;
    output.print(&format!(
        "\tDirectory: {}",
        cwd.join(&config.project_name).display()
    ))?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
