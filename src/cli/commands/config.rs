//! `curriculum config` command - Inspect the generation settings

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::{load_failure, render_serialized};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::config::{load_config, CurriculumConfig, CONFIG_KEYS};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show(ShowArgs),

    /// List all recognized configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show a single key
    pub key: Option<String>,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Keys => run_keys(global),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(Some(&global.config)).map_err(load_failure)?;

    if let Some(key) = &args.key {
        let value = config.get(key).ok_or_else(|| {
            miette::miette!(
                help = "run 'curriculum config keys' to list recognized keys",
                "Unknown configuration key '{}'",
                key
            )
        })?;
        match global.format {
            OutputFormat::Auto => println!("{}", format_value(&value)),
            format => println!("{}", render_serialized(&value, format)?),
        }
        return Ok(());
    }

    if global.format != OutputFormat::Auto {
        println!("{}", render_serialized(&config, global.format)?);
        return Ok(());
    }

    if !global.quiet {
        println!(
            "{} {}",
            style("Effective Configuration").bold().underlined(),
            style(format!("({})", global.config.display())).dim()
        );
        println!();
    }
    for (key, _) in CONFIG_KEYS {
        print_config_value(key, config.get(key).as_ref());
    }

    Ok(())
}

fn run_keys(global: &GlobalOpts) -> Result<()> {
    let defaults = CurriculumConfig::default();

    if !global.quiet {
        println!("{}", style("Available configuration keys:").bold());
        println!();
    }

    for (key, description) in CONFIG_KEYS {
        let default = defaults
            .get(key)
            .map(|v| format_value(&v))
            .unwrap_or_default();
        println!(
            "  {:<32} {} {}",
            style(key).cyan(),
            style(description).dim(),
            style(format!("[default: {}]", default)).yellow()
        );
    }

    Ok(())
}

/// Render a setting on one line
///
/// Scalars print bare, lists as comma-separated values.
fn format_value(value: &serde_yml::Value) -> String {
    match value {
        serde_yml::Value::String(s) => s.clone(),
        serde_yml::Value::Bool(b) => b.to_string(),
        serde_yml::Value::Number(n) => n.to_string(),
        serde_yml::Value::Sequence(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        serde_yml::Value::Null => String::new(),
        other => serde_yml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn print_config_value(key: &str, value: Option<&serde_yml::Value>) {
    match value {
        Some(v) => println!("  {}: {}", style(key).cyan(), style(format_value(v)).yellow()),
        None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
    }
}
