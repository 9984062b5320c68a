//! `curriculum init` command - Write a default configuration file

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::config::{CurriculumConfig, DEFAULT_CONFIG_PATH};
use crate::core::files::{ensure_directory, write_file};

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Directory to initialize (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing config.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, global: &GlobalOpts) -> Result<()> {
    let dir = ensure_directory(&args.path)?;
    let config_path = dir.join(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !args.force {
        return Err(miette::miette!(
            help = "use --force to overwrite it",
            "{} already exists",
            config_path.display()
        ));
    }

    let yaml = CurriculumConfig::default_yaml().into_diagnostic()?;
    write_file(&config_path, &yaml)?;

    if !global.quiet {
        println!(
            "{} Wrote default configuration to {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        println!();
        println!("Next steps:");
        println!("  1. Edit {} to match your study plan", DEFAULT_CONFIG_PATH);
        println!("  2. Check it with: {}", style("curriculum config show").yellow());
    }

    Ok(())
}
