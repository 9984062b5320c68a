//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, config::ConfigCommands, init::InitArgs,
    syllabus::SyllabusCommands, validate::ValidateArgs,
};
use crate::core::config::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "curriculum")]
#[command(author, version, about = "AWS certification curriculum toolkit")]
#[command(long_about = "Check and inspect the YAML documents of a 30-day AWS certification curriculum: the syllabus, each day's lesson content and the generation settings.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(long, global = true, env = "CURRICULUM_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config.yaml
    Init(InitArgs),

    /// Validate curriculum documents
    Validate(ValidateArgs),

    /// Inspect the generation settings
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Inspect a syllabus
    #[command(subcommand)]
    Syllabus(SyllabusCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// JSON format (for programming)
    Json,
}
