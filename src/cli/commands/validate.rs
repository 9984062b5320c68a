//! `curriculum validate` command - Validate curriculum documents

use clap::ValueEnum;
use console::style;
use miette::Result;
use std::path::{Path, PathBuf};

use crate::cli::GlobalOpts;
use crate::core::config::CurriculumConfig;
use crate::core::entity::DocumentKind;
use crate::core::files::read_file;
use crate::core::loader::{detect_kind, find_yaml_files, parse_document, LoadError};
use crate::entities::{DailyContent, Syllabus};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Files or directories to validate (default: current directory)
    #[arg()]
    pub paths: Vec<PathBuf>,

    /// Document kind to validate as
    #[arg(long, short = 'k', default_value = "auto")]
    pub kind: KindArg,

    /// Continue validation after first error
    #[arg(long)]
    pub keep_going: bool,

    /// Show summary only, don't show individual errors
    #[arg(long)]
    pub summary: bool,
}

/// Document kind selector for `--kind`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindArg {
    /// Detect from the document's top-level keys
    #[default]
    Auto,
    Syllabus,
    Daily,
    Config,
}

impl KindArg {
    fn document_kind(self) -> Option<DocumentKind> {
        match self {
            KindArg::Auto => None,
            KindArg::Syllabus => Some(DocumentKind::Syllabus),
            KindArg::Daily => Some(DocumentKind::DailyContent),
            KindArg::Config => Some(DocumentKind::Config),
        }
    }
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    files_checked: usize,
    files_passed: usize,
    files_failed: usize,
    files_skipped: usize,
}

/// Outcome of checking one file
enum FileOutcome {
    Passed(DocumentKind),
    Skipped,
    Failed(LoadError),
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    let files = expand_paths(&roots)?;
    let show_details = !args.summary && !global.quiet;

    if show_details {
        println!(
            "{} Validating {} file(s)...\n",
            style("→").blue(),
            files.len()
        );
    }

    let mut stats = ValidationStats::default();

    for path in &files {
        match check_file(path, args.kind.document_kind()) {
            FileOutcome::Passed(kind) => {
                stats.files_checked += 1;
                stats.files_passed += 1;
                if show_details {
                    println!(
                        "{} {} {}",
                        style("✓").green(),
                        path.display(),
                        style(format!("({})", kind)).dim()
                    );
                }
            }
            FileOutcome::Skipped => {
                stats.files_skipped += 1;
                if show_details {
                    println!(
                        "{} {} - unknown document kind (skipped)",
                        style("?").yellow(),
                        path.display()
                    );
                }
            }
            FileOutcome::Failed(err) => {
                stats.files_checked += 1;
                stats.files_failed += 1;
                tracing::warn!(path = %path.display(), error = %err, "validation failed");

                if show_details {
                    println!("{} {}", style("✗").red(), path.display());
                    if let Some(source) = err.validation_error() {
                        println!("    {}", style(source).red());
                    } else {
                        println!("{:?}", miette::Report::new(err));
                    }
                }

                if !args.keep_going {
                    break;
                }
            }
        }
    }

    if !global.quiet {
        print_summary(&stats);
    }

    if stats.files_failed > 0 {
        return Err(miette::miette!(
            "{} file(s) failed validation",
            stats.files_failed
        ));
    }

    Ok(())
}

/// Expand directories into the YAML files they contain
fn expand_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(find_yaml_files(path)?);
        } else {
            files.push(path.clone());
        }
    }
    Ok(files)
}

fn check_file(path: &Path, kind: Option<DocumentKind>) -> FileOutcome {
    let filename = path.display().to_string();
    let content = match read_file(path) {
        Ok(c) => c,
        Err(e) => return FileOutcome::Failed(e.into()),
    };

    let kind = match kind {
        Some(kind) => kind,
        None => match detect_kind(&content, &filename) {
            Ok(Some(kind)) => kind,
            Ok(None) => return FileOutcome::Skipped,
            Err(e) => return FileOutcome::Failed(e),
        },
    };

    match validate_as(kind, &content, &filename) {
        Ok(()) => FileOutcome::Passed(kind),
        Err(e) => FileOutcome::Failed(e),
    }
}

fn validate_as(kind: DocumentKind, content: &str, filename: &str) -> Result<(), LoadError> {
    match kind {
        DocumentKind::Syllabus => parse_document::<Syllabus>(content, filename).map(drop),
        DocumentKind::DailyContent => parse_document::<DailyContent>(content, filename).map(drop),
        DocumentKind::Config => parse_document::<CurriculumConfig>(content, filename).map(drop),
    }
}

fn print_summary(stats: &ValidationStats) {
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!("  Files checked:  {}", style(stats.files_checked).cyan());
    println!("  Files passed:   {}", style(stats.files_passed).green());
    println!("  Files failed:   {}", style(stats.files_failed).red());
    if stats.files_skipped > 0 {
        println!("  Files skipped:  {}", style(stats.files_skipped).yellow());
    }
    println!();

    if stats.files_failed == 0 {
        println!("{} All files passed validation!", style("✓").green().bold());
    } else {
        println!("{} Validation failed", style("✗").red().bold());
    }
}
