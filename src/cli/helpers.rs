//! Shared helper functions for CLI commands

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::loader::LoadError;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Render a value as YAML or JSON
///
/// `Auto` renders YAML; callers with a human-readable view handle `Auto`
/// themselves before getting here.
pub fn render_serialized<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).into_diagnostic(),
        OutputFormat::Yaml | OutputFormat::Auto => serde_yml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .into_diagnostic(),
    }
}

/// Turn a load error into a report, logging validation failures
pub fn load_failure(err: LoadError) -> miette::Report {
    if let Some(source) = err.validation_error() {
        tracing::warn!(field = source.field(), "{}", source);
    }
    miette::Report::new(err)
}
