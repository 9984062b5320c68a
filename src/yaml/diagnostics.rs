//! YAML parse errors rendered as source-annotated diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Malformed YAML, pointing at the offending location in the document
#[derive(Debug, Error, Diagnostic)]
#[error("YAML syntax error in {filename}: {message}")]
#[diagnostic(code(curriculum::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    filename: String,
    message: String,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = generate_help(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            filename: filename.to_string(),
            message,
        }
    }

    /// The parser's message, without location decoration
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convert a 1-based line/column pair to a byte offset, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        match source
            .match_indices('\n')
            .nth(line - 2)
            .map(|(i, _)| i + 1)
        {
            Some(start) => start,
            None => return source.len(),
        }
    };

    let line_text = source[line_start..].split('\n').next().unwrap_or("");
    let col_offset = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());

    line_start + col_offset
}

/// Suggest a fix for common YAML mistakes in hand-edited curriculum files
fn generate_help(message: &str) -> Option<String> {
    let msg = message.to_lowercase();

    if msg.contains("tab") {
        return Some("YAML indentation must use spaces, not tabs".to_string());
    }

    if msg.contains("duplicate") {
        return Some("Each key may appear only once per mapping".to_string());
    }

    if msg.contains("mapping values are not allowed") {
        return Some(
            "Quote values that contain ': ' (common in question text and explanations)"
                .to_string(),
        );
    }

    if msg.contains("did not find expected") || msg.contains("expected block end") {
        return Some("Check indentation of nested lists such as days, procedures or questions".to_string());
    }

    if msg.contains("invalid type") {
        return Some("A field has the wrong type, e.g. text where a number or list is expected".to_string());
    }

    None
}
