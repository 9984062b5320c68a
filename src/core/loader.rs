//! Document loading and saving
//!
//! Generic helpers that read a YAML file, deserialize it into a document's
//! fields type and run validation, keeping the three ways this can fail
//! (missing file, malformed YAML, constraint violation) apart.

use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::entity::{Document, DocumentKind};
use crate::core::files::{self, FileError};
use crate::core::validation::ValidationError;
use crate::yaml::YamlSyntaxError;

/// Errors from loading or saving a document
#[derive(Debug, Error, Diagnostic)]
pub enum LoadError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] YamlSyntaxError),

    #[error("{filename} is empty (expected a {kind} document)")]
    #[diagnostic(code(curriculum::load::empty))]
    Empty { filename: String, kind: DocumentKind },

    #[error("Invalid {kind} document {filename}")]
    #[diagnostic(code(curriculum::load::invalid))]
    Invalid {
        filename: String,
        kind: DocumentKind,
        #[source]
        source: ValidationError,
    },

    #[error("Failed to serialize {kind} document: {message}")]
    #[diagnostic(code(curriculum::load::serialize))]
    Serialize { kind: DocumentKind, message: String },
}

impl LoadError {
    /// Whether the document file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::File(FileError::NotFound { .. }))
    }

    /// The constraint violation, when the document parsed but was invalid
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            LoadError::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// True when the text holds nothing but blank lines and comments
fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

fn parse_value(content: &str, filename: &str) -> Result<serde_yml::Value, LoadError> {
    serde_yml::from_str(content)
        .map_err(|e| LoadError::Parse(YamlSyntaxError::from_serde_error(&e, content, filename)))
}

/// Parse and validate a document from YAML text
///
/// `filename` is only used for error reporting.
pub fn parse_document<D: Document>(content: &str, filename: &str) -> Result<D, LoadError> {
    let empty = || LoadError::Empty {
        filename: filename.to_string(),
        kind: D::KIND,
    };

    if is_blank_document(content) {
        return Err(empty());
    }
    if parse_value(content, filename)?.is_null() {
        return Err(empty());
    }

    let fields: D::Fields = serde_yml::from_str(content)
        .map_err(|e| LoadError::Parse(YamlSyntaxError::from_serde_error(&e, content, filename)))?;

    D::from_fields(fields).map_err(|source| {
        tracing::debug!(file = filename, kind = %D::KIND, error = %source, "validation failed");
        LoadError::Invalid {
            filename: filename.to_string(),
            kind: D::KIND,
            source,
        }
    })
}

/// Read, parse and validate a document file
pub fn load_document<D: Document>(path: &Path) -> Result<D, LoadError> {
    let content = files::read_file(path)?;
    let doc = parse_document(&content, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), kind = %D::KIND, "loaded document");
    Ok(doc)
}

/// Serialize a document to YAML and write it, creating parent directories
pub fn save_document<D: Document>(doc: &D, path: &Path) -> Result<(), LoadError> {
    let yaml = serde_yml::to_string(doc).map_err(|e| LoadError::Serialize {
        kind: D::KIND,
        message: e.to_string(),
    })?;
    files::write_file(path, &yaml)?;
    Ok(())
}

/// Guess which kind of document a YAML text holds
pub fn detect_kind(content: &str, filename: &str) -> Result<Option<DocumentKind>, LoadError> {
    if is_blank_document(content) {
        return Ok(None);
    }
    Ok(DocumentKind::detect(&parse_value(content, filename)?))
}

/// Whether a path has a YAML extension
pub fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e == "yaml" || e == "yml")
}

/// Find every YAML file under `dir`, recursively, in file-name order
///
/// A missing directory yields no files.
pub fn find_yaml_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let mut paths = Vec::new();

    if !dir.exists() {
        return Ok(paths);
    }

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| FileError::Io {
            path: dir.to_path_buf(),
            source: e.into(),
        })?;
        if entry.file_type().is_file() && is_yaml_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}

/// Load every YAML document under `dir`
///
/// Each file is paired with its own result, so one invalid file does not
/// hide the others.
pub fn load_all<D: Document>(dir: &Path) -> Result<Vec<(PathBuf, Result<D, LoadError>)>, LoadError> {
    Ok(find_yaml_files(dir)?
        .into_iter()
        .map(|path| {
            let result = load_document(&path);
            (path, result)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::files::write_file;
    use crate::entities::{DailyContent, Syllabus};
    use tempfile::tempdir;

    const DAILY: &str = r#"
metadata:
  day_number: 5
  week_number: 2
  global_day_number: 12
  topic: Amazon RDS
  created_at: "2024-03-01T09:30:00Z"
overview:
  description: Managed relational databases
  learning_objectives:
    - Launch a Multi-AZ instance
scenario:
  context: "An e-commerce site needs a resilient database: downtime costs sales"
cdk_lab:
  language: python
  security_group_rules:
    - port: 3306
      description: MySQL from app tier
quiz:
  questions:
    - question_number: 1
      question_text: Which feature provides synchronous standby replication?
      options: [Read replica, Multi-AZ, Snapshot, Aurora Serverless]
      correct_answer: B
      explanation: Multi-AZ keeps a synchronous standby.
    - question_number: 2
      question_text: q2
      options: [a, b, c, d]
      correct_answer: A
      explanation: e2
    - question_number: 3
      question_text: q3
      options: [a, b, c, d]
      correct_answer: C
      explanation: e3
    - question_number: 4
      question_text: q4
      options: [a, b, c, d]
      correct_answer: D
      explanation: e4
    - question_number: 5
      question_text: q5
      options: [a, b, c, d]
      correct_answer: A
      explanation: e5
"#;

    #[test]
    fn test_parse_daily_content() {
        let content: DailyContent = parse_document(DAILY, "day12.yaml").unwrap();

        assert_eq!(content.metadata().global_day_number(), 12);
        assert_eq!(content.quiz().questions().len(), 5);
        assert_eq!(content.quiz().questions()[0].correct_option(), "Multi-AZ");
        assert_eq!(content.cdk_lab().security_group_rules()[0].port(), 3306);
        assert_eq!(content.cdk_lab().security_group_rules()[0].protocol(), "tcp");
        assert_eq!(content.console_lab().estimated_time(), 60);
    }

    #[test]
    fn test_parse_reports_nested_validation_path() {
        let bad = DAILY.replace("correct_answer: D", "correct_answer: E");
        let err = parse_document::<DailyContent>(&bad, "day12.yaml").unwrap_err();

        let source = err.validation_error().unwrap();
        assert!(matches!(source, ValidationError::InvalidChoice { .. }));
        assert_eq!(source.field(), "quiz.questions[3].correct_answer");
    }

    #[test]
    fn test_parse_wrong_question_count() {
        let start = DAILY.find("    - question_number: 5").unwrap();
        let four = &DAILY[..start];
        let err = parse_document::<DailyContent>(four, "day12.yaml").unwrap_err();
        assert!(matches!(
            err.validation_error(),
            Some(ValidationError::Cardinality { expected: 5, actual: 4, .. })
        ));
    }

    #[test]
    fn test_parse_null_text_is_missing() {
        let syllabus = "weeks:\n  - week_number: 1\n    theme: Basics\n    description: Intro\n    days:\n      - day_number: 1\n        global_day_number: 1\n        topic: ~\n";
        let err = parse_document::<Syllabus>(syllabus, "syllabus.yaml").unwrap_err();
        assert_eq!(
            err.validation_error(),
            Some(&ValidationError::RequiredField {
                field: "weeks[0].days[0].topic".to_string()
            })
        );

        let cases = [
            ("topic: Amazon RDS", "topic: null", "metadata.topic"),
            (
                "description: Managed relational databases",
                "description: ~",
                "overview.description",
            ),
            (
                "question_text: Which feature provides synchronous standby replication?",
                "question_text: null",
                "quiz.questions[0].question_text",
            ),
            ("explanation: e2", "explanation: ~", "quiz.questions[1].explanation"),
        ];
        for (from, to, field) in cases {
            let daily = DAILY.replacen(from, to, 1);
            let err = parse_document::<DailyContent>(&daily, "day12.yaml").unwrap_err();
            assert_eq!(
                err.validation_error(),
                Some(&ValidationError::RequiredField {
                    field: field.to_string()
                }),
                "{}",
                to
            );
        }
    }

    #[test]
    fn test_parse_empty_document() {
        for text in ["", "\n\n", "# nothing here\n", "---\n", "~\n"] {
            let err = parse_document::<Syllabus>(text, "empty.yaml").unwrap_err();
            assert!(matches!(err, LoadError::Empty { .. }), "input {:?}", text);
        }
    }

    #[test]
    fn test_parse_malformed_yaml() {
        let err = parse_document::<Syllabus>("weeks: [\n  - {", "bad.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_wrong_type_is_parse_error() {
        let err = parse_document::<Syllabus>("weeks: 12\n", "bad.yaml").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output/week2/day12.yaml");

        let content: DailyContent = parse_document(DAILY, "day12.yaml").unwrap();
        save_document(&content, &path).unwrap();

        let loaded: DailyContent = load_document(&path).unwrap();
        assert_eq!(content, loaded);
    }

    #[test]
    fn test_load_missing_document() {
        let dir = tempdir().unwrap();
        let err = load_document::<DailyContent>(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_detect_kind() {
        assert_eq!(
            detect_kind(DAILY, "day.yaml").unwrap(),
            Some(DocumentKind::DailyContent)
        );
        assert_eq!(
            detect_kind("weeks: []\n", "s.yaml").unwrap(),
            Some(DocumentKind::Syllabus)
        );
        assert_eq!(detect_kind("# empty\n", "e.yaml").unwrap(), None);
    }

    #[test]
    fn test_load_all() {
        let dir = tempdir().unwrap();
        write_file(dir.path().join("week1/day01.yaml"), DAILY).unwrap();
        write_file(dir.path().join("week1/day02.yml"), "metadata: {}\nquiz: {}\n").unwrap();
        write_file(dir.path().join("week1/notes.md"), "# not yaml").unwrap();

        let results = load_all::<DailyContent>(dir.path()).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].0.ends_with("day01.yaml"));
        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(LoadError::Invalid { .. })));
    }

    #[test]
    fn test_load_all_nonexistent_dir() {
        let results = load_all::<Syllabus>(Path::new("/nonexistent/path")).unwrap();
        assert!(results.is_empty());
    }
}
