//! Document trait - common interface for the root curriculum documents

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::core::validation::{Choice, ValidationError};

/// A top-level document that can be loaded from and saved to a YAML file
///
/// `Fields` is the unvalidated mapping read from disk. Converting it into
/// the document runs every field check, so a value of the implementing type
/// is always valid.
pub trait Document: Serialize + Sized {
    /// Which kind of document this is
    const KIND: DocumentKind;

    /// The raw, unvalidated form of the document
    type Fields: DeserializeOwned + 'static;

    /// Validate the raw form and build the document
    fn from_fields(fields: Self::Fields) -> Result<Self, ValidationError>;
}

/// The three kinds of curriculum documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Syllabus,
    DailyContent,
    Config,
}

impl DocumentKind {
    /// Guess the kind of a parsed YAML document from its top-level keys
    pub fn detect(value: &serde_yml::Value) -> Option<Self> {
        let mapping = value.as_mapping()?;
        let has_key = |key: &str| mapping.contains_key(key);

        if has_key("weeks") {
            Some(DocumentKind::Syllabus)
        } else if has_key("quiz") {
            Some(DocumentKind::DailyContent)
        } else if crate::core::config::CONFIG_KEYS
            .iter()
            .any(|(key, _)| has_key(key))
        {
            Some(DocumentKind::Config)
        } else {
            None
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Syllabus => write!(f, "syllabus"),
            DocumentKind::DailyContent => write!(f, "daily content"),
            DocumentKind::Config => write!(f, "config"),
        }
    }
}

/// Implementation language of a CDK lab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CdkLanguage {
    #[default]
    Typescript,
    Python,
}

impl Choice for CdkLanguage {
    const VARIANTS: &'static [Self] = &[CdkLanguage::Typescript, CdkLanguage::Python];

    fn as_str(&self) -> &'static str {
        match self {
            CdkLanguage::Typescript => "typescript",
            CdkLanguage::Python => "python",
        }
    }
}

impl std::fmt::Display for CdkLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lenient timestamp parsing for `created_at` fields
///
/// Accepts RFC 3339 and zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`, the latter
/// read as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| {
                format!(
                    "invalid timestamp '{}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS",
                    s
                )
            })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
