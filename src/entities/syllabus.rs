//! Syllabus entity types - the 30-day curriculum outline
//!
//! A [`Syllabus`] holds up to four [`Week`]s, each listing the
//! [`DayOverview`]s taught that week. Days carry both their position within
//! the week (1-7) and their position in the whole curriculum (1-30).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{timestamp, Document, DocumentKind};
use crate::core::validation::{self, Choice, ValidationError};

/// Difficulty level of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Choice for Difficulty {
    const VARIANTS: &'static [Self] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// DayOverview
// ============================================================================

/// Unvalidated form of a [`DayOverview`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DayOverviewFields {
    pub day_number: Option<i64>,
    pub global_day_number: Option<i64>,
    pub topic: Option<String>,
    pub aws_services: Vec<String>,
    pub difficulty: String,
    pub estimated_hours: i64,
}

impl Default for DayOverviewFields {
    fn default() -> Self {
        Self {
            day_number: None,
            global_day_number: None,
            topic: None,
            aws_services: Vec::new(),
            difficulty: Difficulty::default().as_str().to_string(),
            estimated_hours: 4,
        }
    }
}

impl DayOverviewFields {
    /// Fields for a day with the given numbering and topic, all else default
    pub fn new(day_number: i64, global_day_number: i64, topic: impl Into<String>) -> Self {
        Self {
            day_number: Some(day_number),
            global_day_number: Some(global_day_number),
            topic: Some(topic.into()),
            ..Self::default()
        }
    }
}

/// Outline of a single day within a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DayOverviewFields")]
pub struct DayOverview {
    day_number: u8,
    global_day_number: u8,
    topic: String,
    aws_services: Vec<String>,
    difficulty: Difficulty,
    estimated_hours: u8,
}

impl TryFrom<DayOverviewFields> for DayOverview {
    type Error = ValidationError;

    fn try_from(f: DayOverviewFields) -> Result<Self, Self::Error> {
        let day_number = validation::required("day_number", f.day_number)?;
        let global_day_number = validation::required("global_day_number", f.global_day_number)?;

        Ok(Self {
            day_number: validation::in_range("day_number", day_number, 1, Some(7))?,
            global_day_number: validation::in_range(
                "global_day_number",
                global_day_number,
                1,
                Some(30),
            )?,
            topic: validation::required_text("topic", f.topic)?,
            aws_services: f.aws_services,
            difficulty: validation::choice("difficulty", &f.difficulty)?,
            estimated_hours: validation::in_range("estimated_hours", f.estimated_hours, 1, Some(8))?,
        })
    }
}

impl DayOverview {
    /// Day within the week (1-7)
    pub fn day_number(&self) -> u8 {
        self.day_number
    }

    /// Day within the whole curriculum (1-30)
    pub fn global_day_number(&self) -> u8 {
        self.global_day_number
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn aws_services(&self) -> &[String] {
        &self.aws_services
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn estimated_hours(&self) -> u8 {
        self.estimated_hours
    }
}

// ============================================================================
// Week
// ============================================================================

/// Unvalidated form of a [`Week`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WeekFields {
    pub week_number: Option<i64>,
    pub theme: Option<String>,
    pub description: Option<String>,
    pub days: Vec<DayOverviewFields>,
}

/// One week of the curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeekFields")]
pub struct Week {
    week_number: u8,
    theme: String,
    description: String,
    days: Vec<DayOverview>,
}

impl TryFrom<WeekFields> for Week {
    type Error = ValidationError;

    fn try_from(f: WeekFields) -> Result<Self, Self::Error> {
        let week_number = validation::required("week_number", f.week_number)?;

        Ok(Self {
            week_number: validation::in_range("week_number", week_number, 1, Some(4))?,
            theme: validation::required_text("theme", f.theme)?,
            description: validation::required_text("description", f.description)?,
            days: validation::each("days", f.days, DayOverview::try_from)?,
        })
    }
}

impl Week {
    pub fn week_number(&self) -> u8 {
        self.week_number
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Days in teaching order
    pub fn days(&self) -> &[DayOverview] {
        &self.days
    }

    /// Sum of estimated study hours for the week
    pub fn total_hours(&self) -> u32 {
        self.days.iter().map(|d| u32::from(d.estimated_hours)).sum()
    }
}

// ============================================================================
// Syllabus
// ============================================================================

/// Unvalidated form of [`SyllabusMetadata`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyllabusMetadataFields {
    pub version: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    pub target_exam: String,
    pub total_days: i64,
    pub language: String,
}

impl Default for SyllabusMetadataFields {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            created_at: None,
            target_exam: "SAA-C03".to_string(),
            total_days: 30,
            language: "ko".to_string(),
        }
    }
}

/// Descriptive information about a syllabus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SyllabusMetadataFields")]
pub struct SyllabusMetadata {
    version: String,
    created_at: DateTime<Utc>,
    target_exam: String,
    total_days: u32,
    language: String,
}

impl TryFrom<SyllabusMetadataFields> for SyllabusMetadata {
    type Error = ValidationError;

    fn try_from(f: SyllabusMetadataFields) -> Result<Self, Self::Error> {
        Ok(Self {
            version: f.version,
            created_at: f.created_at.unwrap_or_else(Utc::now),
            target_exam: f.target_exam,
            total_days: validation::in_range("total_days", f.total_days, 1, None)?,
            language: f.language,
        })
    }
}

impl SyllabusMetadata {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn target_exam(&self) -> &str {
        &self.target_exam
    }

    /// Planned length of the curriculum, as declared by its author
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Unvalidated form of a [`Syllabus`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SyllabusFields {
    pub metadata: SyllabusMetadataFields,
    pub weeks: Vec<WeekFields>,
}

/// The complete curriculum outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SyllabusFields")]
pub struct Syllabus {
    metadata: SyllabusMetadata,
    weeks: Vec<Week>,
}

impl TryFrom<SyllabusFields> for Syllabus {
    type Error = ValidationError;

    fn try_from(f: SyllabusFields) -> Result<Self, Self::Error> {
        Ok(Self {
            metadata: SyllabusMetadata::try_from(f.metadata).map_err(|e| e.within("metadata"))?,
            weeks: validation::each("weeks", f.weeks, Week::try_from)?,
        })
    }
}

impl Document for Syllabus {
    const KIND: DocumentKind = DocumentKind::Syllabus;
    type Fields = SyllabusFields;

    fn from_fields(fields: SyllabusFields) -> Result<Self, ValidationError> {
        Self::try_from(fields)
    }
}

impl Syllabus {
    pub fn metadata(&self) -> &SyllabusMetadata {
        &self.metadata
    }

    /// Weeks in teaching order
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Every day of the syllabus, week by week
    pub fn days(&self) -> impl Iterator<Item = &DayOverview> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    /// Find a day by its curriculum-wide number
    ///
    /// Scans weeks then days in order and returns the first match.
    pub fn get_day_by_global_number(&self, global_day_number: u8) -> Option<&DayOverview> {
        self.days()
            .find(|d| d.global_day_number == global_day_number)
    }

    /// Find a week by its number
    pub fn get_week(&self, week_number: u8) -> Option<&Week> {
        self.weeks.iter().find(|w| w.week_number == week_number)
    }

    /// Number of days actually listed across all weeks
    pub fn get_total_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(week_number: i64, days: Vec<DayOverviewFields>) -> WeekFields {
        WeekFields {
            week_number: Some(week_number),
            theme: Some(format!("Week {}", week_number)),
            description: Some("Test week".to_string()),
            days,
        }
    }

    #[test]
    fn test_day_overview_creation() {
        let day = DayOverview::try_from(DayOverviewFields {
            aws_services: vec!["VPC".to_string(), "EC2".to_string()],
            difficulty: "intermediate".to_string(),
            estimated_hours: 6,
            ..DayOverviewFields::new(1, 1, "Cloud Operations Foundation & VPC")
        })
        .unwrap();

        assert_eq!(day.day_number(), 1);
        assert_eq!(day.global_day_number(), 1);
        assert_eq!(day.topic(), "Cloud Operations Foundation & VPC");
        assert_eq!(day.aws_services().len(), 2);
        assert_eq!(day.difficulty(), Difficulty::Intermediate);
        assert_eq!(day.estimated_hours(), 6);
    }

    #[test]
    fn test_day_overview_defaults() {
        let day = DayOverview::try_from(DayOverviewFields::new(3, 10, "S3")).unwrap();
        assert_eq!(day.difficulty(), Difficulty::Beginner);
        assert_eq!(day.estimated_hours(), 4);
        assert!(day.aws_services().is_empty());
    }

    #[test]
    fn test_day_number_bounds() {
        for n in [1, 7] {
            assert!(DayOverview::try_from(DayOverviewFields::new(n, 1, "t")).is_ok());
        }
        for n in [0, 8, -1, 100] {
            let err = DayOverview::try_from(DayOverviewFields::new(n, 1, "t")).unwrap_err();
            assert!(matches!(err, ValidationError::Range { .. }));
            assert_eq!(err.field(), "day_number");
        }
    }

    #[test]
    fn test_global_day_number_bounds() {
        for n in [1, 30] {
            assert!(DayOverview::try_from(DayOverviewFields::new(1, n, "t")).is_ok());
        }
        for n in [0, 31] {
            let err = DayOverview::try_from(DayOverviewFields::new(1, n, "t")).unwrap_err();
            assert!(matches!(err, ValidationError::Range { .. }));
            assert_eq!(err.field(), "global_day_number");
        }
    }

    #[test]
    fn test_estimated_hours_bounds() {
        let mut fields = DayOverviewFields::new(1, 1, "t");
        fields.estimated_hours = 9;
        assert!(matches!(
            DayOverview::try_from(fields),
            Err(ValidationError::Range { .. })
        ));
    }

    #[test]
    fn test_day_requires_topic_and_numbers() {
        let err = DayOverview::try_from(DayOverviewFields::new(1, 1, "")).unwrap_err();
        assert!(matches!(err, ValidationError::RequiredField { .. }));

        let err = DayOverview::try_from(DayOverviewFields {
            topic: Some("t".to_string()),
            ..DayOverviewFields::default()
        })
        .unwrap_err();
        assert_eq!(err.field(), "day_number");
    }

    #[test]
    fn test_invalid_difficulty() {
        let fields = DayOverviewFields {
            difficulty: "expert".to_string(),
            ..DayOverviewFields::new(1, 1, "t")
        };
        let err = DayOverview::try_from(fields).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidChoice { .. }));
    }

    #[test]
    fn test_week_creation() {
        let week = Week::try_from(WeekFields {
            week_number: Some(1),
            theme: Some("Cloud Operations Foundation".to_string()),
            description: Some("Core networking".to_string()),
            days: vec![],
        })
        .unwrap();

        assert_eq!(week.week_number(), 1);
        assert_eq!(week.theme(), "Cloud Operations Foundation");
        assert!(week.days().is_empty());
    }

    #[test]
    fn test_week_number_bounds() {
        assert!(Week::try_from(week(4, vec![])).is_ok());
        let err = Week::try_from(week(5, vec![])).unwrap_err();
        assert_eq!(err.field(), "week_number");
    }

    #[test]
    fn test_week_reports_nested_day_path() {
        let days = vec![DayOverviewFields::new(1, 1, "ok"), DayOverviewFields::new(9, 2, "bad")];
        let err = Week::try_from(week(1, days)).unwrap_err();
        assert_eq!(err.field(), "days[1].day_number");
    }

    #[test]
    fn test_syllabus_defaults() {
        let syllabus = Syllabus::try_from(SyllabusFields::default()).unwrap();
        assert_eq!(syllabus.metadata().version(), "1.0.0");
        assert_eq!(syllabus.metadata().target_exam(), "SAA-C03");
        assert_eq!(syllabus.metadata().total_days(), 30);
        assert_eq!(syllabus.metadata().language(), "ko");
        assert!(syllabus.weeks().is_empty());
    }

    #[test]
    fn test_syllabus_total_days() {
        let fields = SyllabusFields {
            weeks: vec![
                week(
                    1,
                    vec![DayOverviewFields::new(1, 1, "Day 1"), DayOverviewFields::new(2, 2, "Day 2")],
                ),
                week(
                    2,
                    vec![
                        DayOverviewFields::new(1, 3, "Day 3"),
                        DayOverviewFields::new(2, 4, "Day 4"),
                        DayOverviewFields::new(3, 5, "Day 5"),
                    ],
                ),
            ],
            ..SyllabusFields::default()
        };
        let syllabus = Syllabus::try_from(fields).unwrap();
        assert_eq!(syllabus.get_total_days(), 5);

        let empty = Syllabus::try_from(SyllabusFields::default()).unwrap();
        assert_eq!(empty.get_total_days(), 0);
    }

    #[test]
    fn test_get_day_by_global_number() {
        let fields = SyllabusFields {
            weeks: vec![
                week(1, vec![DayOverviewFields::new(1, 1, "VPC")]),
                week(
                    2,
                    vec![
                        DayOverviewFields::new(1, 4, "RDS"),
                        DayOverviewFields::new(2, 5, "DynamoDB"),
                    ],
                ),
            ],
            ..SyllabusFields::default()
        };
        let syllabus = Syllabus::try_from(fields).unwrap();

        let day = syllabus.get_day_by_global_number(5).unwrap();
        assert_eq!(day.topic(), "DynamoDB");
        assert_eq!(day.day_number(), 2);

        assert!(syllabus.get_day_by_global_number(99).is_none());
        assert_eq!(syllabus.get_week(2).map(|w| w.days().len()), Some(2));
        assert!(syllabus.get_week(3).is_none());
    }

    #[test]
    fn test_get_day_returns_first_match() {
        let fields = SyllabusFields {
            weeks: vec![
                week(1, vec![DayOverviewFields::new(1, 7, "first")]),
                week(2, vec![DayOverviewFields::new(1, 7, "second")]),
            ],
            ..SyllabusFields::default()
        };
        let syllabus = Syllabus::try_from(fields).unwrap();
        assert_eq!(syllabus.get_day_by_global_number(7).unwrap().topic(), "first");
    }

    #[test]
    fn test_metadata_total_days_must_be_positive() {
        let fields = SyllabusFields {
            metadata: SyllabusMetadataFields {
                total_days: 0,
                ..SyllabusMetadataFields::default()
            },
            ..SyllabusFields::default()
        };
        let err = Syllabus::try_from(fields).unwrap_err();
        assert_eq!(err.field(), "metadata.total_days");
    }

    #[test]
    fn test_syllabus_deserialize_validates() {
        let yaml = r#"
metadata:
  created_at: "2024-01-01T00:00:00"
weeks:
  - week_number: 1
    theme: Foundation
    description: Basics
    days:
      - day_number: 1
        global_day_number: 1
        topic: VPC
        aws_services: [VPC, EC2]
"#;
        let syllabus: Syllabus = serde_yml::from_str(yaml).unwrap();
        assert_eq!(syllabus.get_total_days(), 1);
        assert_eq!(syllabus.days().next().unwrap().aws_services(), ["VPC", "EC2"]);

        let bad = yaml.replace("week_number: 1", "week_number: 7");
        assert!(serde_yml::from_str::<Syllabus>(&bad).is_err());
    }

    #[test]
    fn test_syllabus_roundtrip() {
        let fields = SyllabusFields {
            weeks: vec![week(1, vec![DayOverviewFields::new(1, 1, "VPC")])],
            ..SyllabusFields::default()
        };
        let syllabus = Syllabus::try_from(fields).unwrap();

        let yaml = serde_yml::to_string(&syllabus).unwrap();
        let parsed: Syllabus = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(syllabus, parsed);
        assert!(yaml.contains("difficulty: beginner"));
    }
}
