//! Curriculum generation settings
//!
//! Settings live in a YAML file (`config.yaml` by default). Every key is
//! optional; absent keys take the defaults documented on
//! [`CurriculumConfigFields`]. Unknown keys are ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::entity::{CdkLanguage, Document, DocumentKind};
use crate::core::loader::{self, LoadError};
use crate::core::validation::{self, Choice, ValidationError};

/// Config file read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Recognized configuration keys
pub const CONFIG_KEYS: &[(&str, &str)] = &[
    ("language", "Content language"),
    ("target_exam", "Target certification exam"),
    ("duration", "Total number of days"),
    ("free_tier_only", "Restrict labs to Free Tier resources"),
    ("default_instance_type", "Default EC2 instance type"),
    ("ec2_access_method", "How labs connect to EC2 instances"),
    ("cicd_tool", "CI/CD tool used in CDK labs"),
    ("container_tool", "Container tool used in CDK labs"),
    ("notification_tool", "Pipeline notification channel"),
    ("cdk_languages", "Supported CDK languages"),
    ("default_cdk_language", "Default CDK language"),
    ("include_architecture_diagrams", "Generate architecture diagrams"),
    ("include_quizzes", "Generate daily quizzes"),
    ("include_verification_tests", "Generate verification tests"),
    ("weak_areas", "Learner weak areas, scheduled in weeks 1-2"),
    ("output_directory", "Directory for generated content"),
    ("template_directory", "Directory holding content templates"),
];

/// Content language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
}

impl Choice for Language {
    const VARIANTS: &'static [Self] = &[Language::Ko];

    fn as_str(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
        }
    }
}

/// Free Tier eligible EC2 instance types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InstanceType {
    #[default]
    #[serde(rename = "t2.micro")]
    T2Micro,
    #[serde(rename = "t3.micro")]
    T3Micro,
}

impl Choice for InstanceType {
    const VARIANTS: &'static [Self] = &[InstanceType::T2Micro, InstanceType::T3Micro];

    fn as_str(&self) -> &'static str {
        match self {
            InstanceType::T2Micro => "t2.micro",
            InstanceType::T3Micro => "t3.micro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Ec2AccessMethod {
    #[default]
    SsmSessionManager,
    Ssh,
}

impl Choice for Ec2AccessMethod {
    const VARIANTS: &'static [Self] = &[Ec2AccessMethod::SsmSessionManager, Ec2AccessMethod::Ssh];

    fn as_str(&self) -> &'static str {
        match self {
            Ec2AccessMethod::SsmSessionManager => "ssm-session-manager",
            Ec2AccessMethod::Ssh => "ssh",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CicdTool {
    #[default]
    GithubActions,
    AwsCodepipeline,
}

impl Choice for CicdTool {
    const VARIANTS: &'static [Self] = &[CicdTool::GithubActions, CicdTool::AwsCodepipeline];

    fn as_str(&self) -> &'static str {
        match self {
            CicdTool::GithubActions => "github-actions",
            CicdTool::AwsCodepipeline => "aws-codepipeline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContainerTool {
    #[default]
    Docker,
    Podman,
}

impl Choice for ContainerTool {
    const VARIANTS: &'static [Self] = &[ContainerTool::Docker, ContainerTool::Podman];

    fn as_str(&self) -> &'static str {
        match self {
            ContainerTool::Docker => "docker",
            ContainerTool::Podman => "podman",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationTool {
    #[default]
    Slack,
    Email,
}

impl Choice for NotificationTool {
    const VARIANTS: &'static [Self] = &[NotificationTool::Slack, NotificationTool::Email];

    fn as_str(&self) -> &'static str {
        match self {
            NotificationTool::Slack => "slack",
            NotificationTool::Email => "email",
        }
    }
}

fn default_weak_areas() -> Vec<String> {
    ["Networking", "Database", "Storage", "Governance"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Unvalidated form of [`CurriculumConfig`], as read from the config file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurriculumConfigFields {
    /// Default: `ko` (the only supported language)
    pub language: Option<String>,
    /// Default: `SAA-C03`
    pub target_exam: String,
    /// Default: 30, must be at least 1
    pub duration: i64,
    /// Default: true
    pub free_tier_only: bool,
    /// `t2.micro` (default) or `t3.micro`
    pub default_instance_type: Option<String>,
    /// `ssm-session-manager` (default) or `ssh`
    pub ec2_access_method: Option<String>,
    /// `github-actions` (default) or `aws-codepipeline`
    pub cicd_tool: Option<String>,
    /// `docker` (default) or `podman`
    pub container_tool: Option<String>,
    /// `slack` (default) or `email`
    pub notification_tool: Option<String>,
    /// Subset of `typescript`, `python`; default both
    pub cdk_languages: Vec<String>,
    /// `typescript` (default) or `python`
    pub default_cdk_language: Option<String>,
    pub include_architecture_diagrams: bool,
    pub include_quizzes: bool,
    pub include_verification_tests: bool,
    /// Default: Networking, Database, Storage, Governance
    pub weak_areas: Vec<String>,
    /// Default: `output`
    pub output_directory: String,
    /// Default: `templates`
    pub template_directory: String,
}

impl Default for CurriculumConfigFields {
    fn default() -> Self {
        Self {
            language: Some(Language::default().as_str().to_string()),
            target_exam: "SAA-C03".to_string(),
            duration: 30,
            free_tier_only: true,
            default_instance_type: Some(InstanceType::default().as_str().to_string()),
            ec2_access_method: Some(Ec2AccessMethod::default().as_str().to_string()),
            cicd_tool: Some(CicdTool::default().as_str().to_string()),
            container_tool: Some(ContainerTool::default().as_str().to_string()),
            notification_tool: Some(NotificationTool::default().as_str().to_string()),
            cdk_languages: CdkLanguage::VARIANTS
                .iter()
                .map(|l| l.as_str().to_string())
                .collect(),
            default_cdk_language: Some(CdkLanguage::default().as_str().to_string()),
            include_architecture_diagrams: true,
            include_quizzes: true,
            include_verification_tests: true,
            weak_areas: default_weak_areas(),
            output_directory: "output".to_string(),
            template_directory: "templates".to_string(),
        }
    }
}

/// Validated, process-wide generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurriculumConfigFields")]
pub struct CurriculumConfig {
    language: Language,
    target_exam: String,
    duration: u32,
    free_tier_only: bool,
    default_instance_type: InstanceType,
    ec2_access_method: Ec2AccessMethod,
    cicd_tool: CicdTool,
    container_tool: ContainerTool,
    notification_tool: NotificationTool,
    cdk_languages: Vec<CdkLanguage>,
    default_cdk_language: CdkLanguage,
    include_architecture_diagrams: bool,
    include_quizzes: bool,
    include_verification_tests: bool,
    weak_areas: Vec<String>,
    output_directory: String,
    template_directory: String,
}

/// Validate an enumerated setting; an explicit YAML null is a missing value
fn setting<C: Choice>(field: &str, value: Option<String>) -> Result<C, ValidationError> {
    validation::choice(field, &validation::required(field, value)?)
}

impl TryFrom<CurriculumConfigFields> for CurriculumConfig {
    type Error = ValidationError;

    fn try_from(f: CurriculumConfigFields) -> Result<Self, Self::Error> {
        Ok(Self {
            language: setting("language", f.language)?,
            target_exam: f.target_exam,
            duration: validation::in_range("duration", f.duration, 1, None)?,
            free_tier_only: f.free_tier_only,
            default_instance_type: setting("default_instance_type", f.default_instance_type)?,
            ec2_access_method: setting("ec2_access_method", f.ec2_access_method)?,
            cicd_tool: setting("cicd_tool", f.cicd_tool)?,
            container_tool: setting("container_tool", f.container_tool)?,
            notification_tool: setting("notification_tool", f.notification_tool)?,
            cdk_languages: validation::each("cdk_languages", f.cdk_languages, |lang| {
                validation::choice("", &lang)
            })?,
            default_cdk_language: setting("default_cdk_language", f.default_cdk_language)?,
            include_architecture_diagrams: f.include_architecture_diagrams,
            include_quizzes: f.include_quizzes,
            include_verification_tests: f.include_verification_tests,
            weak_areas: f.weak_areas,
            output_directory: f.output_directory,
            template_directory: f.template_directory,
        })
    }
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            target_exam: "SAA-C03".to_string(),
            duration: 30,
            free_tier_only: true,
            default_instance_type: InstanceType::default(),
            ec2_access_method: Ec2AccessMethod::default(),
            cicd_tool: CicdTool::default(),
            container_tool: ContainerTool::default(),
            notification_tool: NotificationTool::default(),
            cdk_languages: CdkLanguage::VARIANTS.to_vec(),
            default_cdk_language: CdkLanguage::default(),
            include_architecture_diagrams: true,
            include_quizzes: true,
            include_verification_tests: true,
            weak_areas: default_weak_areas(),
            output_directory: "output".to_string(),
            template_directory: "templates".to_string(),
        }
    }
}

impl Document for CurriculumConfig {
    const KIND: DocumentKind = DocumentKind::Config;
    type Fields = CurriculumConfigFields;

    fn from_fields(fields: CurriculumConfigFields) -> Result<Self, ValidationError> {
        Self::try_from(fields)
    }
}

impl CurriculumConfig {
    /// Render the default configuration as YAML
    pub fn default_yaml() -> Result<String, serde_yml::Error> {
        serde_yml::to_string(&Self::default())
    }

    /// Look up a single setting by key, as a YAML value
    pub fn get(&self, key: &str) -> Option<serde_yml::Value> {
        let value = serde_yml::to_value(self).ok()?;
        value.get(key).cloned()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn target_exam(&self) -> &str {
        &self.target_exam
    }

    /// Total number of days in the curriculum
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn free_tier_only(&self) -> bool {
        self.free_tier_only
    }

    pub fn default_instance_type(&self) -> InstanceType {
        self.default_instance_type
    }

    pub fn ec2_access_method(&self) -> Ec2AccessMethod {
        self.ec2_access_method
    }

    pub fn cicd_tool(&self) -> CicdTool {
        self.cicd_tool
    }

    pub fn container_tool(&self) -> ContainerTool {
        self.container_tool
    }

    pub fn notification_tool(&self) -> NotificationTool {
        self.notification_tool
    }

    pub fn cdk_languages(&self) -> &[CdkLanguage] {
        &self.cdk_languages
    }

    pub fn default_cdk_language(&self) -> CdkLanguage {
        self.default_cdk_language
    }

    pub fn include_architecture_diagrams(&self) -> bool {
        self.include_architecture_diagrams
    }

    pub fn include_quizzes(&self) -> bool {
        self.include_quizzes
    }

    pub fn include_verification_tests(&self) -> bool {
        self.include_verification_tests
    }

    /// Topic areas to schedule first (weeks 1-2)
    pub fn weak_areas(&self) -> &[String] {
        &self.weak_areas
    }

    /// Whether a topic belongs to one of the learner's weak areas
    pub fn is_weak_area(&self, area: &str) -> bool {
        self.weak_areas.iter().any(|w| w.eq_ignore_ascii_case(area))
    }

    pub fn output_directory(&self) -> &Path {
        Path::new(&self.output_directory)
    }

    pub fn template_directory(&self) -> &Path {
        Path::new(&self.template_directory)
    }
}

/// Load the configuration file, defaulting to [`DEFAULT_CONFIG_PATH`]
///
/// A missing file, malformed YAML and an out-of-range setting are reported
/// as distinct [`LoadError`] variants.
pub fn load_config(path: Option<&Path>) -> Result<CurriculumConfig, LoadError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    let config: CurriculumConfig = loader::load_document(path)?;
    tracing::debug!(path = %path.display(), duration = config.duration, "loaded config");
    Ok(config)
}
