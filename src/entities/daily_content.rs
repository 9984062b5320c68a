//! Daily content entity types - one day's full lesson material
//!
//! A [`DailyContent`] document bundles the day's overview, a real-world
//! scenario, key concepts, a console lab, a CDK lab, verification tests and
//! a five-question quiz.
//!
//! Sections that only carry text and lists default to empty values when
//! omitted. The metadata, overview, scenario and quiz are required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::entity::{timestamp, CdkLanguage, Document, DocumentKind};
use crate::core::validation::{self, Choice, ValidationError};

/// Number of questions in every daily quiz
pub const QUIZ_QUESTION_COUNT: usize = 5;

/// Number of answer options in every question
pub const QUESTION_OPTION_COUNT: usize = 4;

// ============================================================================
// Metadata
// ============================================================================

/// Unvalidated form of [`DailyContentMetadata`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DailyContentMetadataFields {
    pub day_number: Option<i64>,
    pub week_number: Option<i64>,
    pub global_day_number: Option<i64>,
    pub topic: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
}

impl DailyContentMetadataFields {
    pub fn new(
        day_number: i64,
        week_number: i64,
        global_day_number: i64,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            day_number: Some(day_number),
            week_number: Some(week_number),
            global_day_number: Some(global_day_number),
            topic: Some(topic.into()),
            created_at: None,
        }
    }
}

/// Where a day sits in the curriculum, and when its content was generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DailyContentMetadataFields")]
pub struct DailyContentMetadata {
    day_number: u8,
    week_number: u8,
    global_day_number: u8,
    topic: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DailyContentMetadataFields> for DailyContentMetadata {
    type Error = ValidationError;

    fn try_from(f: DailyContentMetadataFields) -> Result<Self, Self::Error> {
        let day_number = validation::required("day_number", f.day_number)?;
        let week_number = validation::required("week_number", f.week_number)?;
        let global_day_number = validation::required("global_day_number", f.global_day_number)?;

        Ok(Self {
            day_number: validation::in_range("day_number", day_number, 1, Some(7))?,
            week_number: validation::in_range("week_number", week_number, 1, Some(4))?,
            global_day_number: validation::in_range(
                "global_day_number",
                global_day_number,
                1,
                Some(30),
            )?,
            topic: validation::required_text("topic", f.topic)?,
            created_at: f.created_at.unwrap_or_else(Utc::now),
        })
    }
}

impl DailyContentMetadata {
    pub fn day_number(&self) -> u8 {
        self.day_number
    }

    pub fn week_number(&self) -> u8 {
        self.week_number
    }

    pub fn global_day_number(&self) -> u8 {
        self.global_day_number
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// ============================================================================
// Overview & Scenario
// ============================================================================

/// Unvalidated form of an [`OverviewSection`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OverviewSectionFields {
    pub description: Option<String>,
    pub learning_objectives: Vec<String>,
    pub prerequisites: Vec<String>,
}

/// What the day covers and what the learner should know beforehand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OverviewSectionFields")]
pub struct OverviewSection {
    description: String,
    learning_objectives: Vec<String>,
    prerequisites: Vec<String>,
}

impl TryFrom<OverviewSectionFields> for OverviewSection {
    type Error = ValidationError;

    fn try_from(f: OverviewSectionFields) -> Result<Self, Self::Error> {
        Ok(Self {
            description: validation::required_text("description", f.description)?,
            learning_objectives: f.learning_objectives,
            prerequisites: f.prerequisites,
        })
    }
}

impl OverviewSection {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn learning_objectives(&self) -> &[String] {
        &self.learning_objectives
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }
}

/// Unvalidated form of a [`ScenarioSection`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioSectionFields {
    pub context: Option<String>,
    pub business_requirements: Vec<String>,
    pub technical_challenges: Vec<String>,
}

/// The business situation the day's lab is built around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioSectionFields")]
pub struct ScenarioSection {
    context: String,
    business_requirements: Vec<String>,
    technical_challenges: Vec<String>,
}

impl TryFrom<ScenarioSectionFields> for ScenarioSection {
    type Error = ValidationError;

    fn try_from(f: ScenarioSectionFields) -> Result<Self, Self::Error> {
        Ok(Self {
            context: validation::required_text("context", f.context)?,
            business_requirements: f.business_requirements,
            technical_challenges: f.technical_challenges,
        })
    }
}

impl ScenarioSection {
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn business_requirements(&self) -> &[String] {
        &self.business_requirements
    }

    pub fn technical_challenges(&self) -> &[String] {
        &self.technical_challenges
    }
}

// ============================================================================
// Key Concepts
// ============================================================================

/// Unvalidated form of a [`Concept`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ConceptFields {
    pub name: Option<String>,
    pub what: Option<String>,
    pub why: Option<String>,
    pub config_rationale: String,
    pub official_docs: Vec<String>,
}

/// A service or feature explained in terms of the day's scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConceptFields")]
pub struct Concept {
    name: String,
    what: String,
    why: String,
    config_rationale: String,
    official_docs: Vec<String>,
}

impl TryFrom<ConceptFields> for Concept {
    type Error = ValidationError;

    fn try_from(f: ConceptFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required_text("name", f.name)?,
            what: validation::required_text("what", f.what)?,
            why: validation::required_text("why", f.why)?,
            config_rationale: f.config_rationale,
            official_docs: f.official_docs,
        })
    }
}

impl Concept {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Definition of the concept
    pub fn what(&self) -> &str {
        &self.what
    }

    /// Why the scenario needs it
    pub fn why(&self) -> &str {
        &self.why
    }

    /// Why the lab picks the configuration values it does
    pub fn config_rationale(&self) -> &str {
        &self.config_rationale
    }

    /// AWS documentation URLs
    pub fn official_docs(&self) -> &[String] {
        &self.official_docs
    }
}

/// Unvalidated form of a [`KeyConceptsSection`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct KeyConceptsSectionFields {
    pub concepts: Vec<ConceptFields>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "KeyConceptsSectionFields")]
pub struct KeyConceptsSection {
    concepts: Vec<Concept>,
}

impl TryFrom<KeyConceptsSectionFields> for KeyConceptsSection {
    type Error = ValidationError;

    fn try_from(f: KeyConceptsSectionFields) -> Result<Self, Self::Error> {
        Ok(Self {
            concepts: validation::each("concepts", f.concepts, Concept::try_from)?,
        })
    }
}

impl KeyConceptsSection {
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }
}

// ============================================================================
// Console Lab
// ============================================================================

/// Unvalidated form of a [`Procedure`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ProcedureFields {
    pub step_number: Option<i64>,
    pub title: Option<String>,
    pub instructions: Vec<String>,
    pub screenshots: Vec<String>,
    pub expected_outcome: String,
    pub troubleshooting: Vec<String>,
}

/// One step of the console lab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProcedureFields")]
pub struct Procedure {
    step_number: u32,
    title: String,
    instructions: Vec<String>,
    screenshots: Vec<String>,
    expected_outcome: String,
    troubleshooting: Vec<String>,
}

impl TryFrom<ProcedureFields> for Procedure {
    type Error = ValidationError;

    fn try_from(f: ProcedureFields) -> Result<Self, Self::Error> {
        let step_number = validation::required("step_number", f.step_number)?;

        Ok(Self {
            step_number: validation::in_range("step_number", step_number, 1, None)?,
            title: validation::required_text("title", f.title)?,
            instructions: f.instructions,
            screenshots: f.screenshots,
            expected_outcome: f.expected_outcome,
            troubleshooting: f.troubleshooting,
        })
    }
}

impl Procedure {
    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Screenshot references or detailed descriptions of the console
    pub fn screenshots(&self) -> &[String] {
        &self.screenshots
    }

    pub fn expected_outcome(&self) -> &str {
        &self.expected_outcome
    }

    pub fn troubleshooting(&self) -> &[String] {
        &self.troubleshooting
    }
}

/// Unvalidated form of a [`CleanupStep`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CleanupStepFields {
    pub step_number: Option<i64>,
    pub resource_type: Option<String>,
    pub deletion_order: Option<i64>,
    pub instructions: Vec<String>,
    pub verification: String,
}

/// Deletion of one lab resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CleanupStepFields")]
pub struct CleanupStep {
    step_number: u32,
    resource_type: String,
    deletion_order: u32,
    instructions: Vec<String>,
    verification: String,
}

impl TryFrom<CleanupStepFields> for CleanupStep {
    type Error = ValidationError;

    fn try_from(f: CleanupStepFields) -> Result<Self, Self::Error> {
        let step_number = validation::required("step_number", f.step_number)?;
        let step_number = validation::in_range("step_number", step_number, 1, None)?;
        let resource_type = validation::required_text("resource_type", f.resource_type)?;
        let deletion_order = validation::required("deletion_order", f.deletion_order)?;

        Ok(Self {
            step_number,
            resource_type,
            deletion_order: validation::in_range("deletion_order", deletion_order, 1, None)?,
            instructions: f.instructions,
            verification: f.verification,
        })
    }
}

impl CleanupStep {
    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Position in the teardown sequence (dependents are deleted first)
    pub fn deletion_order(&self) -> u32 {
        self.deletion_order
    }

    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    pub fn verification(&self) -> &str {
        &self.verification
    }
}

/// Unvalidated form of a [`ConsoleLabContent`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleLabContentFields {
    pub objectives: Vec<String>,
    pub procedures: Vec<ProcedureFields>,
    pub cleanup_steps: Vec<CleanupStepFields>,
    pub estimated_time: i64,
}

impl Default for ConsoleLabContentFields {
    fn default() -> Self {
        Self {
            objectives: Vec::new(),
            procedures: Vec::new(),
            cleanup_steps: Vec::new(),
            estimated_time: 60,
        }
    }
}

/// Hands-on lab performed in the AWS Management Console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConsoleLabContentFields")]
pub struct ConsoleLabContent {
    objectives: Vec<String>,
    procedures: Vec<Procedure>,
    cleanup_steps: Vec<CleanupStep>,
    estimated_time: u32,
}

impl TryFrom<ConsoleLabContentFields> for ConsoleLabContent {
    type Error = ValidationError;

    fn try_from(f: ConsoleLabContentFields) -> Result<Self, Self::Error> {
        Ok(Self {
            objectives: f.objectives,
            procedures: validation::each("procedures", f.procedures, Procedure::try_from)?,
            cleanup_steps: validation::each("cleanup_steps", f.cleanup_steps, CleanupStep::try_from)?,
            estimated_time: validation::in_range("estimated_time", f.estimated_time, 1, None)?,
        })
    }
}

impl Default for ConsoleLabContent {
    fn default() -> Self {
        Self {
            objectives: Vec::new(),
            procedures: Vec::new(),
            cleanup_steps: Vec::new(),
            estimated_time: 60,
        }
    }
}

impl ConsoleLabContent {
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn cleanup_steps(&self) -> &[CleanupStep] {
        &self.cleanup_steps
    }

    /// Cleanup steps sorted by deletion order, stable for equal orders
    pub fn cleanup_sequence(&self) -> Vec<&CleanupStep> {
        let mut steps: Vec<&CleanupStep> = self.cleanup_steps.iter().collect();
        steps.sort_by_key(|s| s.deletion_order);
        steps
    }

    /// Expected duration in minutes
    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }
}

// ============================================================================
// CDK Lab
// ============================================================================

/// Unvalidated form of a [`SecurityGroupRule`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SecurityGroupRuleFields {
    pub port: Option<i64>,
    pub protocol: String,
    pub source: String,
    pub description: String,
}

impl Default for SecurityGroupRuleFields {
    fn default() -> Self {
        Self {
            port: None,
            protocol: "tcp".to_string(),
            source: "0.0.0.0/0".to_string(),
            description: String::new(),
        }
    }
}

/// Inbound security group rule opened by the CDK stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SecurityGroupRuleFields")]
pub struct SecurityGroupRule {
    port: u16,
    protocol: String,
    source: String,
    description: String,
}

impl TryFrom<SecurityGroupRuleFields> for SecurityGroupRule {
    type Error = ValidationError;

    fn try_from(f: SecurityGroupRuleFields) -> Result<Self, Self::Error> {
        let port = validation::required("port", f.port)?;

        Ok(Self {
            port: validation::in_range("port", port, 1, Some(65535))?,
            protocol: f.protocol,
            source: f.source,
            description: f.description,
        })
    }
}

impl SecurityGroupRule {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Source CIDR block
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// CI/CD assets shipped with the CDK lab
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CiCdPipeline {
    /// GitHub Actions workflow YAML
    pub github_actions_workflow: String,
    pub dockerfile: String,
    pub slack_webhook: String,
}

/// Test sources for the CDK stack
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestContent {
    pub unit_tests: String,
    pub integration_tests: String,
    pub cdk_assertions: String,
}

/// Teardown behavior of the CDK stack's resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    pub removal_policy: String,
    pub auto_delete_objects: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            removal_policy: "DESTROY".to_string(),
            auto_delete_objects: true,
        }
    }
}

/// Unvalidated form of a [`CdkLabContent`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CdkLabContentFields {
    pub language: String,
    pub instance_type: String,
    pub security_group_rules: Vec<SecurityGroupRuleFields>,
    pub key_pair_name: String,
    pub stack_code: String,
    pub cicd_pipeline: CiCdPipeline,
    pub tests: TestContent,
    pub cleanup_config: CleanupConfig,
    pub estimated_time: i64,
}

impl Default for CdkLabContentFields {
    fn default() -> Self {
        Self {
            language: CdkLanguage::default().as_str().to_string(),
            instance_type: "t2.micro".to_string(),
            security_group_rules: Vec::new(),
            key_pair_name: String::new(),
            stack_code: String::new(),
            cicd_pipeline: CiCdPipeline::default(),
            tests: TestContent::default(),
            cleanup_config: CleanupConfig::default(),
            estimated_time: 90,
        }
    }
}

/// Infrastructure-as-code lab built with the AWS CDK
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CdkLabContentFields")]
pub struct CdkLabContent {
    language: CdkLanguage,
    instance_type: String,
    security_group_rules: Vec<SecurityGroupRule>,
    key_pair_name: String,
    stack_code: String,
    cicd_pipeline: CiCdPipeline,
    tests: TestContent,
    cleanup_config: CleanupConfig,
    estimated_time: u32,
}

impl TryFrom<CdkLabContentFields> for CdkLabContent {
    type Error = ValidationError;

    fn try_from(f: CdkLabContentFields) -> Result<Self, Self::Error> {
        Ok(Self {
            language: validation::choice("language", &f.language)?,
            instance_type: f.instance_type,
            security_group_rules: validation::each(
                "security_group_rules",
                f.security_group_rules,
                SecurityGroupRule::try_from,
            )?,
            key_pair_name: f.key_pair_name,
            stack_code: f.stack_code,
            cicd_pipeline: f.cicd_pipeline,
            tests: f.tests,
            cleanup_config: f.cleanup_config,
            estimated_time: validation::in_range("estimated_time", f.estimated_time, 1, None)?,
        })
    }
}

impl Default for CdkLabContent {
    fn default() -> Self {
        Self {
            language: CdkLanguage::default(),
            instance_type: "t2.micro".to_string(),
            security_group_rules: Vec::new(),
            key_pair_name: String::new(),
            stack_code: String::new(),
            cicd_pipeline: CiCdPipeline::default(),
            tests: TestContent::default(),
            cleanup_config: CleanupConfig::default(),
            estimated_time: 90,
        }
    }
}

impl CdkLabContent {
    pub fn language(&self) -> CdkLanguage {
        self.language
    }

    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }

    pub fn security_group_rules(&self) -> &[SecurityGroupRule] {
        &self.security_group_rules
    }

    pub fn key_pair_name(&self) -> &str {
        &self.key_pair_name
    }

    pub fn stack_code(&self) -> &str {
        &self.stack_code
    }

    pub fn cicd_pipeline(&self) -> &CiCdPipeline {
        &self.cicd_pipeline
    }

    pub fn tests(&self) -> &TestContent {
        &self.tests
    }

    pub fn cleanup_config(&self) -> &CleanupConfig {
        &self.cleanup_config
    }

    /// Expected duration in minutes
    pub fn estimated_time(&self) -> u32 {
        self.estimated_time
    }
}

// ============================================================================
// Verification
// ============================================================================

/// Unvalidated form of a [`TestCase`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TestCaseFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub test_code: String,
    pub expected_result: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TestCaseFields")]
pub struct TestCase {
    name: String,
    description: String,
    test_code: String,
    expected_result: String,
}

impl TryFrom<TestCaseFields> for TestCase {
    type Error = ValidationError;

    fn try_from(f: TestCaseFields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: validation::required_text("name", f.name)?,
            description: validation::required_text("description", f.description)?,
            test_code: f.test_code,
            expected_result: f.expected_result,
        })
    }
}

impl TestCase {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn test_code(&self) -> &str {
        &self.test_code
    }

    pub fn expected_result(&self) -> &str {
        &self.expected_result
    }
}

fn default_verification_tools() -> Vec<String> {
    ["pytest", "boto3", "moto", "CDK Assertions"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Unvalidated form of a [`VerificationContent`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VerificationContentFields {
    pub objectives: Vec<String>,
    pub test_cases: Vec<TestCaseFields>,
    pub tools: Vec<String>,
}

impl Default for VerificationContentFields {
    fn default() -> Self {
        Self {
            objectives: Vec::new(),
            test_cases: Vec::new(),
            tools: default_verification_tools(),
        }
    }
}

/// Automated checks that the lab's resources behave as intended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VerificationContentFields")]
pub struct VerificationContent {
    objectives: Vec<String>,
    test_cases: Vec<TestCase>,
    tools: Vec<String>,
}

impl TryFrom<VerificationContentFields> for VerificationContent {
    type Error = ValidationError;

    fn try_from(f: VerificationContentFields) -> Result<Self, Self::Error> {
        Ok(Self {
            objectives: f.objectives,
            test_cases: validation::each("test_cases", f.test_cases, TestCase::try_from)?,
            tools: f.tools,
        })
    }
}

impl Default for VerificationContent {
    fn default() -> Self {
        Self {
            objectives: Vec::new(),
            test_cases: Vec::new(),
            tools: default_verification_tools(),
        }
    }
}

impl VerificationContent {
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }
}

// ============================================================================
// Quiz
// ============================================================================

/// Letter of the correct option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    /// Zero-based position of the option this letter selects
    pub fn index(&self) -> usize {
        match self {
            AnswerKey::A => 0,
            AnswerKey::B => 1,
            AnswerKey::C => 2,
            AnswerKey::D => 3,
        }
    }
}

impl Choice for AnswerKey {
    const VARIANTS: &'static [Self] = &[AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unvalidated form of a [`Question`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct QuestionFields {
    pub question_number: Option<i64>,
    pub question_text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
    pub related_concept: String,
}

impl QuestionFields {
    /// Fields for a question with every required value supplied
    pub fn new(
        question_number: i64,
        question_text: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question_number: Some(question_number),
            question_text: Some(question_text.into()),
            options: Some(options),
            correct_answer: Some(correct_answer.into()),
            explanation: Some(explanation.into()),
            related_concept: String::new(),
        }
    }
}

/// A four-option multiple choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuestionFields")]
pub struct Question {
    question_number: u8,
    question_text: String,
    options: Vec<String>,
    correct_answer: AnswerKey,
    explanation: String,
    related_concept: String,
}

impl TryFrom<QuestionFields> for Question {
    type Error = ValidationError;

    fn try_from(f: QuestionFields) -> Result<Self, Self::Error> {
        let question_number = validation::required("question_number", f.question_number)?;
        let question_number = validation::in_range("question_number", question_number, 1, Some(5))?;
        let question_text = validation::required_text("question_text", f.question_text)?;
        let options = validation::required("options", f.options)?;
        let options = validation::exact_count("options", options, QUESTION_OPTION_COUNT)?;
        let correct_answer = validation::required("correct_answer", f.correct_answer)?;

        Ok(Self {
            question_number,
            question_text,
            options,
            correct_answer: validation::choice("correct_answer", &correct_answer)?,
            explanation: validation::required_text("explanation", f.explanation)?,
            related_concept: f.related_concept,
        })
    }
}

impl Question {
    pub fn question_number(&self) -> u8 {
        self.question_number
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    /// Always exactly four options, in A-D order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_answer(&self) -> AnswerKey {
        self.correct_answer
    }

    /// Text of the option marked correct
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer.index()]
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn related_concept(&self) -> &str {
        &self.related_concept
    }
}

/// Unvalidated form of a [`Quiz`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct QuizFields {
    pub questions: Option<Vec<QuestionFields>>,
}

/// The day's five-question review quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuizFields")]
pub struct Quiz {
    questions: Vec<Question>,
}

impl TryFrom<QuizFields> for Quiz {
    type Error = ValidationError;

    fn try_from(f: QuizFields) -> Result<Self, Self::Error> {
        let questions = validation::required("questions", f.questions)?;
        let questions = validation::exact_count("questions", questions, QUIZ_QUESTION_COUNT)?;

        Ok(Self {
            questions: validation::each("questions", questions, Question::try_from)?,
        })
    }
}

impl Quiz {
    /// Always exactly five questions
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

// ============================================================================
// DailyContent
// ============================================================================

/// Unvalidated form of a [`DailyContent`]
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct DailyContentFields {
    pub metadata: Option<DailyContentMetadataFields>,
    pub overview: Option<OverviewSectionFields>,
    pub scenario: Option<ScenarioSectionFields>,
    /// Mermaid.js diagram source
    pub architecture_diagram: String,
    pub key_concepts: KeyConceptsSectionFields,
    pub console_lab: ConsoleLabContentFields,
    pub cdk_lab: CdkLabContentFields,
    pub verification: VerificationContentFields,
    pub quiz: Option<QuizFields>,
}

/// A day's complete lesson material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DailyContentFields")]
pub struct DailyContent {
    metadata: DailyContentMetadata,
    overview: OverviewSection,
    scenario: ScenarioSection,
    architecture_diagram: String,
    key_concepts: KeyConceptsSection,
    console_lab: ConsoleLabContent,
    cdk_lab: CdkLabContent,
    verification: VerificationContent,
    quiz: Quiz,
}

/// Validate a required nested section, prefixing errors with its name
fn section<F, T>(name: &str, fields: Option<F>) -> Result<T, ValidationError>
where
    T: TryFrom<F, Error = ValidationError>,
{
    let fields = validation::required(name, fields)?;
    T::try_from(fields).map_err(|e| e.within(name))
}

/// Validate a defaulted nested section, prefixing errors with its name
fn defaulted<F, T>(name: &str, fields: F) -> Result<T, ValidationError>
where
    T: TryFrom<F, Error = ValidationError>,
{
    T::try_from(fields).map_err(|e| e.within(name))
}

impl TryFrom<DailyContentFields> for DailyContent {
    type Error = ValidationError;

    fn try_from(f: DailyContentFields) -> Result<Self, Self::Error> {
        Ok(Self {
            metadata: section("metadata", f.metadata)?,
            overview: section("overview", f.overview)?,
            scenario: section("scenario", f.scenario)?,
            architecture_diagram: f.architecture_diagram,
            key_concepts: defaulted("key_concepts", f.key_concepts)?,
            console_lab: defaulted("console_lab", f.console_lab)?,
            cdk_lab: defaulted("cdk_lab", f.cdk_lab)?,
            verification: defaulted("verification", f.verification)?,
            quiz: section("quiz", f.quiz)?,
        })
    }
}

impl Document for DailyContent {
    const KIND: DocumentKind = DocumentKind::DailyContent;
    type Fields = DailyContentFields;

    fn from_fields(fields: DailyContentFields) -> Result<Self, ValidationError> {
        Self::try_from(fields)
    }
}

impl DailyContent {
    pub fn metadata(&self) -> &DailyContentMetadata {
        &self.metadata
    }

    pub fn overview(&self) -> &OverviewSection {
        &self.overview
    }

    pub fn scenario(&self) -> &ScenarioSection {
        &self.scenario
    }

    /// Mermaid.js diagram source
    pub fn architecture_diagram(&self) -> &str {
        &self.architecture_diagram
    }

    pub fn key_concepts(&self) -> &KeyConceptsSection {
        &self.key_concepts
    }

    pub fn console_lab(&self) -> &ConsoleLabContent {
        &self.console_lab
    }

    pub fn cdk_lab(&self) -> &CdkLabContent {
        &self.cdk_lab
    }

    pub fn verification(&self) -> &VerificationContent {
        &self.verification
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}
