//! Curriculum entity types
//!
//! **Syllabus:**
//! - [`Syllabus`] - The curriculum outline, made of weeks
//! - [`Week`] - One week of the curriculum, made of days
//! - [`DayOverview`] - Topic, services and difficulty of a single day
//!
//! **Daily Content:**
//! - [`DailyContent`] - A day's full lesson material: overview, scenario,
//!   key concepts, console and CDK labs, verification tests and quiz
//! - [`Quiz`] - Exactly five [`Question`]s with four options each

pub mod daily_content;
pub mod syllabus;

pub use daily_content::{
    AnswerKey, CdkLabContent, CiCdPipeline, CleanupConfig, CleanupStep, Concept,
    ConsoleLabContent, DailyContent, DailyContentFields, DailyContentMetadata,
    KeyConceptsSection, OverviewSection, Procedure, Question, Quiz, ScenarioSection,
    SecurityGroupRule, TestCase, TestContent, VerificationContent,
};
pub use syllabus::{DayOverview, Difficulty, Syllabus, SyllabusFields, SyllabusMetadata, Week};
