//! AWS curriculum toolkit
//!
//! Validated schemas for a 30-day AWS certification curriculum: the
//! syllabus outline, each day's lesson content, and the generation
//! settings, plus YAML loading and a CLI for checking documents.

pub mod cli;
pub mod core;
pub mod entities;
pub mod yaml;
