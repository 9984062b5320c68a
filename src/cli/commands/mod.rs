//! Command implementations

pub mod completions;
pub mod config;
pub mod init;
pub mod syllabus;
pub mod validate;
