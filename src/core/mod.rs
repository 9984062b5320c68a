//! Core module - validation, configuration and document I/O

pub mod config;
pub mod entity;
pub mod files;
pub mod loader;
pub mod validation;

pub use config::{load_config, CurriculumConfig, CurriculumConfigFields};
pub use entity::{CdkLanguage, Document, DocumentKind};
pub use files::{ensure_directory, read_file, write_file, FileError};
pub use loader::{load_all, load_document, parse_document, save_document, LoadError};
pub use validation::{Choice, ValidationError};
