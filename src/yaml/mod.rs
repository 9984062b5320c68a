//! YAML support - parse diagnostics

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;
