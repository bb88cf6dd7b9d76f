//! Error types for table definitions and configuration.
//!
//! Nothing on the render path fails: malformed definitions degrade silently
//! and unknown ids are skipped. These errors surface only from the opt-in
//! validation entry points ([`compile_strict`](crate::compile_strict),
//! [`TableDefinition::validate`](crate::TableDefinition::validate),
//! [`TableConfig::validate`](crate::TableConfig::validate)) and from config
//! parsing.

use gridwork_query::QueryError;
use thiserror::Error;

/// A table definition that cannot be compiled strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two fields share an id.
    #[error("duplicate field id '{0}'")]
    DuplicateField(String),

    /// A selectable column names a field the definition does not have.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

/// An invalid or unparsable table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `page_size` was zero.
    #[error("page_size must be at least 1")]
    ZeroPageSize,

    /// `initial_row_count` was zero.
    #[error("initial_row_count must be at least 1")]
    ZeroInitialRowCount,

    /// The config text could not be deserialized.
    #[error("invalid table config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Any gridwork error.
#[derive(Debug, Error)]
pub enum GridError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Result type alias for gridwork operations.
pub type Result<T> = std::result::Result<T, GridError>;
