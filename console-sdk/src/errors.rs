//! # Schema errors
//!
//! The search compiler itself never fails. Errors only come from reading table metadata or
//! compiler options out of JSON, e.g. a "describe table" response:
//!
//! ```rust
//! use console_sdk::{SchemaError, Table};
//!
//! let err = Table::from_json(r#"{"name": "", "columns": []}"#).unwrap_err();
//! assert!(matches!(err, SchemaError::MissingTableName));
//! ```
//!
//! Details are logged through `tracing` when the error is raised; install a subscriber in
//! the application to see them.

use std::fmt;

/// Error raised while loading or validating table metadata.
#[derive(Debug)]
pub enum SchemaError {
    /// The payload is not valid JSON or does not have the expected shape
    InvalidJson {
        /// Parser error with line/column information
        internal: serde_json::Error,
    },

    /// The table has no name
    MissingTableName,

    /// A column in `table` has an empty name
    EmptyColumnName {
        table: String,
        /// Position of the column in the table definition
        position: usize,
    },

    /// Two columns of `table` share a name
    DuplicateColumn { table: String, column: String },
}

impl SchemaError {
    #[must_use]
    pub fn invalid_json(internal: serde_json::Error) -> Self {
        Self::InvalidJson { internal }
    }

    #[must_use]
    pub fn duplicate_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Write the error to the `tracing` log.
    pub(crate) fn log(&self) {
        match self {
            Self::InvalidJson { internal } => {
                tracing::warn!(
                    error = %internal,
                    line = internal.line(),
                    column = internal.column(),
                    "Rejected schema JSON"
                );
            }
            Self::MissingTableName => {
                tracing::warn!("Rejected table definition without a name");
            }
            Self::EmptyColumnName { table, position } => {
                tracing::warn!(table = %table, position, "Rejected column without a name");
            }
            Self::DuplicateColumn { table, column } => {
                tracing::warn!(table = %table, column = %column, "Rejected duplicate column");
            }
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson { internal } => write!(f, "Invalid schema JSON: {internal}"),
            Self::MissingTableName => write!(f, "Table name is required"),
            Self::EmptyColumnName { table, position } => {
                write!(f, "Column #{position} of table '{table}' has no name")
            }
            Self::DuplicateColumn { table, column } => {
                write!(f, "Column '{column}' is defined more than once in table '{table}'")
            }
        }
    }
}

impl std::error::Error for SchemaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson { internal } => Some(internal),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        assert_eq!(SchemaError::MissingTableName.to_string(), "Table name is required");
        assert_eq!(
            SchemaError::duplicate_column("Person", "name").to_string(),
            "Column 'name' is defined more than once in table 'Person'"
        );
        assert_eq!(
            SchemaError::EmptyColumnName { table: "Person".into(), position: 2 }.to_string(),
            "Column #2 of table 'Person' has no name"
        );
    }

    #[test]
    fn test_json_error_keeps_source() {
        let internal = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaError::from(internal);
        assert!(err.to_string().starts_with("Invalid schema JSON"));
        assert!(err.source().is_some());
        assert!(SchemaError::MissingTableName.source().is_none());
    }
}
