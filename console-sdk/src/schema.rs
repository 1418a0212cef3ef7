//! Table metadata as returned by the "describe table" endpoint.
//!
//! Only the parts the search compiler needs are modelled: the table name and, per column,
//! its name and `dataType`. Any other properties in the payload are ignored.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::errors::SchemaError;
use crate::filtering::search::denylist_for;

/// Column data types, serialized with their wire names (`STRING_ID`, `DATETIME`, ...).
///
/// Names the client does not know deserialize to [`DataType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Int,
    Double,
    Boolean,
    String,
    StringId,
    ExtendedString,
    Text,
    Datetime,
    /// Reference to a file in storage
    FileRef,
    /// Relation to records of another table
    DataRef,
    /// Relation to a geo point
    GeoRef,
    /// Inverse side of a relation
    ChildOf,
    #[serde(other)]
    Unknown,
}

impl DataType {
    /// Types searched with a plain substring `LIKE`.
    #[must_use]
    pub const fn is_text_like(self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Double
                | Self::String
                | Self::StringId
                | Self::ExtendedString
                | Self::Text
        )
    }

    #[must_use]
    pub const fn is_relation(self) -> bool {
        matches!(self, Self::FileRef | Self::DataRef | Self::GeoRef | Self::ChildOf)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Double => "DOUBLE",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::StringId => "STRING_ID",
            Self::ExtendedString => "EXTENDED_STRING",
            Self::Text => "TEXT",
            Self::Datetime => "DATETIME",
            Self::FileRef => "FILE_REF",
            Self::DataRef => "DATA_REF",
            Self::GeoRef => "GEO_REF",
            Self::ChildOf => "CHILD_OF",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A table name and its columns, in definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Parse and validate a "describe table" response body.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidJson`] for malformed payloads and the errors of
    /// [`Table::validate`] for structurally invalid ones.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let value = serde_json::from_str(json).map_err(|err| {
            let err = SchemaError::invalid_json(err);
            err.log();
            err
        })?;
        Self::from_value(value)
    }

    /// Same as [`Table::from_json`] for an already decoded payload.
    ///
    /// # Errors
    ///
    /// See [`Table::from_json`].
    pub fn from_value(value: serde_json::Value) -> Result<Self, SchemaError> {
        let table: Self = serde_json::from_value(value).map_err(|err| {
            let err = SchemaError::invalid_json(err);
            err.log();
            err
        })?;
        table.validate().inspect_err(SchemaError::log)?;
        Ok(table)
    }

    /// Check that the table and all its columns are named, and that column names are unique.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::MissingTableName);
        }

        let mut seen = HashSet::with_capacity(self.columns.len());
        for (position, column) in self.columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(SchemaError::EmptyColumnName {
                    table: self.name.clone(),
                    position,
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SchemaError::duplicate_column(&self.name, &column.name));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Columns that take part in a free-text search, i.e. those not on the table's denylist.
    ///
    /// [`SearchCompiler`](crate::SearchCompiler) expands searches over exactly these columns.
    /// Relation columns are included; they are skipped later because they never yield a clause.
    pub fn searchable_columns<'a>(
        &'a self,
        config: &SearchConfig,
    ) -> impl Iterator<Item = &'a Column> + use<'a> {
        let denylist = denylist_for(&self.name, config);
        let table = self.name.as_str();
        self.columns.iter().filter(move |column| {
            let denied = denylist.contains(&column.name.as_str());
            if denied {
                tracing::debug!(table = %table, column = %column.name, "Skipping denylisted column");
            }
            !denied
        })
    }
}
