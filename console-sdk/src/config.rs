use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;

/// Name of the built-in users table.
pub const DEFAULT_USERS_TABLE: &str = "Users";

/// How DATETIME columns react to search text that is not a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatetimeMatching {
    /// Every value reaches the date branch. A leading `M-D-YYYY` / `M/D/YYYY` is
    /// rewritten to `YYYY-MM-DD`, anything else is matched verbatim.
    #[default]
    Lenient,
    /// Only values starting with `M-D-YYYY` / `M/D/YYYY` produce a clause.
    Strict,
}

/// Options for [`SearchCompiler`](crate::SearchCompiler).
///
/// Deserializes from camelCase JSON; every field is optional:
///
/// ```json
/// {"usersTable": "Users", "datetimeMatching": "strict", "escapeSearchValues": true}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Table whose searches skip credential and account-state columns.
    pub users_table: String,
    pub datetime_matching: DatetimeMatching,
    /// Escape search values before they are placed in a `LIKE` literal: backslashes and the
    /// `%`/`_` wildcards get a backslash, single quotes are doubled.
    ///
    /// Off by default: search text is interpolated verbatim, so callers passing untrusted
    /// input should enable this.
    pub escape_search_values: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            users_table: DEFAULT_USERS_TABLE.to_string(),
            datetime_matching: DatetimeMatching::default(),
            escape_search_values: false,
        }
    }
}

impl SearchConfig {
    /// Parse options from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidJson`] when the document is malformed or a field has
    /// the wrong type.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(json).map_err(|err| {
            let err = SchemaError::invalid_json(err);
            err.log();
            err
        })
    }

    #[must_use]
    pub fn with_datetime_matching(mut self, matching: DatetimeMatching) -> Self {
        self.datetime_matching = matching;
        self
    }

    #[must_use]
    pub fn with_escaped_values(mut self, escape: bool) -> Self {
        self.escape_search_values = escape;
        self
    }

    #[must_use]
    pub fn is_users_table(&self, table_name: &str) -> bool {
        table_name == self.users_table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_unescaped_lenient_behaviour() {
        let config = SearchConfig::default();
        assert_eq!(config.users_table, "Users");
        assert_eq!(config.datetime_matching, DatetimeMatching::Lenient);
        assert!(!config.escape_search_values);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SearchConfig::from_json(r#"{"datetimeMatching": "strict"}"#).unwrap();
        assert_eq!(config.datetime_matching, DatetimeMatching::Strict);
        assert_eq!(config.users_table, "Users");

        let empty = SearchConfig::from_json("{}").unwrap();
        assert_eq!(empty, SearchConfig::default());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = SearchConfig::from_json(r#"{"escapeSearchValues": "yes"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidJson { .. }));
    }

    #[test]
    fn test_users_table_name_is_exact() {
        let config = SearchConfig::default();
        assert!(config.is_users_table("Users"));
        assert!(!config.is_users_table("users"));
        assert!(!config.is_users_table("UsersArchive"));
    }
}
