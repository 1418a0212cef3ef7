use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};
use utoipa::ToSchema;

use crate::filtering::SearchCompiler;
use crate::schema::Table;

/// Key of the `find` request body that carries the compiled clause.
pub const WHERE_KEY: &str = "where";

/// Search parameters as sent by the console's records view.
///
/// ```json
/// {"searchString": "ann", "sql": false, "filterString": "age > 21"}
/// ```
///
/// All fields are optional. Empty strings are read as absent and a `null` `sql` flag as
/// `false`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRequest {
    /// Text typed into the search box, or a SQL expression when `sql` is set.
    ///
    /// Example: `ann`
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(example = "ann")]
    pub search_string: Option<String>,
    /// Treat `searchString` as SQL instead of free text.
    #[serde_as(as = "DefaultOnNull")]
    pub sql: bool,
    /// Condition built by the filter editor, `AND`-ed in front of the search.
    ///
    /// Example: `age > 21`
    #[serde_as(as = "NoneAsEmptyString")]
    #[schema(example = "age > 21")]
    pub filter_string: Option<String>,
}

impl SearchRequest {
    pub fn new(search_string: impl Into<String>) -> Self {
        Self {
            search_string: Some(search_string.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sql(mut self, sql: bool) -> Self {
        self.sql = sql;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter_string: impl Into<String>) -> Self {
        self.filter_string = Some(filter_string.into());
        self
    }

    #[must_use]
    pub fn compile(&self, compiler: &SearchCompiler, table: &Table) -> Option<String> {
        compiler.compile(
            table,
            self.sql,
            self.search_string.as_deref(),
            self.filter_string.as_deref(),
        )
    }

    /// Write the compiled clause into the `where` field of a `find` request body.
    ///
    /// A `where` left over from an earlier search is removed when there is nothing to filter
    /// on. Returns whether the body now has a `where` field.
    pub fn apply_to_body(
        &self,
        compiler: &SearchCompiler,
        table: &Table,
        body: &mut Map<String, Value>,
    ) -> bool {
        if let Some(clause) = self.compile(compiler, table) {
            body.insert(WHERE_KEY.to_string(), Value::String(clause));
            true
        } else {
            body.remove(WHERE_KEY);
            false
        }
    }
}
