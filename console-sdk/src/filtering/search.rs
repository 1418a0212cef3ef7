use crate::config::SearchConfig;
use crate::schema::{Column, DataType, Table};

use super::conditions::{combine, escape_search_value, like_fragment, wrap_query_column_name};
use super::datetime::datetime_search_value;

/// Columns never searched, in any table.
pub const BASE_DENYLIST: &[&str] = &["objectId"];

/// Columns never searched in the users table.
pub const USERS_DENYLIST: &[&str] = &[
    "objectId",
    "password",
    "socialAccount",
    "userStatus",
    "lastLogin",
    "isEmailConfirmed",
];

/// The denylist that applies to `table_name`.
#[must_use]
pub fn denylist_for(table_name: &str, config: &SearchConfig) -> &'static [&'static str] {
    if config.is_users_table(table_name) {
        USERS_DENYLIST
    } else {
        BASE_DENYLIST
    }
}

/// Compiles search box input into a `where` clause for a given table.
///
/// The compiler holds no state besides its [`SearchConfig`], so one instance can be shared
/// freely between requests.
#[derive(Debug, Clone, Default)]
pub struct SearchCompiler {
    config: SearchConfig,
}

impl SearchCompiler {
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Combine `filter_string` with the SQL for `search_string`.
    ///
    /// The search text is trimmed first. If `sql` is set, or the text is empty, it is used
    /// verbatim; otherwise it is expanded over the table's columns with
    /// [`SearchCompiler::build_search_sql`]. The result is `filter AND (search)`, either
    /// part alone, or `None` when both are empty.
    #[must_use]
    pub fn compile(
        &self,
        table: &Table,
        sql: bool,
        search_string: Option<&str>,
        filter_string: Option<&str>,
    ) -> Option<String> {
        let search = search_string.unwrap_or_default().trim();

        let search_sql = if sql || search.is_empty() {
            search.to_string()
        } else {
            self.build_search_sql(table, search)
        };

        let clause = combine([filter_string, Some(search_sql.as_str())]);
        tracing::trace!(table = %table.name, sql, clause = ?clause, "Compiled search");
        clause
    }

    /// Expand free text into an `or`-chain of per-column matches.
    ///
    /// Returns an empty string when no column can match `search`.
    #[must_use]
    pub fn build_search_sql(&self, table: &Table, search: &str) -> String {
        table
            .searchable_columns(&self.config)
            .filter_map(|column| {
                let Some(fragment) = self.column_fragment(column, search) else {
                    tracing::debug!(
                        table = %table.name,
                        column = %column.name,
                        data_type = %column.data_type,
                        "Column does not match search"
                    );
                    return None;
                };
                Some(format!("{} {fragment}", wrap_query_column_name(&column.name)))
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }

    /// The condition for a single column, without the column name.
    fn column_fragment(&self, column: &Column, search: &str) -> Option<String> {
        match column.data_type {
            data_type if data_type.is_text_like() => Some(self.like(search)),
            DataType::Boolean => boolean_fragment(search).map(str::to_string),
            DataType::Datetime => datetime_search_value(search, self.config.datetime_matching)
                .map(|value| self.like(&value)),
            // Relations and types the client does not know
            _ => None,
        }
    }

    fn like(&self, value: &str) -> String {
        if self.config.escape_search_values {
            like_fragment(&escape_search_value(value))
        } else {
            like_fragment(value)
        }
    }
}

/// `true`, `false` and `null`, in any case; anything else cannot match a boolean.
fn boolean_fragment(search: &str) -> Option<&'static str> {
    match search.to_lowercase().as_str() {
        "true" => Some("= true"),
        "false" => Some("= false"),
        "null" => Some("IS NULL"),
        _ => None,
    }
}

/// Compile with the default [`SearchConfig`].
///
/// ```rust
/// use console_sdk::{Column, DataType, Table, compile};
///
/// let table = Table::new("Person").with_column(Column::new("name", DataType::String));
///
/// assert_eq!(compile(&table, false, Some("abc"), None).as_deref(), Some("`name` like '%abc%'"));
/// assert_eq!(compile(&table, true, Some("age > 3"), None).as_deref(), Some("age > 3"));
/// assert_eq!(compile(&table, false, Some("   "), None), None);
/// ```
#[must_use]
pub fn compile(
    table: &Table,
    sql: bool,
    search_string: Option<&str>,
    filter_string: Option<&str>,
) -> Option<String> {
    SearchCompiler::default().compile(table, sql, search_string, filter_string)
}
