/// Build a substring match for `value`. The value is interpolated as-is.
#[must_use]
pub fn like_fragment(value: &str) -> String {
    format!("like '%{value}%'")
}

/// Make `value` safe inside a `LIKE '%...%'` literal: backslashes and the `%`/`_` wildcards
/// are backslash-escaped, single quotes are doubled.
pub(crate) fn escape_search_value(value: &str) -> String {
    value
        .replace('\\', "\\\\") // Escape backslash first
        .replace('%', "\\%")
        .replace('_', "\\_")
        .replace('\'', "''")
}

/// `AND` together the non-empty fragments, in order, parenthesizing all but the first.
///
/// `None` and empty fragments are skipped; if nothing is left the result is `None`,
/// never an empty string.
///
/// ```rust
/// use console_sdk::combine;
///
/// assert_eq!(combine([Some("a = 1"), None, Some("b = 2 or c = 3")]).as_deref(),
///            Some("a = 1 AND (b = 2 or c = 3)"));
/// assert_eq!(combine([Some(""), None]), None);
/// ```
pub fn combine<'a, I>(fragments: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fragments
        .into_iter()
        .flatten()
        .filter(|fragment| !fragment.is_empty())
        .fold(None, |combined, fragment| match combined {
            None => Some(fragment.to_string()),
            Some(combined) => Some(format!("{combined} AND ({fragment})")),
        })
}

/// Quote a column name, or dot-separated path, with backticks.
///
/// Segments that are already quoted, or use bracket accessors such as `tags[0]`,
/// are kept as they are.
///
/// ```rust
/// use console_sdk::wrap_query_column_name;
///
/// assert_eq!(wrap_query_column_name("address.city"), "`address`.`city`");
/// assert_eq!(wrap_query_column_name("tags[0]"), "tags[0]");
/// ```
#[must_use]
pub fn wrap_query_column_name(name: &str) -> String {
    name.split('.')
        .map(|segment| {
            if is_backtick_quoted(segment) || is_bracket_accessor(segment) {
                segment.to_string()
            } else {
                format!("`{segment}`")
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn is_backtick_quoted(segment: &str) -> bool {
    segment
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
        .is_some_and(|inner| !inner.contains('`'))
}

fn is_bracket_accessor(segment: &str) -> bool {
    segment.contains('[') && segment.contains(']')
}
