//! # Free-text search compiler
//!
//! Turns the text typed into a table's search box into a SQL boolean expression for the
//! `where` field of a `find` request.
//!
//! ## How a search is expanded
//!
//! Each column that is not on the table's denylist contributes at most one clause, chosen by
//! its [`DataType`](crate::DataType):
//!
//! | Column type | Search `abc` | Search `true` | Search `4:7` | Search `1-2-1990` |
//! |---|---|---|---|---|
//! | `STRING`, `TEXT`, `INT`, ... | `like '%abc%'` | `like '%true%'` | `like '%4:7%'` | `like '%1-2-1990%'` |
//! | `BOOLEAN` | - | `= true` | - | - |
//! | `DATETIME` | `like '%abc%'` | `like '%true%'` | `like '%04:07%'` | `like '%1990-01-02%'` |
//! | relations, unknown | - | - | - | - |
//!
//! Clauses are prefixed with the backtick-quoted column name and joined with `or`. An
//! explicit filter from the caller is put in front and `AND`-ed with the search:
//!
//! ```text
//! age > 21 AND (`name` like '%abc%' or `notes` like '%abc%')
//! ```
//!
//! With `sql = true` the search text is taken as SQL already and used as-is.
//!
//! ## Denylists
//!
//! `objectId` is never searched. On the users table, `password`, `socialAccount`,
//! `userStatus`, `lastLogin` and `isEmailConfirmed` are skipped as well.

pub mod conditions;
pub mod datetime;
pub mod search;

pub use conditions::{combine, like_fragment, wrap_query_column_name};
pub use search::{SearchCompiler, compile, denylist_for};
