//! # console-sdk
//!
//! Client-side helpers for the console API: table schema metadata as returned by the
//! "describe table" endpoint, and the compiler that turns a free-text search box into the
//! SQL `where` clause sent with `find` requests.
//!
//! ## Quick start
//!
//! ```rust
//! use console_sdk::{Column, DataType, SearchCompiler, Table};
//!
//! let table = Table::new("Person")
//!     .with_column(Column::new("objectId", DataType::StringId))
//!     .with_column(Column::new("name", DataType::String))
//!     .with_column(Column::new("active", DataType::Boolean));
//!
//! let compiler = SearchCompiler::default();
//!
//! assert_eq!(
//!     compiler.compile(&table, false, Some("ann"), None).as_deref(),
//!     Some("`name` like '%ann%'"),
//! );
//! assert_eq!(
//!     compiler.compile(&table, false, Some("true"), Some("age > 21")).as_deref(),
//!     Some("age > 21 AND (`name` like '%true%' or `active` = true)"),
//! );
//! ```
//!
//! The compiler never fails: input that matches nothing simply contributes no clause, and
//! `None` is returned when there is nothing to filter on.

pub mod config;
pub mod errors;
pub mod filtering;
pub mod query;
pub mod schema;

pub use config::{DatetimeMatching, SearchConfig};
pub use errors::SchemaError;
pub use filtering::{SearchCompiler, combine, compile, wrap_query_column_name};
pub use query::SearchRequest;
pub use schema::{Column, DataType, Table};
