//! Gridwork Query - filtering, searching and sorting for table rows.
//!
//! This crate is the row-level engine underneath `gridwork`. It knows nothing
//! about headers, pages or presentation; it answers three questions about an
//! in-memory slice of rows:
//!
//! - Does a row pass a set of per-column filters?
//! - Does a row match a free-text global search across some fields?
//! - In what order do rows appear under a list of sort keys?
//!
//! Rows expose their fields through the [`GridRow`] trait (derivable with
//! `#[derive(GridRow)]` from `gridwork-macros`, and implemented for
//! `serde_json::Value` under the default `json` feature).
//!
//! # Quick Start
//!
//! ```rust
//! use gridwork_query::{ColumnFilter, Dir, Number, Query, Value};
//!
//! struct Member {
//!     name: String,
//!     team: String,
//!     age: u32,
//! }
//!
//! fn accessor<'a>(m: &'a Member, field: &str) -> Value<'a> {
//!     match field {
//!         "name" => Value::from(m.name.as_str()),
//!         "team" => Value::from(m.team.as_str()),
//!         "age" => Value::Number(Number::from(m.age)),
//!         _ => Value::None,
//!     }
//! }
//!
//! let members = vec![
//!     Member { name: "Ada".into(), team: "Core".into(), age: 36 },
//!     Member { name: "Brian".into(), team: "Infra".into(), age: 41 },
//!     Member { name: "Cleo".into(), team: "core".into(), age: 29 },
//! ];
//!
//! let query = Query::new()
//!     .filter(ColumnFilter::text("team", "CORE"))
//!     .order_by("age", Dir::Desc)
//!     .build();
//!
//! let results = query.apply(&members, accessor);
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].name, "Ada");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (every column filter matches)
//!       ∧ (some search field contains the search text, OR there is no search)
//!       ∧ (no exclusion filter matches)
//! ```
//!
//! Sorting is stable and multi-key: the first key decides, later keys break
//! ties, rows that tie on every key keep their input order. Missing values
//! ([`Value::None`]) sort after present ones regardless of direction.
//!
//! # Filter Values
//!
//! | Variant | Matches when |
//! |---------|--------------|
//! | `Text` | the value's text form contains the needle, case-insensitively |
//! | `Range` | the numeric value lies within the inclusive bounds |
//! | `OneOf` | the value's text form equals one of the options |
//! | `Compare` | the explicit [`Op`] holds against the [`Operand`] |

mod error;
mod filter;
#[cfg(feature = "json")]
mod json;
mod op;
mod query;
mod row;
mod search;
mod sort;
mod value;

pub use error::{QueryError, Result};
pub use filter::{ColumnFilter, FilterValue, Operand};
pub use op::Op;
pub use query::Query;
pub use row::{GridRow, GridTimestamp};
pub use search::contains_ignore_case;
pub use sort::{compare_by_keys, compare_values, Dir, SortKey};
pub use value::{Number, Timestamp, Value};
