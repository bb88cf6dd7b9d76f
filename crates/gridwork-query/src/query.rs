//! Query builder and executor.
//!
//! A [`Query`] bundles everything that narrows and orders a row set before
//! pagination: column filters, an optional global search, exclusions and the
//! sort keys.

use crate::filter::ColumnFilter;
use crate::search::contains_ignore_case;
use crate::sort::{compare_by_keys, Dir, SortKey};
use crate::value::Value;

/// A filter-and-sort pass over a slice of rows.
///
/// The three predicate groups combine with fixed logic:
///
/// ```text
/// match = (every column filter matches)
///       ∧ (search text found in some search field, OR no search)
///       ∧ (no exclusion filter matches)
/// ```
///
/// # Example
///
/// ```
/// use gridwork_query::{ColumnFilter, Query, Value};
///
/// fn accessor<'a>(row: &'a (&'static str, &'static str), field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::from(row.0),
///         "city" => Value::from(row.1),
///         _ => Value::None,
///     }
/// }
///
/// let rows = vec![("Ada", "London"), ("Alan", "Wilmslow"), ("Grace", "New York")];
/// let query = Query::new()
///     .search(["name", "city"], "lo")
///     .order_desc("name")
///     .build();
///
/// let names: Vec<_> = query.apply(&rows, accessor).iter().map(|r| r.0).collect();
/// assert_eq!(names, vec!["Alan", "Ada"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    filters: Vec<ColumnFilter>,
    exclusions: Vec<ColumnFilter>,
    search_fields: Vec<String>,
    search_text: String,
    sort_keys: Vec<SortKey>,
}

impl Query {
    /// Creates an empty query, which keeps every row in input order.
    pub fn new() -> Self {
        Query::default()
    }

    /// Adds a column filter every row must satisfy.
    pub fn filter(mut self, filter: ColumnFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds several column filters.
    pub fn filters(mut self, filters: impl IntoIterator<Item = ColumnFilter>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Adds a filter no row may satisfy.
    pub fn exclude(mut self, filter: ColumnFilter) -> Self {
        self.exclusions.push(filter);
        self
    }

    /// Sets the global search: a case-insensitive substring looked up in the
    /// text form of each listed field. An empty text disables the search.
    pub fn search<I, S>(mut self, fields: I, text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self.search_text = text.into();
        self
    }

    /// Appends a sort key.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Self {
        self.sort_keys.push(SortKey::new(field, dir));
        self
    }

    /// Appends an ascending sort key.
    pub fn order_asc(self, field: &str) -> Self {
        self.order_by(field, Dir::Asc)
    }

    /// Appends a descending sort key.
    pub fn order_desc(self, field: &str) -> Self {
        self.order_by(field, Dir::Desc)
    }

    /// Appends several sort keys in order.
    pub fn sort_keys(mut self, keys: impl IntoIterator<Item = SortKey>) -> Self {
        self.sort_keys.extend(keys);
        self
    }

    /// Finalizes the builder.
    pub fn build(self) -> Self {
        self
    }

    /// The column filters.
    pub fn column_filters(&self) -> &[ColumnFilter] {
        &self.filters
    }

    /// The sort keys.
    pub fn orderings(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// The active search text, if any.
    pub fn search_text(&self) -> Option<&str> {
        (!self.search_text.is_empty()).then_some(self.search_text.as_str())
    }

    /// Returns `true` if the query neither narrows nor reorders anything.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
            && self.exclusions.is_empty()
            && self.search_text().is_none()
            && self.sort_keys.is_empty()
    }

    /// Tests a single row against the predicate groups.
    pub fn matches<T, F>(&self, row: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let filters_pass = self
            .filters
            .iter()
            .all(|f| f.matches(&accessor(row, &f.field)));
        if !filters_pass {
            return false;
        }

        if let Some(text) = self.search_text() {
            let found = self
                .search_fields
                .iter()
                .any(|field| contains_ignore_case(&accessor(row, field).to_text(), text));
            if !found {
                return false;
            }
        }

        !self
            .exclusions
            .iter()
            .any(|f| f.matches(&accessor(row, &f.field)))
    }

    /// Filters and sorts `rows`, returning references in result order.
    ///
    /// Sorting is stable: rows that tie on every key keep input order.
    pub fn apply<'r, T, F>(&self, rows: &'r [T], accessor: F) -> Vec<&'r T>
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let mut results: Vec<&'r T> = rows
            .iter()
            .filter(|row| self.matches(*row, &accessor))
            .collect();

        if !self.sort_keys.is_empty() {
            results.sort_by(|a, b| compare_by_keys(*a, *b, &self.sort_keys, &accessor));
        }

        results
    }

    /// Counts matching rows without sorting.
    pub fn count<T, F>(&self, rows: &[T], accessor: F) -> usize
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        rows.iter().filter(|row| self.matches(*row, &accessor)).count()
    }
}
