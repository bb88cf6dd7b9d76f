//! The table state store.
//!
//! [`TableStore`] owns a [`TableState`] and is its only writer. Each slice of
//! state has its own setter; the composite actions
//! [`reset_filters`](TableStore::reset_filters) and
//! [`toggle_expanded`](TableStore::toggle_expanded) change several slices
//! at once.

use std::collections::BTreeMap;

use gridwork_query::{ColumnFilter, SortKey};
use log::debug;

/// Everything a user can change about a table instance.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Sort keys, primary first.
    pub sorting: Vec<SortKey>,
    /// At most one filter per column.
    pub column_filters: Vec<ColumnFilter>,
    /// Column id → visible. Columns not listed are visible.
    pub column_visibility: BTreeMap<String, bool>,
    /// Row id → selected. Keys for rows no longer present are ignored.
    pub row_selection: BTreeMap<String, bool>,
    /// Free-text query across searchable columns.
    pub global_filter: String,
    /// Whether an expandable table shows all rows.
    pub is_expanded: bool,
}

/// Single writer of a [`TableState`].
#[derive(Debug, Clone)]
pub struct TableStore {
    state: TableState,
}

impl TableStore {
    /// Creates the store for a table.
    ///
    /// An expandable table starts collapsed; any other table counts as
    /// expanded. `visibility` seeds the column visibility map.
    pub fn new<I, S>(expandable: bool, visibility: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        TableStore {
            state: TableState {
                is_expanded: !expandable,
                column_visibility: visibility
                    .into_iter()
                    .map(|(id, visible)| (id.into(), visible))
                    .collect(),
                ..TableState::default()
            },
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn set_sorting(&mut self, sorting: Vec<SortKey>) {
        debug!("sorting: {:?}", sorting);
        self.state.sorting = sorting;
    }

    pub fn set_column_filters(&mut self, filters: Vec<ColumnFilter>) {
        debug!("column filters: {} set", filters.len());
        self.state.column_filters = filters;
    }

    /// Sets the filter for one column, replacing any previous one.
    pub fn set_column_filter(&mut self, filter: ColumnFilter) {
        debug!("column filter on '{}': {:?}", filter.field, filter.value);
        match self
            .state
            .column_filters
            .iter_mut()
            .find(|f| f.field == filter.field)
        {
            Some(existing) => *existing = filter,
            None => self.state.column_filters.push(filter),
        }
    }

    pub fn clear_column_filter(&mut self, field: &str) {
        debug!("column filter on '{}' cleared", field);
        self.state.column_filters.retain(|f| f.field != field);
    }

    /// The filter on a column, if any.
    pub fn column_filter(&self, field: &str) -> Option<&ColumnFilter> {
        self.state.column_filters.iter().find(|f| f.field == field)
    }

    pub fn set_column_visibility(&mut self, field: impl Into<String>, visible: bool) {
        let field = field.into();
        debug!("column '{}' visible: {}", field, visible);
        self.state.column_visibility.insert(field, visible);
    }

    /// Records a column's default visibility unless the column already has
    /// an entry.
    pub fn seed_column_visibility(&mut self, field: impl Into<String>, visible: bool) {
        self.state
            .column_visibility
            .entry(field.into())
            .or_insert(visible);
    }

    pub fn toggle_column_visibility(&mut self, field: &str) {
        let visible = self.is_column_visible(field);
        self.set_column_visibility(field, !visible);
    }

    pub fn is_column_visible(&self, field: &str) -> bool {
        self.state
            .column_visibility
            .get(field)
            .copied()
            .unwrap_or(true)
    }

    pub fn set_row_selection(&mut self, selection: BTreeMap<String, bool>) {
        debug!("row selection replaced ({} keys)", selection.len());
        self.state.row_selection = selection;
    }

    pub fn set_row_selected(&mut self, row_id: impl Into<String>, selected: bool) {
        let row_id = row_id.into();
        debug!("row '{}' selected: {}", row_id, selected);
        if selected {
            self.state.row_selection.insert(row_id, true);
        } else {
            self.state.row_selection.remove(&row_id);
        }
    }

    pub fn toggle_row_selected(&mut self, row_id: &str) {
        let selected = self.is_selected(row_id);
        self.set_row_selected(row_id, !selected);
    }

    pub fn is_selected(&self, row_id: &str) -> bool {
        self.state
            .row_selection
            .get(row_id)
            .copied()
            .unwrap_or(false)
    }

    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        debug!("global filter: {:?}", query);
        self.state.global_filter = query;
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        debug!("expanded: {}", expanded);
        self.state.is_expanded = expanded;
    }

    /// Clears column filters and the global filter together.
    pub fn reset_filters(&mut self) {
        debug!("filters reset");
        self.state.column_filters.clear();
        self.state.global_filter.clear();
    }

    /// Flips the expansion state.
    pub fn toggle_expanded(&mut self) {
        let expanded = !self.state.is_expanded;
        self.set_expanded(expanded);
    }
}
