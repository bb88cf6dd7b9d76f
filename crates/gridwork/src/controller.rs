//! The table controller.
//!
//! [`TableController`] pairs compiled columns with a [`TableStore`] and
//! derives the rows to display. Deriving is a pure function of the rows and
//! the current state:
//!
//! 1. column filters (unknown or non-filterable columns ignored)
//! 2. the global filter over searchable columns
//! 3. stable multi-key sorting (unknown or non-sortable keys skipped)
//! 4. pagination, or truncation to the preview rows while collapsed
//!
//! All user actions go through controller methods so that paging stays
//! consistent with the state they change.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use gridwork_query::{ColumnFilter, Dir, GridRow, Query, SortKey, Value};
use log::{debug, trace};

use crate::compile::{compile_with_config, ColumnModel, RowCallbacks};
use crate::config::TableConfig;
use crate::definition::TableDefinition;
use crate::state::{TableState, TableStore};

/// Overrides how row ids are computed.
pub type RowIdFn<R> = Rc<dyn Fn(&R) -> String>;

/// Current page position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

/// Everything a renderer needs for one frame.
pub struct TableView<'a, R> {
    /// The rows to draw, in order.
    pub display_rows: Vec<&'a R>,
    /// The unfiltered input had at least one row.
    pub has_data: bool,
    /// Rows left after filtering.
    pub filtered_count: usize,
    /// Always at least 1.
    pub page_count: usize,
    /// Clamped into `0..page_count`.
    pub page_index: usize,
    pub effective_page_size: usize,
    pub is_expanded: bool,
    pub show_expand_button: bool,
    pub should_show_skeleton: bool,
    pub visible_columns: Vec<&'a ColumnModel<R>>,
}

impl<R> TableView<'_, R> {
    /// Rows hidden behind the expand affordance.
    pub fn hidden_count(&self) -> usize {
        self.filtered_count.saturating_sub(self.display_rows.len())
    }
}

impl<R> fmt::Debug for TableView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableView")
            .field("display_rows", &self.display_rows.len())
            .field("has_data", &self.has_data)
            .field("filtered_count", &self.filtered_count)
            .field("page_count", &self.page_count)
            .field("page_index", &self.page_index)
            .field("effective_page_size", &self.effective_page_size)
            .field("is_expanded", &self.is_expanded)
            .field("show_expand_button", &self.show_expand_button)
            .field("should_show_skeleton", &self.should_show_skeleton)
            .finish_non_exhaustive()
    }
}

/// Derives display rows from raw rows, compiled columns and table state.
///
/// # Example
///
/// ```
/// use gridwork::{FieldDefinition, GridRow, RowCallbacks, TableConfig, TableController,
///     TableDefinition, Value};
///
/// struct City(&'static str);
///
/// impl GridRow for City {
///     fn field_value(&self, path: &str) -> Value<'_> {
///         match path {
///             "name" => Value::from(self.0),
///             _ => Value::None,
///         }
///     }
///     fn row_fingerprint(&self) -> String {
///         self.0.to_string()
///     }
/// }
///
/// let def: TableDefinition<City> = TableDefinition::new().field(FieldDefinition::new("name"));
/// let mut table = TableController::from_definition(
///     &def,
///     TableConfig::default().page_size(2),
///     &RowCallbacks::new(),
/// );
///
/// let rows = vec![City("Porto"), City("Lisbon"), City("Braga")];
/// table.toggle_sort("name");
///
/// let view = table.derive(&rows, false);
/// let names: Vec<_> = view.display_rows.iter().map(|c| c.0).collect();
/// assert_eq!(names, vec!["Braga", "Lisbon"]);
/// assert_eq!(view.page_count, 2);
/// ```
pub struct TableController<R> {
    columns: Vec<ColumnModel<R>>,
    config: TableConfig,
    store: TableStore,
    pagination: Pagination,
    row_id: Option<RowIdFn<R>>,
    last_filtered_count: Cell<usize>,
}

impl<R: GridRow> TableController<R> {
    /// Creates a controller over pre-compiled columns.
    pub fn new(columns: Vec<ColumnModel<R>>, config: TableConfig) -> Self {
        let store = TableStore::new(
            config.expandable,
            columns
                .iter()
                .map(|c| (c.id.clone(), c.default_visible)),
        );
        let pagination = Pagination {
            page_index: 0,
            page_size: config.effective_page_size(store.state().is_expanded),
        };
        TableController {
            columns,
            config,
            store,
            pagination,
            row_id: None,
            last_filtered_count: Cell::new(0),
        }
    }

    /// Compiles a definition with `config` and wraps it in a controller.
    pub fn from_definition(
        definition: &TableDefinition<R>,
        config: TableConfig,
        callbacks: &RowCallbacks<R>,
    ) -> Self
    where
        R: 'static,
    {
        let columns = compile_with_config(definition, &config, callbacks);
        Self::new(columns, config)
    }

    /// Replaces how row ids are computed.
    pub fn with_row_id(mut self, f: impl Fn(&R) -> String + 'static) -> Self {
        self.row_id = Some(Rc::new(f));
        self
    }

    /// Swaps in recompiled columns, keeping the table state. Columns new to
    /// the table start at their default visibility.
    pub fn set_columns(&mut self, columns: Vec<ColumnModel<R>>) {
        for column in &columns {
            self.store
                .seed_column_visibility(column.id.as_str(), column.default_visible);
        }
        self.columns = columns;
    }

    pub fn columns(&self) -> &[ColumnModel<R>] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&ColumnModel<R>> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn state(&self) -> &TableState {
        self.store.state()
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The row's id: the override if set, else its identity, else its
    /// fingerprint.
    pub fn row_id_of(&self, row: &R) -> String {
        match &self.row_id {
            Some(f) => f(row),
            None => row
                .row_identity()
                .unwrap_or_else(|| row.row_fingerprint()),
        }
    }

    fn read<'a>(&self, row: &'a R, field: &str) -> Value<'a> {
        match self.column(field) {
            Some(column) => column.value(row),
            None => Value::None,
        }
    }

    /// The query the current state stands for.
    pub fn query(&self) -> Query {
        let state = self.store.state();

        let filters = state.column_filters.iter().filter(|f| {
            let usable = self
                .column(&f.field)
                .is_some_and(|c| c.enable_column_filter);
            if !usable {
                trace!("ignoring filter on '{}'", f.field);
            }
            usable && !f.is_inert()
        });

        let sort_keys = state.sorting.iter().filter(|k| {
            let usable = self.column(&k.field).is_some_and(|c| c.enable_sorting);
            if !usable {
                trace!("skipping sort key '{}'", k.field);
            }
            usable
        });

        let searchable = self
            .columns
            .iter()
            .filter(|c| c.enable_global_filter)
            .map(|c| c.id.clone());

        Query::new()
            .filters(filters.cloned())
            .search(searchable, state.global_filter.clone())
            .sort_keys(sort_keys.cloned())
            .build()
    }

    /// Filters, sorts and pages `rows` under the current state.
    pub fn derive<'a>(&'a self, rows: &'a [R], is_loading: bool) -> TableView<'a, R> {
        let query = self.query();
        let filtered = query.apply(rows, |row, field| self.read(row, field));
        let filtered_count = filtered.len();
        self.last_filtered_count.set(filtered_count);

        let is_expanded = self.store.state().is_expanded;
        let collapsed = self.config.expandable && !is_expanded;
        let page_size = self.effective_page_size();
        let page_count = page_count(filtered_count, page_size);
        let page_index = self.pagination.page_index.min(page_count - 1);

        let display_rows: Vec<&'a R> = if collapsed {
            filtered
                .into_iter()
                .take(self.config.initial_row_count)
                .collect()
        } else {
            filtered
                .into_iter()
                .skip(page_index * page_size)
                .take(page_size)
                .collect()
        };

        trace!(
            "derived {} of {} rows ({} after filtering), page {}/{}",
            display_rows.len(),
            rows.len(),
            filtered_count,
            page_index + 1,
            page_count
        );

        TableView {
            display_rows,
            has_data: !rows.is_empty(),
            filtered_count,
            page_count,
            page_index,
            effective_page_size: page_size,
            is_expanded,
            show_expand_button: self.config.expandable
                && filtered_count > self.config.initial_row_count,
            should_show_skeleton: self.config.show_skeleton && is_loading,
            visible_columns: self
                .columns
                .iter()
                .filter(|c| self.store.is_column_visible(&c.id))
                .collect(),
        }
    }

    /// Rows per page in the current expansion state.
    pub fn effective_page_size(&self) -> usize {
        if self.config.expandable && !self.store.state().is_expanded {
            self.config.initial_row_count
        } else {
            self.pagination.page_size.max(1)
        }
    }

    fn first_page(&mut self) {
        self.pagination.page_index = 0;
    }

    // Sorting

    /// Activates a column header: cycles that column's direction and makes
    /// it the only sort key. Non-sortable and unknown columns are ignored.
    pub fn toggle_sort(&mut self, column_id: &str) {
        let Some(next) = self.next_sort(column_id) else {
            return;
        };
        let sorting = next
            .map(|dir| vec![SortKey::new(column_id, dir)])
            .unwrap_or_default();
        self.set_sorting(sorting);
    }

    /// Like [`toggle_sort`](Self::toggle_sort), but keeps the other sort
    /// keys; a newly sorted column becomes the last key.
    pub fn toggle_sort_multi(&mut self, column_id: &str) {
        let Some(next) = self.next_sort(column_id) else {
            return;
        };
        let mut sorting = self.store.state().sorting.clone();
        match (sorting.iter().position(|k| k.field == column_id), next) {
            (Some(i), Some(dir)) => sorting[i].dir = dir,
            (Some(i), None) => {
                sorting.remove(i);
            }
            (None, Some(dir)) => sorting.push(SortKey::new(column_id, dir)),
            (None, None) => {}
        }
        self.set_sorting(sorting);
    }

    /// `None` when the column cannot be sorted; otherwise the direction
    /// after one activation.
    fn next_sort(&self, column_id: &str) -> Option<Option<Dir>> {
        let column = match self.column(column_id) {
            Some(c) if c.enable_sorting => c,
            _ => {
                debug!("ignoring sort toggle on '{}'", column_id);
                return None;
            }
        };
        let current = self
            .store
            .state()
            .sorting
            .iter()
            .find(|k| k.field == column_id)
            .map(|k| k.dir);
        Some(column.header.toggle(current, self.config.sort_cycle))
    }

    pub fn set_sorting(&mut self, sorting: Vec<SortKey>) {
        self.store.set_sorting(sorting);
        self.first_page();
    }

    // Filtering

    pub fn set_global_filter(&mut self, query: impl Into<String>) {
        self.store.set_global_filter(query);
        self.first_page();
    }

    pub fn set_column_filter(&mut self, filter: ColumnFilter) {
        self.store.set_column_filter(filter);
        self.first_page();
    }

    pub fn set_column_filters(&mut self, filters: Vec<ColumnFilter>) {
        self.store.set_column_filters(filters);
        self.first_page();
    }

    pub fn clear_column_filter(&mut self, field: &str) {
        self.store.clear_column_filter(field);
        self.first_page();
    }

    /// Clears column filters and the global filter.
    pub fn reset_filters(&mut self) {
        self.store.reset_filters();
        self.first_page();
    }

    // Expansion

    /// Switches between the preview rows and the paginated view, returning
    /// to the first page. Does nothing unless the table is expandable.
    pub fn toggle_expanded(&mut self) {
        if !self.config.expandable {
            debug!("toggle_expanded ignored: table is not expandable");
            return;
        }
        self.store.toggle_expanded();
        self.pagination = Pagination {
            page_index: 0,
            page_size: self
                .config
                .effective_page_size(self.store.state().is_expanded),
        };
    }

    // Pagination

    /// Page count as of the last [`derive`](Self::derive).
    ///
    /// The page actions below read the same cached count, so they see the
    /// filtered rows of the most recent derive. Before any derive the table
    /// has one page.
    pub fn page_count(&self) -> usize {
        page_count(self.last_filtered_count.get(), self.effective_page_size())
    }

    pub fn can_previous_page(&self) -> bool {
        self.pagination.page_index > 0
    }

    /// Whether a next page existed at the last derive.
    pub fn can_next_page(&self) -> bool {
        self.pagination.page_index + 1 < self.page_count()
    }

    /// Advances one page, bounded by the last derive's page count.
    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.pagination.page_index += 1;
            debug!("page {}", self.pagination.page_index);
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.pagination.page_index -= 1;
            debug!("page {}", self.pagination.page_index);
        }
    }

    /// Jumps to a page, clamped to the last page of the last derive.
    pub fn set_page_index(&mut self, index: usize) {
        self.pagination.page_index = index.min(self.page_count() - 1);
        debug!("page {}", self.pagination.page_index);
    }

    /// Changes rows per page and returns to the first page.
    pub fn set_page_size(&mut self, size: usize) {
        self.pagination = Pagination {
            page_index: 0,
            page_size: size.max(1),
        };
        debug!("page size {}", self.pagination.page_size);
    }

    // Visibility and selection

    pub fn toggle_column_visibility(&mut self, column_id: &str) {
        self.store.toggle_column_visibility(column_id);
    }

    pub fn set_column_visibility(&mut self, column_id: &str, visible: bool) {
        self.store.set_column_visibility(column_id, visible);
    }

    pub fn toggle_row_selected(&mut self, row: &R) {
        let id = self.row_id_of(row);
        self.store.toggle_row_selected(&id);
    }

    pub fn is_row_selected(&self, row: &R) -> bool {
        self.store.is_selected(&self.row_id_of(row))
    }

    /// The selected rows among `rows`; selection keys of absent rows are
    /// skipped.
    pub fn selected_rows<'a>(&self, rows: &'a [R]) -> Vec<&'a R> {
        rows.iter().filter(|r| self.is_row_selected(r)).collect()
    }
}

fn page_count(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::FieldDefinition;
    use gridwork_query::Number;

    #[derive(Debug, Clone)]
    struct Item {
        id: u32,
        name: String,
        score: Option<i64>,
    }

    impl GridRow for Item {
        fn field_value(&self, path: &str) -> Value<'_> {
            match path {
                "id" => Value::Number(Number::from(self.id)),
                "name" => Value::from(self.name.as_str()),
                "score" => Value::from(self.score.map(Number::from)),
                _ => Value::None,
            }
        }

        fn row_fingerprint(&self) -> String {
            format!("{}\u{1f}{}", self.id, self.name)
        }
    }

    fn items(n: u32) -> Vec<Item> {
        (1..=n)
            .map(|id| Item {
                id,
                name: format!("item-{:02}", id),
                score: Some(i64::from(id % 4)),
            })
            .collect()
    }

    fn definition() -> TableDefinition<Item> {
        TableDefinition::new()
            .field(FieldDefinition::new("id").searchable(false))
            .field(FieldDefinition::new("name").filterable(true))
            .field(FieldDefinition::new("score").sortable(false))
    }

    fn controller(config: TableConfig) -> TableController<Item> {
        TableController::from_definition(&definition(), config, &RowCallbacks::new())
    }

    fn ids(view: &TableView<'_, Item>) -> Vec<u32> {
        view.display_rows.iter().map(|i| i.id).collect()
    }

    #[test]
    fn paginates() {
        let rows = items(12);
        let mut table = controller(TableConfig::default().page_size(5));
        let view = table.derive(&rows, false);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.page_count, 3);

        table.next_page();
        table.next_page();
        assert!(!table.can_next_page());
        table.next_page();
        let view = table.derive(&rows, false);
        assert_eq!(ids(&view), vec![11, 12]);
        assert_eq!(view.page_index, 2);

        table.previous_page();
        assert_eq!(table.pagination().page_index, 1);
    }

    #[test]
    fn set_page_index_clamps() {
        let rows = items(12);
        let mut table = controller(TableConfig::default().page_size(5));
        table.derive(&rows, false);
        table.set_page_index(99);
        assert_eq!(table.pagination().page_index, 2);
    }

    #[test]
    fn stale_page_index_is_clamped_at_derive() {
        let rows = items(12);
        let mut table = controller(TableConfig::default().page_size(5));
        table.derive(&rows, false);
        table.set_page_index(2);

        let fewer = items(4);
        let view = table.derive(&fewer, false);
        assert_eq!(view.page_index, 0);
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let rows: Vec<Item> = Vec::new();
        let table = controller(TableConfig::default());
        let view = table.derive(&rows, false);
        assert_eq!(view.page_count, 1);
        assert!(!view.has_data);
    }

    #[test]
    fn sort_toggle_cycles_and_resets_page() {
        let rows = items(12);
        let mut table = controller(TableConfig::default().page_size(5));
        table.derive(&rows, false);
        table.next_page();

        table.toggle_sort("id");
        assert_eq!(table.pagination().page_index, 0);
        assert_eq!(table.state().sorting, vec![SortKey::asc("id")]);

        table.toggle_sort("id");
        assert_eq!(ids(&table.derive(&rows, false)), vec![12, 11, 10, 9, 8]);

        table.toggle_sort("id");
        assert_eq!(table.state().sorting, vec![SortKey::asc("id")]);
    }

    #[test]
    fn non_sortable_column_ignores_toggle() {
        let mut table = controller(TableConfig::default());
        table.toggle_sort("score");
        table.toggle_sort("missing");
        assert!(table.state().sorting.is_empty());
    }

    #[test]
    fn sort_keys_on_non_sortable_columns_are_skipped() {
        let rows = items(3);
        let mut table = controller(TableConfig::default());
        table.set_sorting(vec![SortKey::asc("score"), SortKey::desc("name")]);
        assert_eq!(ids(&table.derive(&rows, false)), vec![3, 2, 1]);
    }

    #[test]
    fn multi_sort_appends_keys() {
        let rows = vec![
            Item { id: 1, name: "b".into(), score: None },
            Item { id: 2, name: "a".into(), score: None },
            Item { id: 3, name: "b".into(), score: None },
        ];
        let mut table = controller(TableConfig::default());
        table.toggle_sort_multi("name");
        table.toggle_sort_multi("id");
        table.toggle_sort_multi("id");
        assert_eq!(
            table.state().sorting,
            vec![SortKey::asc("name"), SortKey::desc("id")]
        );
        assert_eq!(ids(&table.derive(&rows, false)), vec![2, 3, 1]);
    }

    #[test]
    fn tri_state_cycle_clears_sort() {
        let mut table = controller(TableConfig::default().sort_cycle(crate::SortCycle::TriState));
        table.toggle_sort("name");
        table.toggle_sort("name");
        assert_eq!(table.state().sorting, vec![SortKey::new("name", Dir::Desc)]);
        table.toggle_sort("name");
        assert!(table.state().sorting.is_empty());
    }

    #[test]
    fn global_filter_uses_searchable_columns_only() {
        let rows = items(12);
        let mut table = controller(TableConfig::default());
        table.set_global_filter("ITEM-1");
        assert_eq!(ids(&table.derive(&rows, false)), vec![1, 10, 11, 12]);

        // `id` is not searchable, so "7" only matches through the name
        table.set_global_filter("7");
        assert_eq!(ids(&table.derive(&rows, false)), vec![7]);
    }

    #[test]
    fn filters_on_non_filterable_columns_are_ignored() {
        let rows = items(6);
        let mut table = controller(TableConfig::default());
        table.set_column_filter(ColumnFilter::text("score", "3"));
        assert_eq!(table.derive(&rows, false).filtered_count, 6);

        table.set_column_filter(ColumnFilter::text("name", "-0"));
        table.set_column_filter(ColumnFilter::text("name", "5"));
        assert_eq!(ids(&table.derive(&rows, false)), vec![5]);

        table.reset_filters();
        assert_eq!(table.derive(&rows, false).filtered_count, 6);
    }

    #[test]
    fn collapsed_truncates_to_preview() {
        let rows = items(10);
        let mut table = controller(TableConfig::default().expandable(3));
        let view = table.derive(&rows, false);
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert!(view.show_expand_button);
        assert!(!view.is_expanded);
        assert_eq!(view.hidden_count(), 7);

        table.toggle_expanded();
        let view = table.derive(&rows, false);
        assert_eq!(view.display_rows.len(), 10);
        assert_eq!(view.effective_page_size, 10);
        assert!(view.show_expand_button);
    }

    #[test]
    fn expansion_resets_paging() {
        let rows = items(25);
        let mut table = controller(TableConfig::default().expandable(3));
        table.toggle_expanded();
        table.derive(&rows, false);
        table.next_page();
        assert_eq!(table.pagination().page_index, 1);

        table.toggle_expanded();
        assert_eq!(
            table.pagination(),
            Pagination {
                page_index: 0,
                page_size: 3
            }
        );
    }

    #[test]
    fn toggle_expanded_ignored_when_not_expandable() {
        let mut table = controller(TableConfig::default());
        table.toggle_expanded();
        assert!(table.state().is_expanded);
    }

    #[test]
    fn no_expand_button_when_rows_fit() {
        let rows = items(3);
        let table = controller(TableConfig::default().expandable(3));
        assert!(!table.derive(&rows, false).show_expand_button);
    }

    #[test]
    fn skeleton_requires_opt_in() {
        let rows = items(2);
        assert!(!controller(TableConfig::default())
            .derive(&rows, true)
            .should_show_skeleton);
        assert!(controller(TableConfig::default().show_skeleton(true))
            .derive(&rows, true)
            .should_show_skeleton);
    }

    #[test]
    fn visibility_hides_columns() {
        let rows = items(1);
        let mut table = controller(TableConfig::default());
        table.toggle_column_visibility("score");
        let view = table.derive(&rows, false);
        let visible: Vec<_> = view.visible_columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(visible, vec!["id", "name"]);
    }

    #[test]
    fn recompiled_columns_start_at_their_default_visibility() {
        let rows = items(1);
        let callbacks = RowCallbacks::new();
        let names: TableDefinition<Item> =
            TableDefinition::new().field(FieldDefinition::new("name"));
        let mut table = TableController::new(
            crate::compile::compile(&names, None, &callbacks),
            TableConfig::default(),
        );
        table.derive(&rows, false);

        let wider = names
            .clone()
            .field(FieldDefinition::new("email").hidden())
            .field(FieldDefinition::new("score"));
        table.set_column_visibility("score", false);
        table.set_columns(crate::compile::compile(&wider, None, &callbacks));

        let view = table.derive(&rows, false);
        let visible: Vec<_> = view.visible_columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(visible, vec!["name"]);
    }

    #[test]
    fn page_actions_before_any_derive_see_one_page() {
        let mut table = controller(TableConfig::default().page_size(2));
        assert_eq!(table.page_count(), 1);
        assert!(!table.can_next_page());
        table.next_page();
        table.set_page_index(4);
        assert_eq!(table.pagination().page_index, 0);

        let rows = items(5);
        table.derive(&rows, false);
        assert_eq!(table.page_count(), 3);
        table.set_page_index(4);
        assert_eq!(table.pagination().page_index, 2);
    }

    #[test]
    fn row_ids_and_selection() {
        let rows = items(3);
        let mut table = controller(TableConfig::default());
        assert_eq!(table.row_id_of(&rows[1]), "2");

        table.toggle_row_selected(&rows[1]);
        assert!(table.is_row_selected(&rows[1]));
        let selected: Vec<u32> = table.selected_rows(&rows).iter().map(|i| i.id).collect();
        assert_eq!(selected, vec![2]);

        // The selected row disappears from the input
        let remaining = vec![rows[0].clone(), rows[2].clone()];
        assert!(table.selected_rows(&remaining).is_empty());
    }

    #[test]
    fn row_id_override() {
        let rows = items(1);
        let table = controller(TableConfig::default()).with_row_id(|i: &Item| i.name.clone());
        assert_eq!(table.row_id_of(&rows[0]), "item-01");
    }

    #[test]
    fn set_page_size_returns_to_first_page() {
        let rows = items(30);
        let mut table = controller(TableConfig::default());
        table.derive(&rows, false);
        table.next_page();
        table.set_page_size(4);
        let view = table.derive(&rows, false);
        assert_eq!(view.page_index, 0);
        assert_eq!(view.page_count, 8);
    }
}
