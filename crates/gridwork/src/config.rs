//! Table configuration.
//!
//! [`TableConfig`] collects every presentation knob a table instance takes.
//! All fields have defaults, so a config file only needs to name what it
//! changes:
//!
//! ```yaml
//! page_size: 25
//! expandable: true
//! initial_row_count: 3
//! column_labels:
//!   email: E-mail
//! ```

use std::collections::BTreeMap;

use gridwork_query::Dir;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How repeated activation of a sortable header cycles its direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCycle {
    /// unsorted → asc → desc → asc → ...; never returns to unsorted.
    #[default]
    Toggle,
    /// unsorted → asc → desc → unsorted.
    TriState,
}

impl SortCycle {
    /// The direction after one activation, given the current one.
    pub fn next(self, current: Option<Dir>) -> Option<Dir> {
        match (self, current) {
            (_, None) => Some(Dir::Asc),
            (_, Some(Dir::Asc)) => Some(Dir::Desc),
            (SortCycle::Toggle, Some(Dir::Desc)) => Some(Dir::Asc),
            (SortCycle::TriState, Some(Dir::Desc)) => None,
        }
    }
}

/// Presentation settings for one table instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Placeholder shown in the empty search box.
    pub search_placeholder: String,
    /// Rows per page when paginating.
    pub page_size: usize,
    /// Rows shown while an expandable table is collapsed.
    pub initial_row_count: usize,
    /// Start collapsed, with an expand affordance.
    pub expandable: bool,
    /// Show skeleton rows while loading.
    pub show_skeleton: bool,
    /// Number of skeleton rows.
    pub skeleton_rows: usize,
    /// Keep the header visible while the body scrolls.
    pub sticky_header: bool,
    /// Body height limit, passed through to the host renderer.
    pub max_height: Option<String>,
    /// Header label overrides by column id.
    pub column_labels: BTreeMap<String, String>,
    /// Explicit column allow-list and order.
    pub selectable_columns: Option<Vec<String>>,
    /// Label of the add button (rendered only with an add callback).
    pub add_button_label: String,
    /// Header sort cycle.
    pub sort_cycle: SortCycle,
    /// Message shown when there are no rows at all.
    pub empty_message: String,
    /// Message shown when filtering leaves no rows.
    pub no_results_message: String,
    /// Body placeholder while loading without skeletons.
    pub loading_message: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            search_placeholder: "Search...".to_string(),
            page_size: 10,
            initial_row_count: 5,
            expandable: false,
            show_skeleton: false,
            skeleton_rows: 5,
            sticky_header: false,
            max_height: None,
            column_labels: BTreeMap::new(),
            selectable_columns: None,
            add_button_label: "Add".to_string(),
            sort_cycle: SortCycle::Toggle,
            empty_message: "No data available.".to_string(),
            no_results_message: "No results.".to_string(),
            loading_message: "Loading...".to_string(),
        }
    }
}

impl TableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a YAML config.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the controller cannot paginate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.initial_row_count == 0 {
            return Err(ConfigError::ZeroInitialRowCount);
        }
        Ok(())
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Enables expandable mode with the given preview row count.
    pub fn expandable(mut self, initial_row_count: usize) -> Self {
        self.expandable = true;
        self.initial_row_count = initial_row_count;
        self
    }

    /// Enables skeleton rows while loading.
    pub fn show_skeleton(mut self, show: bool) -> Self {
        self.show_skeleton = show;
        self
    }

    /// Overrides a column's header label.
    pub fn label(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.column_labels.insert(id.into(), label.into());
        self
    }

    /// Restricts and orders the compiled columns.
    pub fn selectable_columns<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selectable_columns = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the header sort cycle.
    pub fn sort_cycle(mut self, cycle: SortCycle) -> Self {
        self.sort_cycle = cycle;
        self
    }

    /// Rows per page in the current expansion state.
    pub fn effective_page_size(&self, is_expanded: bool) -> usize {
        if self.expandable && !is_expanded {
            self.initial_row_count
        } else {
            self.page_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.initial_row_count, 5);
        assert_eq!(config.search_placeholder, "Search...");
        assert!(!config.expandable);
        assert_eq!(config.sort_cycle, SortCycle::Toggle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = TableConfig::from_yaml(
            "page_size: 25\nexpandable: true\ncolumn_labels:\n  email: E-mail\nsort_cycle: tri_state\n",
        )
        .unwrap();
        assert_eq!(config.page_size, 25);
        assert!(config.expandable);
        assert_eq!(config.initial_row_count, 5);
        assert_eq!(config.column_labels["email"], "E-mail");
        assert_eq!(config.sort_cycle, SortCycle::TriState);
    }

    #[test]
    fn json_config() {
        let config =
            TableConfig::from_json(r#"{"selectable_columns": ["name", "email"]}"#).unwrap();
        assert_eq!(
            config.selectable_columns,
            Some(vec!["name".to_string(), "email".to_string()])
        );
    }

    #[test]
    fn zero_sizes_rejected() {
        assert_eq!(
            TableConfig::from_json(r#"{"page_size": 0}"#),
            Err(ConfigError::ZeroPageSize)
        );
        assert_eq!(
            TableConfig::from_yaml("initial_row_count: 0"),
            Err(ConfigError::ZeroInitialRowCount)
        );
    }

    #[test]
    fn malformed_config() {
        let err = TableConfig::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toggle_cycle_never_unsorts() {
        let cycle = SortCycle::Toggle;
        assert_eq!(cycle.next(None), Some(Dir::Asc));
        assert_eq!(cycle.next(Some(Dir::Asc)), Some(Dir::Desc));
        assert_eq!(cycle.next(Some(Dir::Desc)), Some(Dir::Asc));
    }

    #[test]
    fn tri_state_cycle_returns_to_unsorted() {
        let cycle = SortCycle::TriState;
        assert_eq!(cycle.next(Some(Dir::Desc)), None);
    }

    #[test]
    fn effective_page_size() {
        let config = TableConfig::default().expandable(3);
        assert_eq!(config.effective_page_size(false), 3);
        assert_eq!(config.effective_page_size(true), 10);
        assert_eq!(TableConfig::default().effective_page_size(false), 10);
    }
}
