//! The renderer shell.
//!
//! [`TableShell`] picks one of four mutually exclusive presentations on
//! every render and builds a serializable view model for it:
//!
//! | State | When |
//! |-------|------|
//! | `Error` | an error is present, whatever else is true |
//! | `Skeleton` | loading with skeletons enabled |
//! | `Empty` | no rows at all and not loading |
//! | `Populated` | otherwise: toolbar, grid and footer |
//!
//! Host callbacks are forwarded verbatim; the shell never decides on its
//! own to retry, add or open a row.

use std::fmt;
use std::rc::Rc;

use gridwork_query::{Dir, GridRow};
use log::trace;
use serde::Serialize;

use crate::compile::{CellContent, RowAction, RowCallback};
use crate::controller::{TableController, TableView};

/// A callback without arguments.
pub type HostCallback = Rc<dyn Fn()>;

/// Callbacks supplied by the host application.
pub struct HostCallbacks<R> {
    pub on_row_click: Option<RowCallback<R>>,
    pub on_add_click: Option<HostCallback>,
    pub on_retry: Option<HostCallback>,
}

impl<R> HostCallbacks<R> {
    pub fn new() -> Self {
        HostCallbacks {
            on_row_click: None,
            on_add_click: None,
            on_retry: None,
        }
    }

    pub fn on_row_click(mut self, f: impl Fn(&R) + 'static) -> Self {
        self.on_row_click = Some(Rc::new(f));
        self
    }

    pub fn on_add_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_add_click = Some(Rc::new(f));
        self
    }

    pub fn on_retry(mut self, f: impl Fn() + 'static) -> Self {
        self.on_retry = Some(Rc::new(f));
        self
    }
}

impl<R> Default for HostCallbacks<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// The inputs of one render: the rows plus the host's loading and error
/// status.
#[derive(Debug)]
pub struct Snapshot<'a, R> {
    pub rows: &'a [R],
    pub is_loading: bool,
    pub error: Option<&'a str>,
}

impl<'a, R> Snapshot<'a, R> {
    /// Loaded rows, no error.
    pub fn new(rows: &'a [R]) -> Self {
        Snapshot {
            rows,
            is_loading: false,
            error: None,
        }
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn error(mut self, message: &'a str) -> Self {
        self.error = Some(message);
        self
    }
}

/// Which presentation a render produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellState {
    Error,
    Skeleton,
    Empty,
    Populated,
}

/// Chooses the presentation. Error outranks loading, loading outranks
/// emptiness.
pub fn select_state(
    has_error: bool,
    should_show_skeleton: bool,
    has_data: bool,
    is_loading: bool,
) -> ShellState {
    if has_error {
        ShellState::Error
    } else if should_show_skeleton {
        ShellState::Skeleton
    } else if !has_data && !is_loading {
        ShellState::Empty
    } else {
        ShellState::Populated
    }
}

/// A rendered table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Presentation {
    Error {
        message: String,
        retry_available: bool,
    },
    Skeleton {
        headers: Vec<HeaderView>,
        rows: usize,
    },
    Empty {
        message: String,
        add_button: Option<ButtonView>,
    },
    Populated {
        toolbar: Toolbar,
        grid: Grid,
        footer: Footer,
    },
}

impl Presentation {
    pub fn state(&self) -> ShellState {
        match self {
            Presentation::Error { .. } => ShellState::Error,
            Presentation::Skeleton { .. } => ShellState::Skeleton,
            Presentation::Empty { .. } => ShellState::Empty,
            Presentation::Populated { .. } => ShellState::Populated,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub id: String,
    pub label: String,
    /// The header exposes a sort toggle.
    pub sortable: bool,
    /// Current direction, when this column is a sort key.
    pub sorted: Option<Dir>,
    pub width: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Toolbar {
    pub search_placeholder: String,
    pub query: String,
    pub add_button: Option<ButtonView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub headers: Vec<HeaderView>,
    pub body: GridBody,
    pub sticky_header: bool,
    pub max_height: Option<String>,
}

/// The grid body: rows, or a single placeholder spanning every visible
/// column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridBody {
    Rows { rows: Vec<RowView> },
    NoResults { colspan: usize, message: String },
    Loading { colspan: usize, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: String,
    pub selected: bool,
    pub cells: Vec<CellContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub pagination: Option<PaginationView>,
    pub expand: Option<ExpandControl>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub filtered_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ExpandControl {
    /// Show all rows; `hidden` rows are currently cut off.
    Expand { hidden: usize },
    /// Go back to the preview rows.
    Collapse,
}

/// Presentation-state selection and host callback forwarding around a
/// [`TableController`].
pub struct TableShell<R> {
    controller: TableController<R>,
    callbacks: HostCallbacks<R>,
}

impl<R: GridRow> TableShell<R> {
    pub fn new(controller: TableController<R>, callbacks: HostCallbacks<R>) -> Self {
        TableShell {
            controller,
            callbacks,
        }
    }

    pub fn controller(&self) -> &TableController<R> {
        &self.controller
    }

    /// User actions (sorting, filtering, paging) go through the controller.
    pub fn controller_mut(&mut self) -> &mut TableController<R> {
        &mut self.controller
    }

    /// Renders one snapshot.
    pub fn render(&self, snapshot: &Snapshot<'_, R>) -> Presentation {
        let view = self.controller.derive(snapshot.rows, snapshot.is_loading);
        let state = select_state(
            snapshot.error.is_some(),
            view.should_show_skeleton,
            view.has_data,
            snapshot.is_loading,
        );
        trace!("shell state {:?}", state);

        let config = self.controller.config();
        match state {
            ShellState::Error => Presentation::Error {
                message: snapshot.error.unwrap_or_default().to_string(),
                retry_available: self.callbacks.on_retry.is_some(),
            },
            ShellState::Skeleton => Presentation::Skeleton {
                headers: self.headers(&view),
                rows: config.skeleton_rows,
            },
            ShellState::Empty => Presentation::Empty {
                message: config.empty_message.clone(),
                add_button: self.add_button(),
            },
            ShellState::Populated => self.populated(&view, snapshot.is_loading),
        }
    }

    fn add_button(&self) -> Option<ButtonView> {
        self.callbacks.on_add_click.as_ref().map(|_| ButtonView {
            label: self.controller.config().add_button_label.clone(),
        })
    }

    fn headers(&self, view: &TableView<'_, R>) -> Vec<HeaderView> {
        let sorting = &self.controller.state().sorting;
        view.visible_columns
            .iter()
            .map(|column| HeaderView {
                id: column.id.clone(),
                label: column.header.label().to_string(),
                sortable: column.header.is_sortable(),
                sorted: sorting
                    .iter()
                    .find(|k| k.field == column.id && column.enable_sorting)
                    .map(|k| k.dir),
                width: column.size,
            })
            .collect()
    }

    fn populated(&self, view: &TableView<'_, R>, is_loading: bool) -> Presentation {
        let config = self.controller.config();
        let headers = self.headers(view);
        let colspan = headers.len();

        let body = if !view.display_rows.is_empty() {
            GridBody::Rows {
                rows: view
                    .display_rows
                    .iter()
                    .map(|row| RowView {
                        id: self.controller.row_id_of(row),
                        selected: self.controller.is_row_selected(row),
                        cells: view
                            .visible_columns
                            .iter()
                            .map(|column| column.render_cell(row))
                            .collect(),
                    })
                    .collect(),
            }
        } else if is_loading {
            GridBody::Loading {
                colspan,
                message: config.loading_message.clone(),
            }
        } else {
            GridBody::NoResults {
                colspan,
                message: config.no_results_message.clone(),
            }
        };

        let pagination = PaginationView {
            page_index: view.page_index,
            page_count: view.page_count,
            page_size: view.effective_page_size,
            filtered_count: view.filtered_count,
            can_previous: view.page_index > 0,
            can_next: view.page_index + 1 < view.page_count,
        };

        let footer = if !config.expandable {
            Footer {
                pagination: Some(pagination),
                expand: None,
            }
        } else if !view.is_expanded {
            Footer {
                pagination: None,
                expand: view.show_expand_button.then(|| ExpandControl::Expand {
                    hidden: view.hidden_count(),
                }),
            }
        } else {
            Footer {
                pagination: Some(pagination),
                expand: view.show_expand_button.then_some(ExpandControl::Collapse),
            }
        };

        Presentation::Populated {
            toolbar: Toolbar {
                search_placeholder: config.search_placeholder.clone(),
                query: self.controller.state().global_filter.clone(),
                add_button: self.add_button(),
            },
            grid: Grid {
                headers,
                body,
                sticky_header: config.sticky_header,
                max_height: config.max_height.clone(),
            },
            footer,
        }
    }

    /// Forwards a row click. Returns `false` without a callback.
    pub fn click_row(&self, row: &R) -> bool {
        forward(self.callbacks.on_row_click.as_ref(), |f| f(row))
    }

    /// Forwards an add-button click.
    pub fn click_add(&self) -> bool {
        forward(self.callbacks.on_add_click.as_ref(), |f| f())
    }

    /// Forwards a retry request from the error state.
    pub fn retry(&self) -> bool {
        forward(self.callbacks.on_retry.as_ref(), |f| f())
    }

    /// Activates an action affordance in a column's cell.
    pub fn activate(&self, row: &R, column_id: &str, action: RowAction) -> bool {
        self.controller
            .column(column_id)
            .is_some_and(|column| column.activate(row, action))
    }
}

fn forward<F: ?Sized>(callback: Option<&Rc<F>>, call: impl FnOnce(&F)) -> bool {
    match callback {
        Some(f) => {
            call(f);
            true
        }
        None => false,
    }
}

impl<R> fmt::Debug for TableShell<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableShell")
            .field("row_click", &self.callbacks.on_row_click.is_some())
            .field("add_click", &self.callbacks.on_add_click.is_some())
            .field("retry", &self.callbacks.on_retry.is_some())
            .finish_non_exhaustive()
    }
}
