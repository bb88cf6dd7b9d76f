//! The column compiler.
//!
//! Turns a [`TableDefinition`] into renderer-ready [`ColumnModel`]s. The
//! compiler is pure: it reads the definition and returns new models, and
//! compiling the same inputs twice yields columns that behave identically.
//! Column models are never mutated; when the definition or the config
//! changes, compile again.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use gridwork_query::{Dir, GridRow, Value};
use log::debug;
use serde::Serialize;

use crate::config::{SortCycle, TableConfig};
use crate::definition::{Accessor, CellSpec, CellTemplate, FieldDefinition, TableDefinition};
use crate::error::DefinitionError;

/// A callback receiving a row.
pub type RowCallback<R> = Rc<dyn Fn(&R)>;

/// Row-level action callbacks bound into action cells.
pub struct RowCallbacks<R> {
    pub on_edit: Option<RowCallback<R>>,
    pub on_delete: Option<RowCallback<R>>,
}

impl<R> RowCallbacks<R> {
    /// No callbacks.
    pub fn new() -> Self {
        RowCallbacks {
            on_edit: None,
            on_delete: None,
        }
    }

    /// Sets the edit callback.
    pub fn on_edit(mut self, f: impl Fn(&R) + 'static) -> Self {
        self.on_edit = Some(Rc::new(f));
        self
    }

    /// Sets the delete callback.
    pub fn on_delete(mut self, f: impl Fn(&R) + 'static) -> Self {
        self.on_delete = Some(Rc::new(f));
        self
    }

    /// The actions whose callbacks are present, in display order.
    pub fn available(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        if self.on_edit.is_some() {
            actions.push(RowAction::Edit);
        }
        if self.on_delete.is_some() {
            actions.push(RowAction::Delete);
        }
        actions
    }

    fn callback(&self, action: RowAction) -> Option<&RowCallback<R>> {
        match action {
            RowAction::Edit => self.on_edit.as_ref(),
            RowAction::Delete => self.on_delete.as_ref(),
        }
    }
}

impl<R> Default for RowCallbacks<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RowCallbacks<R> {
    fn clone(&self) -> Self {
        RowCallbacks {
            on_edit: self.on_edit.clone(),
            on_delete: self.on_delete.clone(),
        }
    }
}

/// An affordance in an action cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Delete => "Delete",
        }
    }
}

/// What a cell renderer produces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellContent {
    /// Plain text.
    Text(String),
    /// Action affordances.
    Actions(Vec<RowAction>),
}

impl CellContent {
    /// Text form, as the plain-text renderer shows it.
    pub fn to_text(&self) -> String {
        match self {
            CellContent::Text(text) => text.clone(),
            CellContent::Actions(actions) => actions
                .iter()
                .map(|a| format!("[{}]", a.label()))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// A column header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Header {
    /// Interactive header exposing a sort toggle.
    Sortable { label: String },
    /// Plain label.
    Static { label: String },
}

impl Header {
    pub fn label(&self) -> &str {
        match self {
            Header::Sortable { label } | Header::Static { label } => label,
        }
    }

    pub fn is_sortable(&self) -> bool {
        matches!(self, Header::Sortable { .. })
    }

    /// The sort direction after activating this header once. Static headers
    /// leave the direction unchanged.
    pub fn toggle(&self, current: Option<Dir>, cycle: SortCycle) -> Option<Dir> {
        match self {
            Header::Sortable { .. } => cycle.next(current),
            Header::Static { .. } => current,
        }
    }
}

/// The normalized accessor of a column. Key paths and functions read the
/// same way; columns without an accessor read [`Value::None`].
pub struct ColumnAccessor<R>(Option<Accessor<R>>);

impl<R: GridRow> ColumnAccessor<R> {
    /// Reads the column value from a row.
    pub fn read<'a>(&self, row: &'a R) -> Value<'a> {
        match &self.0 {
            Some(accessor) => accessor.read(row),
            None => Value::None,
        }
    }
}

impl<R> ColumnAccessor<R> {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl<R> Clone for ColumnAccessor<R> {
    fn clone(&self) -> Self {
        ColumnAccessor(self.0.clone())
    }
}

/// A resolved cell renderer.
pub type CellRenderer<R> = Rc<dyn Fn(&R) -> CellContent>;

/// A compiled, renderer-ready column.
pub struct ColumnModel<R> {
    pub id: String,
    pub header: Header,
    pub enable_sorting: bool,
    pub enable_global_filter: bool,
    pub enable_column_filter: bool,
    /// Size hint in display columns.
    pub size: Option<usize>,
    pub default_visible: bool,
    accessor: ColumnAccessor<R>,
    cell: CellRenderer<R>,
    actions: RowCallbacks<R>,
}

impl<R: GridRow> ColumnModel<R> {
    /// Reads this column's value from a row.
    pub fn value<'a>(&self, row: &'a R) -> Value<'a> {
        self.accessor.read(row)
    }

    /// Renders this column's cell for a row.
    pub fn render_cell(&self, row: &R) -> CellContent {
        (self.cell)(row)
    }
}

impl<R> ColumnModel<R> {
    pub fn accessor(&self) -> &ColumnAccessor<R> {
        &self.accessor
    }

    /// Invokes the callback bound to an action affordance. Returns `false`
    /// when no callback is bound for this column.
    pub fn activate(&self, row: &R, action: RowAction) -> bool {
        match self.actions.callback(action) {
            Some(callback) => {
                callback(row);
                true
            }
            None => false,
        }
    }
}

impl<R> Clone for ColumnModel<R> {
    fn clone(&self) -> Self {
        ColumnModel {
            id: self.id.clone(),
            header: self.header.clone(),
            enable_sorting: self.enable_sorting,
            enable_global_filter: self.enable_global_filter,
            enable_column_filter: self.enable_column_filter,
            size: self.size,
            default_visible: self.default_visible,
            accessor: self.accessor.clone(),
            cell: Rc::clone(&self.cell),
            actions: self.actions.clone(),
        }
    }
}

impl<R> fmt::Debug for ColumnModel<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnModel")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_global_filter", &self.enable_global_filter)
            .field("enable_column_filter", &self.enable_column_filter)
            .field("size", &self.size)
            .field("default_visible", &self.default_visible)
            .finish_non_exhaustive()
    }
}

/// Compiles a definition into column models.
///
/// With `selectable`, only the listed ids are kept, in list order; ids the
/// definition does not have are dropped. When field ids repeat, the later
/// declaration wins at the position of the first.
pub fn compile<R>(
    definition: &TableDefinition<R>,
    selectable: Option<&[&str]>,
    callbacks: &RowCallbacks<R>,
) -> Vec<ColumnModel<R>>
where
    R: GridRow + 'static,
{
    let fields = select(dedupe(definition.fields()), selectable);
    build(definition, fields, &BTreeMap::new(), callbacks)
}

/// Like [`compile`], but rejects duplicate field ids and unknown selectable
/// ids.
pub fn compile_strict<R>(
    definition: &TableDefinition<R>,
    selectable: Option<&[&str]>,
    callbacks: &RowCallbacks<R>,
) -> Result<Vec<ColumnModel<R>>, DefinitionError>
where
    R: GridRow + 'static,
{
    definition.validate()?;
    if let Some(ids) = selectable {
        for id in ids {
            if !definition.fields().iter().any(|f| f.id == *id) {
                return Err(DefinitionError::UnknownColumn(id.to_string()));
            }
        }
    }
    Ok(compile(definition, selectable, callbacks))
}

/// Compiles with the column allow-list and label overrides of a config.
pub fn compile_with_config<R>(
    definition: &TableDefinition<R>,
    config: &TableConfig,
    callbacks: &RowCallbacks<R>,
) -> Vec<ColumnModel<R>>
where
    R: GridRow + 'static,
{
    let selectable: Option<Vec<&str>> = config
        .selectable_columns
        .as_ref()
        .map(|ids| ids.iter().map(String::as_str).collect());
    let fields = select(dedupe(definition.fields()), selectable.as_deref());
    build(definition, fields, &config.column_labels, callbacks)
}

fn dedupe<R>(fields: &[FieldDefinition<R>]) -> Vec<&FieldDefinition<R>> {
    let mut kept: Vec<&FieldDefinition<R>> = Vec::with_capacity(fields.len());
    for field in fields {
        match kept.iter().position(|k| k.id == field.id) {
            Some(index) => {
                debug!("field '{}' declared twice; later declaration wins", field.id);
                kept[index] = field;
            }
            None => kept.push(field),
        }
    }
    kept
}

fn select<'d, R>(
    fields: Vec<&'d FieldDefinition<R>>,
    selectable: Option<&[&str]>,
) -> Vec<&'d FieldDefinition<R>> {
    let Some(ids) = selectable else {
        return fields;
    };
    let mut selected: Vec<&'d FieldDefinition<R>> = Vec::with_capacity(ids.len());
    for id in ids {
        if selected.iter().any(|f| f.id == *id) {
            continue;
        }
        match fields.iter().find(|f| f.id == *id) {
            Some(field) => selected.push(field),
            None => debug!("dropping unknown selectable column '{}'", id),
        }
    }
    selected
}

fn build<R>(
    definition: &TableDefinition<R>,
    fields: Vec<&FieldDefinition<R>>,
    label_overrides: &BTreeMap<String, String>,
    callbacks: &RowCallbacks<R>,
) -> Vec<ColumnModel<R>>
where
    R: GridRow + 'static,
{
    fields
        .into_iter()
        .map(|field| {
            let label = label_overrides
                .get(&field.id)
                .cloned()
                .unwrap_or_else(|| definition.label_for(&field.id).to_string());
            compile_field(field, label, callbacks)
        })
        .collect()
}

fn compile_field<R>(
    field: &FieldDefinition<R>,
    label: String,
    callbacks: &RowCallbacks<R>,
) -> ColumnModel<R>
where
    R: GridRow + 'static,
{
    let header = if field.sortable {
        Header::Sortable { label }
    } else {
        Header::Static { label }
    };

    let accessor = ColumnAccessor(field.accessor.clone());
    let is_actions = matches!(field.cell, CellSpec::Template(CellTemplate::Actions));
    let cell = cell_renderer(&field.cell, &accessor, callbacks);

    ColumnModel {
        id: field.id.clone(),
        header,
        enable_sorting: field.sortable,
        enable_global_filter: field.searchable,
        enable_column_filter: field.filterable,
        size: field.width,
        default_visible: field.default_visible,
        accessor,
        cell,
        actions: if is_actions {
            callbacks.clone()
        } else {
            RowCallbacks::new()
        },
    }
}

/// Resolution order: custom renderer, then named template, then an empty
/// cell for fields without an accessor.
fn cell_renderer<R>(
    spec: &CellSpec<R>,
    accessor: &ColumnAccessor<R>,
    callbacks: &RowCallbacks<R>,
) -> CellRenderer<R>
where
    R: GridRow + 'static,
{
    match spec {
        CellSpec::Custom(render) => {
            let render = Rc::clone(render);
            let accessor = accessor.clone();
            Rc::new(move |row: &R| CellContent::Text(render(row, &accessor.read(row))))
        }
        CellSpec::Template(CellTemplate::Actions) => {
            let actions = callbacks.available();
            Rc::new(move |_: &R| CellContent::Actions(actions.clone()))
        }
        CellSpec::Template(CellTemplate::Default) | CellSpec::Default => {
            if accessor.is_present() {
                let accessor = accessor.clone();
                Rc::new(move |row: &R| CellContent::Text(accessor.read(row).to_text().into_owned()))
            } else {
                Rc::new(|_: &R| CellContent::Text(String::new()))
            }
        }
    }
}
