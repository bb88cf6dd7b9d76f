//! Declarative field and table definitions.
//!
//! A [`TableDefinition`] is written once per entity type and never changes
//! at runtime. Each [`FieldDefinition`] says how to read a value from a row,
//! what the user may do with the column (sort, search, filter) and how its
//! cells render.
//!
//! ```
//! use gridwork::{FieldDefinition, TableDefinition, Value};
//! # use gridwork::GridRow;
//! # struct User { first: String, last: String }
//! # impl GridRow for User {
//! #     fn field_value(&self, path: &str) -> Value<'_> {
//! #         match path { "first" => Value::from(self.first.as_str()), _ => Value::None }
//! #     }
//! #     fn row_fingerprint(&self) -> String { self.first.clone() }
//! # }
//!
//! let users: TableDefinition<User> = TableDefinition::new()
//!     .label("first", "First name")
//!     .field(FieldDefinition::new("first"))
//!     .field(FieldDefinition::computed("full_name", |u: &User| {
//!         Value::from(format!("{} {}", u.first, u.last))
//!     }))
//!     .field(FieldDefinition::actions("actions"));
//!
//! assert_eq!(users.label_for("first"), "First name");
//! assert_eq!(users.label_for("full_name"), "full_name");
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::rc::Rc;

use gridwork_query::{GridRow, Value};

use crate::error::DefinitionError;

/// A pure function reading a value from a row.
pub type ValueFn<R> = Rc<dyn for<'a> Fn(&'a R) -> Value<'a>>;

/// A custom cell renderer: receives the row and its accessor value.
pub type CellFn<R> = Rc<dyn Fn(&R, &Value<'_>) -> String>;

/// How a field reads its value from a row.
pub enum Accessor<R> {
    /// A key path resolved through [`GridRow::field_value`].
    Key(String),
    /// A pure function of the row.
    Fn(ValueFn<R>),
}

impl<R: GridRow> Accessor<R> {
    /// Reads the value from a row.
    pub fn read<'a>(&self, row: &'a R) -> Value<'a> {
        match self {
            Accessor::Key(path) => row.field_value(path),
            Accessor::Fn(f) => f(row),
        }
    }
}

impl<R> Clone for Accessor<R> {
    fn clone(&self) -> Self {
        match self {
            Accessor::Key(path) => Accessor::Key(path.clone()),
            Accessor::Fn(f) => Accessor::Fn(Rc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(path) => f.debug_tuple("Key").field(path).finish(),
            Accessor::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Named, built-in cell templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellTemplate {
    /// The accessor value as text.
    Default,
    /// Edit/delete affordances bound to the row callbacks.
    Actions,
}

/// How a field's cells render.
pub enum CellSpec<R> {
    /// Nothing specified: the accessor value as text, or an empty cell for
    /// fields without an accessor.
    Default,
    /// A named template.
    Template(CellTemplate),
    /// A custom renderer; takes precedence over everything else.
    Custom(CellFn<R>),
}

impl<R> Clone for CellSpec<R> {
    fn clone(&self) -> Self {
        match self {
            CellSpec::Default => CellSpec::Default,
            CellSpec::Template(t) => CellSpec::Template(*t),
            CellSpec::Custom(f) => CellSpec::Custom(Rc::clone(f)),
        }
    }
}

impl<R> fmt::Debug for CellSpec<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSpec::Default => f.write_str("Default"),
            CellSpec::Template(t) => f.debug_tuple("Template").field(t).finish(),
            CellSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One column of a table definition.
pub struct FieldDefinition<R> {
    /// Unique id within the table.
    pub id: String,
    /// How to read the value; `None` for pure action columns.
    pub accessor: Option<Accessor<R>>,
    /// The header toggles sorting.
    pub sortable: bool,
    /// The global filter looks at this field.
    pub searchable: bool,
    /// Column filters may target this field.
    pub filterable: bool,
    /// Cell rendering.
    pub cell: CellSpec<R>,
    /// Size hint in display columns.
    pub width: Option<usize>,
    /// Initial column visibility.
    pub default_visible: bool,
}

impl<R> FieldDefinition<R> {
    /// A field read by key path, where the path equals the id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        FieldDefinition {
            accessor: Some(Accessor::Key(id.clone())),
            id,
            sortable: true,
            searchable: true,
            filterable: false,
            cell: CellSpec::Default,
            width: None,
            default_visible: true,
        }
    }

    /// A field computed by a pure function of the row.
    pub fn computed<F>(id: impl Into<String>, f: F) -> Self
    where
        F: for<'a> Fn(&'a R) -> Value<'a> + 'static,
    {
        Self::new(id).accessor(Accessor::Fn(Rc::new(f)))
    }

    /// An action column: no accessor, edit/delete cells, not sortable or
    /// searchable.
    pub fn actions(id: impl Into<String>) -> Self {
        let mut field = Self::new(id).template(CellTemplate::Actions);
        field.accessor = None;
        field.sortable = false;
        field.searchable = false;
        field
    }

    /// Reads the value from a different key path.
    pub fn key(self, path: impl Into<String>) -> Self {
        self.accessor(Accessor::Key(path.into()))
    }

    /// Sets the accessor.
    pub fn accessor(mut self, accessor: Accessor<R>) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Removes the accessor.
    pub fn without_accessor(mut self) -> Self {
        self.accessor = None;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Sets the size hint in display columns.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Hides the column until the user shows it.
    pub fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }

    /// Uses a named cell template. Replaces any earlier `template` or
    /// [`render`](Self::render) call.
    pub fn template(mut self, template: CellTemplate) -> Self {
        self.cell = CellSpec::Template(template);
        self
    }

    /// Uses a custom cell renderer. Replaces any earlier
    /// [`template`](Self::template) or `render` call.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&R, &Value<'_>) -> String + 'static,
    {
        self.cell = CellSpec::Custom(Rc::new(f));
        self
    }
}

impl<R> Clone for FieldDefinition<R> {
    fn clone(&self) -> Self {
        FieldDefinition {
            id: self.id.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            searchable: self.searchable,
            filterable: self.filterable,
            cell: self.cell.clone(),
            width: self.width,
            default_visible: self.default_visible,
        }
    }
}

impl<R> fmt::Debug for FieldDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("filterable", &self.filterable)
            .field("cell", &self.cell)
            .field("width", &self.width)
            .field("default_visible", &self.default_visible)
            .finish()
    }
}

/// A label map plus an ordered list of fields.
pub struct TableDefinition<R> {
    labels: BTreeMap<String, String>,
    fields: Vec<FieldDefinition<R>>,
}

impl<R> TableDefinition<R> {
    /// Creates an empty definition.
    pub fn new() -> Self {
        TableDefinition {
            labels: BTreeMap::new(),
            fields: Vec::new(),
        }
    }

    /// Sets the display label for a field id.
    pub fn label(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(id.into(), label.into());
        self
    }

    /// Appends a field.
    pub fn field(mut self, field: FieldDefinition<R>) -> Self {
        self.fields.push(field);
        self
    }

    /// The fields in declaration order, duplicates included.
    pub fn fields(&self) -> &[FieldDefinition<R>] {
        &self.fields
    }

    /// The label map.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// The display label for an id; the id itself when unlabeled.
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.labels.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Checks that field ids are unique.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.id.as_str()) {
                return Err(DefinitionError::DuplicateField(field.id.clone()));
            }
        }
        Ok(())
    }
}

impl<R> Default for TableDefinition<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for TableDefinition<R> {
    fn clone(&self) -> Self {
        TableDefinition {
            labels: self.labels.clone(),
            fields: self.fields.clone(),
        }
    }
}

impl<R> fmt::Debug for TableDefinition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableDefinition")
            .field("labels", &self.labels)
            .field("fields", &self.fields)
            .finish()
    }
}
