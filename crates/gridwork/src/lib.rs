//! # gridwork - Declarative tables over in-memory rows
//!
//! gridwork turns a per-entity table definition into sortable, filterable,
//! paginated and expandable table views, without per-entity plumbing.
//!
//! ## Layers
//!
//! | Layer | Type | Role |
//! |-------|------|------|
//! | Definition | [`TableDefinition`], [`FieldDefinition`] | What columns exist and what they allow |
//! | Compiler | [`compile`] → [`ColumnModel`] | Renderer-ready headers, cells and capability flags |
//! | State | [`TableStore`], [`TableState`] | Sorting, filters, visibility, selection, expansion |
//! | Controller | [`TableController`] → [`TableView`] | Filter, search, sort, paginate |
//! | Shell | [`TableShell`] → [`Presentation`] | Error, skeleton, empty or populated |
//!
//! ## Quick Start
//!
//! ```rust
//! use gridwork::{
//!     FieldDefinition, GridRow, HostCallbacks, Presentation, RowCallbacks, Snapshot,
//!     TableConfig, TableController, TableDefinition, TableShell,
//! };
//!
//! #[derive(GridRow)]
//! struct Member {
//!     #[grid(Number, id)]
//!     id: u32,
//!     #[grid(String)]
//!     name: String,
//!     #[grid(String)]
//!     team: String,
//! }
//!
//! let definition: TableDefinition<Member> = TableDefinition::new()
//!     .label(Member::NAME, "Name")
//!     .label(Member::TEAM, "Team")
//!     .field(FieldDefinition::new(Member::NAME))
//!     .field(FieldDefinition::new(Member::TEAM).filterable(true));
//!
//! let controller = TableController::from_definition(
//!     &definition,
//!     TableConfig::default(),
//!     &RowCallbacks::new(),
//! );
//! let mut shell = TableShell::new(controller, HostCallbacks::new());
//!
//! let rows = vec![
//!     Member { id: 1, name: "Ada".into(), team: "Core".into() },
//!     Member { id: 2, name: "Brian".into(), team: "Infra".into() },
//! ];
//!
//! shell.controller_mut().set_global_filter("infra");
//! let presentation = shell.render(&Snapshot::new(&rows));
//! assert!(matches!(presentation, Presentation::Populated { .. }));
//! assert!(presentation.to_string().contains("Brian"));
//! assert!(!presentation.to_string().contains("Ada"));
//! ```
//!
//! Rows are anything implementing [`GridRow`]: derive it, implement it by
//! hand, or use `serde_json::Value` rows directly with dot-path keys.

mod compile;
mod config;
mod controller;
mod definition;
mod error;
mod render;
mod shell;
mod state;

pub use compile::{
    compile, compile_strict, compile_with_config, CellContent, CellRenderer, ColumnAccessor,
    ColumnModel, Header, RowAction, RowCallback, RowCallbacks,
};
pub use config::{SortCycle, TableConfig};
pub use controller::{Pagination, RowIdFn, TableController, TableView};
pub use definition::{
    Accessor, CellFn, CellSpec, CellTemplate, FieldDefinition, TableDefinition, ValueFn,
};
pub use error::{ConfigError, DefinitionError, GridError, Result};
pub use render::truncate_to_width;
pub use shell::{
    select_state, ButtonView, ExpandControl, Footer, Grid, GridBody, HeaderView, HostCallback,
    HostCallbacks, PaginationView, Presentation, RowView, ShellState, Snapshot, TableShell,
    Toolbar,
};
pub use state::{TableState, TableStore};

pub use gridwork_query as query;
pub use gridwork_query::{
    ColumnFilter, Dir, FilterValue, GridRow, GridTimestamp, Number, Op, Query, SortKey, Timestamp,
    Value,
};

// Re-export the derive macro under the trait's name
pub use gridwork_macros::GridRow;
