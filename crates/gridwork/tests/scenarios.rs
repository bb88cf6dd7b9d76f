//! End-to-end behavior of the controller and shell over typed rows.

use std::cell::RefCell;
use std::rc::Rc;

use gridwork::{
    ColumnFilter, ExpandControl, FieldDefinition, GridBody, GridRow, HostCallbacks, Presentation,
    RowAction, RowCallbacks, ShellState, Snapshot, TableConfig, TableController, TableDefinition,
    TableShell,
};

#[derive(Debug, Clone, GridRow)]
struct Order {
    #[grid(Number, id)]
    id: u32,
    #[grid(String)]
    customer: String,
    #[grid(String)]
    status: String,
    #[grid(Number)]
    total: u32,
}

fn orders(n: u32) -> Vec<Order> {
    (1..=n)
        .map(|id| Order {
            id,
            customer: format!("customer-{:02}", id),
            status: if id % 2 == 0 { "paid" } else { "open" }.to_string(),
            total: id * 10,
        })
        .collect()
}

fn definition() -> TableDefinition<Order> {
    TableDefinition::new()
        .label(Order::CUSTOMER, "Customer")
        .label(Order::STATUS, "Status")
        .label(Order::TOTAL, "Total")
        .field(FieldDefinition::new(Order::CUSTOMER))
        .field(FieldDefinition::new(Order::STATUS).filterable(true))
        .field(FieldDefinition::new(Order::TOTAL).searchable(false))
}

fn shell(config: TableConfig, callbacks: HostCallbacks<Order>) -> TableShell<Order> {
    let controller = TableController::from_definition(&definition(), config, &RowCallbacks::new());
    TableShell::new(controller, callbacks)
}

#[test]
fn first_page_of_paginated_table() {
    let rows = orders(10);
    let table =
        TableController::from_definition(&definition(), TableConfig::default().page_size(5), &RowCallbacks::new());

    let view = table.derive(&rows, false);
    assert_eq!(view.display_rows.len(), 5);
    assert_eq!(view.page_count, 2);
    assert_eq!(view.filtered_count, 10);
    assert!(!view.show_expand_button);
}

#[test]
fn collapsed_expandable_table_shows_preview() {
    let rows = orders(10);
    let table = TableController::from_definition(
        &definition(),
        TableConfig::default().expandable(3),
        &RowCallbacks::new(),
    );

    let view = table.derive(&rows, false);
    assert_eq!(view.display_rows.len(), 3);
    assert!(view.show_expand_button);
    assert!(!view.is_expanded);
}

#[test]
fn error_outranks_loading() {
    let rows = orders(4);
    let shell = shell(TableConfig::default().show_skeleton(true), HostCallbacks::new());
    let presentation = shell.render(&Snapshot::new(&rows).loading(true).error("network failure"));

    assert_eq!(presentation.state(), ShellState::Error);
    assert_eq!(
        presentation,
        Presentation::Error {
            message: "network failure".into(),
            retry_available: false,
        }
    );
}

#[test]
fn no_rows_is_empty_state() {
    let rows: Vec<Order> = Vec::new();
    let shell = shell(TableConfig::default(), HostCallbacks::new().on_add_click(|| {}));

    match shell.render(&Snapshot::new(&rows)) {
        Presentation::Empty {
            message,
            add_button,
        } => {
            assert_eq!(message, "No data available.");
            assert_eq!(add_button.map(|b| b.label).as_deref(), Some("Add"));
        }
        other => panic!("expected empty state, got {:?}", other),
    }
}

#[test]
fn filtered_to_nothing_is_not_empty_state() {
    let rows = orders(6);
    let mut shell = shell(TableConfig::default(), HostCallbacks::new());
    shell.controller_mut().set_global_filter("abc");

    match shell.render(&Snapshot::new(&rows)) {
        Presentation::Populated { toolbar, grid, .. } => {
            assert_eq!(toolbar.query, "abc");
            assert_eq!(
                grid.body,
                GridBody::NoResults {
                    colspan: 3,
                    message: "No results.".into(),
                }
            );
        }
        other => panic!("expected populated state, got {:?}", other),
    }
}

#[test]
fn loading_with_skeleton_disabled_keeps_rows() {
    let rows = orders(2);
    let shell = shell(TableConfig::default(), HostCallbacks::new());
    let presentation = shell.render(&Snapshot::new(&rows).loading(true));
    assert_eq!(presentation.state(), ShellState::Populated);
}

#[test]
fn initial_load_without_skeleton_shows_loading_row() {
    let rows: Vec<Order> = Vec::new();
    let shell = shell(TableConfig::default(), HostCallbacks::new());

    match shell.render(&Snapshot::new(&rows).loading(true)) {
        Presentation::Populated { grid, .. } => assert_eq!(
            grid.body,
            GridBody::Loading {
                colspan: 3,
                message: "Loading...".into(),
            }
        ),
        other => panic!("expected populated state, got {:?}", other),
    }
}

#[test]
fn skeleton_when_enabled_and_loading() {
    let rows: Vec<Order> = Vec::new();
    let mut config = TableConfig::default().show_skeleton(true);
    config.skeleton_rows = 2;
    let shell = shell(config, HostCallbacks::new());

    match shell.render(&Snapshot::new(&rows).loading(true)) {
        Presentation::Skeleton { headers, rows } => {
            assert_eq!(rows, 2);
            let labels: Vec<_> = headers.iter().map(|h| h.label.as_str()).collect();
            assert_eq!(labels, vec!["Customer", "Status", "Total"]);
        }
        other => panic!("expected skeleton, got {:?}", other),
    }
}

#[test]
fn column_filter_and_search_combine() {
    let rows = orders(10);
    let mut table =
        TableController::from_definition(&definition(), TableConfig::default(), &RowCallbacks::new());
    table.set_column_filter(ColumnFilter::text(Order::STATUS, "paid"));
    table.set_global_filter("customer-0");

    let ids: Vec<u32> = table.derive(&rows, false).display_rows.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![2, 4, 6, 8]);

    // `total` is not searchable
    table.set_global_filter("100");
    assert_eq!(table.derive(&rows, false).filtered_count, 0);
}

#[test]
fn sorting_by_header_marks_header() {
    let rows = orders(3);
    let mut shell = shell(TableConfig::default(), HostCallbacks::new());
    shell.controller_mut().toggle_sort(Order::TOTAL);
    shell.controller_mut().toggle_sort(Order::TOTAL);

    let Presentation::Populated { grid, .. } = shell.render(&Snapshot::new(&rows)) else {
        panic!("expected populated state");
    };
    let total = &grid.headers[2];
    assert_eq!(total.sorted, Some(gridwork::Dir::Desc));
    assert!(grid.headers[0].sorted.is_none());

    let GridBody::Rows { rows: views } = grid.body else {
        panic!("expected rows");
    };
    let ids: Vec<_> = views.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
}

#[test]
fn expandable_footer_follows_expansion() {
    let rows = orders(8);
    let mut shell = shell(
        TableConfig::default().expandable(3).page_size(5),
        HostCallbacks::new(),
    );

    let Presentation::Populated { footer, .. } = shell.render(&Snapshot::new(&rows)) else {
        panic!("expected populated state");
    };
    assert!(footer.pagination.is_none());
    assert_eq!(footer.expand, Some(ExpandControl::Expand { hidden: 5 }));

    shell.controller_mut().toggle_expanded();
    let Presentation::Populated { footer, .. } = shell.render(&Snapshot::new(&rows)) else {
        panic!("expected populated state");
    };
    assert_eq!(footer.expand, Some(ExpandControl::Collapse));
    let pagination = footer.pagination.expect("pagination while expanded");
    assert_eq!(pagination.page_size, 5);
    assert_eq!(pagination.page_count, 2);
    assert!(pagination.can_next);
}

#[test]
fn host_callbacks_are_forwarded() {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let (a, b, c) = (Rc::clone(&log), Rc::clone(&log), Rc::clone(&log));
    let shell = shell(
        TableConfig::default(),
        HostCallbacks::new()
            .on_row_click(move |o: &Order| a.borrow_mut().push(format!("row {}", o.id)))
            .on_add_click(move || b.borrow_mut().push("add".into()))
            .on_retry(move || c.borrow_mut().push("retry".into())),
    );
    let rows = orders(2);

    assert!(shell.click_row(&rows[1]));
    assert!(shell.click_add());
    assert!(shell.retry());
    assert_eq!(*log.borrow(), vec!["row 2", "add", "retry"]);

    let bare = crate::shell(TableConfig::default(), HostCallbacks::new());
    assert!(!bare.click_add());
    assert!(!bare.retry());
    assert!(!bare.click_row(&rows[0]));
}

#[test]
fn action_column_invokes_row_callbacks() {
    let deleted = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&deleted);
    let callbacks = RowCallbacks::new().on_delete(move |o: &Order| sink.borrow_mut().push(o.id));
    let definition = definition().field(FieldDefinition::actions("actions"));
    let controller = TableController::from_definition(&definition, TableConfig::default(), &callbacks);
    let shell = TableShell::new(controller, HostCallbacks::new());
    let rows = orders(3);

    assert!(shell.activate(&rows[2], "actions", RowAction::Delete));
    assert!(!shell.activate(&rows[2], "actions", RowAction::Edit));
    assert!(!shell.activate(&rows[2], Order::CUSTOMER, RowAction::Delete));
    assert_eq!(*deleted.borrow(), vec![3]);
}

#[test]
fn selection_survives_resorting() {
    let rows = orders(5);
    let mut shell = shell(TableConfig::default(), HostCallbacks::new());
    shell.controller_mut().toggle_row_selected(&rows[1]);
    shell.controller_mut().toggle_sort(Order::TOTAL);
    shell.controller_mut().toggle_sort(Order::TOTAL);

    let Presentation::Populated { grid, .. } = shell.render(&Snapshot::new(&rows)) else {
        panic!("expected populated state");
    };
    let GridBody::Rows { rows: views } = grid.body else {
        panic!("expected rows");
    };
    let selected: Vec<_> = views
        .iter()
        .filter(|r| r.selected)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(selected, vec!["2"]);
}

#[test]
fn config_file_drives_the_table() {
    let config = TableConfig::from_yaml(
        r#"
page_size: 2
selectable_columns: [total, customer]
column_labels:
  total: Amount
"#,
    )
    .expect("valid config");
    let rows = orders(5);
    let shell = shell(config, HostCallbacks::new());

    let Presentation::Populated { grid, footer, .. } = shell.render(&Snapshot::new(&rows)) else {
        panic!("expected populated state");
    };
    let labels: Vec<_> = grid.headers.iter().map(|h| h.label.as_str()).collect();
    assert_eq!(labels, vec!["Amount", "Customer"]);
    assert_eq!(footer.pagination.map(|p| p.page_count), Some(3));
}

#[test]
fn json_rows_with_nested_keys() {
    let rows: Vec<serde_json::Value> = serde_json::from_str(
        r#"[
            {"id": 1, "name": "Ada", "team": {"name": "Core"}},
            {"id": 2, "name": "Brian", "team": {"name": "Infra"}},
            {"id": 3, "name": "Chen", "team": null}
        ]"#,
    )
    .expect("valid json");
    let definition = TableDefinition::new()
        .label("team", "Team")
        .field(FieldDefinition::new("name"))
        .field(FieldDefinition::new("team").key("team.name"));
    let mut table =
        TableController::from_definition(&definition, TableConfig::default(), &RowCallbacks::new());

    table.toggle_sort("team");
    table.toggle_sort("team");
    let view = table.derive(&rows, false);
    let names: Vec<_> = view
        .display_rows
        .iter()
        .map(|r| r["name"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(names, vec!["Brian", "Ada", "Chen"]);
    assert_eq!(table.row_id_of(&rows[2]), "3");

    table.set_global_filter("infra");
    assert_eq!(table.derive(&rows, false).filtered_count, 1);
}
