//! The roster row type and its table definition.

use gridwork::{FieldDefinition, GridRow, TableDefinition, Value};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, GridRow)]
pub struct Member {
    #[grid(Number, id)]
    pub id: u32,
    #[grid(String)]
    pub name: String,
    #[grid(String)]
    pub email: String,
    #[grid(String)]
    pub team: String,
    #[grid(String)]
    pub role: String,
    #[grid(Number)]
    pub age: u32,
    #[grid(Bool)]
    #[serde(default)]
    pub active: Option<bool>,
}

pub fn definition() -> TableDefinition<Member> {
    TableDefinition::new()
        .label(Member::NAME, "Name")
        .label(Member::EMAIL, "Email")
        .label(Member::TEAM, "Team")
        .label(Member::ROLE, "Role")
        .label(Member::AGE, "Age")
        .label("status", "Status")
        .label("actions", "")
        .field(FieldDefinition::new(Member::NAME).width(18))
        .field(FieldDefinition::new(Member::EMAIL).hidden())
        .field(FieldDefinition::new(Member::TEAM).filterable(true))
        .field(FieldDefinition::new(Member::ROLE).filterable(true))
        .field(
            FieldDefinition::new(Member::AGE)
                .searchable(false)
                .filterable(true),
        )
        .field(
            FieldDefinition::computed("status", |m: &Member| {
                Value::from(match m.active {
                    Some(true) => "active",
                    Some(false) => "inactive",
                    None => "unknown",
                })
            })
            .filterable(true),
        )
        .field(FieldDefinition::actions("actions"))
}
