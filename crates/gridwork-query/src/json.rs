//! [`GridRow`] for untyped JSON rows.
//!
//! Key paths use dot notation; numeric segments index into arrays
//! (`"tags.0"`). Nested objects and arrays surface as their compact JSON
//! text.

use std::borrow::Cow;

use serde_json::Value as Json;

use crate::row::GridRow;
use crate::value::{Number, Value};

fn lookup<'a>(data: &'a Json, path: &str) -> Option<&'a Json> {
    let mut current = data;
    for part in path.split('.') {
        current = match current {
            Json::Object(map) => map.get(part)?,
            Json::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

fn to_value(json: &Json) -> Value<'_> {
    match json {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                n.as_f64()
                    .map(|f| Value::Number(Number::F64(f)))
                    .unwrap_or(Value::None)
            }
        }
        Json::String(s) => Value::String(Cow::Borrowed(s.as_str())),
        nested => Value::String(Cow::Owned(nested.to_string())),
    }
}

impl GridRow for Json {
    fn field_value(&self, path: &str) -> Value<'_> {
        lookup(self, path).map(to_value).unwrap_or(Value::None)
    }

    fn row_fingerprint(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_fields() {
        let row = json!({"name": "Ada", "age": 36, "admin": true, "nickname": null});
        assert_eq!(row.field_value("name"), Value::from("Ada"));
        assert_eq!(row.field_value("age"), Value::Number(Number::I64(36)));
        assert_eq!(row.field_value("admin"), Value::Bool(true));
        assert_eq!(row.field_value("nickname"), Value::None);
        assert_eq!(row.field_value("missing"), Value::None);
    }

    #[test]
    fn dot_paths_and_indices() {
        let row = json!({"author": {"name": "Grace"}, "tags": ["a", "b"]});
        assert_eq!(row.field_value("author.name"), Value::from("Grace"));
        assert_eq!(row.field_value("tags.1"), Value::from("b"));
        assert_eq!(row.field_value("tags.9"), Value::None);
        assert_eq!(row.field_value("author.name.first"), Value::None);
    }

    #[test]
    fn nested_values_render_as_json() {
        let row = json!({"tags": ["a", "b"]});
        assert_eq!(row.field_value("tags").to_string(), r#"["a","b"]"#);
    }

    #[test]
    fn floats() {
        let row = json!({"score": 9.5});
        assert_eq!(row.field_value("score"), Value::Number(Number::F64(9.5)));
    }

    #[test]
    fn identity_and_fingerprint() {
        let with_id = json!({"id": 12, "name": "x"});
        assert_eq!(with_id.row_identity(), Some("12".to_string()));

        let without = json!({"name": "x"});
        assert_eq!(without.row_identity(), None);
        assert_eq!(without.row_fingerprint(), json!({"name": "x"}).row_fingerprint());
    }
}
