//! The row trait through which tables read fields and identities.
//!
//! [`GridRow`] is typically derived with `#[derive(GridRow)]` from the
//! `gridwork-macros` crate, but can also be implemented by hand.

use crate::value::{Timestamp, Value};

/// Trait for types that can be displayed as table rows.
///
/// # Derive Usage
///
/// ```ignore
/// use gridwork::GridRow;
///
/// #[derive(GridRow)]
/// struct Member {
///     #[grid(String, id)]
///     email: String,
///     #[grid(String)]
///     name: String,
///     #[grid(Number)]
///     age: u32,
/// }
///
/// // Generated: Member::EMAIL, Member::NAME, Member::AGE field-id constants,
/// // field lookup, identity from `email`, and a fingerprint over all fields.
/// ```
///
/// # Manual Implementation
///
/// ```
/// use gridwork_query::{GridRow, Number, Value};
///
/// struct Location {
///     code: String,
///     city: String,
///     population: u64,
/// }
///
/// impl GridRow for Location {
///     fn field_value(&self, path: &str) -> Value<'_> {
///         match path {
///             "code" => Value::from(self.code.as_str()),
///             "city" => Value::from(self.city.as_str()),
///             "population" => Value::Number(Number::U64(self.population)),
///             _ => Value::None,
///         }
///     }
///
///     fn row_identity(&self) -> Option<String> {
///         Some(self.code.clone())
///     }
///
///     fn row_fingerprint(&self) -> String {
///         format!("{}|{}|{}", self.code, self.city, self.population)
///     }
/// }
/// ```
pub trait GridRow {
    /// Returns the value at a key path.
    ///
    /// For flat structs the path is a field name; for nested data (such as
    /// JSON) it may use dot notation (`"author.name"`). Unknown paths return
    /// [`Value::None`].
    fn field_value(&self, path: &str) -> Value<'_>;

    /// The row's explicit identity, if it has one.
    ///
    /// Defaults to the text form of the `id` field when that field exists
    /// and is not empty.
    fn row_identity(&self) -> Option<String> {
        match self.field_value("id") {
            Value::None => None,
            value => {
                let text = value.to_text();
                (!text.is_empty()).then(|| text.into_owned())
            }
        }
    }

    /// A stable serialization of the row, used as its id when it has no
    /// explicit identity. Equal rows must produce equal fingerprints.
    fn row_fingerprint(&self) -> String;

    /// Static accessor compatible with [`Query::apply`](crate::Query::apply).
    fn accessor<'a>(row: &'a Self, path: &str) -> Value<'a>
    where
        Self: Sized,
    {
        row.field_value(path)
    }
}

impl<T: GridRow + ?Sized> GridRow for &T {
    fn field_value(&self, path: &str) -> Value<'_> {
        (**self).field_value(path)
    }

    fn row_identity(&self) -> Option<String> {
        (**self).row_identity()
    }

    fn row_fingerprint(&self) -> String {
        (**self).row_fingerprint()
    }
}

/// Conversion into a [`Timestamp`] for fields marked `#[grid(Timestamp)]`.
///
/// ```
/// use gridwork_query::{GridTimestamp, Timestamp};
///
/// struct Millis(i64);
///
/// impl GridTimestamp for Millis {
///     fn grid_timestamp(&self) -> Timestamp {
///         Timestamp::from_millis(self.0)
///     }
/// }
/// ```
pub trait GridTimestamp {
    /// Converts this value to a timestamp.
    fn grid_timestamp(&self) -> Timestamp;
}

impl GridTimestamp for i64 {
    fn grid_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl GridTimestamp for u64 {
    fn grid_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self as i64)
    }
}

impl GridTimestamp for Timestamp {
    fn grid_timestamp(&self) -> Timestamp {
        *self
    }
}
