//! Sort direction, sort keys and multi-key row comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// The opposite direction.
    pub fn flipped(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a table's sort specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column (field) id to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a sort key with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortKey {
            field: field.into(),
            dir,
        }
    }

    /// Ascending sort key.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Asc)
    }

    /// Descending sort key.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Dir::Desc)
    }

    /// Compares two values under this key.
    ///
    /// Missing values (and NaN) sort last in both directions; the direction
    /// only reverses comparisons between present values.
    pub fn compare(&self, a: &Value<'_>, b: &Value<'_>) -> Ordering {
        match (is_absent(a), is_absent(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.dir.apply(compare_values(a, b)),
        }
    }
}

fn is_absent(value: &Value<'_>) -> bool {
    match value {
        Value::None => true,
        Value::Number(n) => n.is_nan(),
        _ => false,
    }
}

/// Rank of each value type when a column mixes types.
fn type_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::Timestamp(_) => 2,
        Value::String(_) => 3,
        Value::None => 4,
    }
}

/// Total ascending order over values.
///
/// Values of the same type compare naturally; text compares
/// lexicographically by Unicode scalar value, case-sensitively. Different
/// types order by type: bool, number, timestamp, text, then missing. NaN
/// sorts after every other number.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => a.total_cmp(*b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Compares two rows under an ordered list of sort keys.
///
/// The first key is primary; later keys only break ties.
pub fn compare_by_keys<T, F>(a: &T, b: &T, keys: &[SortKey], accessor: &F) -> Ordering
where
    for<'r> F: Fn(&'r T, &str) -> Value<'r>,
{
    for key in keys {
        let left = accessor(a, &key.field);
        let right = accessor(b, &key.field);
        match key.compare(&left, &right) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
    Ordering::Equal
}
