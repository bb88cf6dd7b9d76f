//! Per-column filter predicates.
//!
//! A [`ColumnFilter`] pairs a field id with a [`FilterValue`]. The table
//! state stores a list of them; a row passes when every one matches.

use regex::Regex;

use crate::error::{QueryError, Result};
use crate::op::Op;
use crate::search::contains_ignore_case;
use crate::value::{Number, Timestamp, Value};

/// A filter applied to one column.
///
/// ```
/// use gridwork_query::{ColumnFilter, Number, Value};
///
/// let filter = ColumnFilter::text("role", "adm");
/// assert!(filter.matches(&Value::from("Administrator")));
///
/// let adults = ColumnFilter::range("age", Some(Number::I64(18)), None);
/// assert!(adults.matches(&Value::Number(Number::I64(30))));
/// assert!(!adults.matches(&Value::Number(Number::I64(12))));
/// ```
#[derive(Debug, Clone)]
pub struct ColumnFilter {
    /// Id of the column (field) this filter applies to.
    pub field: String,
    /// The predicate.
    pub value: FilterValue,
}

/// What a column filter tests for.
#[derive(Debug, Clone)]
pub enum FilterValue {
    /// Case-insensitive substring of the value's text form. The empty needle
    /// matches every row, including rows with a missing value.
    Text(String),
    /// Inclusive numeric range; an absent bound is open.
    Range {
        min: Option<Number>,
        max: Option<Number>,
    },
    /// Text form equals one of the options exactly.
    OneOf(Vec<String>),
    /// Explicit operator against an operand.
    Compare { op: Op, operand: Operand },
}

/// Owned right-hand side of a [`FilterValue::Compare`].
#[derive(Debug, Clone)]
pub enum Operand {
    /// Text operand.
    String(String),
    /// Numeric operand.
    Number(Number),
    /// Timestamp operand.
    Timestamp(Timestamp),
    /// Boolean operand.
    Bool(bool),
    /// Compiled regular expression.
    Regex(Regex),
    /// Set of text options (for `In`).
    Set(Vec<String>),
}

impl Operand {
    fn type_name(&self) -> &'static str {
        match self {
            Operand::String(_) => "text",
            Operand::Number(_) => "number",
            Operand::Timestamp(_) => "timestamp",
            Operand::Bool(_) => "bool",
            Operand::Regex(_) => "regex",
            Operand::Set(_) => "set",
        }
    }
}

impl ColumnFilter {
    /// Creates a filter from its parts.
    pub fn new(field: impl Into<String>, value: FilterValue) -> Self {
        ColumnFilter {
            field: field.into(),
            value,
        }
    }

    /// Case-insensitive substring filter.
    pub fn text(field: impl Into<String>, needle: impl Into<String>) -> Self {
        Self::new(field, FilterValue::Text(needle.into()))
    }

    /// Inclusive numeric range filter.
    pub fn range(field: impl Into<String>, min: Option<Number>, max: Option<Number>) -> Self {
        Self::new(field, FilterValue::Range { min, max })
    }

    /// Membership filter over the value's text form.
    pub fn one_of<I, S>(field: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            field,
            FilterValue::OneOf(options.into_iter().map(Into::into).collect()),
        )
    }

    /// Explicit comparison filter.
    ///
    /// Fails when the operator cannot apply to the operand (for example
    /// `Gt` against a set).
    pub fn compare(field: impl Into<String>, op: Op, operand: impl Into<Operand>) -> Result<Self> {
        let operand = operand.into();
        let valid = match &operand {
            Operand::String(_) => op.is_text_op() && op != Op::Regex,
            Operand::Regex(_) => op == Op::Regex,
            Operand::Number(_) | Operand::Timestamp(_) => op.is_ordering_op(),
            Operand::Bool(_) => matches!(op.normalize(), Op::Eq | Op::Ne),
            Operand::Set(_) => op == Op::In,
        };
        if !valid {
            return Err(QueryError::InvalidOperator {
                op: op.as_str(),
                operand: operand.type_name(),
            });
        }
        Ok(Self::new(field, FilterValue::Compare { op, operand }))
    }

    /// Equality filter.
    pub fn eq(field: impl Into<String>, operand: impl Into<Operand>) -> Self {
        Self::new(
            field,
            FilterValue::Compare {
                op: Op::Eq,
                operand: operand.into(),
            },
        )
    }

    /// Regex filter; fails if the pattern does not compile.
    pub fn regex(field: impl Into<String>, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self::new(
            field,
            FilterValue::Compare {
                op: Op::Regex,
                operand: Operand::Regex(regex),
            },
        ))
    }

    /// Returns `true` if the filter has nothing to test (an empty text
    /// needle, an unbounded range or an empty option list).
    pub fn is_inert(&self) -> bool {
        match &self.value {
            FilterValue::Text(needle) => needle.is_empty(),
            FilterValue::Range { min, max } => min.is_none() && max.is_none(),
            FilterValue::OneOf(options) => options.is_empty(),
            FilterValue::Compare { .. } => false,
        }
    }

    /// Evaluates the filter against a field value.
    ///
    /// Type mismatches and missing values never match, except that an inert
    /// filter matches everything.
    pub fn matches(&self, value: &Value<'_>) -> bool {
        if self.is_inert() {
            return true;
        }
        match &self.value {
            FilterValue::Text(needle) => {
                !value.is_none() && contains_ignore_case(&value.to_text(), needle)
            }
            FilterValue::Range { min, max } => match value.as_number() {
                Some(n) => within(n, *min, *max),
                None => false,
            },
            FilterValue::OneOf(options) => {
                !value.is_none() && {
                    let text = value.to_text();
                    options.iter().any(|o| o.as_str() == &*text)
                }
            }
            FilterValue::Compare { op, operand } => compare(*op, operand, value),
        }
    }
}

fn within(n: Number, min: Option<Number>, max: Option<Number>) -> bool {
    let above = min.map_or(true, |m| {
        n.compare(m).is_some_and(|o| o != std::cmp::Ordering::Less)
    });
    let below = max.map_or(true, |m| {
        n.compare(m).is_some_and(|o| o != std::cmp::Ordering::Greater)
    });
    above && below
}

fn compare(op: Op, operand: &Operand, value: &Value<'_>) -> bool {
    match (operand, value) {
        (Operand::String(pattern), Value::String(s)) => match op.normalize() {
            Op::Eq => &**s == pattern.as_str(),
            Op::Ne => &**s != pattern.as_str(),
            Op::StartsWith => s.starts_with(pattern.as_str()),
            Op::EndsWith => s.ends_with(pattern.as_str()),
            Op::Contains => s.contains(pattern.as_str()),
            Op::IContains => contains_ignore_case(s, pattern),
            _ => false,
        },
        (Operand::Regex(regex), Value::String(s)) => regex.is_match(s),
        (Operand::Number(operand), Value::Number(n)) => n
            .compare(*operand)
            .is_some_and(|ordering| op.eval_ordering(ordering)),
        (Operand::Timestamp(operand), Value::Timestamp(t)) => op.eval_ordering(t.cmp(operand)),
        (Operand::Bool(operand), Value::Bool(b)) => match op.normalize() {
            Op::Eq => b == operand,
            Op::Ne => b != operand,
            _ => false,
        },
        (Operand::Set(options), v) if !v.is_none() => {
            let text = v.to_text();
            options.iter().any(|o| o.as_str() == &*text)
        }
        _ => false,
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::String(s)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::String(s.to_string())
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl From<Timestamp> for Operand {
    fn from(t: Timestamp) -> Self {
        Operand::Timestamp(t)
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<Regex> for Operand {
    fn from(r: Regex) -> Self {
        Operand::Regex(r)
    }
}

impl From<Vec<String>> for Operand {
    fn from(v: Vec<String>) -> Self {
        Operand::Set(v)
    }
}

macro_rules! operand_from_number {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Operand {
                fn from(n: $source) -> Self {
                    Operand::Number(Number::from(n))
                }
            }
        )*
    };
}

operand_from_number!(i32, i64, u32, u64, usize, f64);
