//! Comparison operators for explicit column filters.

use std::cmp::Ordering;

/// Comparison operator used by [`FilterValue::Compare`](crate::FilterValue).
///
/// - **Universal**: `Eq`, `Ne`
/// - **Text**: `StartsWith`, `EndsWith`, `Contains`, `IContains`, `Regex`
/// - **Ordered** (numbers, timestamps): `Gt`, `Gte`, `Lt`, `Lte`, with the
///   timestamp aliases `Before` and `After`
/// - **Set**: `In`
/// - **Bool alias**: `Is`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Text starts with prefix.
    StartsWith,
    /// Text ends with suffix.
    EndsWith,
    /// Text contains substring (case-sensitive).
    Contains,
    /// Text contains substring, ignoring case.
    IContains,
    /// Text matches regular expression.
    Regex,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,
    /// Earlier than (alias for `Lt`).
    Before,
    /// Later than (alias for `Gt`).
    After,
    /// Text form is one of a set.
    In,
    /// Alias for `Eq` (`active.is(true)`).
    Is,
}

impl Op {
    /// Returns `true` if this operator applies to text operands.
    pub fn is_text_op(self) -> bool {
        matches!(
            self,
            Op::Eq
                | Op::Ne
                | Op::StartsWith
                | Op::EndsWith
                | Op::Contains
                | Op::IContains
                | Op::Regex
        )
    }

    /// Returns `true` if this operator compares by ordering.
    pub fn is_ordering_op(self) -> bool {
        matches!(
            self.normalize(),
            Op::Eq | Op::Ne | Op::Gt | Op::Gte | Op::Lt | Op::Lte
        )
    }

    /// Maps aliases to their canonical operator.
    pub fn normalize(self) -> Op {
        match self {
            Op::Before => Op::Lt,
            Op::After => Op::Gt,
            Op::Is => Op::Eq,
            other => other,
        }
    }

    /// Evaluates an ordering-based operator given `field.cmp(operand)`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self.normalize() {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::StartsWith => "startswith",
            Op::EndsWith => "endswith",
            Op::Contains => "contains",
            Op::IContains => "icontains",
            Op::Regex => "regex",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
            Op::Before => "before",
            Op::After => "after",
            Op::In => "in",
            Op::Is => "is",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_groups() {
        assert!(Op::IContains.is_text_op());
        assert!(Op::Regex.is_text_op());
        assert!(!Op::Gt.is_text_op());

        assert!(Op::Before.is_ordering_op());
        assert!(Op::Is.is_ordering_op());
        assert!(!Op::Contains.is_ordering_op());
        assert!(!Op::In.is_ordering_op());
    }

    #[test]
    fn aliases_normalize() {
        assert_eq!(Op::Before.normalize(), Op::Lt);
        assert_eq!(Op::After.normalize(), Op::Gt);
        assert_eq!(Op::Is.normalize(), Op::Eq);
        assert_eq!(Op::IContains.normalize(), Op::IContains);
    }

    #[test]
    fn eval_ordering() {
        assert!(Op::Gte.eval_ordering(Ordering::Equal));
        assert!(Op::Gte.eval_ordering(Ordering::Greater));
        assert!(!Op::Gte.eval_ordering(Ordering::Less));
        assert!(Op::Ne.eval_ordering(Ordering::Less));
        assert!(Op::Before.eval_ordering(Ordering::Less));
        assert!(!Op::After.eval_ordering(Ordering::Equal));
        assert!(!Op::Contains.eval_ordering(Ordering::Equal));
    }

    #[test]
    fn display() {
        assert_eq!(Op::IContains.to_string(), "icontains");
        assert_eq!(Op::Before.to_string(), "before");
    }
}
