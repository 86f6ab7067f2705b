//! Comparison operators

use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

/// Relational operator applied to two encoded versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Equal (==)
    Equal,
    /// Not equal (!= or <>)
    NotEqual,
}

impl Operator {
    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all accepted operator tokens
    pub fn supported_operators() -> &'static [&'static str] {
        &["<", "<=", ">", ">=", "==", "!=", "<>"]
    }

    /// Apply the operator to two encoded version numbers
    pub fn apply(&self, left: u32, right: u32) -> bool {
        match self {
            Operator::LessThan => left < right,
            Operator::LessThanOrEqual => left <= right,
            Operator::GreaterThan => left > right,
            Operator::GreaterThanOrEqual => left >= right,
            Operator::Equal => left == right,
            Operator::NotEqual => left != right,
        }
    }
}

impl FromStr for Operator {
    type Err = VersionError;

    /// Parse an operator token. Matching is case-insensitive, which for the
    /// purely symbolic token set means the token is taken as-is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "==" => Ok(Operator::Equal),
            "!=" | "<>" => Ok(Operator::NotEqual),
            _ => Err(VersionError::invalid_operator(s)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
