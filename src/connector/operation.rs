//! Operation identifiers understood by the connector.

use std::fmt;
use std::str::FromStr;

use crate::error::ConnectorError;

/// The logical action selected by the operation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `RegexIsMatch`: leftmost match, reports `isMatch`.
    IsMatch,
    /// `RegexMatch`: every match, reports `matchedCount`.
    Match,
}

impl Operation {
    pub fn id(self) -> &'static str {
        match self {
            Operation::IsMatch => "RegexIsMatch",
            Operation::Match => "RegexMatch",
        }
    }

    /// Field name used for the pattern in this operation's error messages.
    ///
    /// Both `regex` and `pattern` are accepted on input regardless.
    pub fn pattern_field(self) -> &'static str {
        match self {
            Operation::IsMatch => "regex",
            Operation::Match => "pattern",
        }
    }
}

impl FromStr for Operation {
    type Err = ConnectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RegexIsMatch" => Ok(Operation::IsMatch),
            "RegexMatch" => Ok(Operation::Match),
            other => Err(ConnectorError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
