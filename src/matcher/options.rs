//! Match option flags accepted in the `option` request field.

use std::fmt;

use regex::RegexBuilder;

/// A single compilation flag selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchOption {
    #[default]
    None,
    /// Case-insensitive matching.
    IgnoreCase,
    /// `^` and `$` match at line boundaries.
    Multiline,
    /// `.` also matches `\n`.
    Singleline,
}

impl MatchOption {
    /// Interpret the raw option string.
    ///
    /// Comparison is case-insensitive. Absent or unrecognised values fall
    /// back to [`MatchOption::None`] rather than rejecting the request.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("ignorecase") => MatchOption::IgnoreCase,
            Some("multiline") => MatchOption::Multiline,
            Some("singleline") => MatchOption::Singleline,
            _ => MatchOption::None,
        }
    }

    /// Apply this flag to a regex builder.
    pub fn apply(self, builder: &mut RegexBuilder) {
        match self {
            MatchOption::None => {}
            MatchOption::IgnoreCase => {
                builder.case_insensitive(true);
            }
            MatchOption::Multiline => {
                builder.multi_line(true);
            }
            MatchOption::Singleline => {
                builder.dot_matches_new_line(true);
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchOption::None => "none",
            MatchOption::IgnoreCase => "ignorecase",
            MatchOption::Multiline => "multiline",
            MatchOption::Singleline => "singleline",
        }
    }
}

impl fmt::Display for MatchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
