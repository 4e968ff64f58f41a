//! Pattern compilation and execution.
//!
//! # Responsibilities
//! - Compile caller-supplied patterns under configured size limits
//! - Run a single match and report capture groups
//! - Run a global match (all non-overlapping occurrences)
//!
//! # Design Decisions
//! - Group index 0 is reported only when the pattern has no capture groups
//! - Optional groups that did not participate are reported as ""
//! - `count` is always the length of `matched_data`

use regex::{Captures, Regex, RegexBuilder};
use serde::Serialize;

use crate::config::MatcherConfig;
use crate::matcher::options::MatchOption;

/// Outcome of a single match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleMatch {
    pub is_match: bool,
    pub matched_data: Vec<String>,
}

/// One entry of a global match result.
///
/// Patterns with fewer than two capture groups yield plain strings; patterns
/// with two or more yield one string per group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MatchedItem {
    Text(String),
    Groups(Vec<String>),
}

/// Outcome of a global match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalMatch {
    pub count: usize,
    pub matched_data: Vec<MatchedItem>,
}

/// Compile `pattern` with the given option flag.
pub fn compile(
    pattern: &str,
    option: MatchOption,
    limits: &MatcherConfig,
) -> Result<Regex, regex::Error> {
    let mut builder = RegexBuilder::new(pattern);
    builder
        .size_limit(limits.size_limit)
        .dfa_size_limit(limits.dfa_size_limit);
    option.apply(&mut builder);
    builder.build()
}

/// Number of explicit capture groups (excluding the implicit whole match).
fn group_count(regex: &Regex) -> usize {
    regex.captures_len() - 1
}

fn group_values(caps: &Captures<'_>, groups: usize) -> Vec<String> {
    (1..=groups)
        .map(|i| {
            caps.get(i)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        })
        .collect()
}

/// Find the leftmost match of `regex` in `text`.
pub fn is_match(regex: &Regex, text: &str) -> SingleMatch {
    let groups = group_count(regex);

    match regex.captures(text) {
        Some(caps) => {
            let matched_data = if groups == 0 {
                vec![caps[0].to_string()]
            } else {
                group_values(&caps, groups)
            };
            SingleMatch {
                is_match: true,
                matched_data,
            }
        }
        None => SingleMatch {
            is_match: false,
            matched_data: Vec::new(),
        },
    }
}

/// Collect every non-overlapping match of `regex` in `text`.
pub fn find_all(regex: &Regex, text: &str) -> GlobalMatch {
    let groups = group_count(regex);

    let matched_data: Vec<MatchedItem> = match groups {
        0 => regex
            .find_iter(text)
            .map(|m| MatchedItem::Text(m.as_str().to_string()))
            .collect(),
        1 => regex
            .captures_iter(text)
            .map(|caps| {
                MatchedItem::Text(caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default())
            })
            .collect(),
        _ => regex
            .captures_iter(text)
            .map(|caps| MatchedItem::Groups(group_values(&caps, groups)))
            .collect(),
    };

    GlobalMatch {
        count: matched_data.len(),
        matched_data,
    }
}
