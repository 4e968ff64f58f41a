//! Request body parsing and validation.
//!
//! # Responsibilities
//! - Parse the body as a JSON object
//! - Accept `pattern` and its older spelling `regex`
//! - Reject missing or empty required fields

use serde::Deserialize;
use serde_json::Value;

use crate::connector::operation::Operation;
use crate::error::ConnectorError;
use crate::matcher::MatchOption;

/// Raw body as sent by the caller.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    text_to_check: Option<String>,
    #[serde(alias = "regex")]
    pattern: Option<String>,
    option: Option<String>,
}

/// A validated match request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    pub text_to_check: String,
    pub pattern: String,
    pub option: MatchOption,
}

impl MatchRequest {
    /// Parse and validate `body` for the given operation.
    pub fn parse(operation: Operation, body: &[u8]) -> Result<Self, ConnectorError> {
        let value: Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(ConnectorError::MalformedJson(
                "request body must be a JSON object".to_string(),
            ));
        }

        let raw: RawRequest = serde_json::from_value(value)?;

        let missing = || ConnectorError::MissingField("textToCheck", operation.pattern_field());
        let text_to_check = raw.text_to_check.filter(|s| !s.is_empty()).ok_or_else(missing)?;
        let pattern = raw.pattern.filter(|s| !s.is_empty()).ok_or_else(missing)?;

        Ok(Self {
            text_to_check,
            pattern,
            option: MatchOption::parse(raw.option.as_deref()),
        })
    }
}
