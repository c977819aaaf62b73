// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured (YAML) blocks embedded in a document region.
//!
//! A block is decoded in two steps: first into a loosely typed mapping
//! ([`RawBlock::decode`]), then field by field into typed values. Each
//! accessor distinguishes "absent" (`Ok(None)`) from "present but unusable"
//! (`Err(FieldError)`) so callers can fall back to a default and still report
//! the problem.

use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::lexer::{Line, LineKind};

/// Date format accepted in blocks and used on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Text of the first YAML fenced block among `lines`, without the fences.
///
/// An unterminated block runs to the end of `lines`.
pub fn first_block(lines: &[Line<'_>]) -> Option<String> {
    let start = lines.iter().position(|line| match line.kind {
        LineKind::FenceOpen { info } => is_yaml_info(info),
        _ => false,
    })?;

    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| line.kind != LineKind::FenceClose)
        .map(|line| line.text)
        .collect();
    Some(body.join("\n"))
}

fn is_yaml_info(info: &str) -> bool {
    let lang = info.split_whitespace().next().unwrap_or("");
    lang.eq_ignore_ascii_case("yaml") || lang.eq_ignore_ascii_case("yml")
}

/// A field that is present but cannot be projected into the wanted type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub key: String,
    pub expected: &'static str,
}

/// Result of reading one field: `Ok(None)` when the key is absent or null.
pub type FieldResult<T> = std::result::Result<Option<T>, FieldError>;

/// A decoded block: a YAML mapping with typed accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    map: Mapping,
}

impl RawBlock {
    /// Decode block text. Anything but a mapping at the top level is an error.
    pub fn decode(text: &str) -> Result<Self> {
        match serde_yaml::from_str::<Value>(text)? {
            Value::Mapping(map) => Ok(RawBlock { map }),
            other => Err(Error::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }

    fn get(&self, key: &str) -> Option<&Value> {
        match self.map.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn error(key: &str, expected: &'static str) -> FieldError {
        FieldError {
            key: key.to_string(),
            expected,
        }
    }

    /// A scalar rendered as text (numbers and booleans included).
    pub fn string(&self, key: &str) -> FieldResult<String> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => scalar_text(value)
                .map(Some)
                .ok_or_else(|| Self::error(key, "text")),
        }
    }

    /// A sequence of scalars, or a single scalar treated as a one-item list.
    ///
    /// Duplicates are dropped, keeping first occurrences in order.
    pub fn string_list(&self, key: &str) -> FieldResult<Vec<String>> {
        let items = match self.get(key) {
            None => return Ok(None),
            Some(Value::Sequence(seq)) => seq
                .iter()
                .filter(|v| !v.is_null())
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| Self::error(key, "list of text"))?,
            Some(value) => vec![scalar_text(value).ok_or_else(|| Self::error(key, "list of text"))?],
        };

        let mut unique: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        Ok(Some(unique))
    }

    /// A calendar date written as `YYYY-MM-DD`.
    pub fn date(&self, key: &str) -> FieldResult<NaiveDate> {
        let expected = "date (YYYY-MM-DD)";
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map(Some)
                .map_err(|_| Self::error(key, expected)),
            Some(_) => Err(Self::error(key, expected)),
        }
    }

    /// A non-negative integer, given as a number or a numeric string.
    pub fn non_negative_int(&self, key: &str) -> FieldResult<u32> {
        let expected = "non-negative integer";
        let parsed = match self.get(key) {
            None => return Ok(None),
            Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
            Some(_) => None,
        };
        parsed.map(Some).ok_or_else(|| Self::error(key, expected))
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
