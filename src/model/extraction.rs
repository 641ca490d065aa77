use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;
use std::sync::OnceLock;

/// One `--extraction-config` token, scoped to a single language.
///
/// `java.a=b` stands for `"java": {"a": "b"}` in the extraction config
/// document handed to the extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionOverride {
    pub language: String,
    pub key: String,
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OverrideParseError {
    #[error("'{0}' does not match <language>.<key>=<value>")]
    Malformed(String),
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z][A-Za-z0-9_]*)\.([^=\s]+)=(.+)$").expect("invalid override pattern")
    })
}

impl FromStr for ExtractionOverride {
    type Err = OverrideParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let captures = token_pattern()
            .captures(token)
            .ok_or_else(|| OverrideParseError::Malformed(token.to_string()))?;

        Ok(Self {
            language: captures[1].to_string(),
            key: captures[2].to_string(),
            value: captures[3].to_string(),
        })
    }
}

/// Merge CLI overrides into a file-sourced extraction config document.
///
/// Overrides win over file values; languages present only in the file
/// pass through untouched.
pub fn merged_config(base: Option<Value>, overrides: &[ExtractionOverride]) -> Value {
    let mut root = match base {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };

    for item in overrides {
        let section = root
            .entry(item.language.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        if let Value::Object(map) = section {
            map.insert(item.key.clone(), Value::String(item.value.clone()));
        }
    }

    Value::Object(root)
}
