//! YAML front-matter extraction
//!
//! A front-matter block opens with a `---` line at the very start of the
//! source and closes at the next `---` line. Everything after the closing
//! line (minus one line terminator) is the body.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

use crate::error::{Error, Result};

/// Opening delimiter, optional YAML, closing delimiter plus one line break
static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("front-matter pattern is valid")
});

/// Borrowed view of a source split into front-matter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Raw YAML between the delimiters, `None` when the source has no block
    pub matter: Option<&'a str>,
    /// Source text after the closing delimiter
    pub body: &'a str,
}

impl<'a> FrontMatter<'a> {
    /// Split a source into front-matter and body without parsing the YAML.
    pub fn split(source: &'a str) -> Self {
        match FRONT_MATTER.captures(source) {
            Some(caps) => {
                let whole = caps.get(0).map_or(0, |m| m.end());
                Self {
                    matter: Some(caps.get(1).map_or("", |m| m.as_str())),
                    body: &source[whole..],
                }
            }
            None => Self {
                matter: None,
                body: source,
            },
        }
    }

    /// Parse the YAML block into a JSON object.
    ///
    /// A missing or empty block yields an empty object.
    pub fn parse(&self) -> Result<ParsedMatter<'a>> {
        let data = match self.matter {
            Some(yaml) if !yaml.trim().is_empty() => parse_yaml(yaml)?,
            _ => Value::Object(Map::new()),
        };
        Ok(ParsedMatter {
            data,
            body: self.body,
        })
    }
}

/// Front-matter parsed into structured data plus the untouched body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMatter<'a> {
    pub data: Value,
    pub body: &'a str,
}

/// Split and parse a source in one step.
pub fn parse(source: &str) -> Result<ParsedMatter<'_>> {
    FrontMatter::split(source).parse()
}

fn parse_yaml(yaml: &str) -> Result<Value> {
    let value: YamlValue =
        serde_yaml::from_str(yaml).map_err(|e| Error::parse("YAML front-matter", e.to_string()))?;

    match yaml_to_json(&value) {
        Value::Null => Ok(Value::Object(Map::new())),
        obj @ Value::Object(_) => Ok(obj),
        other => Err(Error::parse(
            "YAML front-matter",
            format!("expected a mapping, found {}", json_kind(&other)),
        )),
    }
}

/// Convert YAML to JSON keeping mapping order.
fn yaml_to_json(value: &YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                Value::Number(u.into())
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        YamlValue::String(s) => Value::String(s.clone()),
        YamlValue::Sequence(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => {
            let mut object = Map::new();
            for (key, value) in map {
                if let Some(key) = scalar_key(key) {
                    object.insert(key, yaml_to_json(value));
                }
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

/// Scalar mapping keys become strings; composite keys are dropped.
fn scalar_key(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Null => Some("null".to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
