use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub type Schema = IndexMap<String, FieldSpec>;

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSpec {
    pub legend: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Range { min: i64, max: i64, step: i64 },
    Multiple {
        exclusive: bool,
        options: IndexMap<String, String>,
    },
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid schema: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn load(path: &Path) -> Result<Schema, SchemaError> {
    let content = fs::read_to_string(path)?;
    Ok(parse(&content)?)
}

pub fn parse(content: &str) -> Result<Schema, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
age:
  kind: range
  legend: Age
  min: 0
  max: 120
  step: 1
status:
  kind: multiple
  legend: Status
  exclusive: false
  options:
    Active: "1"
    Dormant: "2"
"#;

    #[test]
    fn test_parse_preserves_declaration_order() {
        let schema = parse(SCHEMA).unwrap();
        let names: Vec<&String> = schema.keys().collect();
        assert_eq!(names, ["age", "status"]);
    }

    #[test]
    fn test_parse_range_field() {
        let schema = parse(SCHEMA).unwrap();
        let spec = &schema["age"];
        assert_eq!(spec.legend, "Age");
        let FieldKind::Range { min, max, step } = spec.kind else {
            panic!("expected range kind");
        };
        assert_eq!((min, max, step), (0, 120, 1));
    }

    #[test]
    fn test_parse_multiple_field() {
        let schema = parse(SCHEMA).unwrap();
        let FieldKind::Multiple { exclusive, ref options } = schema["status"].kind else {
            panic!("expected multiple kind");
        };
        assert!(!exclusive);
        let labels: Vec<&String> = options.keys().collect();
        assert_eq!(labels, ["Active", "Dormant"]);
        assert_eq!(options["Active"], "1");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let bad = "color:\n  kind: swatch\n  legend: Color\n";
        let err = parse(bad).unwrap_err();
        assert!(err.to_string().contains("swatch"));
    }

    #[test]
    fn test_missing_attribute_rejected() {
        let bad = "age:\n  kind: range\n  legend: Age\n  min: 0\n  max: 10\n";
        assert!(parse(bad).is_err());
    }
}
