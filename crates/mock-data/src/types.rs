//! Core data types for generation requests, records, and result sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Number of records produced when `count` is omitted.
pub const DEFAULT_COUNT: usize = 1;
/// Smallest accepted `count`.
pub const MIN_COUNT: usize = 1;
/// Largest accepted `count`.
pub const MAX_COUNT: usize = 100;

/// A field category with a dedicated generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Address,
    Company,
    Job,
    City,
    Country,
    /// Any field name outside the known kinds.
    Other,
}

impl FieldKind {
    /// The eight kinds with a plausible-value generator, in documentation order.
    pub const KNOWN: [FieldKind; 8] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Address,
        FieldKind::Company,
        FieldKind::Job,
        FieldKind::City,
        FieldKind::Country,
    ];

    /// Classify a caller-supplied field name. Matching ignores case.
    pub fn parse(field: &str) -> Self {
        match field.to_lowercase().as_str() {
            "name" => FieldKind::Name,
            "email" => FieldKind::Email,
            "phone" => FieldKind::Phone,
            "address" => FieldKind::Address,
            "company" => FieldKind::Company,
            "job" => FieldKind::Job,
            "city" => FieldKind::City,
            "country" => FieldKind::Country,
            _ => FieldKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Address => "address",
            FieldKind::Company => "company",
            FieldKind::Job => "job",
            FieldKind::City => "city",
            FieldKind::Country => "country",
            FieldKind::Other => "other",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FieldKind::Other)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated arguments for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub count: usize,
    pub fields: Vec<String>,
}

/// One generated item: requested field name → generated value.
///
/// Keys keep the order and spelling the caller used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Set a field. Re-inserting an existing key replaces the value in place.
    pub fn insert(&mut self, field: String, value: String) {
        self.0.insert(field, value);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// All records produced by one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<Record>);

impl ResultSet {
    pub fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[Record] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// Render as an indented JSON array.
    pub fn to_pretty_json(&self) -> MockDataResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Every violation found in one argument payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(pub Vec<Violation>);

impl Violations {
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// True when any violation sits at `path` or below it.
    pub fn mentions(&self, path: &str) -> bool {
        self.0.iter().any(|v| {
            v.path == path
                || v
                    .path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Errors that can occur in the mock data library.
#[derive(thiserror::Error, Debug)]
pub enum MockDataError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(Violations),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type.
pub type MockDataResult<T> = Result<T, MockDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FieldKind::parse("name"), FieldKind::Name);
        assert_eq!(FieldKind::parse("NAME"), FieldKind::Name);
        assert_eq!(FieldKind::parse("eMaIl"), FieldKind::Email);
        assert_eq!(FieldKind::parse("Country"), FieldKind::Country);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(FieldKind::parse("favoriteColor"), FieldKind::Other);
        assert_eq!(FieldKind::parse(""), FieldKind::Other);
        assert_eq!(FieldKind::parse(" name"), FieldKind::Other);
        assert!(!FieldKind::parse("zip").is_known());
    }

    #[test]
    fn test_known_kinds_round_trip_through_parse() {
        for kind in FieldKind::KNOWN {
            assert!(kind.is_known());
            assert_eq!(FieldKind::parse(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut record = Record::with_capacity(3);
        record.insert("zeta".into(), "1".into());
        record.insert("alpha".into(), "2".into());
        record.insert("Mid".into(), "3".into());
        let keys: Vec<_> = record.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "Mid"]);
    }

    #[test]
    fn test_record_reinsert_replaces_in_place() {
        let mut record = Record::default();
        record.insert("a".into(), "1".into());
        record.insert("b".into(), "2".into());
        record.insert("a".into(), "3".into());
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some("3"));
        assert_eq!(record.keys().next(), Some("a"));
    }

    #[test]
    fn test_result_set_pretty_json() {
        let mut record = Record::default();
        record.insert("b".into(), "x".into());
        record.insert("a".into(), "y".into());
        let set = ResultSet::new(vec![record]);
        let json = set.to_pretty_json().unwrap();
        assert_eq!(json, "[\n  {\n    \"b\": \"x\",\n    \"a\": \"y\"\n  }\n]");
    }

    #[test]
    fn test_violations_display_and_mentions() {
        let violations = Violations(vec![
            Violation::new("count", "Number must be less than or equal to 100"),
            Violation::new("fields.1", "Expected string, received number"),
        ]);
        assert_eq!(
            violations.to_string(),
            "count: Number must be less than or equal to 100, fields.1: Expected string, received number"
        );
        assert!(violations.mentions("count"));
        assert!(violations.mentions("fields"));
        assert!(!violations.mentions("field"));

        let err = MockDataError::InvalidArguments(violations);
        assert!(err.to_string().starts_with("Invalid arguments: count: "));
    }
}
