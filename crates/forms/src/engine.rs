use std::collections::BTreeMap;

use serde::Serialize;

use crate::rule::Rule;
use crate::value::FieldValues;

/// Ordered per-field rule lists for one form type.
///
/// Field order is declaration order; rules within a field run in order and
/// the first failure wins for that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, rules: impl Into<Vec<Rule>>) -> Self {
        self.fields.push((name.into(), rules.into()));
        self
    }

    pub fn fields(&self) -> &[(String, Vec<Rule>)] {
        &self.fields
    }
}

/// Field-level error messages; empty means the record is valid as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<String, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Run `rules` against `values`.
///
/// Deterministic and side-effect free, cheap enough for every keystroke.
/// Never fails: a rule that cannot apply simply passes, and unknown fields
/// read as absent.
pub fn validate(rules: &RuleSet, values: &FieldValues) -> ValidationResult {
    let mut errors = BTreeMap::new();

    for (field, field_rules) in rules.fields() {
        let value = values.get(field);
        for rule in field_rules {
            if !rule.constraint().holds(value, values) {
                errors.insert(field.clone(), rule.message().to_string());
                break;
            }
        }
    }

    ValidationResult { errors }
}
