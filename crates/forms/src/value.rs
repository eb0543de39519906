use std::collections::BTreeMap;

/// One field's current value as the form holds it.
///
/// Form inputs are strings (dates, prices, and ages included); file pickers
/// contribute a name and byte size. `Absent` covers fields the form never
/// touched, so rule tables can reference fields that a given screen omits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File { name: String, size_bytes: u64 },
    Absent,
}

const ABSENT: FieldValue = FieldValue::Absent;

impl FieldValue {
    /// Trimmed text content, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// Raw (untrimmed) text content, if any. Password comparisons use this:
    /// surrounding whitespace in a password is meaningful.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether the user supplied anything: non-blank text or a file.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::File { .. } => true,
            FieldValue::Absent => false,
        }
    }
}

/// The whole form's values, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    fields: BTreeMap<String, FieldValue>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .insert(field.into(), FieldValue::Text(value.into()));
        self
    }

    pub fn with_file(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        self.fields.insert(
            field.into(),
            FieldValue::File {
                name: name.into(),
                size_bytes,
            },
        );
        self
    }

    pub fn set_text(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields
            .insert(field.into(), FieldValue::Text(value.into()));
    }

    /// Value of `field`; untouched fields read as `Absent`.
    pub fn get(&self, field: &str) -> &FieldValue {
        self.fields.get(field).unwrap_or(&ABSENT)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).text()
    }
}
