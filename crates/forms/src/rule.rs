use std::borrow::Cow;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::value::{FieldValue, FieldValues};

/// The constraint catalog shared by every create/update form.
///
/// Apart from `Required`, `MinLength`, and `MatchesField`, constraints pass
/// on blank or absent values: shape and range checks only fire once the user
/// has typed something, with `Required` deciding whether blank is acceptable
/// at all. `MinLength` counts a blank as length zero and `MatchesField`
/// compares raw text, since both exist to gate passwords.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// A non-blank text value or a file must be supplied.
    Required,

    /// Text length (in characters) must not exceed the limit.
    MaxLength(usize),

    /// Text length must be at least the limit; blank counts as zero.
    MinLength(usize),

    /// The value must parse as a number inside `[min, max]` (either bound
    /// optional). Whole-field parse: trailing garbage is rejected.
    NumericRange { min: Option<f64>, max: Option<f64> },

    /// Conventional `local@domain.tld` shape.
    EmailShape,

    /// `#RRGGBB` with six hex digits.
    HexColor,

    /// An absolute URL with a scheme and a host.
    AbsoluteUrl,

    /// Optional leading `+`, then 10 to 15 digits.
    PhoneShape,

    /// The trimmed value must be one of the listed options.
    OneOf(Vec<String>),

    /// An attached file must not exceed the byte limit.
    MaxFileSize(u64),

    /// Raw text must equal another field's raw text (password confirm).
    MatchesField(String),

    /// As a date or date-time, the value must be strictly after `other`.
    DateAfterField(String),

    /// As a date or date-time, the value must be strictly before `other`.
    DateBeforeField(String),

    /// The value becomes mandatory once `other` is filled in.
    RequiredWithField(String),

    /// As a number, the value must not be below the other field's number.
    NotLessThanField(String),
}

impl Constraint {
    /// Whether `value` satisfies this constraint within `record`.
    pub fn holds(&self, value: &FieldValue, record: &FieldValues) -> bool {
        match self {
            Constraint::Required => value.is_present(),

            Constraint::MaxLength(limit) => match value.text() {
                Some(text) => text.chars().count() <= *limit,
                None => true,
            },

            Constraint::MinLength(limit) => {
                let len = value.raw_text().map_or(0, |t| t.chars().count());
                len >= *limit
            }

            Constraint::NumericRange { min, max } => match present_text(value) {
                Some(text) => match parse_number(text) {
                    Some(n) => min.is_none_or(|m| n >= m) && max.is_none_or(|m| n <= m),
                    None => false,
                },
                None => true,
            },

            Constraint::EmailShape => check_shape(value, is_email_shaped),
            Constraint::HexColor => check_shape(value, is_hex_color),
            Constraint::PhoneShape => check_shape(value, is_phone_shaped),
            Constraint::AbsoluteUrl => check_shape(value, is_absolute_url),

            Constraint::OneOf(options) => match present_text(value) {
                Some(text) => options.iter().any(|o| o == text),
                None => true,
            },

            Constraint::MaxFileSize(limit) => match value {
                FieldValue::File { size_bytes, .. } => size_bytes <= limit,
                _ => true,
            },

            Constraint::MatchesField(other) => {
                value.raw_text().unwrap_or("") == record.get(other).raw_text().unwrap_or("")
            }

            Constraint::DateAfterField(other) => {
                match (instant_of(value), instant_of(record.get(other))) {
                    (Some(this), Some(other)) => this > other,
                    _ => true,
                }
            }

            Constraint::DateBeforeField(other) => {
                match (instant_of(value), instant_of(record.get(other))) {
                    (Some(this), Some(other)) => this < other,
                    _ => true,
                }
            }

            Constraint::RequiredWithField(other) => {
                !record.get(other).is_present() || value.is_present()
            }

            Constraint::NotLessThanField(other) => {
                let this = present_text(value).and_then(parse_number);
                let other = present_text(record.get(other)).and_then(parse_number);
                match (this, other) {
                    (Some(this), Some(other)) => this >= other,
                    _ => true,
                }
            }
        }
    }
}

/// One check with the message reported when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    constraint: Constraint,
    message: Cow<'static, str>,
}

impl Rule {
    pub fn new(constraint: Constraint, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            constraint,
            message: message.into(),
        }
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn present_text(value: &FieldValue) -> Option<&str> {
    value.text().filter(|t| !t.is_empty())
}

fn check_shape(value: &FieldValue, shaped: fn(&str) -> bool) -> bool {
    match present_text(value) {
        Some(text) => shaped(text),
        None => true,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse `YYYY-MM-DDTHH:MM[:SS]`, falling back to a bare date at midnight.
/// Forms that combine separate date and time inputs produce the former;
/// date-only pickers produce the latter.
fn instant_of(value: &FieldValue) -> Option<NaiveDateTime> {
    let text = present_text(value)?;
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}

fn is_email_shaped(text: &str) -> bool {
    let mut parts = text.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !tld.is_empty() && !domain.contains(char::is_whitespace)
}

fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_phone_shaped(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_absolute_url(text: &str) -> bool {
    url::Url::parse(text).is_ok_and(|u| u.has_host())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn empty_record() -> FieldValues {
        FieldValues::new()
    }

    #[test]
    fn required_needs_text_or_file() {
        let record = empty_record();
        assert!(!Constraint::Required.holds(&FieldValue::Absent, &record));
        assert!(!Constraint::Required.holds(&text("  "), &record));
        assert!(Constraint::Required.holds(&text("x"), &record));
        assert!(Constraint::Required.holds(
            &FieldValue::File {
                name: "a.png".to_string(),
                size_bytes: 1
            },
            &record
        ));
    }

    #[test]
    fn shape_checks_skip_blank_values() {
        let record = empty_record();
        for constraint in [
            Constraint::EmailShape,
            Constraint::HexColor,
            Constraint::PhoneShape,
            Constraint::AbsoluteUrl,
            Constraint::NumericRange {
                min: Some(0.0),
                max: None,
            },
        ] {
            assert!(constraint.holds(&FieldValue::Absent, &record), "{constraint:?}");
            assert!(constraint.holds(&text(""), &record), "{constraint:?}");
        }
    }

    #[test]
    fn email_shape() {
        let record = empty_record();
        assert!(Constraint::EmailShape.holds(&text("user@event.com"), &record));
        assert!(Constraint::EmailShape.holds(&text("a.b@c.co.uk"), &record));
        assert!(!Constraint::EmailShape.holds(&text("not-an-email"), &record));
        assert!(!Constraint::EmailShape.holds(&text("a@b"), &record));
        assert!(!Constraint::EmailShape.holds(&text("@x.com"), &record));
        assert!(!Constraint::EmailShape.holds(&text("a b@c.io"), &record));
        assert!(!Constraint::EmailShape.holds(&text("a@b.c@d.e"), &record));
    }

    #[test]
    fn hex_color_shape() {
        let record = empty_record();
        assert!(Constraint::HexColor.holds(&text("#3B82F6"), &record));
        assert!(Constraint::HexColor.holds(&text("#000000"), &record));
        assert!(!Constraint::HexColor.holds(&text("3B82F6"), &record));
        assert!(!Constraint::HexColor.holds(&text("#3B82F"), &record));
        assert!(!Constraint::HexColor.holds(&text("#3B82FG"), &record));
        assert!(!Constraint::HexColor.holds(&text("#3B82F6A"), &record));
    }

    #[test]
    fn phone_shape() {
        let record = empty_record();
        assert!(Constraint::PhoneShape.holds(&text("+201234567890"), &record));
        assert!(Constraint::PhoneShape.holds(&text("0123456789"), &record));
        assert!(!Constraint::PhoneShape.holds(&text("12345"), &record));
        assert!(!Constraint::PhoneShape.holds(&text("+12 345 678 90"), &record));
    }

    #[test]
    fn absolute_url_shape() {
        let record = empty_record();
        assert!(Constraint::AbsoluteUrl.holds(&text("https://example.com/x"), &record));
        assert!(!Constraint::AbsoluteUrl.holds(&text("example.com"), &record));
        assert!(!Constraint::AbsoluteUrl.holds(&text("/relative/path"), &record));
    }

    #[test]
    fn numeric_range_rejects_trailing_garbage() {
        let constraint = Constraint::NumericRange {
            min: Some(0.0),
            max: None,
        };
        let record = empty_record();
        assert!(constraint.holds(&text("12.5"), &record));
        assert!(constraint.holds(&text("0"), &record));
        assert!(!constraint.holds(&text("-1"), &record));
        assert!(!constraint.holds(&text("12abc"), &record));
        assert!(!constraint.holds(&text("NaN"), &record));
    }

    #[test]
    fn matches_field_compares_raw_text() {
        let record = FieldValues::new().with_text("password", "abc123");
        let matches = Constraint::MatchesField("password".to_string());
        assert!(matches.holds(&text("abc123"), &record));
        assert!(!matches.holds(&text("abc124"), &record));
        assert!(!matches.holds(&text("abc123 "), &record));
        assert!(!matches.holds(&FieldValue::Absent, &record));
    }

    #[test]
    fn date_order_supports_bare_dates_and_datetimes() {
        let after = Constraint::DateAfterField("start_date".to_string());

        let record = FieldValues::new().with_text("start_date", "2025-04-12");
        assert!(after.holds(&text("2025-04-14"), &record));
        assert!(!after.holds(&text("2025-04-10"), &record));
        assert!(!after.holds(&text("2025-04-12"), &record));

        let record = FieldValues::new().with_text("start_date", "2025-04-12T19:00");
        assert!(after.holds(&text("2025-04-12T21:30"), &record));
        assert!(!after.holds(&text("2025-04-12T18:00"), &record));
    }

    #[test]
    fn date_order_passes_when_either_side_is_missing() {
        let after = Constraint::DateAfterField("start_date".to_string());
        let record = empty_record();
        assert!(after.holds(&text("2025-04-14"), &record));
        assert!(after.holds(&FieldValue::Absent, &record));
    }

    #[test]
    fn required_with_field_pairs_fields() {
        let constraint = Constraint::RequiredWithField("early_bird_price".to_string());

        let with_price = FieldValues::new().with_text("early_bird_price", "10");
        assert!(!constraint.holds(&FieldValue::Absent, &with_price));
        assert!(constraint.holds(&text("2025-04-01"), &with_price));

        let without_price = empty_record();
        assert!(constraint.holds(&FieldValue::Absent, &without_price));
    }

    #[test]
    fn not_less_than_field() {
        let constraint = Constraint::NotLessThanField("min_age".to_string());
        let record = FieldValues::new().with_text("min_age", "18");
        assert!(constraint.holds(&text("21"), &record));
        assert!(constraint.holds(&text("18"), &record));
        assert!(!constraint.holds(&text("16"), &record));
        assert!(constraint.holds(&FieldValue::Absent, &record));
    }

    #[test]
    fn max_file_size_only_applies_to_files() {
        let constraint = Constraint::MaxFileSize(5 * 1024 * 1024);
        let record = empty_record();
        let ok = FieldValue::File {
            name: "cover.png".to_string(),
            size_bytes: 4 * 1024 * 1024,
        };
        let too_big = FieldValue::File {
            name: "cover.png".to_string(),
            size_bytes: 6 * 1024 * 1024,
        };
        assert!(constraint.holds(&ok, &record));
        assert!(!constraint.holds(&too_big, &record));
        assert!(constraint.holds(&FieldValue::Absent, &record));
    }

    #[test]
    fn one_of_checks_present_values_only() {
        let constraint = Constraint::OneOf(vec![
            "male".to_string(),
            "female".to_string(),
            "other".to_string(),
        ]);
        let record = empty_record();
        assert!(constraint.holds(&text("female"), &record));
        assert!(!constraint.holds(&text("unknown"), &record));
        assert!(constraint.holds(&FieldValue::Absent, &record));
    }

    #[test]
    fn min_length_counts_blank_as_zero() {
        let constraint = Constraint::MinLength(6);
        let record = empty_record();
        assert!(constraint.holds(&text("abc123"), &record));
        assert!(!constraint.holds(&text("abc12"), &record));
        assert!(!constraint.holds(&FieldValue::Absent, &record));
    }
}
