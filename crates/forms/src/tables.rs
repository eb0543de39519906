//! Rule tables for each create/update screen.
//!
//! Declared once here instead of re-implemented per screen; messages are the
//! exact user-facing strings the dashboard shows inline.

use crate::engine::RuleSet;
use crate::rule::{Constraint, Rule};

const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

fn non_negative() -> Constraint {
    Constraint::NumericRange {
        min: Some(0.0),
        max: None,
    }
}

/// Create/update event form.
pub fn event_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "title",
            [
                Rule::new(Constraint::Required, "Title is required"),
                Rule::new(
                    Constraint::MaxLength(100),
                    "Title cannot exceed 100 characters",
                ),
            ],
        )
        .field(
            "description",
            [
                Rule::new(Constraint::Required, "Description is required"),
                Rule::new(
                    Constraint::MaxLength(2000),
                    "Description cannot exceed 2000 characters",
                ),
            ],
        )
        .field(
            "short_description",
            [Rule::new(
                Constraint::MaxLength(200),
                "Short description cannot exceed 200 characters",
            )],
        )
        .field(
            "category",
            [Rule::new(Constraint::Required, "Category is required")],
        )
        .field(
            "venue_name",
            [Rule::new(Constraint::Required, "Venue name is required")],
        )
        .field(
            "start_date",
            [Rule::new(Constraint::Required, "Start date is required")],
        )
        .field(
            "start_time",
            [Rule::new(Constraint::Required, "Start time is required")],
        )
        .field(
            "end_date",
            [Rule::new(
                Constraint::DateAfterField("start_date".to_string()),
                "End date/time must be after start date/time",
            )],
        )
        .field(
            "ticket_price",
            [
                Rule::new(Constraint::Required, "Ticket price is required"),
                Rule::new(non_negative(), "Ticket price must be a non-negative number"),
            ],
        )
        .field(
            "early_bird_price",
            [Rule::new(
                non_negative(),
                "Early bird price must be a non-negative number",
            )],
        )
        .field(
            "early_bird_deadline",
            [
                Rule::new(
                    Constraint::RequiredWithField("early_bird_price".to_string()),
                    "Early bird deadline is required if price is provided",
                ),
                Rule::new(
                    Constraint::DateBeforeField("start_date".to_string()),
                    "Early bird deadline must be before event start",
                ),
            ],
        )
        .field(
            "total_seats",
            [
                Rule::new(Constraint::Required, "Total seats is required"),
                Rule::new(
                    Constraint::NumericRange {
                        min: Some(1.0),
                        max: None,
                    },
                    "Total seats must be at least 1",
                ),
            ],
        )
        .field(
            "min_age",
            [Rule::new(
                non_negative(),
                "Minimum age must be a non-negative number",
            )],
        )
        .field(
            "max_age",
            [
                Rule::new(
                    Constraint::NumericRange {
                        min: Some(0.0),
                        max: Some(120.0),
                    },
                    "Maximum age must be between 0 and 120",
                ),
                Rule::new(
                    Constraint::NotLessThanField("min_age".to_string()),
                    "Maximum age must be greater than minimum age",
                ),
            ],
        )
        .field(
            "website",
            [Rule::new(Constraint::AbsoluteUrl, "Invalid website URL")],
        )
        .field(
            "facebook",
            [Rule::new(Constraint::AbsoluteUrl, "Invalid Facebook URL")],
        )
        .field(
            "twitter",
            [Rule::new(Constraint::AbsoluteUrl, "Invalid Twitter URL")],
        )
        .field(
            "instagram",
            [Rule::new(Constraint::AbsoluteUrl, "Invalid Instagram URL")],
        )
        .field(
            "cover_image",
            [
                Rule::new(Constraint::Required, "Cover image is required"),
                Rule::new(
                    Constraint::MaxFileSize(MAX_IMAGE_BYTES),
                    "Cover image must be less than 5MB",
                ),
            ],
        )
}

/// Create/update category form.
pub fn category_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "name",
            [
                Rule::new(Constraint::Required, "Category name is required"),
                Rule::new(
                    Constraint::MaxLength(50),
                    "Category name cannot exceed 50 characters",
                ),
            ],
        )
        .field(
            "description",
            [Rule::new(
                Constraint::MaxLength(500),
                "Description cannot exceed 500 characters",
            )],
        )
        .field(
            "color",
            [Rule::new(
                Constraint::HexColor,
                "Color must be a valid hex code (e.g., #3B82F6)",
            )],
        )
}

/// Self-service signup form.
pub fn registration_rules() -> RuleSet {
    RuleSet::new()
        .field("name", [Rule::new(Constraint::Required, "Name is required")])
        .field(
            "email",
            [
                Rule::new(Constraint::Required, "Email is required"),
                Rule::new(Constraint::EmailShape, "Please enter a valid email address"),
            ],
        )
        .field(
            "password",
            [Rule::new(
                Constraint::MinLength(6),
                "Password must be at least 6 characters long",
            )],
        )
        .field(
            "password_confirm",
            [Rule::new(
                Constraint::MatchesField("password".to_string()),
                "Passwords do not match",
            )],
        )
}

/// Admin create/update user form.
pub fn user_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "name",
            [
                Rule::new(Constraint::Required, "Name is required"),
                Rule::new(
                    Constraint::MinLength(3),
                    "Name must be at least 3 characters long",
                ),
            ],
        )
        .field(
            "email",
            [
                Rule::new(Constraint::Required, "Email is required"),
                Rule::new(Constraint::EmailShape, "Invalid email format"),
            ],
        )
        .field(
            "password",
            [Rule::new(
                Constraint::MinLength(6),
                "Password must be at least 6 characters",
            )],
        )
        .field(
            "password_confirm",
            [
                Rule::new(Constraint::Required, "Password confirmation is required"),
                Rule::new(
                    Constraint::MatchesField("password".to_string()),
                    "Passwords do not match",
                ),
            ],
        )
        .field(
            "phone",
            [Rule::new(
                Constraint::PhoneShape,
                "Invalid phone number (use Egyptian or Saudi format)",
            )],
        )
        .field(
            "profile_img",
            [Rule::new(
                Constraint::MaxFileSize(MAX_IMAGE_BYTES),
                "Image size exceeds 5MB limit",
            )],
        )
}

/// Ticket booking form.
pub fn ticket_rules() -> RuleSet {
    RuleSet::new()
        .field(
            "seat_number",
            [Rule::new(Constraint::Required, "Seat number is required")],
        )
        .field(
            "attendee_name",
            [Rule::new(Constraint::Required, "Attendee name is required")],
        )
        .field(
            "attendee_email",
            [Rule::new(Constraint::Required, "Attendee email is required")],
        )
        .field(
            "attendee_phone",
            [Rule::new(Constraint::Required, "Attendee phone is required")],
        )
        .field(
            "attendee_age",
            [Rule::new(
                Constraint::NumericRange {
                    min: Some(1.0),
                    max: Some(120.0),
                },
                "Age must be between 1 and 120",
            )],
        )
        .field(
            "attendee_gender",
            [Rule::new(
                Constraint::OneOf(vec![
                    "male".to_string(),
                    "female".to_string(),
                    "other".to_string(),
                ]),
                "Invalid gender selection",
            )],
        )
        .field(
            "payment_method",
            [
                Rule::new(Constraint::Required, "Payment method is required"),
                Rule::new(
                    Constraint::OneOf(vec![
                        "cash".to_string(),
                        "card".to_string(),
                        "online".to_string(),
                        "bank_transfer".to_string(),
                    ]),
                    "Invalid payment method",
                ),
            ],
        )
}
