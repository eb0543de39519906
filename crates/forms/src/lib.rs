//! `eventdeck-forms` — declarative cross-field form validation.
//!
//! One engine, one constraint catalog, one rule table per screen. The engine
//! is pure and deterministic so it can run on every keystroke and be unit
//! tested without any UI in sight.

pub mod engine;
pub mod rule;
pub mod tables;
pub mod value;

pub use engine::{validate, RuleSet, ValidationResult};
pub use rule::{Constraint, Rule};
pub use tables::{category_rules, event_rules, registration_rules, ticket_rules, user_rules};
pub use value::{FieldValue, FieldValues};
