//! `eventdeck-routing` — role-gated navigation decisions.
//!
//! A declarative rule table plus a pure decision function. No I/O, no
//! internal state; the view layer performs the actual navigation.

pub mod guard;
pub mod rule;

pub use guard::{Decision, RouteGuard};
pub use rule::{default_rules, RouteRule, RouteRuleSet};
