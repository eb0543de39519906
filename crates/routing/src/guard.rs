use chrono::{DateTime, Utc};

use eventdeck_session::Claims;

use crate::rule::RouteRuleSet;

/// Outcome of a navigation check. The caller performs the actual navigation;
/// the guard only decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// Stateless gate over a `RouteRuleSet`.
///
/// `decide` is a pure function of `(path, claims, now)`:
/// - unmatched paths are public;
/// - only the most specific matching rules are consulted, and a path gated
///   by several equally specific rules is allowed if any of them admits the
///   current role;
/// - no session (or an expired one) redirects to the login path;
/// - a session whose role is not admitted redirects to the forbidden path.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    rules: RouteRuleSet,
    login_path: String,
    forbidden_path: String,
}

impl RouteGuard {
    pub fn new(rules: RouteRuleSet) -> Self {
        Self {
            rules,
            login_path: "/login".to_string(),
            forbidden_path: "/forbidden".to_string(),
        }
    }

    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    pub fn with_forbidden_path(mut self, path: impl Into<String>) -> Self {
        self.forbidden_path = path.into();
        self
    }

    pub fn rules(&self) -> &RouteRuleSet {
        &self.rules
    }

    pub fn decide(
        &self,
        path: &str,
        claims: Option<&Claims>,
        now: DateTime<Utc>,
    ) -> Decision {
        let winners = self.rules.most_specific(path);
        if winners.is_empty() {
            return Decision::Allow;
        }

        // An expired session gates exactly like no session.
        let live = claims.filter(|c| !c.is_expired(now));
        let Some(claims) = live else {
            tracing::debug!(path, "unauthenticated navigation to gated path");
            return Decision::Redirect(self.login_path.clone());
        };

        if winners.iter().any(|rule| rule.admits(claims.role)) {
            Decision::Allow
        } else {
            tracing::debug!(path, role = %claims.role, "role not admitted");
            Decision::Redirect(self.forbidden_path.clone())
        }
    }
}
