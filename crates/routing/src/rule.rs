use eventdeck_session::Role;

/// Access policy for one navigation subtree.
///
/// Patterns are `/`-separated segment prefixes; `*` matches exactly one
/// segment (for id-bearing routes like `/events/*/edit`). An empty role set
/// means "any authenticated user".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pattern: String,
    required_roles: Vec<Role>,
}

impl RouteRule {
    /// Rule requiring only an authenticated session.
    pub fn authenticated(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            required_roles: Vec::new(),
        }
    }

    /// Rule requiring one of the given roles.
    pub fn roles(pattern: impl Into<String>, required_roles: impl Into<Vec<Role>>) -> Self {
        Self {
            pattern: pattern.into(),
            required_roles: required_roles.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn required_roles(&self) -> &[Role] {
        &self.required_roles
    }

    pub fn admits(&self, role: Role) -> bool {
        self.required_roles.is_empty() || self.required_roles.contains(&role)
    }

    /// Specificity of this rule for `path`, if it matches at all.
    ///
    /// Literal segments score 2 and wildcards 1, so a deeper match always
    /// outranks a shallower one and a literal outranks a wildcard at equal
    /// depth.
    pub(crate) fn specificity(&self, path: &str) -> Option<u32> {
        let mut path_segments = segments(path);
        let mut score = 0;

        for pattern_segment in segments(&self.pattern) {
            let path_segment = path_segments.next()?;
            match pattern_segment {
                "*" => score += 1,
                literal if literal == path_segment => score += 2,
                _ => return None,
            }
        }
        Some(score)
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Immutable rule table, built once at application start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteRuleSet {
    rules: Vec<RouteRule>,
}

impl RouteRuleSet {
    pub fn new(rules: impl Into<Vec<RouteRule>>) -> Self {
        Self {
            rules: rules.into(),
        }
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// The most specific rules matching `path` (plural: distinct rules can
    /// tie on specificity, and the guard resolves the tie permissively).
    pub(crate) fn most_specific<'a>(&'a self, path: &str) -> Vec<&'a RouteRule> {
        let mut best = 0;
        let mut winners: Vec<&RouteRule> = Vec::new();

        for rule in &self.rules {
            let Some(score) = rule.specificity(path) else {
                continue;
            };
            if score > best {
                best = score;
                winners.clear();
            }
            if score == best {
                winners.push(rule);
            }
        }
        winners
    }
}

impl FromIterator<RouteRule> for RouteRuleSet {
    fn from_iter<T: IntoIterator<Item = RouteRule>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// The reviewed route table for the dashboard.
///
/// Every gated area is an explicit entry; paths outside the table (login,
/// register, forgot-password) stay public.
pub fn default_rules() -> RouteRuleSet {
    RouteRuleSet::new(vec![
        RouteRule::authenticated("/dashboard"),
        RouteRule::authenticated("/events"),
        RouteRule::authenticated("/tickets"),
        RouteRule::authenticated("/categories"),
        RouteRule::roles("/categories/create", [Role::Admin]),
        RouteRule::roles("/categories/*/edit", [Role::Admin]),
        RouteRule::roles("/users", [Role::Admin]),
        RouteRule::authenticated("/users/profile"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_prefix_matching() {
        let rule = RouteRule::authenticated("/users");
        assert_eq!(rule.specificity("/users"), Some(2));
        assert_eq!(rule.specificity("/users/create"), Some(2));
        assert_eq!(rule.specificity("/users/42/edit"), Some(2));
        assert_eq!(rule.specificity("/username"), None);
        assert_eq!(rule.specificity("/"), None);
    }

    #[test]
    fn wildcard_matches_exactly_one_segment() {
        let rule = RouteRule::roles("/categories/*/edit", [Role::Admin]);
        assert_eq!(rule.specificity("/categories/42/edit"), Some(5));
        assert_eq!(rule.specificity("/categories/42"), None);
        assert_eq!(rule.specificity("/categories/edit"), None);
    }

    #[test]
    fn deeper_rules_win() {
        let rules = RouteRuleSet::new(vec![
            RouteRule::roles("/users", [Role::Admin]),
            RouteRule::authenticated("/users/profile"),
        ]);

        let winners = rules.most_specific("/users/profile");
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].pattern(), "/users/profile");

        let winners = rules.most_specific("/users");
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].pattern(), "/users");
    }

    #[test]
    fn literal_outranks_wildcard_at_equal_depth() {
        let rules = RouteRuleSet::new(vec![
            RouteRule::roles("/categories/*", [Role::Admin]),
            RouteRule::authenticated("/categories/create"),
        ]);

        let winners = rules.most_specific("/categories/create");
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].pattern(), "/categories/create");
    }

    #[test]
    fn unmatched_path_has_no_winners() {
        assert!(default_rules().most_specific("/login").is_empty());
        assert!(default_rules().most_specific("/forgot-password").is_empty());
    }
}
