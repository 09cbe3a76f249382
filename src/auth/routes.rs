/// Classification of a request path, decided before any identity work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
    Admin,
}

/// Prefix/exact rules mapping paths onto {public, protected, admin}.
/// Immutable after construction; one instance lives in the app state.
#[derive(Debug, Clone)]
pub struct RouteClassifier {
    public: Vec<String>,
    protected: Vec<String>,
    admin: Vec<String>,
    bypass: Vec<String>,
}

impl RouteClassifier {
    pub fn new(
        public: Vec<String>,
        protected: Vec<String>,
        admin: Vec<String>,
        bypass: Vec<String>,
    ) -> Self {
        Self { public, protected, admin, bypass }
    }

    /// Rule tables for the ClassTrack dashboard and its API.
    pub fn classtrack() -> Self {
        Self::new(
            vec![
                "/".into(),
                "/health".into(),
                "/login".into(),
                "/register".into(),
                "/auth".into(),
            ],
            vec!["/dashboard".into(), "/projects".into(), "/api".into()],
            vec!["/admin".into(), "/api/admin".into()],
            vec!["/assets".into(), "/favicon.ico".into()],
        )
    }

    /// Precedence: asset bypass, then admin, then protected, then the public
    /// list. Paths matching no rule are treated as protected so an
    /// unlisted route is never served open.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_bypassed(path) {
            return RouteClass::Public;
        }
        if self.admin.iter().any(|rule| rule_matches(rule, path)) {
            return RouteClass::Admin;
        }
        if self.protected.iter().any(|rule| rule_matches(rule, path)) {
            return RouteClass::Protected;
        }
        if self.public.iter().any(|rule| rule_matches(rule, path)) {
            return RouteClass::Public;
        }
        RouteClass::Protected
    }

    /// Static assets and reserved paths skip the gate entirely, independent
    /// of the explicit public list.
    fn is_bypassed(&self, path: &str) -> bool {
        if self.bypass.iter().any(|rule| rule_matches(rule, path)) {
            return true;
        }
        // A file extension in the final segment marks a static asset
        path.rsplit('/').next().is_some_and(|segment| segment.contains('.'))
    }
}

/// Exact match, or prefix match on a segment boundary: rule "/login" matches
/// "/login" and "/login/forgot" but never "/loginextra".
fn rule_matches(rule: &str, path: &str) -> bool {
    if path == rule {
        return true;
    }
    if rule == "/" {
        return false;
    }
    path.len() > rule.len() && path.starts_with(rule) && path.as_bytes()[rule.len()] == b'/'
}
