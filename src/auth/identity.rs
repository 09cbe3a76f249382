use axum::http::{header, HeaderMap};
use uuid::Uuid;

use super::claims::{Claims, Role};
use super::token::TokenCodec;

/// Authenticated caller context for one request. Built only from verified
/// claims, attached to requests under the API namespace, and dropped when
/// the request completes.
#[derive(Clone, Debug)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            name: claims.name,
        }
    }
}

/// Extracts a bearer credential from a request and verifies it. Absent and
/// invalid credentials both come back as `None`; callers decide whether
/// anonymous is acceptable. The resolver never assigns a default role.
#[derive(Clone)]
pub struct IdentityResolver {
    codec: TokenCodec,
    cookie_name: String,
}

impl IdentityResolver {
    pub fn new(codec: TokenCodec, cookie_name: String) -> Self {
        Self { codec, cookie_name }
    }

    pub fn resolve(&self, headers: &HeaderMap) -> Option<Identity> {
        let token = self.extract_token(headers)?;
        self.codec.verify(&token).map(Identity::from)
    }

    /// Authorization header first, cookie second. The first non-empty source
    /// found is the only one trusted for the call.
    fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        bearer_token(headers).or_else(|| self.cookie_token(headers))
    }

    fn cookie_token(&self, headers: &HeaderMap) -> Option<String> {
        let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == self.cookie_name && !value.is_empty())
            .map(|(_, value)| value.to_string())
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn resolver() -> IdentityResolver {
        let codec = TokenCodec::new("test-secret", Duration::days(7)).unwrap();
        IdentityResolver::new(codec, "classtrack_token".to_string())
    }

    fn token_for(role: Role) -> String {
        let codec = TokenCodec::new("test-secret", Duration::days(7)).unwrap();
        let claims = Claims::new(
            Uuid::new_v4(),
            "Ada Lovelace".into(),
            "ada@classtrack.test".into(),
            role,
            Duration::days(7),
        );
        codec.issue(&claims).unwrap()
    }

    #[test]
    fn test_resolves_from_authorization_header() {
        let mut headers = HeaderMap::new();
        let value = format!("Bearer {}", token_for(Role::Instructor));
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());

        let identity = resolver().resolve(&headers).unwrap();
        assert_eq!(identity.role, Role::Instructor);
        assert_eq!(identity.email, "ada@classtrack.test");
    }

    #[test]
    fn test_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        let value = format!("other=1; classtrack_token={}", token_for(Role::Student));
        headers.insert(header::COOKIE, value.parse().unwrap());

        let identity = resolver().resolve(&headers).unwrap();
        assert_eq!(identity.role, Role::Student);
    }

    #[test]
    fn test_header_is_preferred_over_cookie() {
        let mut headers = HeaderMap::new();
        let header_value = format!("Bearer {}", token_for(Role::Admin));
        headers.insert(header::AUTHORIZATION, header_value.parse().unwrap());
        let cookie_value = format!("classtrack_token={}", token_for(Role::Student));
        headers.insert(header::COOKIE, cookie_value.parse().unwrap());

        let identity = resolver().resolve(&headers).unwrap();
        assert_eq!(identity.role, Role::Admin);
    }

    #[test]
    fn test_empty_bearer_falls_back_to_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer ".parse().unwrap());
        let cookie_value = format!("classtrack_token={}", token_for(Role::Student));
        headers.insert(header::COOKIE, cookie_value.parse().unwrap());

        assert!(resolver().resolve(&headers).is_some());
    }

    #[test]
    fn test_absent_and_invalid_both_resolve_to_none() {
        assert!(resolver().resolve(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer tampered.token.here".parse().unwrap());
        assert!(resolver().resolve(&headers).is_none());
    }
}
