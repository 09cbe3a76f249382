use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::Claims;
use super::AuthError;

/// Issues and verifies signed, time-bounded credentials. Built once at
/// startup from the configured secret; sign/verify are pure and synchronous.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl: Duration) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Configuration(
                "signing secret is empty; refusing to issue or verify credentials".to_string(),
            ));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    /// Validity window applied to claims issued with this codec.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn issue(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(|e| {
            tracing::error!("token signing failed: {}", e);
            AuthError::Configuration(format!("token signing failed: {}", e))
        })
    }

    /// Returns the claims for a well-formed, untampered, unexpired credential
    /// and `None` otherwise. Callers cannot tell the failure modes apart;
    /// the log line can.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        tracing::warn!("rejected credential: expired");
                    }
                    kind => {
                        tracing::warn!("rejected credential: {:?}", kind);
                    }
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use uuid::Uuid;

    fn sample_claims(ttl: Duration) -> Claims {
        Claims::new(
            Uuid::new_v4(),
            "Grace Hopper".into(),
            "grace@classtrack.test".into(),
            Role::Admin,
            ttl,
        )
    }

    #[test]
    fn test_empty_secret_is_a_configuration_error() {
        let err = TokenCodec::new("", Duration::days(7)).err().unwrap();
        assert!(matches!(err, AuthError::Configuration(_)));
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let codec = TokenCodec::new("test-secret", Duration::days(7)).unwrap();
        let claims = sample_claims(codec.ttl());
        let token = codec.issue(&claims).unwrap();
        assert_eq!(codec.verify(&token), Some(claims));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = TokenCodec::new("secret-one", Duration::days(7)).unwrap();
        let verifier = TokenCodec::new("secret-two", Duration::days(7)).unwrap();
        let token = issuer.issue(&sample_claims(Duration::days(7))).unwrap();
        assert_eq!(verifier.verify(&token), None);
    }

    #[test]
    fn test_expired_credential_is_rejected() {
        let codec = TokenCodec::new("test-secret", Duration::days(7)).unwrap();
        // Past the default decode leeway of 60 seconds
        let token = codec.issue(&sample_claims(Duration::minutes(-5))).unwrap();
        assert_eq!(codec.verify(&token), None);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let codec = TokenCodec::new("test-secret", Duration::days(7)).unwrap();
        assert_eq!(codec.verify("not-a-token"), None);
        assert_eq!(codec.verify(""), None);
    }
}
