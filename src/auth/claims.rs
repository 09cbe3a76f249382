use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted user role, stored uppercase in user records and token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Instructor,
    Student,
}

/// Permission-table vocabulary. Every role maps onto exactly one tier via
/// [`Role::tier`], the single translation point between the two vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn tier(self) -> Tier {
        match self {
            Role::Admin => Tier::Admin,
            Role::Instructor => Tier::Editor,
            Role::Student => Tier::Viewer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "ADMIN"),
            Role::Instructor => write!(f, "INSTRUCTOR"),
            Role::Student => write!(f, "STUDENT"),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Admin => write!(f, "admin"),
            Tier::Editor => write!(f, "editor"),
            Tier::Viewer => write!(f, "viewer"),
        }
    }
}

/// Decoded content of a verified credential. Only constructed here (at issue
/// time) or by successful verification in [`crate::auth::TokenCodec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Expiry is always issued-at plus the validity window.
    pub fn new(sub: Uuid, name: String, email: String, role: Role, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub,
            name,
            email,
            role,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
