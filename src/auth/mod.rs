// Authentication and authorization core: token codec, identity resolution,
// permission table, and route classification. Composed by the middleware in
// crate::middleware.

pub mod claims;
pub mod identity;
pub mod permissions;
pub mod routes;
pub mod token;

pub use claims::{Claims, Role, Tier};
pub use identity::{Identity, IdentityResolver};
pub use permissions::Action;
pub use routes::{RouteClass, RouteClassifier};
pub use token::TokenCodec;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no credential presented")]
    MissingCredential,
    #[error("credential rejected")]
    InvalidCredential,
    #[error("role does not permit this operation")]
    InsufficientRole,
    #[error("auth configuration error: {0}")]
    Configuration(String),
}
