use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;

use crate::auth::{IdentityResolver, RouteClassifier, TokenCodec};
use crate::config::AppConfig;
use crate::store::{CredentialStore, MemoryCredentialStore, ProjectStore};

/// Process-wide shared state. The auth pieces are immutable after startup;
/// the stores own their interior locking.
#[derive(Clone)]
pub struct AppState {
    pub codec: TokenCodec,
    pub resolver: IdentityResolver,
    pub classifier: RouteClassifier,
    pub auth_cookie: String,
    pub users: Arc<dyn CredentialStore>,
    pub projects: Arc<ProjectStore>,
}

impl AppState {
    /// Builds the state from configuration with the default seeded stores.
    /// Fails (rather than serving open) when the signing secret is missing.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::with_store(config, Arc::new(MemoryCredentialStore::seeded()))
    }

    pub fn with_store(
        config: &AppConfig,
        users: Arc<dyn CredentialStore>,
    ) -> anyhow::Result<Self> {
        let ttl = Duration::days(config.security.token_ttl_days);
        let codec = TokenCodec::new(&config.security.jwt_secret, ttl)
            .context("refusing to start without a usable signing secret")?;
        let resolver =
            IdentityResolver::new(codec.clone(), config.security.auth_cookie.clone());

        Ok(Self {
            codec,
            resolver,
            classifier: RouteClassifier::classtrack(),
            auth_cookie: config.security.auth_cookie.clone(),
            users,
            projects: Arc::new(ProjectStore::new()),
        })
    }
}
