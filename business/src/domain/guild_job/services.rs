use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::export_config::model::FirebaseProjectConfig;
use crate::domain::shared::value_objects::{GuildId, Secret};

use super::errors::GuildJobError;
use super::model::GuildJob;

/// A signed-in session obtained by exchanging a custom token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub id_token: Secret,
    pub refresh_token: Option<Secret>,
    pub local_id: Option<String>,
    pub expires_in_secs: Option<u64>,
}

/// Service port for the hosted database holding the guild jobs.
///
/// Two steps, always in this order: exchange the custom token for a
/// session, then read the jobs collection with that session. The `limit`
/// is forwarded to the service; implementations must not truncate locally.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn authenticate(&self, token: &Secret) -> Result<AuthSession, GuildJobError>;

    async fn query_jobs(
        &self,
        session: &AuthSession,
        guild_id: &GuildId,
        limit: u32,
    ) -> Result<Vec<GuildJob>, GuildJobError>;
}

/// Builds a [`JobStore`] bound to one Firebase project.
///
/// Stands in for initializing the client app from the project config; no
/// network traffic happens here.
pub trait JobStoreConnector: Send + Sync {
    fn connect(&self, project: &FirebaseProjectConfig) -> Result<Arc<dyn JobStore>, GuildJobError>;
}
