use crate::domain::export_config::errors::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum GuildJobError {
    #[error("guild_job.client_init_failed: {0}")]
    ClientInitFailed(String),
    #[error("guild_job.authentication_failed: {0}")]
    AuthenticationFailed(String),
    #[error("guild_job.query_failed: {0}")]
    QueryFailed(String),
    #[error("guild_job.invalid_document: {0}")]
    InvalidDocument(String),
    #[error("guild_job.write_failed: {0}")]
    WriteFailed(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
