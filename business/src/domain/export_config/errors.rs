/// Errors raised while loading the export configuration.
/// Use code-style identifiers for all error variants, with the cause appended.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.read_failed: {0}")]
    ReadFailed(String),
    #[error("config.invalid_json: {0}")]
    InvalidJson(String),
    #[error("config.invalid_guild_id")]
    InvalidGuildId,
}
