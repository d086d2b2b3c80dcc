use std::path::Path;

use async_trait::async_trait;

use business::domain::export_config::errors::ConfigError;
use business::domain::export_config::model::ExportConfig;
use business::domain::export_config::repository::ConfigSource;

use crate::paths::{CONFIG_FILE_NAME, normalize};

/// Reads `firestore.json` from the working directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigFile;

#[async_trait]
impl ConfigSource for JsonConfigFile {
    async fn load(&self, directory: &Path) -> Result<ExportConfig, ConfigError> {
        let path = normalize(directory).join(CONFIG_FILE_NAME);
        tracing::debug!(path = %path.display(), "Reading export configuration");

        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ConfigError::ReadFailed(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ConfigError::InvalidJson(format!("{}: {}", path.display(), e)))
    }
}
