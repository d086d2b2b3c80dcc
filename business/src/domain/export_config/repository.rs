use std::path::Path;

use async_trait::async_trait;

use super::errors::ConfigError;
use super::model::ExportConfig;

/// Port for reading the export configuration stored in a working directory.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn load(&self, directory: &Path) -> Result<ExportConfig, ConfigError>;
}
