use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::errors::GuildJobError;
use super::model::GuildJob;

/// Port for persisting fetched jobs next to the configuration they came from.
#[async_trait]
pub trait JobSink: Send + Sync {
    /// Replaces any previous export in `directory` and returns the file written.
    async fn write(&self, directory: &Path, jobs: &[GuildJob]) -> Result<PathBuf, GuildJobError>;
}
