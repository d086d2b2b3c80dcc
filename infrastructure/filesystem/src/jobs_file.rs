use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::guild_job::errors::GuildJobError;
use business::domain::guild_job::model::GuildJob;
use business::domain::guild_job::repository::JobSink;

use crate::paths::{JOBS_FILE_NAME, normalize};

/// Writes `guild_jobs.json` as one compact JSON array.
///
/// The file is truncated and rewritten in place; an interrupted write can
/// leave it partial.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonJobsFile;

#[async_trait]
impl JobSink for JsonJobsFile {
    async fn write(&self, directory: &Path, jobs: &[GuildJob]) -> Result<PathBuf, GuildJobError> {
        let path = normalize(directory).join(JOBS_FILE_NAME);

        let contents =
            serde_json::to_string(jobs).map_err(|e| GuildJobError::WriteFailed(e.to_string()))?;

        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| GuildJobError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), jobs = jobs.len(), "Guild jobs file written");
        Ok(path)
    }
}
