use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::guild_job::errors::GuildJobError;

pub struct ExportGuildJobsParams {
    pub directory: PathBuf,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub job_count: usize,
    pub output_path: PathBuf,
}

#[async_trait]
pub trait ExportGuildJobsUseCase: Send + Sync {
    async fn execute(&self, params: ExportGuildJobsParams) -> Result<ExportSummary, GuildJobError>;
}
