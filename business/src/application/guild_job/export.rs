use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::export_config::repository::ConfigSource;
use crate::domain::guild_job::errors::GuildJobError;
use crate::domain::guild_job::model::{JOBS_QUERY_LIMIT, jobs_collection_path};
use crate::domain::guild_job::repository::JobSink;
use crate::domain::guild_job::services::JobStoreConnector;
use crate::domain::guild_job::use_cases::export::{
    ExportGuildJobsParams, ExportGuildJobsUseCase, ExportSummary,
};
use crate::domain::logger::Logger;

pub struct ExportGuildJobsUseCaseImpl {
    pub config_source: Arc<dyn ConfigSource>,
    pub connector: Arc<dyn JobStoreConnector>,
    pub sink: Arc<dyn JobSink>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ExportGuildJobsUseCase for ExportGuildJobsUseCaseImpl {
    async fn execute(&self, params: ExportGuildJobsParams) -> Result<ExportSummary, GuildJobError> {
        self.logger.info(&format!(
            "Reading export configuration from {}",
            params.directory.display()
        ));
        let config = self.config_source.load(&params.directory).await?;

        let store = self.connector.connect(&config.firebase_config)?;

        self.logger.info(&format!(
            "Signing in to project {}",
            config.firebase_config.project_id
        ));
        let session = store.authenticate(&config.token).await?;
        if let Some(uid) = &session.local_id {
            self.logger.debug(&format!("Signed in as {}", uid));
        }

        self.logger.info(&format!(
            "Querying {} (limit {})",
            jobs_collection_path(config.guild_id.as_str()),
            JOBS_QUERY_LIMIT
        ));
        let jobs = store
            .query_jobs(&session, &config.guild_id, JOBS_QUERY_LIMIT)
            .await?;
        self.logger.info(&format!("Fetched {} guild jobs", jobs.len()));

        let output_path = self.sink.write(&params.directory, &jobs).await?;
        self.logger
            .info(&format!("Guild jobs written to {}", output_path.display()));

        Ok(ExportSummary {
            job_count: jobs.len(),
            output_path,
        })
    }
}
