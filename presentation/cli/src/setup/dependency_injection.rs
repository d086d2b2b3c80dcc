use std::sync::Arc;

use filesystem::config_file::JsonConfigFile;
use filesystem::jobs_file::JsonJobsFile;
use firestore::client::FirebaseClient;
use firestore::job_store::FirestoreConnector;
use logger::TracingLogger;

use business::application::guild_job::export::ExportGuildJobsUseCaseImpl;
use business::domain::guild_job::use_cases::export::ExportGuildJobsUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub export_guild_jobs: Arc<dyn ExportGuildJobsUseCase>,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let firebase_client =
            FirebaseClient::new(config.firebase.endpoints, config.firebase.timeout);
        let connector = Arc::new(FirestoreConnector::new(firebase_client));

        let export_guild_jobs = Arc::new(ExportGuildJobsUseCaseImpl {
            config_source: Arc::new(JsonConfigFile),
            connector,
            sink: Arc::new(JsonJobsFile),
            logger,
        });

        Self { export_guild_jobs }
    }
}
