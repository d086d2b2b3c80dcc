use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use url::Url;

use business::domain::export_config::model::FirebaseProjectConfig;
use business::domain::guild_job::errors::GuildJobError;
use business::domain::guild_job::model::GuildJob;
use business::domain::guild_job::services::{AuthSession, JobStore, JobStoreConnector};
use business::domain::shared::value_objects::{GuildId, Secret};

use crate::client::FirebaseClient;
use crate::value::decode_fields;

/// Parent document path of a guild, split into segments, followed by the
/// id of its jobs collection.
const GUILDS_PARENT: [&str; 3] = ["env", "prod", "guilds"];
const JOBS_COLLECTION_ID: &str = "jobs";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    token: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    refresh_token: Option<String>,
    expires_in: Option<String>,
    local_id: Option<String>,
}

#[derive(Deserialize)]
struct GoogleApiErrorBody {
    error: GoogleApiError,
}

#[derive(Deserialize)]
struct GoogleApiError {
    message: String,
    status: Option<String>,
}

#[derive(Deserialize)]
struct RunQueryResponse {
    document: Option<Document>,
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    fields: Map<String, Value>,
}

/// Opens Firestore job stores, one per Firebase project.
pub struct FirestoreConnector {
    client: FirebaseClient,
}

impl FirestoreConnector {
    pub fn new(client: FirebaseClient) -> Self {
        Self { client }
    }
}

impl JobStoreConnector for FirestoreConnector {
    fn connect(
        &self,
        project: &FirebaseProjectConfig,
    ) -> Result<Arc<dyn JobStore>, GuildJobError> {
        Ok(Arc::new(FirestoreJobStore::new(&self.client, project)?))
    }
}

/// Reads guild jobs through the Identity Toolkit and Firestore REST APIs.
pub struct FirestoreJobStore {
    http: Client,
    sign_in_url: Url,
    documents_url: Url,
}

impl FirestoreJobStore {
    pub fn new(
        client: &FirebaseClient,
        project: &FirebaseProjectConfig,
    ) -> Result<Self, GuildJobError> {
        Ok(Self {
            http: client.client.clone(),
            sign_in_url: client.sign_in_url(&project.api_key)?,
            documents_url: client.documents_url(&project.project_id)?,
        })
    }

    /// `:runQuery` endpoint scoped to the guild document, so the query's
    /// `from` clause only names the jobs collection.
    fn run_query_url(&self, guild_id: &GuildId) -> Result<Url, GuildJobError> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| GuildJobError::ClientInitFailed(self.documents_url.to_string()))?
            .extend(GUILDS_PARENT)
            .push(&format!("{}:runQuery", guild_id.as_str()));
        Ok(url)
    }

    fn jobs_query(limit: u32) -> Value {
        json!({
            "structuredQuery": {
                "from": [{"collectionId": JOBS_COLLECTION_ID}],
                "limit": limit,
            }
        })
    }

    /// Turns an error response into the API's own message when it has one.
    async fn error_message(response: Response) -> String {
        let status = response.status();
        match response.json::<GoogleApiErrorBody>().await {
            Ok(body) => match body.error.status {
                Some(code) => format!("{} ({}): {}", status, code, body.error.message),
                None => format!("{}: {}", status, body.error.message),
            },
            Err(_) => status.to_string(),
        }
    }
}

#[async_trait]
impl JobStore for FirestoreJobStore {
    async fn authenticate(&self, token: &Secret) -> Result<AuthSession, GuildJobError> {
        tracing::debug!(endpoint = self.sign_in_url.path(), "Exchanging custom token");

        let response = self
            .http
            .post(self.sign_in_url.clone())
            .json(&SignInRequest {
                token: token.expose(),
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| GuildJobError::AuthenticationFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GuildJobError::AuthenticationFailed(
                Self::error_message(response).await,
            ));
        }

        let data: SignInResponse = response
            .json()
            .await
            .map_err(|e| GuildJobError::AuthenticationFailed(e.to_string()))?;

        Ok(AuthSession {
            id_token: Secret::new(data.id_token),
            refresh_token: data.refresh_token.map(Secret::new),
            local_id: data.local_id,
            expires_in_secs: data.expires_in.and_then(|s| s.parse().ok()),
        })
    }

    async fn query_jobs(
        &self,
        session: &AuthSession,
        guild_id: &GuildId,
        limit: u32,
    ) -> Result<Vec<GuildJob>, GuildJobError> {
        let url = self.run_query_url(guild_id)?;
        tracing::debug!(endpoint = url.path(), limit, "Running jobs query");

        let response = self
            .http
            .post(url)
            .bearer_auth(session.id_token.expose())
            .json(&Self::jobs_query(limit))
            .send()
            .await
            .map_err(|e| GuildJobError::QueryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GuildJobError::QueryFailed(
                Self::error_message(response).await,
            ));
        }

        let results: Vec<RunQueryResponse> = response
            .json()
            .await
            .map_err(|e| GuildJobError::QueryFailed(e.to_string()))?;

        // Entries without a document only report progress (readTime, skippedResults).
        results
            .into_iter()
            .filter_map(|result| result.document)
            .map(|document| decode_fields(document.fields).map(GuildJob::new))
            .collect()
    }
}
