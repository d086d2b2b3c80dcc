use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::guild_job::errors::GuildJobError;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the Identity Toolkit and Firestore REST APIs live.
///
/// Production hosts by default; the local emulators expose the same paths
/// under different roots.
#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseEndpoints {
    pub auth_base_url: String,
    pub firestore_base_url: String,
}

impl Default for FirebaseEndpoints {
    fn default() -> Self {
        Self {
            auth_base_url: DEFAULT_AUTH_BASE_URL.to_string(),
            firestore_base_url: DEFAULT_FIRESTORE_BASE_URL.to_string(),
        }
    }
}

/// Shared Firebase HTTP client configuration.
#[derive(Debug, Clone)]
pub struct FirebaseClient {
    pub client: Client,
    pub endpoints: FirebaseEndpoints,
}

impl FirebaseClient {
    pub fn new(endpoints: FirebaseEndpoints, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, endpoints }
    }

    /// Returns the custom token exchange endpoint URL for the given web API key.
    pub fn sign_in_url(&self, api_key: &str) -> Result<Url, GuildJobError> {
        let mut url = Self::with_segments(
            &self.endpoints.auth_base_url,
            &["v1", "accounts:signInWithCustomToken"],
        )?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }

    /// Returns the root of the default database's documents for a project.
    pub fn documents_url(&self, project_id: &str) -> Result<Url, GuildJobError> {
        Self::with_segments(
            &self.endpoints.firestore_base_url,
            &[
                "v1",
                "projects",
                project_id,
                "databases",
                "(default)",
                "documents",
            ],
        )
    }

    /// Appends path segments to `base`, percent-encoding each one.
    pub fn with_segments(base: &str, segments: &[&str]) -> Result<Url, GuildJobError> {
        let mut url = Url::parse(base)
            .map_err(|e| GuildJobError::ClientInitFailed(format!("{}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| GuildJobError::ClientInitFailed(format!("{}: cannot be a base", base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
