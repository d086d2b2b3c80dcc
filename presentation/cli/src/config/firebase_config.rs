use std::time::Duration;

use anyhow::Context;
use firestore::client::{DEFAULT_TIMEOUT, FirebaseEndpoints};

/// Firebase endpoint and HTTP settings for the export.
#[derive(Debug, Clone, PartialEq)]
pub struct FirebaseConfig {
    pub endpoints: FirebaseEndpoints,
    pub timeout: Duration,
}

impl FirebaseConfig {
    /// Load Firebase settings from environment variables
    ///
    /// Environment variables:
    /// - FIREBASE_AUTH_EMULATOR_HOST: host:port of the Auth emulator (default: production)
    /// - FIRESTORE_EMULATOR_HOST: host:port of the Firestore emulator (default: production)
    /// - GUILD_JOBS_HTTP_TIMEOUT_SECS: per-request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut endpoints = FirebaseEndpoints::default();
        if let Some(host) = non_empty(lookup("FIREBASE_AUTH_EMULATOR_HOST")) {
            endpoints.auth_base_url = format!("http://{}/identitytoolkit.googleapis.com", host);
        }
        if let Some(host) = non_empty(lookup("FIRESTORE_EMULATOR_HOST")) {
            endpoints.firestore_base_url = format!("http://{}", host);
        }

        let timeout = match non_empty(lookup("GUILD_JOBS_HTTP_TIMEOUT_SECS")) {
            Some(raw) => {
                let secs = raw.parse::<u64>().with_context(|| {
                    format!("GUILD_JOBS_HTTP_TIMEOUT_SECS={} is not a number of seconds", raw)
                })?;
                if secs == 0 {
                    anyhow::bail!("GUILD_JOBS_HTTP_TIMEOUT_SECS must be at least 1 second");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { endpoints, timeout })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
