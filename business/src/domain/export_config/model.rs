use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::{GuildId, Secret};

/// Web app configuration of the Firebase project hosting the guild data.
///
/// Mirrors the object the Firebase console hands out for web apps. Only
/// `apiKey` and `projectId` are needed to reach Auth and Firestore; the
/// rest is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseProjectConfig {
    pub api_key: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(
        default,
        rename = "databaseURL",
        skip_serializing_if = "Option::is_none"
    )]
    pub database_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
    /// Keys not listed above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Contents of `firestore.json`: who to sign in as and which guild to read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    pub token: Secret,
    pub guild_id: GuildId,
    pub firebase_config: FirebaseProjectConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{
        "token": "custom-token",
        "guildId": "1234",
        "firebaseConfig": {
            "apiKey": "AIza-test",
            "authDomain": "demo.firebaseapp.com",
            "projectId": "demo",
            "storageBucket": "demo.appspot.com",
            "databaseURL": "https://demo.firebaseio.com",
            "appId": "1:1:android:abc"
        }
    }"#;

    #[test]
    fn should_parse_config_with_known_fields() {
        let config: ExportConfig = serde_json::from_str(CONFIG).unwrap();

        assert_eq!(config.token.expose(), "custom-token");
        assert_eq!(config.guild_id.as_str(), "1234");
        assert_eq!(config.firebase_config.api_key, "AIza-test");
        assert_eq!(config.firebase_config.project_id, "demo");
        assert_eq!(
            config.firebase_config.database_url.as_deref(),
            Some("https://demo.firebaseio.com")
        );
        assert!(config.firebase_config.extra.is_empty());
    }

    #[test]
    fn should_keep_unknown_firebase_keys() {
        let json = r#"{"apiKey":"k","projectId":"p","locationId":"eur3"}"#;

        let config: FirebaseProjectConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.extra.get("locationId").map(String::as_str), Some("eur3"));
    }

    #[test]
    fn should_reject_config_without_project_id() {
        let json = r#"{"token":"t","guildId":"g","firebaseConfig":{"apiKey":"k"}}"#;

        let result: Result<ExportConfig, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn should_not_leak_token_through_debug() {
        let config: ExportConfig = serde_json::from_str(CONFIG).unwrap();

        let debug = format!("{:?}", config);

        assert!(!debug.contains("custom-token"));
    }
}
