use super::firebase_config::FirebaseConfig;

pub struct AppConfig {
    pub firebase: FirebaseConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            firebase: FirebaseConfig::from_env()?,
        })
    }
}
