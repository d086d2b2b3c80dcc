use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Jobs are read from the first page of the collection only.
pub const JOBS_QUERY_LIMIT: u32 = 10;

/// Collection path holding the jobs of a guild, relative to the database root.
pub fn jobs_collection_path(guild_id: &str) -> String {
    format!("env/prod/guilds/{}/jobs", guild_id)
}

/// One job document, reduced to its plain fields.
///
/// No schema is enforced: whatever the document holds is exported as-is,
/// without its name or timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildJob(Map<String, Value>);

impl GuildJob {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
