use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// How long a cached recommendation result set stays valid, in seconds
    #[serde(default = "default_recommendation_ttl_secs")]
    pub recommendation_ttl_secs: u64,
}

fn default_recommendation_ttl_secs() -> u64 {
    14_400 // 4 hours in seconds
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recommendation_ttl_secs: default_recommendation_ttl_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Cache TTL as a duration
    pub fn recommendation_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.recommendation_ttl_secs as i64)
    }
}
