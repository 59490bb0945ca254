use serde::{Deserialize, Serialize};

/// Endpoints for the two title-lookup APIs. The defaults point at the public
/// YouTube feeds (v2) and data (v3) services; tests point them at mocks.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_feeds_base_url")]
    pub feeds_base_url: String,
    #[serde(default = "default_data_base_url")]
    pub data_base_url: String,
    /// API key appended to data-API requests when present.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_feeds_base_url() -> String {
    "https://gdata.youtube.com/feeds/api".to_string()
}

fn default_data_base_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            feeds_base_url: default_feeds_base_url(),
            data_base_url: default_data_base_url(),
            api_key: None,
        }
    }
}
