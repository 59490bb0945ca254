use async_trait::async_trait;
use serde_json::Value;

use crate::api::AutoGeneratedTitleService;
use crate::common::http;
use crate::configs::ApiConfig;

/// Data API (v3) client. Only the auto-generated mix title lookup rides this
/// API; everything else still goes through the feeds client.
pub struct DataTitleClient {
    client: reqwest::Client,
    base: String,
    api_key: Option<String>,
}

impl DataTitleClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http::client()?,
            base: config.data_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl AutoGeneratedTitleService for DataTitleClient {
    async fn auto_generated_playlist_title(&self, id: &str) -> Option<String> {
        let mut url = format!(
            "{}/playlists?part=snippet&id={}",
            self.base,
            urlencoding::encode(id)
        );
        if let Some(key) = &self.api_key {
            url.push_str("&key=");
            url.push_str(key);
        }
        tracing::trace!("Data API lookup: {}", url);

        let response = self.client.get(&url).send().await.ok()?;
        let body: Value = response.json().await.ok()?;

        body.get("items")?
            .as_array()?
            .first()?
            .get("snippet")?
            .get("title")?
            .as_str()
            .map(str::to_string)
    }
}
