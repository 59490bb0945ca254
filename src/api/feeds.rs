use async_trait::async_trait;
use serde_json::Value;

use crate::api::TitleService;
use crate::common::errors::TitleError;
use crate::common::http;
use crate::configs::ApiConfig;

/// Feeds API (v2) client. Titles live under `feed.title.$t` for playlists
/// and `entry.title.$t` for user profiles.
pub struct FeedTitleClient {
    client: reqwest::Client,
    base: String,
}

impl FeedTitleClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: http::client()?,
            base: config.feeds_base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, path: &str) -> Result<Value, TitleError> {
        let url = format!("{}/{}?v=2&alt=json", self.base, path);
        tracing::trace!("Feeds API lookup: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl TitleService for FeedTitleClient {
    async fn playlist_title(&self, playlist_id: &str) -> Result<String, TitleError> {
        let body = self
            .fetch(&format!("playlists/{}", urlencoding::encode(playlist_id)))
            .await?;

        body.get("feed")
            .and_then(|feed| feed.get("title"))
            .and_then(|title| title.get("$t"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or(TitleError::MissingTitle)
    }

    async fn channel_name(&self, channel_id: &str) -> Result<String, TitleError> {
        let body = self
            .fetch(&format!("users/{}", urlencoding::encode(channel_id)))
            .await?;

        body.get("entry")
            .and_then(|entry| entry.get("title"))
            .and_then(|title| title.get("$t"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or(TitleError::MissingTitle)
    }
}
