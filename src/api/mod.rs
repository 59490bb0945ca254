use async_trait::async_trait;

use crate::common::errors::TitleError;

pub mod data;
pub mod feeds;

pub use data::DataTitleClient;
pub use feeds::FeedTitleClient;

/// Primary title-lookup capability (feeds API, v2).
#[async_trait]
pub trait TitleService: Send + Sync {
    async fn playlist_title(&self, playlist_id: &str) -> Result<String, TitleError>;

    /// Channel display name. Favorites lists resolve through this too, since
    /// they are identified by the owning channel.
    async fn channel_name(&self, channel_id: &str) -> Result<String, TitleError>;
}

/// Alternate title-lookup capability (data API, v3), used for auto-generated
/// mixes. The upstream contract has no error callback, so failures collapse
/// to `None` with no further detail.
#[async_trait]
pub trait AutoGeneratedTitleService: Send + Sync {
    async fn auto_generated_playlist_title(&self, id: &str) -> Option<String>;
}
