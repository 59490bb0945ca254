use std::sync::Arc;

use crate::api::{AutoGeneratedTitleService, DataTitleClient, FeedTitleClient, TitleService};
use crate::common::errors::TitleError;
use crate::configs::ApiConfig;
use crate::source::reference::{ReferenceKind, SourceReference};

/// Resolves display titles for classified references, dispatching by kind to
/// the primary (feeds) or alternate (data) lookup capability.
pub struct TitleResolver {
    primary: Arc<dyn TitleService>,
    alternate: Arc<dyn AutoGeneratedTitleService>,
}

impl TitleResolver {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            primary: Arc::new(FeedTitleClient::new(config)?),
            alternate: Arc::new(DataTitleClient::new(config)?),
        })
    }

    /// Swap in custom lookup services (mocks, alternate backends).
    pub fn with_services(
        primary: Arc<dyn TitleService>,
        alternate: Arc<dyn AutoGeneratedTitleService>,
    ) -> Self {
        Self { primary, alternate }
    }

    /// Resolve the reference's display title.
    ///
    /// A previously resolved title is returned immediately with no remote
    /// call; the first successful lookup writes it. Kinds without a lookup
    /// strategy (video, shared playlist, none) always error, with an
    /// `error!` diagnostic unless `notify_on_error` is false. Concurrent
    /// resolutions of one reference are not deduplicated; both simply write
    /// the same value.
    pub async fn resolve(
        &self,
        reference: &mut SourceReference,
        notify_on_error: bool,
    ) -> Result<String, TitleError> {
        if !reference.title().is_empty() {
            return Ok(reference.title().to_string());
        }

        match reference.kind() {
            ReferenceKind::Playlist => {
                tracing::trace!("Resolving playlist title for '{}'", reference.source_id());
                let title = self.primary.playlist_title(reference.source_id()).await?;
                reference.cache_title(&title);
                Ok(title)
            }
            ReferenceKind::Favorites | ReferenceKind::Channel => {
                tracing::trace!("Resolving channel name for '{}'", reference.source_id());
                let name = self.primary.channel_name(reference.source_id()).await?;
                reference.cache_title(&name);
                Ok(name)
            }
            ReferenceKind::AutoGenerated => {
                tracing::trace!(
                    "Resolving auto-generated mix title for '{}'",
                    reference.source_id()
                );
                match self
                    .alternate
                    .auto_generated_playlist_title(reference.source_id())
                    .await
                {
                    Some(title) => {
                        reference.cache_title(&title);
                        Ok(title)
                    }
                    None => Err(TitleError::ErrorChannelUnsupported),
                }
            }
            kind => {
                if notify_on_error {
                    tracing::error!("Unhandled reference kind for title lookup: {}", kind);
                }
                Err(TitleError::UnsupportedKind(kind))
            }
        }
    }
}
