use std::fmt;

use serde::{Deserialize, Serialize};

/// Base endpoint for collection listing feeds.
pub const FEEDS_API_BASE: &str = "https://gdata.youtube.com/feeds/api";

/// The category of media collection a pasted URL points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ReferenceKind {
    #[default]
    None,
    Video,
    Channel,
    Playlist,
    Favorites,
    AutoGenerated,
    SharedPlaylist,
}

impl ReferenceKind {
    /// Kinds whose contents must be enumerated remotely before use. Note
    /// that auto-generated mixes need a listing fetch even though they have
    /// no listing URL under the feeds endpoint; they go through the data API.
    pub fn needs_listing(self) -> bool {
        matches!(
            self,
            Self::Channel | Self::Playlist | Self::Favorites | Self::AutoGenerated
        )
    }

    /// Kinds served by the newer data API instead of the feeds API.
    pub fn uses_alternate_api(self) -> bool {
        matches!(self, Self::AutoGenerated)
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Video => "video",
            Self::Channel => "channel",
            Self::Playlist => "playlist",
            Self::Favorites => "favorites",
            Self::AutoGenerated => "auto-generated",
            Self::SharedPlaylist => "shared-playlist",
        };
        f.write_str(name)
    }
}

/// A classified media-collection reference.
///
/// `listing_url` is derived and kept consistent with `(kind, source_id)` by
/// recomputing inside every setter; there is no observer wiring to go stale.
/// `title` is a one-shot cache filled in by [`super::TitleResolver`].
///
/// Serializable for the UI layer; deliberately not deserializable, since a
/// round-trip could smuggle in a listing URL inconsistent with the kind.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceReference {
    kind: ReferenceKind,
    source_id: String,
    listing_url: String,
    title: String,
}

impl SourceReference {
    pub fn new(kind: ReferenceKind, source_id: impl Into<String>) -> Self {
        let mut reference = Self {
            kind: ReferenceKind::None,
            source_id: String::new(),
            listing_url: String::new(),
            title: String::new(),
        };
        reference.set_reference(kind, source_id);
        reference
    }

    pub fn kind(&self) -> ReferenceKind {
        self.kind
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Update kind and id together, recomputing the listing URL.
    pub fn set_reference(&mut self, kind: ReferenceKind, source_id: impl Into<String>) {
        self.kind = kind;
        self.source_id = source_id.into();
        if self.kind == ReferenceKind::None {
            self.source_id.clear();
        }
        self.listing_url = derive_listing_url(self.kind, &self.source_id);
    }

    /// First write wins; later calls are ignored so the cached title stays
    /// stable for the life of the reference.
    pub(crate) fn cache_title(&mut self, title: &str) {
        if self.title.is_empty() {
            self.title = title.to_string();
        }
    }
}

/// Canonical feed URL used to enumerate a collection's contents. Empty for
/// kinds that are not listed through the feeds endpoint.
pub fn derive_listing_url(kind: ReferenceKind, source_id: &str) -> String {
    match kind {
        ReferenceKind::Channel => format!("{}/users/{}/uploads", FEEDS_API_BASE, source_id),
        ReferenceKind::Favorites => format!("{}/users/{}/favorites", FEEDS_API_BASE, source_id),
        ReferenceKind::Playlist => format!("{}/playlists/{}", FEEDS_API_BASE, source_id),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_per_kind() {
        assert!(
            derive_listing_url(ReferenceKind::Playlist, "abc123").ends_with("playlists/abc123")
        );
        assert!(
            derive_listing_url(ReferenceKind::Channel, "somechannel")
                .ends_with("users/somechannel/uploads")
        );
        assert!(
            derive_listing_url(ReferenceKind::Favorites, "somechannel")
                .ends_with("users/somechannel/favorites")
        );
    }

    #[test]
    fn listing_url_empty_for_unlisted_kinds() {
        for kind in [
            ReferenceKind::None,
            ReferenceKind::Video,
            ReferenceKind::AutoGenerated,
            ReferenceKind::SharedPlaylist,
        ] {
            assert_eq!(derive_listing_url(kind, "whatever"), "");
        }
    }

    #[test]
    fn set_reference_recomputes_listing_url() {
        let mut reference = SourceReference::new(ReferenceKind::Video, "dQw4w9WgXcQ");
        assert_eq!(reference.listing_url(), "");

        reference.set_reference(ReferenceKind::Playlist, "abc123");
        assert!(reference.listing_url().ends_with("playlists/abc123"));

        reference.set_reference(ReferenceKind::SharedPlaylist, "token");
        assert_eq!(reference.listing_url(), "");
    }

    #[test]
    fn none_kind_clears_source_id() {
        let reference = SourceReference::new(ReferenceKind::None, "leftover");
        assert_eq!(reference.source_id(), "");
        assert_eq!(reference.listing_url(), "");
    }

    #[test]
    fn needs_listing_matches_kind_set() {
        assert!(ReferenceKind::Channel.needs_listing());
        assert!(ReferenceKind::Playlist.needs_listing());
        assert!(ReferenceKind::Favorites.needs_listing());
        assert!(ReferenceKind::AutoGenerated.needs_listing());

        assert!(!ReferenceKind::None.needs_listing());
        assert!(!ReferenceKind::Video.needs_listing());
        assert!(!ReferenceKind::SharedPlaylist.needs_listing());
    }

    #[test]
    fn only_auto_generated_uses_alternate_api() {
        assert!(ReferenceKind::AutoGenerated.uses_alternate_api());
        assert!(!ReferenceKind::Playlist.uses_alternate_api());
        assert!(!ReferenceKind::Channel.uses_alternate_api());
    }

    #[test]
    fn title_cache_is_write_once() {
        let mut reference = SourceReference::new(ReferenceKind::Playlist, "abc");
        reference.cache_title("First Title");
        reference.cache_title("Second Title");
        assert_eq!(reference.title(), "First Title");
    }
}
