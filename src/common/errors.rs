use thiserror::Error;

use crate::source::ReferenceKind;

/// Failures surfaced by title resolution.
///
/// Classification itself never fails; unrecognized input classifies as
/// `ReferenceKind::None` and the caller decides what to do with it.
#[derive(Debug, Error)]
pub enum TitleError {
    /// The reference kind has no registered title-lookup strategy
    /// (shared playlists, plain videos, unclassified references).
    #[error("no title lookup strategy for {0} references")]
    UnsupportedKind(ReferenceKind),

    /// The remote lookup request failed.
    #[error("title lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The lookup succeeded but the response carried no title.
    #[error("title missing from lookup response")]
    MissingTitle,

    /// The alternate (data API) lookup failed. That API contract exposes no
    /// error callback, so all we can report is that the lookup came back empty.
    #[error("auto-generated playlist lookup failed with no error detail")]
    ErrorChannelUnsupported,
}
