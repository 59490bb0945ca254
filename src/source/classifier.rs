use std::sync::OnceLock;

use regex::Regex;

use crate::source::reference::{ReferenceKind, SourceReference};

/// Prefix marking an externally shared playlist token.
pub const SHARED_PLAYLIST_PREFIX: &str = "streamus:";

struct KindGroup {
    kind: ReferenceKind,
    tokens: &'static [&'static str],
}

/// Ordered kind groups. Every group is scanned and a later group overrides
/// an earlier hit (last match wins). That precedence is deliberate and
/// load-bearing for ambiguous URLs; see `classify`.
const KIND_GROUPS: &[KindGroup] = &[
    KindGroup {
        kind: ReferenceKind::Playlist,
        tokens: &["list=PL", "p=PL", "list=RD", "p=RD"],
    },
    KindGroup {
        kind: ReferenceKind::Favorites,
        tokens: &["list=FL", "p=FL"],
    },
    KindGroup {
        kind: ReferenceKind::AutoGenerated,
        tokens: &["list=AL", "p=AL"],
    },
    KindGroup {
        kind: ReferenceKind::Channel,
        tokens: &["/user/", "/channel/", "list=UU", "p=UU"],
    },
    KindGroup {
        kind: ReferenceKind::SharedPlaylist,
        tokens: &[SHARED_PLAYLIST_PREFIX],
    },
];

fn video_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|watch\?.*?&v=)([^#&?]*).*")
            .expect("video id pattern is valid")
    })
}

/// Classify a pasted URL into a [`SourceReference`].
///
/// Token groups are scanned in order and the LAST matching group decides the
/// kind; within a group the first matching token decides the id. A URL that
/// carries both `list=PL...` and `/user/...` therefore classifies as a
/// channel, not a playlist. Unrecognized input falls back to video-id
/// extraction and finally to `ReferenceKind::None`; classification never
/// fails.
pub fn classify(url: &str) -> SourceReference {
    let mut kind = ReferenceKind::None;
    let mut source_id = String::new();

    for group in KIND_GROUPS {
        if let Some(id) = group
            .tokens
            .iter()
            .find_map(|token| extract_token_id(url, token))
        {
            kind = group.kind;
            source_id = id;
        }
    }

    if kind == ReferenceKind::None {
        if let Some(id) = parse_video_id(url) {
            kind = ReferenceKind::Video;
            source_id = id;
        }
    }

    tracing::trace!("Classified '{}' as {} ({})", url, kind, source_id);
    SourceReference::new(kind, source_id)
}

/// Everything after the token's first occurrence, truncated at the next `&`.
/// The RD/AL mix and auto-generated ids keep their token prefix because the
/// data API expects the full identifier.
fn extract_token_id(url: &str, token: &str) -> Option<String> {
    let (_, rest) = url.split_once(token)?;
    let id = rest.split('&').next().unwrap_or(rest);
    if id.is_empty() {
        return None;
    }

    match token {
        "list=RD" | "p=RD" => Some(format!("RD{}", id)),
        "list=AL" | "p=AL" => Some(format!("AL{}", id)),
        _ => Some(id.to_string()),
    }
}

/// Video ids ride in several share/embed/watch URL shapes; only an exactly
/// 11-character capture counts as a video id.
fn parse_video_id(url: &str) -> Option<String> {
    let captures = video_id_regex().captures(url)?;
    let id = captures.get(2)?.as_str();
    (id.len() == 11).then(|| id.to_string())
}
