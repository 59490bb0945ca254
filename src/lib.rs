//! streamsource — classification of pasted media-collection URLs.
//!
//! A pasted URL is classified once into a [`SourceReference`] (video,
//! channel, playlist, favorites, auto-generated mix, shared playlist or
//! none), the canonical listing URL is derived from the classification, and
//! a display title can be resolved lazily through [`TitleResolver`], cached
//! on the reference afterward.

pub mod api;
pub mod common;
pub mod configs;
pub mod source;

pub use common::errors::TitleError;
pub use configs::Config;
pub use source::classifier::classify;
pub use source::reference::{ReferenceKind, SourceReference, derive_listing_url};
pub use source::resolver::TitleResolver;
