// ABOUTME: Namespace parsers that fold DOM elements into podcast and episode builders.
// ABOUTME: Defines the NamespaceParser trait and hosts the registry and feed assembler.

mod assembler;
mod atom;
mod content;
mod feedpress;
mod googleplay;
mod itunes;
mod podcastindex;
mod registry;
mod rss;

pub use assembler::parse_podcast;
pub(crate) use assembler::find_channel;
pub use atom::AtomParser;
pub use content::ContentParser;
pub use feedpress::FeedpressParser;
pub use googleplay::GooglePlayParser;
pub use itunes::ItunesParser;
pub use podcastindex::PodcastindexParser;
pub use registry::{default_registry, NamespaceRegistry, NamespaceRegistryBuilder};

use crate::builder::{EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::namespace::FeedNamespace;

/// Handles the elements of one XML namespace.
///
/// Both entry points receive an element already known to belong to
/// [`NamespaceParser::namespace`]. Elements outside the parser's vocabulary,
/// and elements missing a required sub-field, leave the builder unchanged.
pub trait NamespaceParser: Send + Sync {
    fn namespace(&self) -> FeedNamespace;

    /// Folds a direct child of `<channel>` into the podcast builder.
    fn parse_channel(&self, element: &Element, builder: PodcastBuilder) -> PodcastBuilder;

    /// Folds a direct child of `<item>` into the episode builder.
    fn parse_item(&self, element: &Element, builder: EpisodeBuilder) -> EpisodeBuilder;
}

/// Logs an element that was recognized but could not be used.
fn log_dropped(element: &Element, reason: &str) {
    tracing::debug!(
        namespace = element.namespace().unwrap_or_default(),
        element = element.local_name(),
        reason,
        "dropping feed element"
    );
}
