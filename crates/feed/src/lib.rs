// ABOUTME: Podcast feed parsing library: RSS 2.0 plus Atom, Content, iTunes, Google Play,
// ABOUTME: PodcastIndex and Feedpress namespaces, assembled through validating builders.

pub mod builder;
pub mod dom;
pub mod duration_parse;
pub mod error;
pub mod extract;
pub mod models;
pub mod namespace;
pub mod parser;
pub mod time_parse;

pub use builder::Builder;
pub use duration_parse::parse_duration;
pub use error::FeedError;
pub use models::{Episode, Podcast};
pub use namespace::FeedNamespace;
pub use parser::{default_registry, parse_podcast, NamespaceParser, NamespaceRegistry};
pub use time_parse::parse_flexible_time;

/// Parses raw feed bytes with every built-in namespace parser enabled.
pub fn parse_feed_bytes(data: &[u8]) -> Result<Podcast, FeedError> {
    parse_feed_bytes_with(data, default_registry())
}

/// Parses raw feed bytes using the given registry.
///
/// Malformed XML yields [`FeedError::Parse`], a document without an RSS
/// channel yields [`FeedError::MissingChannel`], and a channel that cannot
/// produce a podcast yields [`FeedError::Invalid`].
pub fn parse_feed_bytes_with(
    data: &[u8],
    registry: &NamespaceRegistry,
) -> Result<Podcast, FeedError> {
    let root = dom::parse_document(data)?;
    if parser::find_channel(&root).is_none() {
        return Err(FeedError::MissingChannel);
    }
    parse_podcast(&root, registry).ok_or_else(|| {
        FeedError::invalid("channel needs title, link, description, language and a valid item")
    })
}
