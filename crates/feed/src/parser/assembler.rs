// ABOUTME: Walks the channel and item elements of a parsed document and dispatches each child
// ABOUTME: to the core RSS reader or the namespace parser registered for it, then builds the Podcast.

use crate::builder::{Builder, EpisodeBuilder, PodcastBuilder};
use crate::dom::Element;
use crate::models::Podcast;
use crate::parser::rss::{parse_channel_element, parse_item_element};
use crate::parser::{NamespaceParser, NamespaceRegistry};

/// Assembles a [`Podcast`] from the root element of an RSS document.
///
/// Returns `None` when the document has no channel or when the channel
/// lacks a title, link, description, language or at least one valid
/// episode. Items that cannot be built are skipped.
pub fn parse_podcast(root: &Element, registry: &NamespaceRegistry) -> Option<Podcast> {
    let Some(channel) = find_channel(root) else {
        tracing::debug!(root = root.local_name(), "document has no channel element");
        return None;
    };
    let core = channel.namespace();

    let mut builder = PodcastBuilder::default();
    for child in channel.child_elements() {
        builder = if child.namespace() == core {
            if child.local_name() == "item" {
                builder.add_episode_builder(parse_item(child, core, registry))
            } else {
                parse_channel_element(child, builder)
            }
        } else {
            match parser_for(child, registry) {
                Some(parser) => parser.parse_channel(child, builder),
                None => builder,
            }
        };
    }

    for (index, episode) in builder.episode_builders().iter().enumerate() {
        if !episode.has_enough_data_to_build() {
            tracing::debug!(
                index,
                title = episode.current_title().unwrap_or_default(),
                "skipping item without title or complete enclosure"
            );
        }
    }
    if !builder.has_enough_data_to_build() {
        tracing::debug!("channel is missing required fields or has no valid item");
    }
    builder.build()
}

pub(crate) fn find_channel(root: &Element) -> Option<&Element> {
    match root.local_name() {
        "channel" => Some(root),
        "rss" => root
            .child_elements()
            .find(|child| child.local_name() == "channel" && child.namespace() == root.namespace()),
        _ => None,
    }
}

fn parse_item(item: &Element, core: Option<&str>, registry: &NamespaceRegistry) -> EpisodeBuilder {
    item.child_elements()
        .fold(EpisodeBuilder::default(), |builder, child| {
            if child.namespace() == core {
                return parse_item_element(child, builder);
            }
            match parser_for(child, registry) {
                Some(parser) => parser.parse_item(child, builder),
                None => builder,
            }
        })
}

fn parser_for<'r>(
    element: &Element,
    registry: &'r NamespaceRegistry,
) -> Option<&'r dyn NamespaceParser> {
    let uri = element.namespace()?;
    let parser = registry.parser_for_uri(uri);
    if parser.is_none() {
        tracing::trace!(
            namespace = uri,
            element = element.local_name(),
            "ignoring element from unhandled namespace"
        );
    }
    parser
}
